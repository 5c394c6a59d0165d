/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `jwt_secret` is read from
/// `JWT_SECRET`, and so on. A `.env` file in the working directory, if present,
/// is loaded first without overriding variables that are already set.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        let _ = dotenvy::dotenv();
        envy::from_env()
    }
}
