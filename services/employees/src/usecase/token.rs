use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::repository::AdminRepository;
use crate::domain::types::{ACCESS_TOKEN_TTL_SECS, Admin};
use crate::error::EmployeesServiceError;
use crate::usecase::admin::AuthenticateAdminUseCase;

/// Access-token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Admin name.
    pub sub: String,
    /// Admin id.
    pub id: i32,
    /// Expiry as unix seconds.
    pub exp: u64,
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign an HS256 access token for `admin`, valid for [`ACCESS_TOKEN_TTL_SECS`] from `now`.
pub fn issue_access_token(
    admin: &Admin,
    secret: &str,
    now: u64,
) -> Result<String, EmployeesServiceError> {
    let claims = TokenClaims {
        sub: admin.name.clone(),
        id: admin.id,
        exp: now + ACCESS_TOKEN_TTL_SECS,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| EmployeesServiceError::Internal(e.into()))
}

/// Verify signature and claims, then check expiry against `now` with no leeway.
pub fn decode_access_token(
    token: &str,
    secret: &str,
    now: u64,
) -> Result<TokenClaims, EmployeesServiceError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| EmployeesServiceError::Unauthorized)?;

    if data.claims.exp <= now {
        return Err(EmployeesServiceError::Unauthorized);
    }
    Ok(data.claims)
}

// ── CreateToken ──────────────────────────────────────────────────────────────

pub struct CreateTokenInput {
    pub username: String,
    pub password: String,
}

pub struct CreateTokenOutput {
    pub access_token: String,
    pub expires_in: u64,
}

pub struct CreateTokenUseCase<R: AdminRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl<R: AdminRepository> CreateTokenUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateTokenInput,
    ) -> Result<CreateTokenOutput, EmployeesServiceError> {
        self.execute_at(input, now_secs()).await
    }

    pub async fn execute_at(
        &self,
        input: CreateTokenInput,
        now: u64,
    ) -> Result<CreateTokenOutput, EmployeesServiceError> {
        let authenticate = AuthenticateAdminUseCase {
            repo: &self.repo,
            bcrypt_cost: self.bcrypt_cost,
        };
        let admin = authenticate.execute(&input.username, input.password).await?;
        let access_token = issue_access_token(&admin, &self.jwt_secret, now)?;
        tracing::info!(admin_id = admin.id, "access token issued");
        Ok(CreateTokenOutput {
            access_token,
            expires_in: ACCESS_TOKEN_TTL_SECS,
        })
    }
}

// ── AuthorizeAdmin ───────────────────────────────────────────────────────────

/// Resolves a bearer token to the stored admin it names.
pub struct AuthorizeAdminUseCase<R: AdminRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: AdminRepository> AuthorizeAdminUseCase<R> {
    pub async fn execute(&self, bearer: Option<&str>) -> Result<Admin, EmployeesServiceError> {
        self.execute_at(bearer, now_secs()).await
    }

    pub async fn execute_at(
        &self,
        bearer: Option<&str>,
        now: u64,
    ) -> Result<Admin, EmployeesServiceError> {
        let token = bearer.ok_or(EmployeesServiceError::Unauthorized)?;
        let claims = decode_access_token(token, &self.jwt_secret, now)?;
        let admin = self
            .repo
            .find_by_id(claims.id)
            .await?
            .ok_or(EmployeesServiceError::Unauthorized)?;
        if admin.name != claims.sub {
            return Err(EmployeesServiceError::Unauthorized);
        }
        Ok(admin)
    }
}
