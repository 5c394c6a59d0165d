use std::sync::OnceLock;

use anyhow::Context;
use sha2::{Digest, Sha256};

use crate::error::EmployeesServiceError;

/// bcrypt only looks at the first 72 bytes of its input.
pub const BCRYPT_MAX_INPUT_BYTES: usize = 72;

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Longer passwords are condensed to their hex SHA-256 digest first, so every
/// byte of the secret contributes to the hash.
fn condense(password: &str) -> String {
    if password.len() > BCRYPT_MAX_INPUT_BYTES {
        hex::encode(Sha256::digest(password.as_bytes()))
    } else {
        password.to_owned()
    }
}

fn dummy_hash(cost: u32) -> Result<&'static str, bcrypt::BcryptError> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash.as_str());
    }
    let hash = bcrypt::hash("not-a-real-password", cost)?;
    Ok(DUMMY_HASH.get_or_init(|| hash).as_str())
}

pub async fn hash_password(password: String, cost: u32) -> Result<String, EmployeesServiceError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(condense(&password), cost))
        .await
        .context("password hashing task panicked")?
        .context("failed to hash password")?;
    Ok(hash)
}

/// Check `password` against `hash`.
///
/// With no stored hash the password is still run through bcrypt against a
/// throwaway hash, so an unknown user costs the same as a wrong password.
pub async fn verify_password(
    password: String,
    hash: Option<String>,
    cost: u32,
) -> Result<bool, EmployeesServiceError> {
    let matched = tokio::task::spawn_blocking(move || {
        let input = condense(&password);
        match hash {
            Some(hash) => bcrypt::verify(input, &hash),
            None => bcrypt::verify(input, dummy_hash(cost)?).map(|_| false),
        }
    })
    .await
    .context("password verification task panicked")?
    .context("failed to verify password")?;
    Ok(matched)
}
