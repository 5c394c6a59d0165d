use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::token::{CreateTokenInput, CreateTokenUseCase};

// ── POST /token ──────────────────────────────────────────────────────────────

/// OAuth2 password-grant form. Extra fields such as `scope` are ignored.
#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
    pub grant_type: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

pub async fn create_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, EmployeesServiceError> {
    if form.grant_type.as_deref().is_some_and(|g| g != "password") {
        let mut errs = validator::ValidationErrors::new();
        errs.add("grant_type", validator::ValidationError::new("unsupported"));
        return Err(errs.into());
    }
    let usecase = CreateTokenUseCase {
        repo: state.admin_repo(),
        jwt_secret: state.jwt_secret.clone(),
        bcrypt_cost: state.bcrypt_cost,
    };
    let output = usecase
        .execute(CreateTokenInput {
            username: form.username,
            password: form.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        access_token: output.access_token,
        token_type: "bearer",
        expires_in: output.expires_in,
    }))
}
