use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use hrdesk_domain::admin::AdminDraft;

use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::admin::RegisterAdminUseCase;

// ── POST /auth ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

pub async fn register_admin(
    State(state): State<AppState>,
    Json(body): Json<AdminDraft>,
) -> Result<(StatusCode, Json<AdminResponse>), EmployeesServiceError> {
    let usecase = RegisterAdminUseCase {
        repo: state.admin_repo(),
        bcrypt_cost: state.bcrypt_cost,
    };
    let admin = usecase.execute(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(AdminResponse {
            id: admin.id,
            name: admin.name,
            email: admin.email,
        }),
    ))
}
