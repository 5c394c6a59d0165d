use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::CustomMessage;
use crate::error::EmployeesServiceError;
use crate::handlers::identity::AdminIdentity;
use crate::state::AppState;
use crate::usecase::notification::{Audience, SendEmailUseCase};

#[derive(Serialize)]
pub struct QueuedResponse {
    pub queued: usize,
}

#[derive(Deserialize)]
pub struct SelectedEmailRequest {
    pub employee_ids: Vec<String>,
    pub subject: String,
    pub instruction: String,
}

async fn send(
    state: AppState,
    audience: Audience,
    message: CustomMessage,
) -> Result<(StatusCode, Json<QueuedResponse>), EmployeesServiceError> {
    let usecase = SendEmailUseCase {
        repo: state.employee_repo(),
        notifier: state.notifier.clone(),
    };
    let queued = usecase.execute(audience, message).await?;
    Ok((StatusCode::ACCEPTED, Json(QueuedResponse { queued })))
}

// ── POST /employee/{id}/send-email ───────────────────────────────────────────

pub async fn send_employee_email(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CustomMessage>,
) -> Result<(StatusCode, Json<QueuedResponse>), EmployeesServiceError> {
    send(state, Audience::One(id), body).await
}

// ── POST /employee/send-email ────────────────────────────────────────────────

pub async fn send_selected_email(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<SelectedEmailRequest>,
) -> Result<(StatusCode, Json<QueuedResponse>), EmployeesServiceError> {
    let message = CustomMessage {
        subject: body.subject,
        instruction: body.instruction,
    };
    send(state, Audience::Selected(body.employee_ids), message).await
}

// ── POST /employee/send-bulk-email ───────────────────────────────────────────

pub async fn send_bulk_email(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CustomMessage>,
) -> Result<(StatusCode, Json<QueuedResponse>), EmployeesServiceError> {
    send(state, Audience::Active, body).await
}
