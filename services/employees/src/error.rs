use std::time::Duration;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use hrdesk_domain::employee::field_errors;

/// Employees service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum EmployeesServiceError {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("admin already exists")]
    AdminAlreadyExists,
    #[error("phone number already exists")]
    PhoneNoAlreadyExists,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("no active employees")]
    NoActiveEmployees,
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("could not validate credentials")]
    Unauthorized,
    #[error("notification queue is full")]
    NotificationQueueFull,
    #[error("employee codes exhausted")]
    EmployeeCodesExhausted,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EmployeesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::AdminAlreadyExists => "ADMIN_ALREADY_EXISTS",
            Self::PhoneNoAlreadyExists => "PHONE_NO_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::NoActiveEmployees => "NO_ACTIVE_EMPLOYEES",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotificationQueueFull => "NOTIFICATION_QUEUE_FULL",
            Self::EmployeeCodesExhausted => "EMPLOYEE_CODES_EXHAUSTED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AdminAlreadyExists | Self::PhoneNoAlreadyExists | Self::EmailAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::EmployeeNotFound | Self::NoActiveEmployees => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotificationQueueFull | Self::EmployeeCodesExhausted => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DispatchError> for EmployeesServiceError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::QueueFull => Self::NotificationQueueFull,
            other => Self::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for EmployeesServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::Validation(ref errs) = self {
            body["fields"] = field_errors(errs)
                .into_iter()
                .map(|(field, code)| serde_json::json!({ "field": field, "code": code }))
                .collect();
        }
        let mut resp = (status, axum::Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            resp.headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        resp
    }
}

/// Failures of the background notification path.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("notification queue is full")]
    QueueFull,
    #[error("notification queue is closed")]
    QueueClosed,
    #[error("content generation failed: {0}")]
    Generation(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
    #[error("{stage} timed out after {after:?}")]
    Timeout {
        stage: &'static str,
        after: Duration,
    },
}
