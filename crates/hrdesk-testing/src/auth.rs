//! Bearer auth helpers for integration tests.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

/// A bearer credential attached to test requests.
pub struct MockBearer {
    pub token: String,
}

impl MockBearer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// `(Authorization, "Bearer <token>")`, ready for a request builder.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).unwrap(),
        )
    }
}
