//! Administrator registration rules.

use serde::Deserialize;
use validator::Validate;

/// Registration input for the single administrator.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminDraft {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
