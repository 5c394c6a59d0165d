//! Employee field rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Lowest salary accepted, inclusive.
pub const MIN_SALARY: i32 = 10_000;

/// Highest salary accepted, inclusive.
pub const MAX_SALARY: i32 = 500_000;

/// Every mutable employee field. Used for both create and full replace, so
/// the two paths share one validation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmployeeDraft {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(length(min = 2, max = 50))]
    pub designation: String,
    #[validate(range(min = 10000, max = 500000))]
    pub salary: i32,
    #[validate(length(min = 10, max = 15), custom(function = "validate_phone_no"))]
    pub phone_no: String,
    #[validate(length(min = 5, max = 255))]
    pub address: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// Digits only, with one optional leading `+`.
pub fn validate_phone_no(phone_no: &str) -> Result<(), ValidationError> {
    let digits = phone_no.strip_prefix('+').unwrap_or(phone_no);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_no_format");
        err.message = Some("phone number must contain only digits and an optional leading '+'".into());
        Err(err)
    }
}

/// Flatten validator output into `field: code` pairs, sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| (field.to_string(), e.code.to_string()))
        })
        .collect();
    out.sort();
    out
}
