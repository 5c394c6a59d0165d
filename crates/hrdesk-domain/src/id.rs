//! Employee identity scheme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix of every employee code.
pub const EMPLOYEE_CODE_PREFIX: char = 'M';

/// Number of zero-padded digits after the prefix.
pub const EMPLOYEE_CODE_DIGITS: usize = 5;

/// Largest sequence number representable in an employee code.
pub const EMPLOYEE_CODE_MAX: u32 = 99_999;

/// Identifies an employee: `M` followed by five zero-padded digits (`M00042`).
///
/// The numeric part comes from a monotonically increasing store sequence, so a
/// code is never reissued after its employee is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeCode(u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEmployeeCodeError {
    #[error("employee code must start with 'M'")]
    MissingPrefix,
    #[error("employee code must have exactly 5 digits")]
    BadLength,
    #[error("employee code suffix must be numeric")]
    NotNumeric,
    #[error("employee code M00000 is reserved")]
    Zero,
}

impl EmployeeCode {
    /// Build a code from a sequence value. Returns `None` outside `1..=99999`.
    pub fn from_sequence(value: i64) -> Option<Self> {
        u32::try_from(value)
            .ok()
            .filter(|v| (1..=EMPLOYEE_CODE_MAX).contains(v))
            .map(Self)
    }

    /// Numeric part of the code.
    pub fn sequence(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{EMPLOYEE_CODE_PREFIX}{:0width$}",
            self.0,
            width = EMPLOYEE_CODE_DIGITS
        )
    }
}

impl FromStr for EmployeeCode {
    type Err = ParseEmployeeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(EMPLOYEE_CODE_PREFIX)
            .ok_or(ParseEmployeeCodeError::MissingPrefix)?;
        if digits.len() != EMPLOYEE_CODE_DIGITS {
            return Err(ParseEmployeeCodeError::BadLength);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseEmployeeCodeError::NotNumeric);
        }
        let value: u32 = digits
            .parse()
            .map_err(|_| ParseEmployeeCodeError::NotNumeric)?;
        if value == 0 {
            return Err(ParseEmployeeCodeError::Zero);
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for EmployeeCode {
    type Error = ParseEmployeeCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EmployeeCode> for String {
    fn from(code: EmployeeCode) -> Self {
        code.to_string()
    }
}
