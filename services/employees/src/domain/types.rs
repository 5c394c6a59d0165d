use serde::Deserialize;
use validator::Validate;

use hrdesk_domain::id::EmployeeCode;

/// Access-token lifetime in seconds (30 minutes).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 30 * 60;

/// The deployment's single administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Admin row about to be inserted; the store assigns `id`.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeCode,
    pub name: String,
    pub designation: String,
    pub salary: i32,
    pub phone_no: String,
    pub address: String,
    pub email: String,
    pub is_active: bool,
}

/// Optional criteria for `GET /employee/search`. Absent fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilter {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub is_active: Option<bool>,
}

impl EmployeeFilter {
    /// Reference semantics for search: plain case-sensitive substring on
    /// name and designation, exact match on `is_active`. The SQL filter in
    /// `infra::db` escapes `LIKE` wildcards so it agrees with this.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.name
            .as_deref()
            .is_none_or(|n| employee.name.contains(n))
            && self
                .designation
                .as_deref()
                .is_none_or(|d| employee.designation.contains(d))
            && self.is_active.is_none_or(|a| employee.is_active == a)
    }
}

/// Free-form message an admin asks the dispatcher to write and send.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CustomMessage {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 2000))]
    pub instruction: String,
}

/// What kind of email to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIntent {
    Welcome,
    Custom(CustomMessage),
}

/// The slice of an employee the dispatcher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub employee_id: EmployeeCode,
    pub name: String,
    pub designation: String,
    pub email: String,
}

impl From<&Employee> for Recipient {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id,
            name: employee.name.clone(),
            designation: employee.designation.clone(),
            email: employee.email.clone(),
        }
    }
}

/// One unit of background work: the same intent for every recipient.
#[derive(Debug, Clone)]
pub struct NotificationJob {
    pub recipients: Vec<Recipient>,
    pub intent: NotificationIntent,
}

/// A fully rendered email ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}
