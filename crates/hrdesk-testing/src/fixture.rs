//! Canned domain values.

use hrdesk_domain::admin::AdminDraft;
use hrdesk_domain::employee::EmployeeDraft;

/// The admin from the reference scenario.
pub fn admin_draft() -> AdminDraft {
    AdminDraft {
        name: "mayur".to_owned(),
        email: "m@x.com".to_owned(),
        password: "secret1".to_owned(),
    }
}

/// A valid employee; vary `phone_no` / `email` per test to avoid conflicts.
pub fn employee_draft(name: &str, phone_no: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_owned(),
        designation: "Engineer".to_owned(),
        salary: 60_000,
        phone_no: phone_no.to_owned(),
        address: "42 MG Road, Pune".to_owned(),
        email: email.to_owned(),
        is_active: true,
    }
}

/// The employee from the reference scenario.
pub fn asha() -> EmployeeDraft {
    employee_draft("Asha", "9998887777", "asha@example.com")
}
