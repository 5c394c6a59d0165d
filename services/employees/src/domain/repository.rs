#![allow(async_fn_in_trait)]

use std::future::Future;

use hrdesk_domain::employee::EmployeeDraft;
use hrdesk_domain::id::EmployeeCode;

use crate::domain::types::{
    Admin, Employee, EmployeeFilter, MailMessage, NewAdmin, NotificationJob,
};
use crate::error::{DispatchError, EmployeesServiceError};

/// Repository for the administrator identity.
pub trait AdminRepository: Send + Sync {
    /// Whether any admin row exists.
    async fn any_exists(&self) -> Result<bool, EmployeesServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Admin>, EmployeesServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, EmployeesServiceError>;

    /// Insert the admin. Fails with `AdminAlreadyExists` if one is already stored.
    async fn create(&self, admin: &NewAdmin) -> Result<Admin, EmployeesServiceError>;
}

/// Repository for employee records.
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: EmployeeCode,
    ) -> Result<Option<Employee>, EmployeesServiceError>;

    /// Rows whose code is in `ids`. Unknown codes are silently absent.
    async fn find_by_ids(
        &self,
        ids: &[EmployeeCode],
    ) -> Result<Vec<Employee>, EmployeesServiceError>;

    async fn find_by_phone_no(
        &self,
        phone_no: &str,
    ) -> Result<Option<Employee>, EmployeesServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeesServiceError>;

    /// Every row, ordered by code.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeesServiceError>;

    /// Rows with `is_active = true`, ordered by code.
    async fn list_active(&self) -> Result<Vec<Employee>, EmployeesServiceError>;

    async fn search(&self, filter: &EmployeeFilter)
    -> Result<Vec<Employee>, EmployeesServiceError>;

    /// Assign the next employee code and insert the row.
    ///
    /// Code assignment is serialised by the store (`employee_code_seq` in
    /// Postgres), so concurrent creates never share a code. Uniqueness violations map to
    /// `PhoneNoAlreadyExists` / `EmailAlreadyExists`.
    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeesServiceError>;

    /// Overwrite every mutable field. Returns `None` if the row does not exist.
    async fn replace(
        &self,
        id: EmployeeCode,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeesServiceError>;

    /// Hard-delete a row. Returns `true` if a row was deleted.
    async fn delete(&self, id: EmployeeCode) -> Result<bool, EmployeesServiceError>;
}

/// Accepts background notification work without waiting for it.
pub trait NotificationSink: Send + Sync {
    fn enqueue(&self, job: NotificationJob) -> Result<(), DispatchError>;
}

/// Port for the external text-generation service.
pub trait ContentGenerator: Send + Sync + 'static {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, DispatchError>> + Send;
}

/// Port for the outbound mail transport.
pub trait MailTransport: Send + Sync + 'static {
    fn send(&self, message: &MailMessage)
    -> impl Future<Output = Result<(), DispatchError>> + Send;
}

impl<T: AdminRepository> AdminRepository for &T {
    async fn any_exists(&self) -> Result<bool, EmployeesServiceError> {
        (**self).any_exists().await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Admin>, EmployeesServiceError> {
        (**self).find_by_name(name).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, EmployeesServiceError> {
        (**self).find_by_id(id).await
    }

    async fn create(&self, admin: &NewAdmin) -> Result<Admin, EmployeesServiceError> {
        (**self).create(admin).await
    }
}

impl<T: NotificationSink> NotificationSink for &T {
    fn enqueue(&self, job: NotificationJob) -> Result<(), DispatchError> {
        (**self).enqueue(job)
    }
}
