use validator::Validate;

use hrdesk_domain::employee::EmployeeDraft;
use hrdesk_domain::id::EmployeeCode;

use crate::domain::repository::{EmployeeRepository, NotificationSink};
use crate::domain::types::{
    Employee, EmployeeFilter, NotificationIntent, NotificationJob, Recipient,
};
use crate::error::EmployeesServiceError;

/// Path ids that do not parse as employee codes cannot name a row.
pub fn parse_code(id: &str) -> Result<EmployeeCode, EmployeesServiceError> {
    id.parse().map_err(|_| EmployeesServiceError::EmployeeNotFound)
}

/// Fail if another employee already holds the draft's phone number or email.
async fn ensure_unique<R: EmployeeRepository>(
    repo: &R,
    draft: &EmployeeDraft,
    owner: Option<EmployeeCode>,
) -> Result<(), EmployeesServiceError> {
    if let Some(other) = repo.find_by_phone_no(&draft.phone_no).await? {
        if Some(other.id) != owner {
            return Err(EmployeesServiceError::PhoneNoAlreadyExists);
        }
    }
    if let Some(other) = repo.find_by_email(&draft.email).await? {
        if Some(other.id) != owner {
            return Err(EmployeesServiceError::EmailAlreadyExists);
        }
    }
    Ok(())
}

// ── CreateEmployee ───────────────────────────────────────────────────────────

pub struct CreateEmployeeUseCase<R: EmployeeRepository, N: NotificationSink> {
    pub repo: R,
    pub notifier: N,
}

impl<R: EmployeeRepository, N: NotificationSink> CreateEmployeeUseCase<R, N> {
    /// Persist the employee, then queue a welcome email.
    ///
    /// A failed enqueue is logged and does not fail the create.
    pub async fn execute(&self, draft: EmployeeDraft) -> Result<Employee, EmployeesServiceError> {
        draft.validate()?;
        ensure_unique(&self.repo, &draft, None).await?;
        let employee = self.repo.create(&draft).await?;
        tracing::info!(employee_id = %employee.id, "employee created");

        let job = NotificationJob {
            recipients: vec![Recipient::from(&employee)],
            intent: NotificationIntent::Welcome,
        };
        if let Err(e) = self.notifier.enqueue(job) {
            tracing::warn!(employee_id = %employee.id, error = %e, "welcome email not queued");
        }
        Ok(employee)
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> GetEmployeeUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<Employee, EmployeesServiceError> {
        let code = parse_code(id)?;
        self.repo
            .find_by_id(code)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound)
    }
}

// ── ListEmployees ────────────────────────────────────────────────────────────

pub struct ListEmployeesUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> ListEmployeesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Employee>, EmployeesServiceError> {
        self.repo.list_all().await
    }
}

// ── SearchEmployees ──────────────────────────────────────────────────────────

pub struct SearchEmployeesUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> SearchEmployeesUseCase<R> {
    pub async fn execute(
        &self,
        filter: EmployeeFilter,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        self.repo.search(&filter).await
    }
}

// ── ReplaceEmployee ──────────────────────────────────────────────────────────

pub struct ReplaceEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> ReplaceEmployeeUseCase<R> {
    /// Overwrite every mutable field of an existing employee. The code is kept.
    pub async fn execute(
        &self,
        id: &str,
        draft: EmployeeDraft,
    ) -> Result<Employee, EmployeesServiceError> {
        let code = parse_code(id)?;
        draft.validate()?;
        if self.repo.find_by_id(code).await?.is_none() {
            return Err(EmployeesServiceError::EmployeeNotFound);
        }
        ensure_unique(&self.repo, &draft, Some(code)).await?;
        let employee = self
            .repo
            .replace(code, &draft)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound)?;
        tracing::info!(employee_id = %code, "employee replaced");
        Ok(employee)
    }
}

// ── DeleteEmployee ───────────────────────────────────────────────────────────

pub struct DeleteEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> DeleteEmployeeUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<(), EmployeesServiceError> {
        let code = parse_code(id)?;
        if !self.repo.delete(code).await? {
            return Err(EmployeesServiceError::EmployeeNotFound);
        }
        tracing::info!(employee_id = %code, "employee deleted");
        Ok(())
    }
}
