use std::collections::BTreeSet;

use validator::Validate;

use hrdesk_domain::id::EmployeeCode;

use crate::domain::repository::{EmployeeRepository, NotificationSink};
use crate::domain::types::{CustomMessage, NotificationIntent, NotificationJob, Recipient};
use crate::error::EmployeesServiceError;
use crate::usecase::employee::parse_code;

/// Who a custom email goes to.
#[derive(Debug, Clone)]
pub enum Audience {
    /// One employee by code.
    One(String),
    /// An explicit list; every code must exist. Inactive employees are included.
    Selected(Vec<String>),
    /// Every employee with `is_active = true`.
    Active,
}

pub struct SendEmailUseCase<R: EmployeeRepository, N: NotificationSink> {
    pub repo: R,
    pub notifier: N,
}

impl<R: EmployeeRepository, N: NotificationSink> SendEmailUseCase<R, N> {
    /// Resolve the audience and queue one job for it. Returns the recipient count.
    pub async fn execute(
        &self,
        audience: Audience,
        message: CustomMessage,
    ) -> Result<usize, EmployeesServiceError> {
        message.validate()?;

        let employees = match audience {
            Audience::One(id) => {
                let code = parse_code(&id)?;
                let employee = self
                    .repo
                    .find_by_id(code)
                    .await?
                    .ok_or(EmployeesServiceError::EmployeeNotFound)?;
                vec![employee]
            }
            Audience::Selected(ids) => {
                if ids.is_empty() {
                    let mut errs = validator::ValidationErrors::new();
                    errs.add("employee_ids", validator::ValidationError::new("length"));
                    return Err(errs.into());
                }
                let codes = ids
                    .iter()
                    .map(|id| parse_code(id))
                    .collect::<Result<BTreeSet<EmployeeCode>, _>>()?;
                let codes: Vec<EmployeeCode> = codes.into_iter().collect();
                let found = self.repo.find_by_ids(&codes).await?;
                if found.len() != codes.len() {
                    return Err(EmployeesServiceError::EmployeeNotFound);
                }
                found
            }
            Audience::Active => {
                let active = self.repo.list_active().await?;
                if active.is_empty() {
                    return Err(EmployeesServiceError::NoActiveEmployees);
                }
                active
            }
        };

        let queued = employees.len();
        self.notifier.enqueue(NotificationJob {
            recipients: employees.iter().map(Recipient::from).collect(),
            intent: NotificationIntent::Custom(message),
        })?;
        tracing::info!(recipients = queued, "custom email queued");
        Ok(queued)
    }
}
