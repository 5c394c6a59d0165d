use validator::Validate;

use hrdesk_domain::admin::AdminDraft;

use crate::domain::repository::AdminRepository;
use crate::domain::types::{Admin, NewAdmin};
use crate::error::EmployeesServiceError;
use crate::usecase::password::{hash_password, verify_password};

// ── RegisterAdmin ────────────────────────────────────────────────────────────

pub struct RegisterAdminUseCase<R: AdminRepository> {
    pub repo: R,
    pub bcrypt_cost: u32,
}

impl<R: AdminRepository> RegisterAdminUseCase<R> {
    pub async fn execute(&self, draft: AdminDraft) -> Result<Admin, EmployeesServiceError> {
        draft.validate()?;
        if self.repo.any_exists().await? {
            return Err(EmployeesServiceError::AdminAlreadyExists);
        }
        let password_hash = hash_password(draft.password, self.bcrypt_cost).await?;
        let admin = self
            .repo
            .create(&NewAdmin {
                name: draft.name,
                email: draft.email,
                password_hash,
            })
            .await?;
        tracing::info!(admin_id = admin.id, "admin registered");
        Ok(admin)
    }
}

// ── AuthenticateAdmin ────────────────────────────────────────────────────────

pub struct AuthenticateAdminUseCase<R: AdminRepository> {
    pub repo: R,
    pub bcrypt_cost: u32,
}

impl<R: AdminRepository> AuthenticateAdminUseCase<R> {
    /// Unknown name and wrong password both yield `InvalidCredentials`.
    pub async fn execute(
        &self,
        name: &str,
        password: String,
    ) -> Result<Admin, EmployeesServiceError> {
        let admin = self.repo.find_by_name(name).await?;
        let hash = admin.as_ref().map(|a| a.password_hash.clone());
        let matched = verify_password(password, hash, self.bcrypt_cost).await?;
        match admin {
            Some(admin) if matched => Ok(admin),
            _ => {
                tracing::warn!("rejected admin login");
                Err(EmployeesServiceError::InvalidCredentials)
            }
        }
    }
}
