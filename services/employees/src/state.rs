use sea_orm::DatabaseConnection;

use crate::dispatch::NotificationDispatcher;
use crate::infra::db::{DbAdminRepository, DbEmployeeRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    pub notifier: NotificationDispatcher,
}

impl AppState {
    pub fn admin_repo(&self) -> DbAdminRepository {
        DbAdminRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }
}
