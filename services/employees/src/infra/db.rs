use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, Statement,
    sea_query::{Expr, LikeExpr},
};

use hrdesk_domain::employee::EmployeeDraft;
use hrdesk_domain::id::EmployeeCode;
use hrdesk_employees_schema::{admins, employees};

use crate::domain::repository::{AdminRepository, EmployeeRepository};
use crate::domain::types::{Admin, Employee, EmployeeFilter, NewAdmin};
use crate::error::EmployeesServiceError;

/// Store-side sequence behind employee codes.
const NEXT_CODE_SQL: &str = "SELECT nextval('employee_code_seq') AS code";

// ── Admin repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn any_exists(&self) -> Result<bool, EmployeesServiceError> {
        let count = admins::Entity::find()
            .count(&self.db)
            .await
            .context("count admins")?;
        Ok(count > 0)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Admin>, EmployeesServiceError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find admin by name")?;
        Ok(model.map(admin_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, EmployeesServiceError> {
        let model = admins::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find admin by id")?;
        Ok(model.map(admin_from_model))
    }

    async fn create(&self, admin: &NewAdmin) -> Result<Admin, EmployeesServiceError> {
        let model = admins::ActiveModel {
            id: NotSet,
            name: Set(admin.name.clone()),
            email: Set(admin.email.clone()),
            password_hash: Set(admin.password_hash.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // The singleton index turns a second admin into a unique violation.
            Some(SqlErr::UniqueConstraintViolation(_)) => EmployeesServiceError::AdminAlreadyExists,
            _ => EmployeesServiceError::Internal(anyhow::Error::new(e).context("create admin")),
        })?;
        Ok(admin_from_model(model))
    }
}

fn admin_from_model(m: admins::Model) -> Admin {
    Admin {
        id: m.id,
        name: m.name,
        email: m.email,
        password_hash: m.password_hash,
    }
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

#[derive(FromQueryResult)]
struct NextCode {
    code: i64,
}

impl DbEmployeeRepository {
    async fn next_code(&self) -> Result<EmployeeCode, EmployeesServiceError> {
        let stmt = Statement::from_string(self.db.get_database_backend(), NEXT_CODE_SQL);
        let row = NextCode::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| write_error(e, "allocate employee code"))?
            .context("employee code sequence returned no row")?;
        EmployeeCode::from_sequence(row.code).ok_or(EmployeesServiceError::EmployeeCodesExhausted)
    }

    async fn fetch(
        &self,
        select: sea_orm::Select<employees::Entity>,
        action: &'static str,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        let models = select
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
            .context(action)?;
        models.into_iter().map(employee_from_model).collect()
    }
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn find_by_id(
        &self,
        id: EmployeeCode,
    ) -> Result<Option<Employee>, EmployeesServiceError> {
        let model = employees::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .context("find employee by id")?;
        model.map(employee_from_model).transpose()
    }

    async fn find_by_ids(
        &self,
        ids: &[EmployeeCode],
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        let select = employees::Entity::find()
            .filter(employees::Column::Id.is_in(ids.iter().map(ToString::to_string)));
        self.fetch(select, "find employees by ids").await
    }

    async fn find_by_phone_no(
        &self,
        phone_no: &str,
    ) -> Result<Option<Employee>, EmployeesServiceError> {
        let model = employees::Entity::find()
            .filter(employees::Column::PhoneNo.eq(phone_no))
            .one(&self.db)
            .await
            .context("find employee by phone number")?;
        model.map(employee_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeesServiceError> {
        let model = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find employee by email")?;
        model.map(employee_from_model).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeesServiceError> {
        self.fetch(employees::Entity::find(), "list employees").await
    }

    async fn list_active(&self) -> Result<Vec<Employee>, EmployeesServiceError> {
        let select = employees::Entity::find().filter(employees::Column::IsActive.eq(true));
        self.fetch(select, "list active employees").await
    }

    async fn search(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        let mut select = employees::Entity::find();
        if let Some(ref name) = filter.name {
            select = select.filter(
                Expr::col((employees::Entity, employees::Column::Name)).like(substring(name)),
            );
        }
        if let Some(ref designation) = filter.designation {
            select = select.filter(
                Expr::col((employees::Entity, employees::Column::Designation))
                    .like(substring(designation)),
            );
        }
        if let Some(is_active) = filter.is_active {
            select = select.filter(employees::Column::IsActive.eq(is_active));
        }
        self.fetch(select, "search employees").await
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeesServiceError> {
        let code = self.next_code().await?;
        let model = employees::ActiveModel {
            id: Set(code.to_string()),
            ..active_from_draft(draft)
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "create employee"))?;
        employee_from_model(model)
    }

    async fn replace(
        &self,
        id: EmployeeCode,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeesServiceError> {
        let result = employees::ActiveModel {
            id: Set(id.to_string()),
            ..active_from_draft(draft)
        }
        .update(&self.db)
        .await;
        match result {
            Ok(model) => employee_from_model(model).map(Some),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(write_error(e, "replace employee")),
        }
    }

    async fn delete(&self, id: EmployeeCode) -> Result<bool, EmployeesServiceError> {
        let result = employees::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .context("delete employee")?;
        Ok(result.rows_affected > 0)
    }
}

fn substring(needle: &str) -> LikeExpr {
    LikeExpr::new(like_pattern(needle)).escape('\\')
}

/// `LIKE` pattern matching `needle` anywhere, with `%`, `_` and `\` taken literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn active_from_draft(d: &EmployeeDraft) -> employees::ActiveModel {
    employees::ActiveModel {
        id: NotSet,
        name: Set(d.name.clone()),
        designation: Set(d.designation.clone()),
        salary: Set(d.salary),
        phone_no: Set(d.phone_no.clone()),
        address: Set(d.address.clone()),
        email: Set(d.email.clone()),
        is_active: Set(d.is_active),
    }
}

fn employee_from_model(m: employees::Model) -> Result<Employee, EmployeesServiceError> {
    let id = m
        .id
        .parse::<EmployeeCode>()
        .with_context(|| format!("stored employee id {:?} is not a valid code", m.id))?;
    Ok(Employee {
        id,
        name: m.name,
        designation: m.designation,
        salary: m.salary,
        phone_no: m.phone_no,
        address: m.address,
        email: m.email,
        is_active: m.is_active,
    })
}

/// Translate store write failures into domain errors. Unique violations are
/// told apart by the index name carried in the message.
fn write_error(err: DbErr, action: &'static str) -> EmployeesServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if detail.contains("phone_no") {
            return EmployeesServiceError::PhoneNoAlreadyExists;
        }
        if detail.contains("email") {
            return EmployeesServiceError::EmailAlreadyExists;
        }
    }
    if err.to_string().contains("reached maximum value of sequence") {
        return EmployeesServiceError::EmployeeCodesExhausted;
    }
    EmployeesServiceError::Internal(anyhow::Error::new(err).context(action))
}
