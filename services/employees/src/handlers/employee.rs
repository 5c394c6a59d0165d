use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use hrdesk_domain::employee::EmployeeDraft;

use crate::domain::types::{Employee, EmployeeFilter};
use crate::error::EmployeesServiceError;
use crate::handlers::identity::AdminIdentity;
use crate::state::AppState;
use crate::usecase::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase, ListEmployeesUseCase,
    ReplaceEmployeeUseCase, SearchEmployeesUseCase,
};

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub salary: i32,
    pub phone_no: String,
    pub address: String,
    pub email: String,
    pub is_active: bool,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name,
            designation: e.designation,
            salary: e.salary,
            phone_no: e.phone_no,
            address: e.address,
            email: e.email,
            is_active: e.is_active,
        }
    }
}

fn to_responses(employees: Vec<Employee>) -> Json<Vec<EmployeeResponse>> {
    Json(employees.into_iter().map(EmployeeResponse::from).collect())
}

// ── POST /employee/ ──────────────────────────────────────────────────────────

pub async fn create_employee(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<EmployeeDraft>,
) -> Result<(StatusCode, Json<EmployeeResponse>), EmployeesServiceError> {
    let usecase = CreateEmployeeUseCase {
        repo: state.employee_repo(),
        notifier: state.notifier.clone(),
    };
    let employee = usecase.execute(body).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

// ── GET /employee/ ───────────────────────────────────────────────────────────

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, EmployeesServiceError> {
    let usecase = ListEmployeesUseCase {
        repo: state.employee_repo(),
    };
    Ok(to_responses(usecase.execute().await?))
}

// ── GET /employee/search ─────────────────────────────────────────────────────

pub async fn search_employees(
    State(state): State<AppState>,
    Query(filter): Query<EmployeeFilter>,
) -> Result<Json<Vec<EmployeeResponse>>, EmployeesServiceError> {
    let usecase = SearchEmployeesUseCase {
        repo: state.employee_repo(),
    };
    Ok(to_responses(usecase.execute(filter).await?))
}

// ── GET /employee/{id} ───────────────────────────────────────────────────────

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, EmployeesServiceError> {
    let usecase = GetEmployeeUseCase {
        repo: state.employee_repo(),
    };
    Ok(Json(usecase.execute(&id).await?.into()))
}

// ── PUT /employee/{id} ───────────────────────────────────────────────────────

pub async fn replace_employee(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EmployeeDraft>,
) -> Result<Json<EmployeeResponse>, EmployeesServiceError> {
    let usecase = ReplaceEmployeeUseCase {
        repo: state.employee_repo(),
    };
    Ok(Json(usecase.execute(&id, body).await?.into()))
}

// ── DELETE /employee/{id} ────────────────────────────────────────────────────

pub async fn delete_employee(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, EmployeesServiceError> {
    let usecase = DeleteEmployeeUseCase {
        repo: state.employee_repo(),
    };
    usecase.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
