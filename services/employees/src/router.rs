use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use hrdesk_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    admin::register_admin,
    email::{send_bulk_email, send_employee_email, send_selected_email},
    employee::{
        create_employee, delete_employee, get_employee, list_employees, replace_employee,
        search_employees,
    },
    health::{healthz, readyz},
    token::create_token,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Admin
        .route("/auth", post(register_admin))
        .route("/token", post(create_token))
        // Employees
        .route("/employee/", post(create_employee))
        .route("/employee/", get(list_employees))
        .route("/employee/search", get(search_employees))
        .route("/employee/{id}", get(get_employee))
        .route("/employee/{id}", put(replace_employee))
        .route("/employee/{id}", delete(delete_employee))
        // Email
        .route("/employee/{id}/send-email", post(send_employee_email))
        .route("/employee/send-email", post(send_selected_email))
        .route("/employee/send-bulk-email", post(send_bulk_email))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
