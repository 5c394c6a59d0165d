use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use hrdesk_testing::auth::MockBearer;

use hrdesk_employees::dispatch::NotificationDispatcher;
use hrdesk_employees::router::build_router;
use hrdesk_employees::state::AppState;

use crate::helpers::{MockGenerator, MockTransport, TEST_BCRYPT_COST, TEST_JWT_SECRET, test_settings};

/// A server whose database is unreachable, so only paths that never touch it succeed.
fn server() -> TestServer {
    let (notifier, _handle) =
        NotificationDispatcher::spawn(MockGenerator::new(), MockTransport::new(), test_settings());
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: TEST_JWT_SECRET.into(),
        bcrypt_cost: TEST_BCRYPT_COST,
        notifier,
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_report_live() {
    let server = server();
    server.get("/healthz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let server = server();
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_attach_request_id() {
    let server = server();
    let resp = server.get("/healthz").await;
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_require_bearer_for_mutations() {
    let server = server();
    let body = json!({
        "name": "Asha",
        "designation": "Engineer",
        "salary": 60000,
        "phone_no": "9998887777",
        "address": "42 MG Road, Pune",
        "email": "asha@example.com"
    });

    let resp = server.post("/employee/").json(&body).await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    let json: Value = resp.json();
    assert_eq!(json["kind"], "UNAUTHORIZED");
    assert_eq!(resp.headers()["www-authenticate"], "Bearer");

    server
        .put("/employee/M00001")
        .json(&body)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .delete("/employee/M00001")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/employee/send-bulk-email")
        .json(&json!({ "subject": "Hi", "instruction": "Say hi." }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_forged_bearer_before_reading_store() {
    let server = server();
    let (name, value) = MockBearer::new("not.a.jwt").header();
    let resp = server
        .delete("/employee/M00001")
        .add_header(name, value)
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    let json: Value = resp.json();
    assert_eq!(json["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_answer_malformed_id_with_not_found() {
    let server = server();
    let resp = server.get("/employee/not-a-code").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let json: Value = resp.json();
    assert_eq!(json["kind"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_unsupported_grant_type() {
    let server = server();
    let resp = server
        .post("/token")
        .form(&[
            ("username", "mayur"),
            ("password", "secret1"),
            ("grant_type", "client_credentials"),
        ])
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = resp.json();
    assert_eq!(json["fields"][0]["field"], "grant_type");
}
