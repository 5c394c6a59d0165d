use sea_orm::Database;
use tracing::{error, info};

use hrdesk_core::tracing::init_tracing;
use hrdesk_employees::config::EmployeesConfig;
use hrdesk_employees::dispatch::NotificationDispatcher;
use hrdesk_employees::infra::llm::GroqContentGenerator;
use hrdesk_employees::infra::mail::SmtpMailTransport;
use hrdesk_employees::router::build_router;
use hrdesk_employees::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match EmployeesConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let generator = GroqContentGenerator::new(
        &config.groq_base_url,
        config.groq_api_key.clone(),
        config.groq_model.clone(),
        config.call_timeout(),
    )
    .expect("failed to build text generation client");

    let transport = SmtpMailTransport::new(
        &config.smtp_host,
        config.smtp_port,
        &config.email_address,
        &config.email_password,
        config.call_timeout(),
    )
    .expect("failed to build smtp transport");

    let (notifier, workers) =
        NotificationDispatcher::spawn(generator, transport, config.dispatch_settings());

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        bcrypt_cost: config.bcrypt_cost,
        notifier,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.employees_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("employees service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    // The router (and every queue sender it held) is gone; let workers drain.
    workers.join().await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
