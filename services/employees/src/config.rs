use std::time::Duration;

use serde::Deserialize;

use hrdesk_core::config::Config;

use crate::dispatch::DispatchSettings;

/// Employees service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct EmployeesConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HS256 signing secret for access tokens. Must be non-empty.
    pub jwt_secret: String,
    /// Sending mailbox, also the SMTP username.
    pub email_address: String,
    pub email_password: String,
    pub groq_api_key: String,

    /// TCP port for the HTTP server (default 8000). Env var: `EMPLOYEES_PORT`.
    #[serde(default = "default_port")]
    pub employees_port: u16,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_notify_workers")]
    pub notify_workers: usize,
    #[serde(default = "default_notify_queue_capacity")]
    pub notify_queue_capacity: usize,
    /// Per-call timeout for generation and send, in seconds.
    #[serde(default = "default_notify_timeout_secs")]
    pub notify_timeout_secs: u64,
}

fn default_port() -> u16 {
    8000
}
fn default_smtp_host() -> String {
    "smtp.gmail.com".to_owned()
}
fn default_smtp_port() -> u16 {
    587
}
fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_owned()
}
fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_owned()
}
fn default_company_name() -> String {
    "MR Developers".to_owned()
}
fn default_sender_name() -> String {
    "Mayur".to_owned()
}
fn default_bcrypt_cost() -> u32 {
    12
}
fn default_notify_workers() -> usize {
    4
}
fn default_notify_queue_capacity() -> usize {
    256
}
fn default_notify_timeout_secs() -> u64 {
    10
}

impl Config for EmployeesConfig {}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),
    #[error("JWT_SECRET must not be empty")]
    EmptyJwtSecret,
    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    BcryptCost(u32),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

impl EmployeesConfig {
    /// Read the environment (and `.env`) and check the values.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptyJwtSecret);
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCost(self.bcrypt_cost));
        }
        if self.notify_workers == 0 {
            return Err(ConfigError::NotPositive("NOTIFY_WORKERS"));
        }
        if self.notify_queue_capacity == 0 {
            return Err(ConfigError::NotPositive("NOTIFY_QUEUE_CAPACITY"));
        }
        if self.notify_timeout_secs == 0 {
            return Err(ConfigError::NotPositive("NOTIFY_TIMEOUT_SECS"));
        }
        Ok(())
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }

    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            workers: self.notify_workers,
            queue_capacity: self.notify_queue_capacity,
            call_timeout: self.call_timeout(),
            company_name: self.company_name.clone(),
            sender_name: self.sender_name.clone(),
        }
    }
}
