use std::time::Duration;

use anyhow::Context as _;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::MailTransport;
use crate::domain::types::MailMessage;
use crate::error::DispatchError;

/// STARTTLS SMTP relay authenticated as the sending mailbox.
#[derive(Clone)]
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailTransport {
    pub fn new(
        host: &str,
        port: u16,
        address: &str,
        password: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let from: Mailbox = address.parse().context("parse sender address")?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .with_context(|| format!("configure smtp relay {host}"))?
            .port(port)
            .credentials(Credentials::new(address.to_owned(), password.to_owned()))
            .timeout(Some(timeout))
            .build();
        Ok(Self { mailer, from })
    }
}

/// Plain-text message from `from` to `message.to`.
pub fn build_message(from: &Mailbox, message: &MailMessage) -> Result<Message, DispatchError> {
    let to = message
        .to
        .parse::<Mailbox>()
        .map_err(|e| DispatchError::Transport(format!("invalid recipient {}: {e}", message.to)))?;
    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| DispatchError::Transport(e.to_string()))
}

impl MailTransport for SmtpMailTransport {
    async fn send(&self, message: &MailMessage) -> Result<(), DispatchError> {
        let email = build_message(&self.from, message)?;
        self.mailer
            .send(email)
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        Ok(())
    }
}
