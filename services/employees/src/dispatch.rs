//! Background notification dispatcher.
//!
//! Jobs go onto a bounded queue and are drained by a fixed pool of workers.
//! Each recipient gets its own generation and send call, each under a timeout.
//! Failures are logged and never retried.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::repository::{ContentGenerator, MailTransport, NotificationSink};
use crate::domain::types::{MailMessage, NotificationIntent, NotificationJob, Recipient};
use crate::error::DispatchError;

#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub workers: usize,
    pub queue_capacity: usize,
    /// Upper bound for each generation call and each send call.
    pub call_timeout: Duration,
    pub company_name: String,
    pub sender_name: String,
}

/// Cloneable handle for queueing jobs.
#[derive(Clone)]
pub struct NotificationDispatcher {
    tx: mpsc::Sender<NotificationJob>,
}

/// Owns the worker tasks. The pool stops once every [`NotificationDispatcher`]
/// clone is dropped and the queue is drained.
pub struct DispatcherHandle {
    workers: Vec<JoinHandle<()>>,
}

impl DispatcherHandle {
    pub async fn join(self) {
        for worker in self.workers {
            if let Err(e) = worker.await {
                warn!(error = %e, "notification worker panicked");
            }
        }
        info!("notification dispatcher stopped");
    }
}

/// Outcome of delivering one job.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: usize,
}

impl NotificationDispatcher {
    pub fn spawn<G, T>(
        generator: G,
        transport: T,
        settings: DispatchSettings,
    ) -> (Self, DispatcherHandle)
    where
        G: ContentGenerator,
        T: MailTransport,
    {
        let (tx, rx) = mpsc::channel(settings.queue_capacity.max(1));
        let rx = Arc::new(Mutex::new(rx));
        let workers = settings.workers.max(1);
        let delivery = Arc::new(Delivery {
            generator,
            transport,
            settings,
        });

        let workers = (0..workers)
            .map(|worker| tokio::spawn(run_worker(worker, rx.clone(), delivery.clone())))
            .collect();
        (Self { tx }, DispatcherHandle { workers })
    }
}

impl NotificationSink for NotificationDispatcher {
    fn enqueue(&self, job: NotificationJob) -> Result<(), DispatchError> {
        self.tx.try_send(job).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => DispatchError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => DispatchError::QueueClosed,
        })
    }
}

async fn run_worker<G, T>(
    worker: usize,
    rx: Arc<Mutex<mpsc::Receiver<NotificationJob>>>,
    delivery: Arc<Delivery<G, T>>,
) where
    G: ContentGenerator,
    T: MailTransport,
{
    loop {
        let job = rx.lock().await.recv().await;
        let Some(job) = job else { break };
        let report = delivery.deliver(job).await;
        debug!(worker, sent = report.sent, failed = report.failed, "job delivered");
    }
    debug!(worker, "notification worker exiting");
}

struct Delivery<G, T> {
    generator: G,
    transport: T,
    settings: DispatchSettings,
}

impl<G: ContentGenerator, T: MailTransport> Delivery<G, T> {
    async fn deliver(&self, job: NotificationJob) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        for recipient in &job.recipients {
            match self.deliver_one(recipient, &job.intent).await {
                Ok(()) => {
                    report.sent += 1;
                    info!(employee_id = %recipient.employee_id, "email sent");
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(employee_id = %recipient.employee_id, error = %e, "email not delivered");
                }
            }
        }
        report
    }

    async fn deliver_one(
        &self,
        recipient: &Recipient,
        intent: &NotificationIntent,
    ) -> Result<(), DispatchError> {
        let after = self.settings.call_timeout;
        let (subject, prompt) = compose(&self.settings, recipient, intent);

        let body = tokio::time::timeout(after, self.generator.generate(&prompt))
            .await
            .map_err(|_| DispatchError::Timeout {
                stage: "generation",
                after,
            })??;

        let message = MailMessage {
            to: recipient.email.clone(),
            subject,
            body,
        };
        tokio::time::timeout(after, self.transport.send(&message))
            .await
            .map_err(|_| DispatchError::Timeout {
                stage: "send",
                after,
            })?
    }
}

/// Subject line and generation prompt for one recipient.
pub fn compose(
    settings: &DispatchSettings,
    recipient: &Recipient,
    intent: &NotificationIntent,
) -> (String, String) {
    let company = &settings.company_name;
    let (subject, instruction) = match intent {
        NotificationIntent::Welcome => (
            format!("Welcome to {company}"),
            format!(
                "Write a warm professional welcome email to {}, who has joined as a {}. \
                 Mention growth opportunities and company culture.",
                recipient.name, recipient.designation
            ),
        ),
        NotificationIntent::Custom(message) => (
            message.subject.clone(),
            format!(
                "Address the email to {}, {}.\n{}",
                recipient.name, recipient.designation, message.instruction
            ),
        ),
    };
    let prompt = format!(
        "Write a professional HR email for {company} based on the instruction below.\n\
         The email must clearly mention that the company name is {company} and that the \
         higher authority and sender is {sender}.\n\n\
         {instruction}\n\nEmail:",
        sender = settings.sender_name,
    );
    (subject, prompt)
}
