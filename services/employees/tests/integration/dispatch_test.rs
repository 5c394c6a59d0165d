use std::time::Duration;

use hrdesk_domain::id::EmployeeCode;

use hrdesk_employees::dispatch::NotificationDispatcher;
use hrdesk_employees::domain::repository::NotificationSink;
use hrdesk_employees::domain::types::{
    CustomMessage, NotificationIntent, NotificationJob, Recipient,
};
use hrdesk_employees::error::DispatchError;

use crate::helpers::{MockGenerator, MockTransport, test_settings};

fn recipient(seq: i64, name: &str, email: &str) -> Recipient {
    Recipient {
        employee_id: EmployeeCode::from_sequence(seq).unwrap(),
        name: name.into(),
        designation: "Engineer".into(),
        email: email.into(),
    }
}

fn three_recipients() -> Vec<Recipient> {
    vec![
        recipient(1, "Asha", "asha@example.com"),
        recipient(2, "Ravi", "ravi@example.com"),
        recipient(3, "Neha", "neha@example.com"),
    ]
}

#[tokio::test]
async fn should_attempt_every_recipient_when_one_send_fails() {
    let generator = MockGenerator::new();
    let transport = MockTransport::failing_for(&["ravi@example.com"]);
    let (dispatcher, handle) =
        NotificationDispatcher::spawn(generator.clone(), transport.clone(), test_settings());

    dispatcher
        .enqueue(NotificationJob {
            recipients: three_recipients(),
            intent: NotificationIntent::Custom(CustomMessage {
                subject: "Holiday".into(),
                instruction: "Announce Friday off.".into(),
            }),
        })
        .unwrap();
    drop(dispatcher);
    handle.join().await;

    assert_eq!(generator.prompts().len(), 3);
    let attempted: Vec<String> = transport.attempts().into_iter().map(|m| m.to).collect();
    assert_eq!(
        attempted,
        ["asha@example.com", "ravi@example.com", "neha@example.com"]
    );
    assert!(transport.attempts().iter().all(|m| m.subject == "Holiday"));
}

#[tokio::test]
async fn should_generate_welcome_per_recipient() {
    let generator = MockGenerator::new();
    let transport = MockTransport::new();
    let (dispatcher, handle) =
        NotificationDispatcher::spawn(generator.clone(), transport.clone(), test_settings());

    dispatcher
        .enqueue(NotificationJob {
            recipients: vec![recipient(1, "Asha", "asha@example.com")],
            intent: NotificationIntent::Welcome,
        })
        .unwrap();
    drop(dispatcher);
    handle.join().await;

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Asha"));
    assert!(prompts[0].contains("MR Developers"));
    let sent = transport.attempts();
    assert_eq!(sent[0].subject, "Welcome to MR Developers");
    assert!(sent[0].body.starts_with("generated body"));
}

#[tokio::test(start_paused = true)]
async fn should_skip_send_when_generation_times_out() {
    let generator = MockGenerator::slow(Duration::from_secs(60));
    let transport = MockTransport::new();
    let (dispatcher, handle) =
        NotificationDispatcher::spawn(generator.clone(), transport.clone(), test_settings());

    dispatcher
        .enqueue(NotificationJob {
            recipients: vec![recipient(1, "Asha", "asha@example.com")],
            intent: NotificationIntent::Welcome,
        })
        .unwrap();
    drop(dispatcher);
    handle.join().await;

    assert_eq!(generator.prompts().len(), 1);
    assert!(transport.attempts().is_empty());
}

#[tokio::test]
async fn should_report_full_queue_without_blocking() {
    let mut settings = test_settings();
    settings.workers = 1;
    settings.queue_capacity = 1;
    let (dispatcher, handle) =
        NotificationDispatcher::spawn(MockGenerator::new(), MockTransport::new(), settings);

    let job = || NotificationJob {
        recipients: vec![recipient(1, "Asha", "asha@example.com")],
        intent: NotificationIntent::Welcome,
    };
    // No await between sends, so the worker cannot drain the slot.
    dispatcher.enqueue(job()).unwrap();
    let result = dispatcher.enqueue(job());
    assert!(
        matches!(result, Err(DispatchError::QueueFull)),
        "expected QueueFull, got {result:?}"
    );

    drop(dispatcher);
    handle.join().await;
}
