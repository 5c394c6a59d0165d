use hrdesk_domain::employee::EmployeeDraft;
use hrdesk_testing::fixture::{asha, employee_draft};

use hrdesk_employees::domain::types::{EmployeeFilter, NotificationIntent};
use hrdesk_employees::error::EmployeesServiceError;
use hrdesk_employees::usecase::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase, ListEmployeesUseCase,
    ReplaceEmployeeUseCase, SearchEmployeesUseCase,
};

use crate::helpers::{MockEmployeeRepo, RecordingSink};

fn create(
    repo: &MockEmployeeRepo,
    sink: &RecordingSink,
) -> CreateEmployeeUseCase<MockEmployeeRepo, RecordingSink> {
    CreateEmployeeUseCase {
        repo: repo.clone(),
        notifier: sink.clone(),
    }
}

fn field_failed(err: &EmployeesServiceError, field: &str) -> bool {
    match err {
        EmployeesServiceError::Validation(errs) => errs.field_errors().contains_key(field),
        _ => false,
    }
}

// ── CreateEmployeeUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_assign_first_code_and_queue_welcome() {
    let repo = MockEmployeeRepo::empty();
    let sink = RecordingSink::new();
    let employee = create(&repo, &sink).execute(asha()).await.unwrap();

    assert_eq!(employee.id.to_string(), "M00001");
    assert!(employee.is_active);

    let jobs = sink.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].intent, NotificationIntent::Welcome);
    assert_eq!(jobs[0].recipients.len(), 1);
    assert_eq!(jobs[0].recipients[0].email, "asha@example.com");
}

#[tokio::test]
async fn should_accept_salary_bounds_and_reject_outside() {
    let repo = MockEmployeeRepo::empty();
    let sink = RecordingSink::new();
    let usecase = create(&repo, &sink);

    let low = EmployeeDraft {
        salary: 10_000,
        ..employee_draft("Low", "9000000001", "low@example.com")
    };
    let high = EmployeeDraft {
        salary: 500_000,
        ..employee_draft("High", "9000000002", "high@example.com")
    };
    assert!(usecase.execute(low).await.is_ok());
    assert!(usecase.execute(high).await.is_ok());

    for salary in [9_999, 500_001] {
        let draft = EmployeeDraft {
            salary,
            ..employee_draft("Out", "9000000003", "out@example.com")
        };
        let err = usecase.execute(draft).await.unwrap_err();
        assert!(field_failed(&err, "salary"), "expected salary failure, got {err:?}");
    }
    assert_eq!(repo.rows().len(), 2);
}

#[tokio::test]
async fn should_reject_bad_phone_and_short_name() {
    let repo = MockEmployeeRepo::empty();
    let usecase = create(&repo, &RecordingSink::new());

    let err = usecase
        .execute(employee_draft("Asha", "98-7654-3210", "a@example.com"))
        .await
        .unwrap_err();
    assert!(field_failed(&err, "phone_no"), "got {err:?}");

    let err = usecase
        .execute(employee_draft("A", "9876543210", "a@example.com"))
        .await
        .unwrap_err();
    assert!(field_failed(&err, "name"), "got {err:?}");
    assert!(repo.rows().is_empty());
}

#[tokio::test]
async fn should_reject_duplicate_phone_and_email() {
    let repo = MockEmployeeRepo::empty();
    let sink = RecordingSink::new();
    let usecase = create(&repo, &sink);
    usecase.execute(asha()).await.unwrap();

    let same_phone = usecase
        .execute(employee_draft("Ravi", "9998887777", "ravi@example.com"))
        .await;
    assert!(
        matches!(same_phone, Err(EmployeesServiceError::PhoneNoAlreadyExists)),
        "expected PhoneNoAlreadyExists, got {same_phone:?}"
    );

    let same_email = usecase
        .execute(employee_draft("Ravi", "9000000009", "asha@example.com"))
        .await;
    assert!(
        matches!(same_email, Err(EmployeesServiceError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {same_email:?}"
    );
    assert_eq!(repo.rows().len(), 1);
    assert_eq!(sink.jobs().len(), 1);
}

#[tokio::test]
async fn should_create_even_when_welcome_cannot_be_queued() {
    let repo = MockEmployeeRepo::empty();
    let employee = create(&repo, &RecordingSink::full())
        .execute(asha())
        .await
        .unwrap();
    assert_eq!(repo.rows(), vec![employee]);
}

#[tokio::test]
async fn should_report_exhausted_codes() {
    let repo = MockEmployeeRepo::with_sequence(99_999);
    let result = create(&repo, &RecordingSink::new()).execute(asha()).await;
    assert!(
        matches!(result, Err(EmployeesServiceError::EmployeeCodesExhausted)),
        "expected EmployeeCodesExhausted, got {result:?}"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_hand_out_distinct_codes_to_concurrent_creates() {
    const N: u32 = 16;
    let repo = MockEmployeeRepo::with_sequence(7);
    let sink = RecordingSink::new();

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let usecase = create(&repo, &sink);
            tokio::spawn(async move {
                let draft = employee_draft(
                    &format!("Racer {i}"),
                    &format!("90000001{i:02}"),
                    &format!("racer{i}@example.com"),
                );
                usecase.execute(draft).await
            })
        })
        .collect();

    let mut codes = Vec::new();
    for handle in handles {
        codes.push(handle.await.unwrap().unwrap().id.sequence());
    }
    codes.sort_unstable();
    assert_eq!(codes, (8..8 + N).collect::<Vec<_>>());
    assert_eq!(sink.jobs().len(), N as usize);

    let next = create(&repo, &sink)
        .execute(employee_draft("Late", "9000000299", "late@example.com"))
        .await
        .unwrap();
    assert_eq!(next.id.sequence(), 8 + N);
}

#[tokio::test]
async fn should_not_reuse_code_of_deleted_employee() {
    let repo = MockEmployeeRepo::empty();
    let sink = RecordingSink::new();
    let first = create(&repo, &sink).execute(asha()).await.unwrap();
    DeleteEmployeeUseCase { repo: repo.clone() }
        .execute(&first.id.to_string())
        .await
        .unwrap();

    // Phone and email are free again once the row is gone.
    let second = create(&repo, &sink).execute(asha()).await.unwrap();
    assert_eq!(second.id.to_string(), "M00002");
}

// ── Get / List / Search ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_by_code_and_treat_garbage_as_not_found() {
    let repo = MockEmployeeRepo::empty();
    let created = create(&repo, &RecordingSink::new())
        .execute(asha())
        .await
        .unwrap();
    let get = GetEmployeeUseCase { repo: repo.clone() };

    assert_eq!(get.execute("M00001").await.unwrap(), created);
    for id in ["M00002", "X00001", "M1", "garbage"] {
        let result = get.execute(id).await;
        assert!(
            matches!(result, Err(EmployeesServiceError::EmployeeNotFound)),
            "{id}: expected EmployeeNotFound, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_list_in_code_order_and_search() {
    let repo = MockEmployeeRepo::empty();
    let usecase = create(&repo, &RecordingSink::new());
    usecase.execute(asha()).await.unwrap();
    usecase
        .execute(EmployeeDraft {
            designation: "Designer".into(),
            is_active: false,
            ..employee_draft("Ravi", "9000000001", "ravi@example.com")
        })
        .await
        .unwrap();

    let all = ListEmployeesUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();
    let ids: Vec<String> = all.iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, ["M00001", "M00002"]);

    let search = SearchEmployeesUseCase { repo: repo.clone() };
    let inactive = search
        .execute(EmployeeFilter {
            is_active: Some(false),
            ..EmployeeFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].name, "Ravi");

    let engineers = search
        .execute(EmployeeFilter {
            designation: Some("Engineer".into()),
            ..EmployeeFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(engineers.len(), 1);
    assert_eq!(engineers[0].name, "Asha");
}

// ── ReplaceEmployeeUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_every_field_and_keep_code() {
    let repo = MockEmployeeRepo::empty();
    create(&repo, &RecordingSink::new())
        .execute(asha())
        .await
        .unwrap();

    let replacement = EmployeeDraft {
        designation: "Lead Engineer".into(),
        salary: 90_000,
        is_active: false,
        ..employee_draft("Asha K", "9998887777", "asha.k@example.com")
    };
    let updated = ReplaceEmployeeUseCase { repo: repo.clone() }
        .execute("M00001", replacement.clone())
        .await
        .unwrap();

    assert_eq!(updated.id.to_string(), "M00001");
    assert_eq!(updated.name, "Asha K");
    assert_eq!(updated.designation, "Lead Engineer");
    assert_eq!(updated.salary, 90_000);
    assert_eq!(updated.email, "asha.k@example.com");
    assert!(!updated.is_active);
}

#[tokio::test]
async fn should_reject_replace_taking_another_employees_email() {
    let repo = MockEmployeeRepo::empty();
    let usecase = create(&repo, &RecordingSink::new());
    usecase.execute(asha()).await.unwrap();
    usecase
        .execute(employee_draft("Ravi", "9000000001", "ravi@example.com"))
        .await
        .unwrap();

    let result = ReplaceEmployeeUseCase { repo: repo.clone() }
        .execute(
            "M00002",
            employee_draft("Ravi", "9000000001", "asha@example.com"),
        )
        .await;
    assert!(
        matches!(result, Err(EmployeesServiceError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_replace_missing_employee() {
    let result = ReplaceEmployeeUseCase {
        repo: MockEmployeeRepo::empty(),
    }
    .execute("M00042", asha())
    .await;
    assert!(matches!(result, Err(EmployeesServiceError::EmployeeNotFound)));
}

// ── DeleteEmployeeUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_once() {
    let repo = MockEmployeeRepo::empty();
    create(&repo, &RecordingSink::new())
        .execute(asha())
        .await
        .unwrap();
    let delete = DeleteEmployeeUseCase { repo: repo.clone() };

    delete.execute("M00001").await.unwrap();
    let again = delete.execute("M00001").await;
    assert!(matches!(again, Err(EmployeesServiceError::EmployeeNotFound)));
    assert!(repo.rows().is_empty());
}
