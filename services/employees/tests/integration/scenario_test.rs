use hrdesk_domain::employee::EmployeeDraft;
use hrdesk_testing::fixture::{admin_draft, asha};

use hrdesk_employees::error::EmployeesServiceError;
use hrdesk_employees::usecase::admin::RegisterAdminUseCase;
use hrdesk_employees::usecase::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase, ListEmployeesUseCase,
    ReplaceEmployeeUseCase,
};
use hrdesk_employees::usecase::token::{
    AuthorizeAdminUseCase, CreateTokenInput, CreateTokenUseCase,
};

use crate::helpers::{
    MockAdminRepo, MockEmployeeRepo, RecordingSink, TEST_BCRYPT_COST, TEST_JWT_SECRET,
};

fn is_employee_code(id: &str) -> bool {
    id.len() == 6 && id.starts_with('M') && id[1..].bytes().all(|b| b.is_ascii_digit())
}

#[tokio::test]
async fn should_run_admin_and_employee_lifecycle() {
    let admins = MockAdminRepo::empty();
    let employees = MockEmployeeRepo::empty();
    let sink = RecordingSink::new();

    RegisterAdminUseCase {
        repo: admins.clone(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
    .execute(admin_draft())
    .await
    .unwrap();

    let token = CreateTokenUseCase {
        repo: admins.clone(),
        jwt_secret: TEST_JWT_SECRET.into(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
    .execute(CreateTokenInput {
        username: "mayur".into(),
        password: "secret1".into(),
    })
    .await
    .unwrap()
    .access_token;

    let admin = AuthorizeAdminUseCase {
        repo: admins.clone(),
        jwt_secret: TEST_JWT_SECRET.into(),
    }
    .execute(Some(&token))
    .await
    .unwrap();
    assert_eq!(admin.name, "mayur");

    let created = CreateEmployeeUseCase {
        repo: employees.clone(),
        notifier: sink.clone(),
    }
    .execute(asha())
    .await
    .unwrap();
    let id = created.id.to_string();
    assert!(is_employee_code(&id), "unexpected code {id}");
    assert_eq!(sink.jobs().len(), 1);

    let listed = ListEmployeesUseCase {
        repo: employees.clone(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let replaced = ReplaceEmployeeUseCase {
        repo: employees.clone(),
    }
    .execute(
        &id,
        EmployeeDraft {
            salary: 75_000,
            ..asha()
        },
    )
    .await
    .unwrap();
    assert_eq!(replaced.salary, 75_000);

    DeleteEmployeeUseCase {
        repo: employees.clone(),
    }
    .execute(&id)
    .await
    .unwrap();

    let gone = GetEmployeeUseCase {
        repo: employees.clone(),
    }
    .execute(&id)
    .await;
    assert!(matches!(gone, Err(EmployeesServiceError::EmployeeNotFound)));
}
