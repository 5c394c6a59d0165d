use sea_orm_migration::prelude::*;

mod m20260301_000001_create_admins;
mod m20260301_000002_create_employees;
mod m20260301_000003_create_employee_code_seq;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_admins::Migration),
            Box::new(m20260301_000002_create_employees::Migration),
            Box::new(m20260301_000003_create_employee_code_seq::Migration),
        ]
    }
}
