use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .string_len(6)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Employees::Designation)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::Salary)
                            .integer()
                            .not_null()
                            .check(Expr::col(Employees::Salary).between(10_000, 500_000)),
                    )
                    .col(ColumnDef::new(Employees::PhoneNo).string_len(15).not_null())
                    .col(ColumnDef::new(Employees::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Employees::Email).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Employees::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::PhoneNo)
                    .unique()
                    .name("idx_employees_phone_no_unique")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .unique()
                    .name("idx_employees_email_unique")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::IsActive)
                    .name("idx_employees_is_active")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Designation,
    Salary,
    PhoneNo,
    Address,
    Email,
    IsActive,
}
