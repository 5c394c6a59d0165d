use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Codes are M00001..=M99999; NO CYCLE keeps deleted codes retired.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE SEQUENCE IF NOT EXISTS employee_code_seq \
                 START WITH 1 INCREMENT BY 1 MINVALUE 1 MAXVALUE 99999 NO CYCLE",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP SEQUENCE IF EXISTS employee_code_seq")
            .await?;
        Ok(())
    }
}
