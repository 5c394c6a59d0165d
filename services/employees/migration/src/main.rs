use sea_orm_migration::prelude::*;

use hrdesk_employees_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
