use sea_orm::entity::prelude::*;

/// Employee record. `id` is the formatted employee code (`M00001`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub designation: String,
    pub salary: i32,
    #[sea_orm(unique)]
    pub phone_no: String,
    pub address: String,
    #[sea_orm(unique)]
    pub email: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
