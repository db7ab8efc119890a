use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    #[sea_orm(unique)]
    pub mobile_number: Option<String>,
    #[sea_orm(unique)]
    pub email: String,

    // Stored as given; never serialized into responses
    pub password: String,

    // Unix-second timestamps; deleted_at marks soft deletion
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
