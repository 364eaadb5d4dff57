use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ApiClient")]
pub struct Model {
    /// Generated client id of the form `api_<random>-<YYYYMMDD>`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub username: String,

    pub description: Option<String>,

    /// Role string; one of the four supported values.
    pub scope: String,

    /// Base64-encoded 32-byte secret, stored as provisioned.
    pub signing_key: String,

    /// Assigned by the database at insert time (CURRENT_TIMESTAMP).
    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
