//! Users table.
//!
//! Rows are provisioned outside this system; the engine only reads them.

use sea_orm::entity::prelude::*;

/// A person who can be scanned into events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub net_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub net_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scans::Entity")]
    Scans,
}

impl Related<super::scans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            net_id: model.net_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}
