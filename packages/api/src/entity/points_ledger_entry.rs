//! `SeaORM` Entity for one signed movement in the points ledger.
//!
//! Append-only: rows are never updated or deleted in normal operation. A
//! user's balance is the sum of their entries, recomputed on every read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "points_ledger")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Stable surrogate user id. Display names are joined at read time so
    /// renaming a user never orphans history.
    #[sea_orm(column_type = "Text")]
    pub user_id: String,

    /// Signed delta: positive for credits, negative for debits.
    pub points: i64,

    #[sea_orm(column_type = "Text")]
    pub reason: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
