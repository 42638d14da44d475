//! `SeaORM` Entity for a recurring chore definition.
//!
//! The definition is the template; dated instances live in
//! `chore_occurrences` and are produced by the occurrence generator.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::Recurrence;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chore_definitions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    /// User id of the assignee. None (or empty) means the chore is
    /// available to anyone and its occurrences can be claimed.
    #[sea_orm(column_type = "Text", nullable)]
    pub assigned_to: Option<String>,

    pub recurrence: Recurrence,

    /// Points credited to the assignee when an occurrence is completed.
    pub points: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chore_occurrence::Entity")]
    ChoreOccurrence,
}

impl Related<super::chore_occurrence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChoreOccurrence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
