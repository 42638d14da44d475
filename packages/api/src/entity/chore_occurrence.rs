//! `SeaORM` Entity for a dated chore occurrence.
//!
//! Invariant: once the status leaves `pending`, exactly one of
//! `completed_at` / `ignored_at` is set and the row is never re-opened.
//! `due_date` is immutable after creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::OccurrenceStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chore_occurrences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub definition_id: String,

    /// Calendar date, no time component.
    pub due_date: Date,

    pub status: OccurrenceStatus,

    #[sea_orm(nullable)]
    pub completed_at: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub ignored_at: Option<DateTimeUtc>,

    /// User id that claimed this occurrence of an unassigned chore.
    #[sea_orm(column_type = "Text", nullable)]
    pub claimed_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chore_definition::Entity",
        from = "Column::DefinitionId",
        to = "super::chore_definition::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ChoreDefinition,
}

impl Related<super::chore_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChoreDefinition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
