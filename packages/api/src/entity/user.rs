//! `SeaORM` Entity for a household member.
//!
//! Point balances are never stored here; they are always derived from the
//! ledger at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    /// Accent color for dashboard views (hex string).
    #[sea_orm(column_type = "Text", nullable)]
    pub color: Option<String>,

    /// Emoji avatar.
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar: Option<String>,

    /// Optional profile image reference, stored verbatim.
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    pub is_parent: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::points_ledger_entry::Entity")]
    PointsLedgerEntry,
    #[sea_orm(has_many = "super::reward_redemption::Entity")]
    RewardRedemption,
}

impl Related<super::points_ledger_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointsLedgerEntry.def()
    }
}

impl Related<super::reward_redemption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RewardRedemption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
