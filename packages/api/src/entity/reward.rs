//! `SeaORM` Entity for a redeemable reward.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rewards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    pub cost_points: i64,

    #[sea_orm(column_type = "Text", nullable)]
    pub emoji: Option<String>,

    /// Soft-delete visibility toggle. Inactive rewards stay referenced by
    /// past redemptions.
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reward_redemption::Entity")]
    RewardRedemption,
}

impl Related<super::reward_redemption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RewardRedemption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
