//! Reward catalog and the redemption workflow.
//!
//! Redemption wraps the balance check, the ledger debit and the redemption
//! record in a single transaction so two simultaneous redemptions by the
//! same user cannot both pass the sufficiency check.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;

use crate::entity::{reward, reward_redemption, user};
use crate::services::{ServiceError, ServiceResult, points};

pub async fn list_rewards(
    db: &DatabaseConnection,
    active_only: bool,
) -> ServiceResult<Vec<reward::Model>> {
    let mut query = reward::Entity::find()
        .order_by_asc(reward::Column::CostPoints)
        .order_by_asc(reward::Column::Title);
    if active_only {
        query = query.filter(reward::Column::Active.eq(true));
    }
    Ok(query.all(db).await?)
}

pub async fn get_reward(db: &DatabaseConnection, reward_id: i32) -> ServiceResult<reward::Model> {
    reward::Entity::find_by_id(reward_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Reward {reward_id} not found")))
}

#[derive(Debug, Clone)]
pub struct RewardInput {
    pub title: String,
    pub cost_points: i64,
    pub emoji: Option<String>,
}

fn validate(input: &RewardInput) -> ServiceResult<String> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ServiceError::Validation("Title is required".into()));
    }
    if input.cost_points < 1 {
        return Err(ServiceError::Validation(
            "Cost must be a positive integer".into(),
        ));
    }
    Ok(title.to_string())
}

pub async fn create_reward(
    db: &DatabaseConnection,
    input: RewardInput,
) -> ServiceResult<reward::Model> {
    let title = validate(&input)?;
    Ok(reward::ActiveModel {
        title: Set(title),
        cost_points: Set(input.cost_points),
        emoji: Set(input.emoji),
        active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

/// Edits do not rewrite history: past redemptions carry their own copy of
/// the title and cost.
pub async fn update_reward(
    db: &DatabaseConnection,
    reward_id: i32,
    input: RewardInput,
) -> ServiceResult<reward::Model> {
    let title = validate(&input)?;
    let existing = get_reward(db, reward_id).await?;

    let mut active: reward::ActiveModel = existing.into();
    active.title = Set(title);
    active.cost_points = Set(input.cost_points);
    active.emoji = Set(input.emoji);
    Ok(active.update(db).await?)
}

/// Soft visibility toggle; inactive rewards disappear from the catalog but
/// stay referenced by redemption history.
pub async fn set_reward_active(
    db: &DatabaseConnection,
    reward_id: i32,
    active: bool,
) -> ServiceResult<reward::Model> {
    let existing = get_reward(db, reward_id).await?;
    let mut model: reward::ActiveModel = existing.into();
    model.active = Set(active);
    Ok(model.update(db).await?)
}

#[derive(Debug, Clone, Serialize)]
pub struct RedemptionOutcome {
    pub reward: reward::Model,
    pub new_balance: i64,
}

/// Exchange points for a reward: look up the reward, check the balance,
/// debit exactly the cost and record the redemption, all in one
/// transaction. The returned balance is computed arithmetically rather than
/// re-queried.
pub async fn redeem(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    user_id: &str,
    reward_id: i32,
) -> ServiceResult<RedemptionOutcome> {
    let txn = db.begin().await?;

    user::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))?;

    let reward = reward::Entity::find_by_id(reward_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Reward {reward_id} not found")))?;

    let balance = points::balance(&txn, user_id).await?;
    if balance < reward.cost_points {
        return Err(ServiceError::InsufficientBalance {
            balance,
            cost: reward.cost_points,
        });
    }

    let reason = format!("Redeemed: {}", reward.title);
    points::debit(&txn, user_id, reward.cost_points, &reason, now).await?;

    reward_redemption::ActiveModel {
        user_id: Set(user_id.to_string()),
        reward_id: Set(reward.id),
        reward_title: Set(reward.title.clone()),
        points_spent: Set(reward.cost_points),
        redeemed_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(user_id, reward_id, "Reward redeemed");

    let new_balance = balance - reward.cost_points;
    Ok(RedemptionOutcome {
        reward,
        new_balance,
    })
}

/// Redemption history, newest first, optionally for a single user.
pub async fn redemption_history(
    db: &DatabaseConnection,
    user_id: Option<&str>,
    limit: u64,
) -> ServiceResult<Vec<reward_redemption::Model>> {
    let mut query = reward_redemption::Entity::find()
        .order_by_desc(reward_redemption::Column::RedeemedAt)
        .order_by_desc(reward_redemption::Column::Id)
        .limit(limit);
    if let Some(user_id) = user_id {
        query = query.filter(reward_redemption::Column::UserId.eq(user_id));
    }
    Ok(query.all(db).await?)
}
