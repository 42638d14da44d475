//! Append-only points ledger and household member accounts.
//!
//! `credit` and `debit` are unconditional primitives; sufficiency policy
//! lives in the redemption workflow. Balances are summed from the ledger on
//! every read so there is no cached value to reconcile.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;

use crate::entity::{points_ledger_entry, reward_redemption, user};
use crate::services::{ServiceError, ServiceResult};
use crate::state::Features;

fn validate_amount(amount: i64) -> ServiceResult<()> {
    if amount < 1 {
        return Err(ServiceError::Validation(
            "Point amount must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// Append a positive entry. A no-op (not an error) when the points feature
/// is disabled: chores still complete, nothing is written.
pub async fn credit<C: ConnectionTrait>(
    conn: &C,
    features: &Features,
    user_id: &str,
    amount: i64,
    reason: &str,
    now: DateTime<Utc>,
) -> ServiceResult<()> {
    validate_amount(amount)?;
    if !features.points_enabled {
        return Ok(());
    }

    points_ledger_entry::ActiveModel {
        user_id: Set(user_id.to_string()),
        points: Set(amount),
        reason: Set(reason.to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(())
}

/// Append a negative entry. Does not check sufficiency; see the redemption
/// workflow for the balance policy.
pub async fn debit<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    amount: i64,
    reason: &str,
    now: DateTime<Utc>,
) -> ServiceResult<()> {
    validate_amount(amount)?;

    points_ledger_entry::ActiveModel {
        user_id: Set(user_id.to_string()),
        points: Set(-amount),
        reason: Set(reason.to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(())
}

/// Sum of all ledger entries for a user; 0 when there are none.
pub async fn balance<C: ConnectionTrait>(conn: &C, user_id: &str) -> ServiceResult<i64> {
    let sum: Option<Option<i64>> = points_ledger_entry::Entity::find()
        .select_only()
        .column_as(points_ledger_entry::Column::Points.sum(), "balance")
        .filter(points_ledger_entry::Column::UserId.eq(user_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(sum.flatten().unwrap_or(0))
}

/// Ledger entries for a user, newest first.
pub async fn history(
    db: &DatabaseConnection,
    user_id: &str,
    limit: u64,
) -> ServiceResult<Vec<points_ledger_entry::Model>> {
    Ok(points_ledger_entry::Entity::find()
        .filter(points_ledger_entry::Column::UserId.eq(user_id))
        .order_by_desc(points_ledger_entry::Column::CreatedAt)
        .order_by_desc(points_ledger_entry::Column::Id)
        .limit(limit)
        .all(db)
        .await?)
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub avatar: Option<String>,
    pub image_url: Option<String>,
    pub is_parent: bool,
    pub balance: i64,
}

/// All users with their derived balances, highest first.
pub async fn leaderboard(db: &DatabaseConnection) -> ServiceResult<Vec<LeaderboardRow>> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Name)
        .all(db)
        .await?;

    let sums: Vec<(String, Option<i64>)> = points_ledger_entry::Entity::find()
        .select_only()
        .column(points_ledger_entry::Column::UserId)
        .column_as(points_ledger_entry::Column::Points.sum(), "balance")
        .group_by(points_ledger_entry::Column::UserId)
        .into_tuple()
        .all(db)
        .await?;

    let mut rows: Vec<LeaderboardRow> = users
        .into_iter()
        .map(|u| {
            let balance = sums
                .iter()
                .find(|(user_id, _)| user_id == &u.id)
                .and_then(|(_, sum)| *sum)
                .unwrap_or(0);
            LeaderboardRow {
                id: u.id,
                name: u.name,
                color: u.color,
                avatar: u.avatar,
                image_url: u.image_url,
                is_parent: u.is_parent,
                balance,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.balance.cmp(&a.balance).then_with(|| a.name.cmp(&b.name)));
    Ok(rows)
}

pub async fn list_users(db: &DatabaseConnection) -> ServiceResult<Vec<user::Model>> {
    Ok(user::Entity::find()
        .order_by_asc(user::Column::Name)
        .all(db)
        .await?)
}

pub async fn get_user(db: &DatabaseConnection, user_id: &str) -> ServiceResult<user::Model> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub color: Option<String>,
    pub avatar: Option<String>,
    pub image_url: Option<String>,
    pub is_parent: bool,
}

fn slug_from_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

pub async fn create_user(db: &DatabaseConnection, input: NewUser) -> ServiceResult<user::Model> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(ServiceError::Validation("Name is required".into()));
    }

    let id = slug_from_name(&name);
    if user::Entity::find_by_id(&id).one(db).await?.is_some() {
        return Err(ServiceError::Validation(format!(
            "A user named {name} already exists"
        )));
    }

    Ok(user::ActiveModel {
        id: Set(id),
        name: Set(name),
        color: Set(input.color),
        avatar: Set(input.avatar),
        image_url: Set(input.image_url),
        is_parent: Set(input.is_parent),
    }
    .insert(db)
    .await?)
}

/// Update a user's display fields. Ledger and redemption history reference
/// the surrogate id, so a rename never detaches past entries.
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: &str,
    input: NewUser,
) -> ServiceResult<user::Model> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(ServiceError::Validation("Name is required".into()));
    }

    let existing = get_user(db, user_id).await?;
    let mut active: user::ActiveModel = existing.into();
    active.name = Set(name);
    active.color = Set(input.color);
    active.avatar = Set(input.avatar);
    active.image_url = Set(input.image_url);
    active.is_parent = Set(input.is_parent);
    Ok(active.update(db).await?)
}

/// Remove a user along with their ledger entries and redemption history, in
/// one transaction. The history rows reference the user row, so they go
/// first.
pub async fn delete_user(db: &DatabaseConnection, user_id: &str) -> ServiceResult<()> {
    let txn = db.begin().await?;

    points_ledger_entry::Entity::delete_many()
        .filter(points_ledger_entry::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    reward_redemption::Entity::delete_many()
        .filter(reward_redemption::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;

    let res = user::Entity::delete_by_id(user_id).exec(&txn).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("User {user_id} not found")));
    }

    txn.commit().await?;
    tracing::info!(user_id, "Deleted user and their history");
    Ok(())
}
