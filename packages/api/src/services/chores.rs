//! Chore definitions, occurrence generation and the occurrence lifecycle.
//!
//! A definition's recurrence rule is expanded into dated pending
//! occurrences over a fixed 30-day horizon. Occurrences transition exactly
//! once, pending → completed or pending → ignored, and are never re-opened.
//! Completion credits the assignee through the points ledger.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::Expr,
};
use serde::Serialize;
use uuid::Uuid;

use crate::entity::sea_orm_active_enums::{OccurrenceStatus, Recurrence};
use crate::entity::{chore_definition, chore_occurrence, chore_template, user};
use crate::services::{ServiceError, ServiceResult, points};
use crate::state::Features;

/// Fixed generation horizon. The dashboard's "next two weeks" views are
/// built on this data volume; do not make it configurable per call.
pub const WINDOW_DAYS: u32 = 30;

fn rule_matches(rule: Recurrence, weekday: Weekday) -> bool {
    match rule {
        Recurrence::Daily => true,
        Recurrence::Weekdays => !matches!(weekday, Weekday::Sat | Weekday::Sun),
        Recurrence::Weekends => matches!(weekday, Weekday::Sat | Weekday::Sun),
        // Sunday through Thursday; Friday and Saturday are free.
        Recurrence::SchoolWeek => !matches!(weekday, Weekday::Fri | Weekday::Sat),
        Recurrence::AdHoc => false,
    }
}

/// Expand a recurrence rule into the due dates inside
/// `[window_start, window_start + window_days)`. Ad-hoc rules yield exactly
/// the start date: a one-off task, not a schedule.
pub fn occurrence_dates(
    rule: Recurrence,
    window_start: NaiveDate,
    window_days: u32,
) -> Vec<NaiveDate> {
    if rule == Recurrence::AdHoc {
        return vec![window_start];
    }

    (0..window_days)
        .filter_map(|offset| window_start.checked_add_days(Days::new(offset as u64)))
        .filter(|d| rule_matches(rule, d.weekday()))
        .collect()
}

/// Insert pending occurrences for a definition starting at `window_start`.
/// The batch goes in with the caller's transaction, so a generation call is
/// all-or-nothing.
pub async fn generate_occurrences<C: ConnectionTrait>(
    conn: &C,
    definition: &chore_definition::Model,
    window_start: NaiveDate,
) -> ServiceResult<u64> {
    let dates = occurrence_dates(definition.recurrence, window_start, WINDOW_DAYS);
    if dates.is_empty() {
        return Ok(0);
    }

    let count = dates.len() as u64;
    let models = dates.into_iter().map(|due_date| chore_occurrence::ActiveModel {
        definition_id: Set(definition.id.clone()),
        due_date: Set(due_date),
        status: Set(OccurrenceStatus::Pending),
        completed_at: Set(None),
        ignored_at: Set(None),
        claimed_by: Set(None),
        ..Default::default()
    });

    chore_occurrence::Entity::insert_many(models).exec(conn).await?;
    tracing::info!(
        definition_id = %definition.id,
        occurrences = count,
        "Generated chore occurrences"
    );
    Ok(count)
}

#[derive(Debug, Clone)]
pub struct NewDefinition {
    pub title: String,
    pub assigned_to: Option<String>,
    pub recurrence: Recurrence,
    pub points: i64,
}

#[derive(Debug, Clone)]
pub struct DefinitionUpdate {
    pub title: String,
    pub assigned_to: Option<String>,
    pub recurrence: Recurrence,
    pub points: i64,
}

fn validate_title(title: &str) -> ServiceResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::Validation("Title is required".into()));
    }
    Ok(title.to_string())
}

fn validate_points(points: i64) -> ServiceResult<()> {
    if points < 1 {
        return Err(ServiceError::Validation(
            "Points must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// Create a definition and generate its first occurrence window from
/// `today`, in one transaction.
pub async fn create_definition(
    db: &DatabaseConnection,
    today: NaiveDate,
    input: NewDefinition,
) -> ServiceResult<chore_definition::Model> {
    let title = validate_title(&input.title)?;
    validate_points(input.points)?;

    let assigned_to = input
        .assigned_to
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    let txn = db.begin().await?;

    if let Some(user_id) = assigned_to.as_deref() {
        user::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))?;
    }

    let definition = chore_definition::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(title),
        assigned_to: Set(assigned_to),
        recurrence: Set(input.recurrence),
        points: Set(input.points),
    }
    .insert(&txn)
    .await?;

    generate_occurrences(&txn, &definition, today).await?;
    txn.commit().await?;

    Ok(definition)
}

/// Edit a definition and regenerate its schedule from `today`. Only future
/// pending occurrences are replaced; past and resolved rows are history and
/// stay untouched.
pub async fn update_definition(
    db: &DatabaseConnection,
    today: NaiveDate,
    definition_id: &str,
    input: DefinitionUpdate,
) -> ServiceResult<chore_definition::Model> {
    let title = validate_title(&input.title)?;
    validate_points(input.points)?;

    let assigned_to = input
        .assigned_to
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    let txn = db.begin().await?;

    if let Some(user_id) = assigned_to.as_deref() {
        user::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))?;
    }

    let existing = chore_definition::Entity::find_by_id(definition_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Chore {definition_id} not found")))?;

    let mut active: chore_definition::ActiveModel = existing.into();
    active.title = Set(title);
    active.assigned_to = Set(assigned_to);
    active.recurrence = Set(input.recurrence);
    active.points = Set(input.points);
    let definition = active.update(&txn).await?;

    chore_occurrence::Entity::delete_many()
        .filter(chore_occurrence::Column::DefinitionId.eq(definition_id))
        .filter(chore_occurrence::Column::DueDate.gte(today))
        .filter(chore_occurrence::Column::Status.eq(OccurrenceStatus::Pending))
        .exec(&txn)
        .await?;

    generate_occurrences(&txn, &definition, today).await?;
    txn.commit().await?;

    Ok(definition)
}

/// Delete a definition and all of its occurrences, regardless of status.
pub async fn delete_definition(db: &DatabaseConnection, definition_id: &str) -> ServiceResult<()> {
    let txn = db.begin().await?;

    chore_occurrence::Entity::delete_many()
        .filter(chore_occurrence::Column::DefinitionId.eq(definition_id))
        .exec(&txn)
        .await?;

    let res = chore_definition::Entity::delete_by_id(definition_id)
        .exec(&txn)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!(
            "Chore {definition_id} not found"
        )));
    }

    txn.commit().await?;
    tracing::info!(definition_id, "Deleted chore definition and its occurrences");
    Ok(())
}

pub async fn get_definition(
    db: &DatabaseConnection,
    definition_id: &str,
) -> ServiceResult<chore_definition::Model> {
    chore_definition::Entity::find_by_id(definition_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Chore {definition_id} not found")))
}

pub async fn list_definitions(
    db: &DatabaseConnection,
) -> ServiceResult<Vec<chore_definition::Model>> {
    Ok(chore_definition::Entity::find()
        .order_by_asc(chore_definition::Column::Title)
        .all(db)
        .await?)
}

pub async fn definitions_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> ServiceResult<Vec<chore_definition::Model>> {
    Ok(chore_definition::Entity::find()
        .filter(chore_definition::Column::AssignedTo.eq(user_id))
        .order_by_asc(chore_definition::Column::Title)
        .all(db)
        .await?)
}

fn unassigned_condition() -> Condition {
    Condition::any()
        .add(chore_definition::Column::AssignedTo.is_null())
        .add(chore_definition::Column::AssignedTo.eq(""))
}

/// Definitions open to anyone (the ad-hoc board in the admin panel).
pub async fn unassigned_definitions(
    db: &DatabaseConnection,
) -> ServiceResult<Vec<chore_definition::Model>> {
    Ok(chore_definition::Entity::find()
        .filter(unassigned_condition())
        .order_by_asc(chore_definition::Column::Title)
        .all(db)
        .await?)
}

/// Occurrence joined with its definition, the shape every chore view reads.
#[derive(Debug, Clone, Serialize)]
pub struct ChoreRow {
    pub id: i32,
    pub definition_id: String,
    pub title: String,
    pub assigned_to: Option<String>,
    pub due_date: NaiveDate,
    pub status: OccurrenceStatus,
    pub points: i64,
    pub completed_at: Option<DateTime<Utc>>,
    pub ignored_at: Option<DateTime<Utc>>,
    pub claimed_by: Option<String>,
}

impl ChoreRow {
    fn from_pair(
        occurrence: chore_occurrence::Model,
        definition: chore_definition::Model,
    ) -> Self {
        Self {
            id: occurrence.id,
            definition_id: occurrence.definition_id,
            title: definition.title,
            assigned_to: definition.assigned_to,
            due_date: occurrence.due_date,
            status: occurrence.status,
            points: definition.points,
            completed_at: occurrence.completed_at,
            ignored_at: occurrence.ignored_at,
            claimed_by: occurrence.claimed_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChoreFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub include_completed: bool,
    pub limit: Option<u64>,
}

impl Default for ChoreFilter {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            include_completed: true,
            limit: None,
        }
    }
}

pub async fn fetch_chores(
    db: &DatabaseConnection,
    filter: ChoreFilter,
) -> ServiceResult<Vec<ChoreRow>> {
    let mut query = chore_occurrence::Entity::find()
        .find_also_related(chore_definition::Entity)
        .order_by_asc(chore_occurrence::Column::DueDate);

    if !filter.include_completed {
        query = query.filter(chore_occurrence::Column::Status.eq(OccurrenceStatus::Pending));
    }
    if let Some(start) = filter.start {
        query = query.filter(chore_occurrence::Column::DueDate.gte(start));
    }
    if let Some(end) = filter.end {
        query = query.filter(chore_occurrence::Column::DueDate.lte(end));
    }
    if let Some(limit) = filter.limit {
        query = query.limit(limit);
    }

    let rows = query.all(db).await?;
    Ok(rows
        .into_iter()
        .filter_map(|(occurrence, definition)| {
            definition.map(|d| ChoreRow::from_pair(occurrence, d))
        })
        .collect())
}

/// Pending occurrences of unassigned definitions that nobody has claimed.
pub async fn available_chores(
    db: &DatabaseConnection,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ServiceResult<Vec<ChoreRow>> {
    let mut query = chore_occurrence::Entity::find()
        .find_also_related(chore_definition::Entity)
        .filter(chore_occurrence::Column::Status.eq(OccurrenceStatus::Pending))
        .filter(chore_occurrence::Column::ClaimedBy.is_null())
        .filter(unassigned_condition())
        .order_by_asc(chore_occurrence::Column::DueDate);

    if let Some(start) = start {
        query = query.filter(chore_occurrence::Column::DueDate.gte(start));
    }
    if let Some(end) = end {
        query = query.filter(chore_occurrence::Column::DueDate.lte(end));
    }

    let rows = query.all(db).await?;
    Ok(rows
        .into_iter()
        .filter_map(|(occurrence, definition)| {
            definition.map(|d| ChoreRow::from_pair(occurrence, d))
        })
        .collect())
}

async fn load_pending<C: ConnectionTrait>(
    conn: &C,
    occurrence_id: i32,
) -> ServiceResult<(chore_occurrence::Model, chore_definition::Model)> {
    let (occurrence, definition) = chore_occurrence::Entity::find_by_id(occurrence_id)
        .find_also_related(chore_definition::Entity)
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Chore occurrence {occurrence_id} not found"))
        })?;

    let definition = definition.ok_or_else(|| {
        ServiceError::NotFound(format!(
            "Definition for occurrence {occurrence_id} not found"
        ))
    })?;

    if occurrence.status != OccurrenceStatus::Pending {
        return Err(ServiceError::Validation(
            "Chore occurrence is already resolved".into(),
        ));
    }

    Ok((occurrence, definition))
}

/// Mark an occurrence completed and credit the assignee (or the claimant
/// for a claimed unassigned chore). No assignee means the chore completes
/// without a ledger write; that is not an error.
pub async fn complete_occurrence(
    db: &DatabaseConnection,
    features: &Features,
    now: DateTime<Utc>,
    occurrence_id: i32,
) -> ServiceResult<ChoreRow> {
    let txn = db.begin().await?;
    let (occurrence, definition) = load_pending(&txn, occurrence_id).await?;

    let mut active: chore_occurrence::ActiveModel = occurrence.into();
    active.status = Set(OccurrenceStatus::Completed);
    active.completed_at = Set(Some(now));
    let updated = active.update(&txn).await?;

    let recipient = definition
        .assigned_to
        .as_deref()
        .filter(|a| !a.is_empty())
        .or_else(|| updated.claimed_by.as_deref());

    if let Some(user_id) = recipient {
        let reason = format!("Completed: {}", definition.title);
        points::credit(&txn, features, user_id, definition.points, &reason, now).await?;
    }

    txn.commit().await?;
    tracing::info!(occurrence_id, "Chore occurrence completed");
    Ok(ChoreRow::from_pair(updated, definition))
}

/// Mark an occurrence ignored. Never credits points.
pub async fn ignore_occurrence(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    occurrence_id: i32,
) -> ServiceResult<ChoreRow> {
    let txn = db.begin().await?;
    let (occurrence, definition) = load_pending(&txn, occurrence_id).await?;

    let mut active: chore_occurrence::ActiveModel = occurrence.into();
    active.status = Set(OccurrenceStatus::Ignored);
    active.ignored_at = Set(Some(now));
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(occurrence_id, "Chore occurrence ignored");
    Ok(ChoreRow::from_pair(updated, definition))
}

/// Record who picked up a single occurrence of an unassigned chore. The
/// definition itself stays open for future occurrences.
pub async fn claim_occurrence(
    db: &DatabaseConnection,
    occurrence_id: i32,
    user_id: &str,
) -> ServiceResult<ChoreRow> {
    let txn = db.begin().await?;

    user::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))?;

    let (occurrence, definition) = load_pending(&txn, occurrence_id).await?;

    if definition
        .assigned_to
        .as_deref()
        .is_some_and(|a| !a.is_empty())
    {
        return Err(ServiceError::Validation(
            "This chore is already assigned".into(),
        ));
    }
    if occurrence.claimed_by.is_some() {
        return Err(ServiceError::Validation(
            "This chore has already been claimed".into(),
        ));
    }

    let mut active: chore_occurrence::ActiveModel = occurrence.into();
    active.claimed_by = Set(Some(user_id.to_string()));
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(occurrence_id, user_id, "Chore occurrence claimed");
    Ok(ChoreRow::from_pair(updated, definition))
}

/// Ignore every pending occurrence dated before `today`. Idempotent: a
/// second run on the same day finds no eligible rows. Missed chores never
/// earn points retroactively.
pub async fn sweep(
    db: &DatabaseConnection,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> ServiceResult<u64> {
    let res = chore_occurrence::Entity::update_many()
        .col_expr(
            chore_occurrence::Column::Status,
            Expr::value(OccurrenceStatus::Ignored),
        )
        .col_expr(chore_occurrence::Column::IgnoredAt, Expr::value(Some(now)))
        .filter(chore_occurrence::Column::DueDate.lt(today))
        .filter(chore_occurrence::Column::Status.eq(OccurrenceStatus::Pending))
        .exec(db)
        .await?;

    if res.rows_affected > 0 {
        tracing::info!(swept = res.rows_affected, "Auto-ignored overdue chores");
    }
    Ok(res.rows_affected)
}

pub async fn list_templates(
    db: &DatabaseConnection,
    active_only: bool,
) -> ServiceResult<Vec<chore_template::Model>> {
    let mut query = chore_template::Entity::find()
        .order_by_asc(chore_template::Column::Category)
        .order_by_asc(chore_template::Column::Name);
    if active_only {
        query = query.filter(chore_template::Column::IsActive.eq(true));
    }
    Ok(query.all(db).await?)
}

pub async fn template_categories(db: &DatabaseConnection) -> ServiceResult<Vec<String>> {
    Ok(chore_template::Entity::find()
        .select_only()
        .column(chore_template::Column::Category)
        .filter(chore_template::Column::IsActive.eq(true))
        .distinct()
        .order_by_asc(chore_template::Column::Category)
        .into_tuple::<String>()
        .all(db)
        .await?)
}

pub async fn create_template(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
) -> ServiceResult<chore_template::Model> {
    let name = validate_title(name)?;
    let category = category.trim();
    if category.is_empty() {
        return Err(ServiceError::Validation("Category is required".into()));
    }

    Ok(chore_template::ActiveModel {
        name: Set(name),
        category: Set(category.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_fills_the_whole_window() {
        let dates = occurrence_dates(Recurrence::Daily, date(2024, 1, 1), 30);
        assert_eq!(dates.len(), 30);
        assert_eq!(dates.first(), Some(&date(2024, 1, 1)));
        assert_eq!(dates.last(), Some(&date(2024, 1, 30)));
    }

    #[test]
    fn ad_hoc_emits_exactly_the_start_date() {
        let dates = occurrence_dates(Recurrence::AdHoc, date(2024, 1, 15), 30);
        assert_eq!(dates, vec![date(2024, 1, 15)]);
    }

    #[test]
    fn weekdays_skip_saturday_and_sunday() {
        // 2024-01-01 is a Monday.
        let dates = occurrence_dates(Recurrence::Weekdays, date(2024, 1, 1), 7);
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 3),
                date(2024, 1, 4),
                date(2024, 1, 5),
            ]
        );
    }

    #[test]
    fn weekends_keep_only_saturday_and_sunday() {
        let dates = occurrence_dates(Recurrence::Weekends, date(2024, 1, 1), 7);
        assert_eq!(dates, vec![date(2024, 1, 6), date(2024, 1, 7)]);
    }

    #[test]
    fn school_week_starting_friday_begins_on_sunday() {
        // 2024-01-05 is a Friday; neither it nor Saturday qualifies.
        let dates = occurrence_dates(Recurrence::SchoolWeek, date(2024, 1, 5), 7);
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 7),
                date(2024, 1, 8),
                date(2024, 1, 9),
                date(2024, 1, 10),
                date(2024, 1, 11),
            ]
        );
    }

    #[test]
    fn every_rule_matches_only_its_day_set() {
        let start = date(2024, 1, 1);
        for offset in 0..14u64 {
            let d = start.checked_add_days(Days::new(offset)).unwrap();
            let wd = d.weekday();
            assert_eq!(
                occurrence_dates(Recurrence::Daily, d, 1).len(),
                1,
                "daily on {d}"
            );
            assert_eq!(
                occurrence_dates(Recurrence::Weekdays, d, 1).is_empty(),
                matches!(wd, Weekday::Sat | Weekday::Sun),
                "weekdays on {d}"
            );
            assert_eq!(
                occurrence_dates(Recurrence::Weekends, d, 1).is_empty(),
                !matches!(wd, Weekday::Sat | Weekday::Sun),
                "weekends on {d}"
            );
            assert_eq!(
                occurrence_dates(Recurrence::SchoolWeek, d, 1).is_empty(),
                matches!(wd, Weekday::Fri | Weekday::Sat),
                "school-week on {d}"
            );
        }
    }
}
