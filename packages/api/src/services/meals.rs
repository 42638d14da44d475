//! Meal plan CRUD and weekly recurring creation.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::entity::meal;
use crate::services::{ServiceError, ServiceResult};

pub const DEFAULT_MEAL_TYPE: &str = "dinner";

#[derive(Debug, Clone)]
pub struct MealInput {
    pub title: String,
    pub date: NaiveDate,
    pub meal_type: Option<String>,
    pub description: Option<String>,
}

fn validate_title(title: &str) -> ServiceResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::Validation("Title is required".into()));
    }
    Ok(title.to_string())
}

pub async fn create_meal(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    input: MealInput,
) -> ServiceResult<meal::Model> {
    let title = validate_title(&input.title)?;

    Ok(meal::ActiveModel {
        title: Set(title),
        date: Set(input.date),
        meal_type: Set(input
            .meal_type
            .unwrap_or_else(|| DEFAULT_MEAL_TYPE.to_string())),
        description: Set(input.description),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

pub async fn get_meal(db: &DatabaseConnection, meal_id: i32) -> ServiceResult<meal::Model> {
    meal::Entity::find_by_id(meal_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Meal {meal_id} not found")))
}

pub async fn update_meal(
    db: &DatabaseConnection,
    meal_id: i32,
    input: MealInput,
) -> ServiceResult<meal::Model> {
    let title = validate_title(&input.title)?;
    let existing = get_meal(db, meal_id).await?;

    let mut active: meal::ActiveModel = existing.into();
    active.title = Set(title);
    active.date = Set(input.date);
    if let Some(meal_type) = input.meal_type {
        active.meal_type = Set(meal_type);
    }
    active.description = Set(input.description);
    Ok(active.update(db).await?)
}

pub async fn delete_meal(db: &DatabaseConnection, meal_id: i32) -> ServiceResult<()> {
    let res = meal::Entity::delete_by_id(meal_id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("Meal {meal_id} not found")));
    }
    Ok(())
}

/// Meals inside a date range, ascending.
pub async fn fetch_meals(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> ServiceResult<Vec<meal::Model>> {
    Ok(meal::Entity::find()
        .filter(meal::Column::Date.gte(start))
        .filter(meal::Column::Date.lte(end))
        .order_by_asc(meal::Column::Date)
        .all(db)
        .await?)
}

pub async fn upcoming_meals(
    db: &DatabaseConnection,
    today: NaiveDate,
    limit: u64,
) -> ServiceResult<Vec<meal::Model>> {
    Ok(meal::Entity::find()
        .filter(meal::Column::Date.gte(today))
        .order_by_asc(meal::Column::Date)
        .limit(limit)
        .all(db)
        .await?)
}

pub async fn past_meals(
    db: &DatabaseConnection,
    today: NaiveDate,
    limit: u64,
) -> ServiceResult<Vec<meal::Model>> {
    Ok(meal::Entity::find()
        .filter(meal::Column::Date.lt(today))
        .order_by_desc(meal::Column::Date)
        .limit(limit)
        .all(db)
        .await?)
}

#[derive(Debug, Clone)]
pub struct RecurringMealInput {
    pub title: String,
    pub start_date: NaiveDate,
    /// Target weekday, 1 = Monday … 7 = Sunday.
    pub day_of_week: u32,
    pub weeks: u32,
    pub meal_type: Option<String>,
    pub description: Option<String>,
}

/// Create the same meal weekly on a chosen weekday, starting with the first
/// matching date on or after `start_date`. Returns the number created.
pub async fn create_recurring_meals(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    input: RecurringMealInput,
) -> ServiceResult<u32> {
    let title = validate_title(&input.title)?;
    let weekday = match input.day_of_week {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        other => {
            return Err(ServiceError::Validation(format!(
                "Day of week must be 1-7, got {other}"
            )));
        }
    };
    if input.weeks < 1 || input.weeks > 52 {
        return Err(ServiceError::Validation(
            "Weeks must be between 1 and 52".into(),
        ));
    }

    let offset = weekday.num_days_from_monday() as i64
        - input.start_date.weekday().num_days_from_monday() as i64;
    let mut date = input
        .start_date
        .checked_add_days(Days::new(offset.rem_euclid(7) as u64))
        .ok_or_else(|| ServiceError::Validation("Start date out of range".into()))?;

    let meal_type = input
        .meal_type
        .unwrap_or_else(|| DEFAULT_MEAL_TYPE.to_string());

    // The batch is all-or-nothing.
    let txn = db.begin().await?;
    let mut count = 0;
    for _ in 0..input.weeks {
        meal::ActiveModel {
            title: Set(title.clone()),
            date: Set(date),
            meal_type: Set(meal_type.clone()),
            description: Set(input.description.clone()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        count += 1;

        date = match date.checked_add_days(Days::new(7)) {
            Some(next) => next,
            None => break,
        };
    }
    txn.commit().await?;

    tracing::info!(count, "Created recurring meals");
    Ok(count)
}
