use chrono::{DateTime, Days, NaiveDate, Utc};
use homeboard_api::db;
use homeboard_api::entity::sea_orm_active_enums::{OccurrenceStatus, Recurrence};
use homeboard_api::sea_orm::{Database, DatabaseConnection};
use homeboard_api::services::{
    ServiceError, chores,
    chores::{ChoreFilter, DefinitionUpdate, NewDefinition},
    points,
};
use homeboard_api::state::Features;

async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db::init_schema(&db).await.unwrap();
    db::seed_defaults(&db).await.unwrap();
    db
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc()
}

async fn daily_chore(db: &DatabaseConnection, today: NaiveDate, points: i64) -> String {
    chores::create_definition(
        db,
        today,
        NewDefinition {
            title: "Feed the dog".into(),
            assigned_to: Some("alice".into()),
            recurrence: Recurrence::Daily,
            points,
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn daily_definition_generates_thirty_occurrences() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    daily_chore(&db, today, 2).await;

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    assert_eq!(rows.len(), 30);
    assert_eq!(rows.first().unwrap().due_date, today);
    assert_eq!(rows.last().unwrap().due_date, date(2024, 1, 30));
    assert!(rows.iter().all(|r| r.status == OccurrenceStatus::Pending));
}

#[tokio::test]
async fn completion_credits_the_assignee() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    daily_chore(&db, today, 2).await;
    let features = Features::default();

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let first = rows.first().unwrap();

    let done = chores::complete_occurrence(&db, &features, instant(today), first.id)
        .await
        .unwrap();
    assert_eq!(done.status, OccurrenceStatus::Completed);
    assert!(done.completed_at.is_some());
    assert!(done.ignored_at.is_none());

    assert_eq!(points::balance(&db, "alice").await.unwrap(), 2);
    let history = points::history(&db, "alice", 10).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].reason, "Completed: Feed the dog");
}

#[tokio::test]
async fn resolved_occurrences_reject_further_transitions() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    daily_chore(&db, today, 1).await;
    let features = Features::default();

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let first = rows[0].id;
    let second = rows[1].id;

    chores::complete_occurrence(&db, &features, instant(today), first)
        .await
        .unwrap();
    let err = chores::complete_occurrence(&db, &features, instant(today), first)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    chores::ignore_occurrence(&db, instant(today), second)
        .await
        .unwrap();
    let err = chores::complete_occurrence(&db, &features, instant(today), second)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    // Only the single completion wrote to the ledger.
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 1);
}

#[tokio::test]
async fn ignoring_never_credits() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    daily_chore(&db, today, 5).await;

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let ignored = chores::ignore_occurrence(&db, instant(today), rows[0].id)
        .await
        .unwrap();
    assert_eq!(ignored.status, OccurrenceStatus::Ignored);
    assert!(ignored.ignored_at.is_some());
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);
}

#[tokio::test]
async fn update_replaces_future_pending_but_keeps_history() {
    let db = setup().await;
    let yesterday = date(2024, 1, 1);
    let today = date(2024, 1, 2);
    let definition_id = daily_chore(&db, yesterday, 1).await;
    let features = Features::default();

    // Resolve yesterday's occurrence before the edit.
    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let past = rows.iter().find(|r| r.due_date == yesterday).unwrap();
    chores::complete_occurrence(&db, &features, instant(yesterday), past.id)
        .await
        .unwrap();

    chores::update_definition(
        &db,
        today,
        &definition_id,
        DefinitionUpdate {
            title: "Feed the dog twice".into(),
            assigned_to: Some("bob".into()),
            recurrence: Recurrence::Weekdays,
            points: 3,
        },
    )
    .await
    .unwrap();

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();

    // The completed row survived the regeneration with its old date.
    let kept = rows.iter().find(|r| r.due_date == yesterday).unwrap();
    assert_eq!(kept.status, OccurrenceStatus::Completed);

    // Everything from today on is a fresh pending row under the new rule.
    let future: Vec<_> = rows.iter().filter(|r| r.due_date >= today).collect();
    assert!(!future.is_empty());
    assert!(future.iter().all(|r| r.status == OccurrenceStatus::Pending));
    assert!(future.iter().all(|r| r.title == "Feed the dog twice"));
    assert!(future.iter().all(|r| r.assigned_to.as_deref() == Some("bob")));
    assert!(future.iter().all(|r| r.points == 3));
    // Weekdays rule: no Saturday or Sunday dates.
    assert!(future.iter().all(|r| {
        use chrono::Datelike;
        !matches!(r.due_date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
    }));
}

#[tokio::test]
async fn delete_removes_definition_and_all_occurrences() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    let definition_id = daily_chore(&db, today, 1).await;

    chores::delete_definition(&db, &definition_id).await.unwrap();

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    assert!(rows.is_empty());
    let err = chores::get_definition(&db, &definition_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn sweep_ignores_overdue_and_is_idempotent() {
    let db = setup().await;
    let start = date(2024, 1, 1);
    daily_chore(&db, start, 1).await;

    // Three days later, the first three occurrences are overdue.
    let today = start.checked_add_days(Days::new(3)).unwrap();
    let swept = chores::sweep(&db, today, instant(today)).await.unwrap();
    assert_eq!(swept, 3);

    let again = chores::sweep(&db, today, instant(today)).await.unwrap();
    assert_eq!(again, 0);

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    for row in &rows {
        if row.due_date < today {
            assert_eq!(row.status, OccurrenceStatus::Ignored);
            assert!(row.ignored_at.is_some());
        } else {
            assert_eq!(row.status, OccurrenceStatus::Pending);
        }
    }

    // Missed chores never earn points.
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);
}

#[tokio::test]
async fn claimed_chore_credits_the_claimant() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    let features = Features::default();

    chores::create_definition(
        &db,
        today,
        NewDefinition {
            title: "Rake the leaves".into(),
            assigned_to: None,
            recurrence: Recurrence::AdHoc,
            points: 4,
        },
    )
    .await
    .unwrap();

    let available = chores::available_chores(&db, None, None).await.unwrap();
    assert_eq!(available.len(), 1);
    let occurrence_id = available[0].id;

    let claimed = chores::claim_occurrence(&db, occurrence_id, "bob").await.unwrap();
    assert_eq!(claimed.claimed_by.as_deref(), Some("bob"));

    // A second claim fails and the board no longer lists it.
    let err = chores::claim_occurrence(&db, occurrence_id, "charlie")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(chores::available_chores(&db, None, None).await.unwrap().is_empty());

    chores::complete_occurrence(&db, &features, instant(today), occurrence_id)
        .await
        .unwrap();
    assert_eq!(points::balance(&db, "bob").await.unwrap(), 4);
    assert_eq!(points::balance(&db, "charlie").await.unwrap(), 0);
}

#[tokio::test]
async fn assigned_chores_cannot_be_claimed() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    daily_chore(&db, today, 1).await;

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let err = chores::claim_occurrence(&db, rows[0].id, "bob").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn completing_unassigned_unclaimed_chore_writes_no_ledger_entry() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    let features = Features::default();

    chores::create_definition(
        &db,
        today,
        NewDefinition {
            title: "Water plants".into(),
            assigned_to: None,
            recurrence: Recurrence::AdHoc,
            points: 3,
        },
    )
    .await
    .unwrap();

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let done = chores::complete_occurrence(&db, &features, instant(today), rows[0].id)
        .await
        .unwrap();
    assert_eq!(done.status, OccurrenceStatus::Completed);

    for user in ["alice", "bob", "charlie"] {
        assert_eq!(points::balance(&db, user).await.unwrap(), 0);
    }
}

#[tokio::test]
async fn disabled_points_still_complete_chores() {
    let db = setup().await;
    let today = date(2024, 1, 1);
    daily_chore(&db, today, 2).await;
    let features = Features {
        points_enabled: false,
        ..Features::default()
    };

    let rows = chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap();
    let done = chores::complete_occurrence(&db, &features, instant(today), rows[0].id)
        .await
        .unwrap();
    assert_eq!(done.status, OccurrenceStatus::Completed);
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);
}

#[tokio::test]
async fn definition_rejects_unknown_assignee_and_bad_points() {
    let db = setup().await;
    let today = date(2024, 1, 1);

    let err = chores::create_definition(
        &db,
        today,
        NewDefinition {
            title: "Mystery chore".into(),
            assigned_to: Some("nobody".into()),
            recurrence: Recurrence::Daily,
            points: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = chores::create_definition(
        &db,
        today,
        NewDefinition {
            title: "Zero points".into(),
            assigned_to: None,
            recurrence: Recurrence::Daily,
            points: 0,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    // Neither attempt left occurrences behind.
    assert!(chores::fetch_chores(&db, ChoreFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn templates_seed_and_categories() {
    let db = setup().await;

    let templates = chores::list_templates(&db, true).await.unwrap();
    assert_eq!(templates.len(), 7);

    let categories = chores::template_categories(&db).await.unwrap();
    assert_eq!(
        categories,
        vec!["Bedroom", "Kitchen", "Living Room", "Pet Care"]
    );

    chores::create_template(&db, "Mow the lawn", "Yard").await.unwrap();
    let categories = chores::template_categories(&db).await.unwrap();
    assert!(categories.contains(&"Yard".to_string()));
}
