use chrono::{DateTime, NaiveDate, Utc};
use homeboard_api::db;
use homeboard_api::sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};
use homeboard_api::entity::reward;
use homeboard_api::services::{
    ServiceError, points,
    points::NewUser,
    rewards,
    rewards::RewardInput,
};
use homeboard_api::state::Features;

async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db::init_schema(&db).await.unwrap();
    db::seed_defaults(&db).await.unwrap();
    db
}

fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

async fn reward_costing(db: &DatabaseConnection, cost: i64) -> i32 {
    rewards::create_reward(
        db,
        RewardInput {
            title: format!("Reward worth {cost}"),
            cost_points: cost,
            emoji: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn balance_is_the_signed_sum_of_entries() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);

    for _ in 0..5 {
        points::credit(&db, &features, "alice", 3, "Completed: Make bed", now)
            .await
            .unwrap();
    }
    points::debit(&db, "alice", 4, "Redeemed: Ice Cream", now)
        .await
        .unwrap();

    // 5 * 3 - 4
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 11);

    let history = points::history(&db, "alice", 50).await.unwrap();
    assert_eq!(history.len(), 6);
    assert_eq!(history[0].points, -4);
}

#[tokio::test]
async fn credit_rejects_non_positive_amounts() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    for bad in [0, -5] {
        let err = points::credit(&db, &features, "alice", bad, "x", now)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    // Same contract when the points feature is off: validation still runs
    // before the feature gate short-circuits.
    let disabled = Features {
        points_enabled: false,
        ..Features::default()
    };
    let err = points::credit(&db, &disabled, "alice", 0, "x", now)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    points::credit(&db, &disabled, "alice", 5, "x", now)
        .await
        .unwrap();
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_a_user_with_history_removes_their_rows() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "alice", 5, "Completed: Feed the dog", now)
        .await
        .unwrap();
    let reward_id = reward_costing(&db, 5).await;
    rewards::redeem(&db, now, "alice", reward_id).await.unwrap();

    points::delete_user(&db, "alice").await.unwrap();

    let err = points::get_user(&db, "alice").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(points::history(&db, "alice", 50).await.unwrap().is_empty());
    assert!(
        rewards::redemption_history(&db, Some("alice"), 50)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(points::leaderboard(&db).await.unwrap().iter().all(|r| r.id != "alice"));
}

#[tokio::test]
async fn redeem_debits_and_records_in_one_shot() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "alice", 2, "Completed: Feed the dog", now)
        .await
        .unwrap();
    let reward_id = reward_costing(&db, 2).await;

    let outcome = rewards::redeem(&db, now, "alice", reward_id).await.unwrap();
    assert_eq!(outcome.new_balance, 0);
    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);

    let redemptions = rewards::redemption_history(&db, Some("alice"), 10)
        .await
        .unwrap();
    assert_eq!(redemptions.len(), 1);
    assert_eq!(redemptions[0].points_spent, 2);
    assert_eq!(redemptions[0].reward_title, "Reward worth 2");

    let history = points::history(&db, "alice", 10).await.unwrap();
    assert_eq!(history[0].points, -2);
    assert_eq!(history[0].reason, "Redeemed: Reward worth 2");
}

#[tokio::test]
async fn insufficient_balance_leaves_everything_untouched() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "alice", 2, "Completed: Feed the dog", now)
        .await
        .unwrap();
    let reward_id = reward_costing(&db, 2).await;

    rewards::redeem(&db, now, "alice", reward_id).await.unwrap();

    // Balance is now zero; a second redemption must fail cleanly.
    let err = rewards::redeem(&db, now, "alice", reward_id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InsufficientBalance { balance: 0, cost: 2 }
    ));

    assert_eq!(points::balance(&db, "alice").await.unwrap(), 0);
    let history = points::history(&db, "alice", 10).await.unwrap();
    assert_eq!(history.len(), 2);
    let redemptions = rewards::redemption_history(&db, Some("alice"), 10)
        .await
        .unwrap();
    assert_eq!(redemptions.len(), 1);
}

#[tokio::test]
async fn redeem_unknown_user_or_reward_is_not_found() {
    let db = setup().await;
    let now = instant(2024, 1, 1);
    let reward_id = reward_costing(&db, 1).await;

    let err = rewards::redeem(&db, now, "nobody", reward_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = rewards::redeem(&db, now, "alice", 9999).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn leaderboard_orders_by_balance_then_name() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "bob", 10, "Completed: Clean room", now)
        .await
        .unwrap();
    points::credit(&db, &features, "charlie", 4, "Completed: Make bed", now)
        .await
        .unwrap();

    let board = points::leaderboard(&db).await.unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0].id, "bob");
    assert_eq!(board[0].balance, 10);
    assert_eq!(board[1].id, "charlie");
    // Zero-entry users still appear.
    assert_eq!(board[2].id, "alice");
    assert_eq!(board[2].balance, 0);
}

#[tokio::test]
async fn deactivated_rewards_leave_the_catalog_but_keep_history() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "alice", 5, "Completed: Clean room", now)
        .await
        .unwrap();
    let reward_id = reward_costing(&db, 5).await;
    rewards::redeem(&db, now, "alice", reward_id).await.unwrap();

    rewards::set_reward_active(&db, reward_id, false).await.unwrap();

    let active = rewards::list_rewards(&db, true).await.unwrap();
    assert!(active.iter().all(|r| r.id != reward_id));

    let all = rewards::list_rewards(&db, false).await.unwrap();
    assert!(all.iter().any(|r| r.id == reward_id));

    let redemptions = rewards::redemption_history(&db, Some("alice"), 10)
        .await
        .unwrap();
    assert_eq!(redemptions.len(), 1);
}

#[tokio::test]
async fn reward_edits_do_not_rewrite_redemptions() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "alice", 10, "Completed: Clean room", now)
        .await
        .unwrap();
    let reward_id = reward_costing(&db, 3).await;
    rewards::redeem(&db, now, "alice", reward_id).await.unwrap();

    rewards::update_reward(
        &db,
        reward_id,
        RewardInput {
            title: "Renamed".into(),
            cost_points: 8,
            emoji: None,
        },
    )
    .await
    .unwrap();

    let redemptions = rewards::redemption_history(&db, Some("alice"), 10)
        .await
        .unwrap();
    assert_eq!(redemptions[0].reward_title, "Reward worth 3");
    assert_eq!(redemptions[0].points_spent, 3);

    let updated = reward::Entity::find()
        .filter(reward::Column::Id.eq(reward_id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.cost_points, 8);
}

#[tokio::test]
async fn user_ids_are_slugs_and_must_be_unique() {
    let db = setup().await;

    let dana = points::create_user(
        &db,
        NewUser {
            name: "Dana Q. Jones".into(),
            color: None,
            avatar: None,
            image_url: None,
            is_parent: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(dana.id, "dana-q--jones");

    let err = points::create_user(
        &db,
        NewUser {
            name: "Alice".into(),
            color: None,
            avatar: None,
            image_url: None,
            is_parent: false,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn renaming_a_user_keeps_their_ledger() {
    let db = setup().await;
    let features = Features::default();
    let now = instant(2024, 1, 1);

    points::credit(&db, &features, "alice", 7, "Completed: Clean room", now)
        .await
        .unwrap();

    points::update_user(
        &db,
        "alice",
        NewUser {
            name: "Alicia".into(),
            color: Some("#000000".into()),
            avatar: None,
            image_url: None,
            is_parent: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(points::balance(&db, "alice").await.unwrap(), 7);
    assert_eq!(points::get_user(&db, "alice").await.unwrap().name, "Alicia");
}
