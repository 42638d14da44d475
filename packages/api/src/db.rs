//! Startup-time schema management.
//!
//! The store is an embedded SQLite file, so tables are created idempotently
//! on boot instead of through a migration crate, and a first-run seed fills
//! the catalog tables the dashboard expects.

use sea_orm::sea_query::{Index, IndexCreateStatement};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema, Set,
};

use crate::entity::{
    chore_definition, chore_occurrence, chore_template, meal, points_ledger_entry, reward,
    reward_redemption, user,
};

pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut tables = [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(chore_definition::Entity),
        schema.create_table_from_entity(chore_occurrence::Entity),
        schema.create_table_from_entity(chore_template::Entity),
        schema.create_table_from_entity(points_ledger_entry::Entity),
        schema.create_table_from_entity(reward::Entity),
        schema.create_table_from_entity(reward_redemption::Entity),
        schema.create_table_from_entity(meal::Entity),
    ];

    for stmt in tables.iter_mut() {
        stmt.if_not_exists();
        db.execute(backend.build(stmt)).await?;
    }

    let indexes: [IndexCreateStatement; 4] = [
        Index::create()
            .name("idx_chore_occurrences_due_date")
            .table(chore_occurrence::Entity)
            .col(chore_occurrence::Column::DueDate)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_chore_occurrences_status")
            .table(chore_occurrence::Entity)
            .col(chore_occurrence::Column::Status)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_points_ledger_user_id")
            .table(points_ledger_entry::Entity)
            .col(points_ledger_entry::Column::UserId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_meals_date")
            .table(meal::Entity)
            .col(meal::Column::Date)
            .if_not_exists()
            .to_owned(),
    ];

    for idx in indexes.iter() {
        db.execute(backend.build(idx)).await?;
    }

    tracing::info!("Database schema initialized");
    Ok(())
}

/// Insert default users, rewards and chore templates the first time the
/// application boots against an empty store.
pub async fn seed_defaults(db: &DatabaseConnection) -> Result<(), DbErr> {
    if user::Entity::find().count(db).await? == 0 {
        let users = [
            ("alice", "Alice", "#3498db", "👧"),
            ("bob", "Bob", "#2ecc71", "👦"),
            ("charlie", "Charlie", "#f39c12", "👶"),
        ];
        user::Entity::insert_many(users.iter().map(|(id, name, color, avatar)| {
            user::ActiveModel {
                id: Set(id.to_string()),
                name: Set(name.to_string()),
                color: Set(Some(color.to_string())),
                avatar: Set(Some(avatar.to_string())),
                image_url: Set(None),
                is_parent: Set(false),
            }
        }))
        .exec(db)
        .await?;
        tracing::info!("Seeded {} users", users.len());
    }

    if reward::Entity::find().count(db).await? == 0 {
        let rewards = [
            ("Ice Cream", 10, "🍦"),
            ("Extra Gaming Time (30min)", 20, "🎮"),
            ("Pizza Night", 30, "🍕"),
            ("Movie Night Choice", 25, "🎬"),
            ("Trip to Fun Zone", 100, "🏰"),
        ];
        reward::Entity::insert_many(rewards.iter().map(|(title, cost, emoji)| {
            reward::ActiveModel {
                title: Set(title.to_string()),
                cost_points: Set(*cost),
                emoji: Set(Some(emoji.to_string())),
                active: Set(true),
                ..Default::default()
            }
        }))
        .exec(db)
        .await?;
        tracing::info!("Seeded {} rewards", rewards.len());
    }

    if chore_template::Entity::find().count(db).await? == 0 {
        let templates = [
            ("Feed the dog", "Pet Care"),
            ("Walk the dog", "Pet Care"),
            ("Clean room", "Bedroom"),
            ("Make bed", "Bedroom"),
            ("Take out trash", "Kitchen"),
            ("Load dishwasher", "Kitchen"),
            ("Vacuum living room", "Living Room"),
        ];
        chore_template::Entity::insert_many(templates.iter().map(|(name, category)| {
            chore_template::ActiveModel {
                name: Set(name.to_string()),
                category: Set(category.to_string()),
                is_active: Set(true),
                ..Default::default()
            }
        }))
        .exec(db)
        .await?;
        tracing::info!("Seeded {} chore templates", templates.len());
    }

    Ok(())
}
