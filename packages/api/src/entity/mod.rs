pub mod chore_definition;
pub mod chore_occurrence;
pub mod chore_template;
pub mod meal;
pub mod points_ledger_entry;
pub mod reward;
pub mod reward_redemption;
pub mod sea_orm_active_enums;
pub mod user;
