use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a chore definition repeats. Stored as text in the definition row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekdays")]
    Weekdays,
    #[sea_orm(string_value = "weekends")]
    Weekends,
    #[sea_orm(string_value = "school-week")]
    SchoolWeek,
    /// One-off chore: a single occurrence dated the day it was created.
    #[sea_orm(string_value = "adhoc")]
    #[serde(rename = "ad-hoc", alias = "adhoc")]
    AdHoc,
}

/// Lifecycle of an occurrence. Pending rows move to exactly one terminal
/// state and are never re-opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "ignored")]
    Ignored,
}
