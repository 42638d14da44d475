pub mod chores;
pub mod health;
pub mod meals;
pub mod points;
pub mod rewards;
pub mod users;
