pub mod database;
pub mod pagination;
pub mod views;
