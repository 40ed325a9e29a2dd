pub mod auth;
pub mod envelope;
pub mod order;
pub mod room;
pub mod statistic;
pub mod ui;
