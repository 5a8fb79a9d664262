pub mod advisor;
pub mod app_state;
pub mod categorize;
pub mod csv;
pub mod dispatch;
pub mod handlers;
pub mod ops;
pub mod store;
pub mod trends;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
