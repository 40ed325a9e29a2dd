pub mod datetime;
pub mod error;
pub mod format;
pub mod http_utils;
pub mod notifier;
pub mod serde_utils;
