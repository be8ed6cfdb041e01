//! spendcat-config
//!
//! User preferences for the spendcat console plus their disk persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
