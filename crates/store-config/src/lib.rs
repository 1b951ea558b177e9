//! store-config
//!
//! Persistent client preferences and the stored session token.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;
pub mod session;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, API_BASE_URL_ENV};
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
