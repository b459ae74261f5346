//! Application glue module
//!
//! Session configuration.

mod config;

pub use config::{ColorConfig, Config, ConfigError, CursorConfig, FontConfig};
