//! Configuration loading and validation.
//!
//! Config lives in a single TOML file; every section and key is optional and
//! falls back to the defaults in [`types`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, ServiceConfig, UiConfig};
