//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ChatConfig)
//! - [`defaults`]: Default value functions for serde
//! - [`validation`]: Startup validation of loaded configuration

mod defaults;
mod types;
mod validation;

pub use types::{ChatConfig, Config, ConfigError};
pub use validation::{validate, ValidationError};
