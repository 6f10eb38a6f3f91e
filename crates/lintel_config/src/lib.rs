//! Parsing and validation of `lintel.toml` run configuration.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`LintConfig`], and turns its enable/disable lists (plus any command-line
//! overrides) into the ordered [`ControlDirective`]s the engine applies at
//! run scope.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{control_directives, ControlAction, ControlDirective};
pub use types::*;
