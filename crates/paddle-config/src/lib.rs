//! Tuning configuration for the paddle game.
//!
//! Sixteen gameplay values (speeds, spawn delays, scoring, pickup effects and
//! spawn probabilities) are read from the second line of
//! `ConfigurationData.csv` in the streaming assets directory. A missing or
//! malformed resource leaves the built-in defaults in place.

mod cli;
mod config;
mod error;
pub mod platform;
pub mod schema;


pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, GameConfig, resource_path};
pub use error::{ConfigError, ParseError};
pub use schema::{FIELD_COUNT, FIELDS, FieldDescriptor, FieldKind, header_line};
