//! # banker-core
//!
//! Foundation crate for the Banker safety checker.
//! Defines the validated data model, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::BankerConfig;
pub use errors::{BankerErrorCode, ConfigError, InvalidInputError, ParseError};
pub use models::{Matrix, NeedMatrix, ResourceVector, SystemSnapshot, Units};
