//! Error handling for Banker.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod parse_error;

pub use config_error::ConfigError;
pub use error_code::BankerErrorCode;
pub use input_error::InvalidInputError;
pub use parse_error::ParseError;
