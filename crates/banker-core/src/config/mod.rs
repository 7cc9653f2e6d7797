//! Configuration system for Banker.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod banker_config;
pub mod checker_config;
pub mod input_config;
pub mod logging_config;
pub mod output_config;

pub use banker_config::{BankerConfig, CliOverrides};
pub use checker_config::CheckerConfig;
pub use input_config::InputConfig;
pub use logging_config::LoggingConfig;
pub use output_config::{OutputConfig, OutputFormat};
