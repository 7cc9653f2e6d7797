//! Top-level Banker configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CheckerConfig, InputConfig, LoggingConfig, OutputConfig, OutputFormat};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BANKER_*`)
/// 3. Project config (`banker.toml` in the working directory)
/// 4. User config (`~/.banker/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BankerConfig {
    pub checker: CheckerConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file, read in place of `banker.toml`.
    pub config_path: Option<PathBuf>,
    pub record_trace: Option<bool>,
    pub verbose_trace: Option<bool>,
    pub strict_need: Option<bool>,
    pub format: Option<String>,
    pub separator: Option<String>,
    pub show_trace: Option<bool>,
}

impl BankerConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Unreadable files are skipped, bad TOML is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        // Project config, or the explicit `--config` file.
        let explicit = cli_overrides.and_then(|c| c.config_path.as_ref());
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BankerConfig) -> Result<(), ConfigError> {
        if config.checker.max_processes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "checker.max_processes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.checker.max_resources == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "checker.max_resources".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.output.format {
            if let Err(message) = format.parse::<OutputFormat>() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.format".to_string(),
                    message,
                });
            }
        }
        if let Some(ref separator) = config.output.separator {
            if separator.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.separator".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.banker/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".banker").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut BankerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BankerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut BankerConfig, other: &BankerConfig) {
        // Checker
        if other.checker.record_trace.is_some() {
            base.checker.record_trace = other.checker.record_trace;
        }
        if other.checker.verbose_trace.is_some() {
            base.checker.verbose_trace = other.checker.verbose_trace;
        }
        if other.checker.max_processes.is_some() {
            base.checker.max_processes = other.checker.max_processes;
        }
        if other.checker.max_resources.is_some() {
            base.checker.max_resources = other.checker.max_resources;
        }

        // Input
        if other.input.strict_need.is_some() {
            base.input.strict_need = other.input.strict_need;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.separator.is_some() {
            base.output.separator = other.output.separator.clone();
        }
        if other.output.show_trace.is_some() {
            base.output.show_trace = other.output.show_trace;
        }

        // Logging
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BANKER_CHECKER_RECORD_TRACE`, `BANKER_OUTPUT_FORMAT`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut BankerConfig) {
        if let Ok(val) = std::env::var("BANKER_CHECKER_RECORD_TRACE") {
            if let Ok(v) = val.parse::<bool>() {
                config.checker.record_trace = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BANKER_CHECKER_VERBOSE_TRACE") {
            if let Ok(v) = val.parse::<bool>() {
                config.checker.verbose_trace = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BANKER_CHECKER_MAX_PROCESSES") {
            if let Ok(v) = val.parse::<usize>() {
                config.checker.max_processes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BANKER_CHECKER_MAX_RESOURCES") {
            if let Ok(v) = val.parse::<usize>() {
                config.checker.max_resources = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BANKER_INPUT_STRICT_NEED") {
            if let Ok(v) = val.parse::<bool>() {
                config.input.strict_need = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BANKER_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
        if let Ok(val) = std::env::var("BANKER_OUTPUT_SEPARATOR") {
            config.output.separator = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BankerConfig, cli: &CliOverrides) {
        if let Some(v) = cli.record_trace {
            config.checker.record_trace = Some(v);
        }
        if let Some(v) = cli.verbose_trace {
            config.checker.verbose_trace = Some(v);
        }
        if let Some(v) = cli.strict_need {
            config.input.strict_need = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
        if let Some(ref v) = cli.separator {
            config.output.separator = Some(v.clone());
        }
        if let Some(v) = cli.show_trace {
            config.output.show_trace = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
