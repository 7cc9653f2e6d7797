//! Result presentation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEQUENCE_SEPARATOR;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// `text` or `json`. Default: text.
    pub format: Option<String>,
    /// Token joining processes in the safe sequence. Default: `" ➡ "`.
    pub separator: Option<String>,
    /// Include the step trace in reports. Default: true.
    pub show_trace: Option<bool>,
}

impl OutputConfig {
    /// Parsed format; unknown values fall back to text (rejected earlier by validation).
    pub fn effective_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    pub fn effective_separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEQUENCE_SEPARATOR)
    }

    pub fn effective_show_trace(&self) -> bool {
        self.show_trace.unwrap_or(true)
    }
}
