//! Snapshot files: TOML or JSON with `processes`, `resources`, `allocation`,
//! `max_need`, and `available` keys.

use std::path::Path;

use banker_core::config::InputConfig;
use banker_core::errors::ParseError;
use banker_core::input_span;
use banker_core::models::SystemSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Toml,
    Json,
}

impl SnapshotFormat {
    /// Format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Decode `content`; shape validation runs as part of deserialization.
    pub fn decode(&self, content: &str, path: &str) -> Result<SystemSnapshot, ParseError> {
        let format_err = |message: String| ParseError::Format {
            path: path.to_string(),
            message,
        };
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| format_err(e.to_string())),
            Self::Json => serde_json::from_str(content).map_err(|e| format_err(e.to_string())),
        }
    }
}

/// Read and validate a snapshot file.
pub fn load_snapshot(path: &Path, config: &InputConfig) -> Result<SystemSnapshot, ParseError> {
    let path_str = path.display().to_string();
    let span = input_span!(path_str.as_str());
    let _guard = span.enter();

    let format = SnapshotFormat::from_path(path).ok_or_else(|| ParseError::UnsupportedFormat {
        path: path_str.clone(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let snapshot = format.decode(&content, &path_str)?;
    if config.effective_strict_need() {
        snapshot.ensure_within_max_need()?;
    }

    tracing::debug!(path = %path_str, processes = snapshot.process_count(), "snapshot loaded");
    Ok(snapshot)
}
