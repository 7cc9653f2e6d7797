//! Input collection configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Reject snapshots where an allocation exceeds its max need. Default: true.
    pub strict_need: Option<bool>,
}

impl InputConfig {
    pub fn effective_strict_need(&self) -> bool {
        self.strict_need.unwrap_or(true)
    }
}
