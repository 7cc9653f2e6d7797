//! Safety checker configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_PROCESSES, DEFAULT_MAX_RESOURCES};

/// Configuration for the safety checker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckerConfig {
    /// Record a human-readable trace of each step. Default: true.
    pub record_trace: Option<bool>,
    /// Also record, for each scan, which resource blocked each skipped process. Default: false.
    pub verbose_trace: Option<bool>,
    /// Maximum number of processes accepted. Default: 4096.
    pub max_processes: Option<usize>,
    /// Maximum number of resource types accepted. Default: 1024.
    pub max_resources: Option<usize>,
}

impl CheckerConfig {
    /// Defaults, but without any size limit. Limits belong to front ends
    /// that accept untrusted input; library callers get a verdict for any
    /// well-formed snapshot.
    pub fn unbounded() -> Self {
        Self {
            max_processes: Some(usize::MAX),
            max_resources: Some(usize::MAX),
            ..Self::default()
        }
    }

    pub fn effective_record_trace(&self) -> bool {
        self.record_trace.unwrap_or(true)
    }

    pub fn effective_verbose_trace(&self) -> bool {
        self.verbose_trace.unwrap_or(false)
    }

    pub fn effective_max_processes(&self) -> usize {
        self.max_processes.unwrap_or(DEFAULT_MAX_PROCESSES)
    }

    pub fn effective_max_resources(&self) -> usize {
        self.max_resources.unwrap_or(DEFAULT_MAX_RESOURCES)
    }
}
