//! Five-field text form, the shape in which interactive front ends collect input.

use serde::{Deserialize, Serialize};

use banker_core::config::InputConfig;
use banker_core::errors::ParseError;
use banker_core::input_span;
use banker_core::models::SystemSnapshot;

use crate::text::{parse_labels, parse_matrix, parse_vector};

/// Raw text for each input field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotForm {
    /// e.g. `"0 1 2 3 4"`
    pub processes: String,
    /// e.g. `"0 1 2"`
    pub resources: String,
    /// e.g. `"0 1 0, 2 0 0, 3 0 2, 2 1 1, 0 0 2"`
    pub allocation: String,
    pub max_need: String,
    /// e.g. `"3 3 2"`
    pub available: String,
}

impl SnapshotForm {
    /// Tokenize every field and build a validated snapshot.
    ///
    /// With `strict_need` (the default) a process holding more than its max
    /// need is rejected here, at the input boundary.
    pub fn parse(&self, config: &InputConfig) -> Result<SystemSnapshot, ParseError> {
        let span = input_span!("form");
        let _guard = span.enter();

        let processes = parse_labels("processes", &self.processes)?;
        let resources = parse_labels("resources", &self.resources)?;
        let p = processes.len();
        let no_resources = resources.is_empty();
        let allocation = parse_form_matrix("allocation", &self.allocation, p, no_resources)?;
        let max_need = parse_form_matrix("max_need", &self.max_need, p, no_resources)?;
        let available = parse_vector("available", &self.available)?;

        let snapshot =
            SystemSnapshot::new(processes, resources, &allocation, &max_need, &available)?;
        if config.effective_strict_need() {
            snapshot.ensure_within_max_need()?;
        }

        tracing::debug!(
            processes = snapshot.process_count(),
            resources = snapshot.resource_count(),
            "form parsed"
        );
        Ok(snapshot)
    }
}

/// Blank matrix text with no resource types means one empty row per process;
/// otherwise the text is parsed as written.
fn parse_form_matrix(
    field: &'static str,
    text: &str,
    process_count: usize,
    no_resources: bool,
) -> Result<Vec<Vec<i64>>, ParseError> {
    if no_resources && text.trim().is_empty() {
        return Ok(vec![Vec::new(); process_count]);
    }
    parse_matrix(field, text)
}
