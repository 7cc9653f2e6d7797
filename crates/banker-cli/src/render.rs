//! Result presentation: text for terminals, JSON for tooling.

use serde::Serialize;

use banker_core::config::OutputConfig;
use banker_graph::{GraphEdge, ResourceAllocationGraph};
use banker_safety::{SafetyResult, TraceStep};

const SAFE_BANNER: &str = "The system is in a SAFE state!";
const DEADLOCK_BANNER: &str = "The system is in a DEADLOCK state!";

/// Human-readable report.
pub fn render_text(result: &SafetyResult, config: &OutputConfig) -> String {
    let mut out = String::new();
    out.push_str(if result.safe { SAFE_BANNER } else { DEADLOCK_BANNER });
    out.push('\n');

    if config.effective_show_trace() && !result.trace.is_empty() {
        out.push_str("\nSafe state calculation steps:\n");
        // The closing Safe step is rendered below with the configured separator.
        for step in result
            .trace
            .iter()
            .filter(|s| !matches!(s, TraceStep::Safe { .. }))
        {
            out.push_str("  ");
            out.push_str(&step.to_string());
            out.push('\n');
        }
    }

    out.push('\n');
    if result.safe {
        out.push_str("Safe sequence: ");
        out.push_str(&result.render_sequence(config.effective_separator()));
    } else {
        out.push_str("No safe sequence exists. Blocked: ");
        out.push_str(&result.render_blocked());
    }
    out.push('\n');
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    safe: bool,
    deadlocked: bool,
    order: &'a [usize],
    sequence: String,
    blocked: &'a [usize],
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [TraceStep]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<JsonGraph>,
}

#[derive(Debug, Serialize)]
struct JsonGraph {
    edges: Vec<GraphEdge>,
    cycles: Vec<Vec<String>>,
}

/// Machine-readable report. Includes the graph's edges and cycles when given one.
pub fn render_json(
    result: &SafetyResult,
    graph: Option<&ResourceAllocationGraph>,
    config: &OutputConfig,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        safe: result.safe,
        deadlocked: result.is_deadlocked(),
        order: &result.order,
        sequence: result.render_sequence(config.effective_separator()),
        blocked: &result.blocked,
        trace: config.effective_show_trace().then_some(result.trace.as_slice()),
        graph: graph.map(|g| JsonGraph {
            edges: g.edges(),
            cycles: g.cycles(),
        }),
    };
    serde_json::to_string_pretty(&report)
}
