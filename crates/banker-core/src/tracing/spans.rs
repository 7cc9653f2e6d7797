//! Span definitions per operation: safety check, input parsing, graph building.

/// Create a safety-check span.
#[macro_export]
macro_rules! safety_span {
    ($processes:expr, $resources:expr) => {
        tracing::info_span!("banker.safety", processes = $processes, resources = $resources)
    };
}

/// Create an input-parsing span.
#[macro_export]
macro_rules! input_span {
    ($source:expr) => {
        tracing::info_span!("banker.input", source = %$source)
    };
}

/// Create a graph-building span.
#[macro_export]
macro_rules! graph_span {
    ($processes:expr, $resources:expr) => {
        tracing::info_span!("banker.graph", processes = $processes, resources = $resources)
    };
}
