//! Workspace-wide constants.

/// Prefix used when rendering a process as a label (`P0`, `P1`, ...).
pub const PROCESS_PREFIX: &str = "P";

/// Prefix used when rendering a resource type as a label (`R0`, `R1`, ...).
pub const RESOURCE_PREFIX: &str = "R";

/// Token placed between processes in a rendered safe sequence.
pub const DEFAULT_SEQUENCE_SEPARATOR: &str = " ➡ ";

/// Upper bound on processes accepted by the checker unless configured otherwise.
pub const DEFAULT_MAX_PROCESSES: usize = 4096;

/// Upper bound on resource types accepted by the checker unless configured otherwise.
pub const DEFAULT_MAX_RESOURCES: usize = 1024;

/// Fallback log filter when `BANKER_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "banker=info";

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "BANKER_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "banker.toml";
