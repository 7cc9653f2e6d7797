//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use banker_core::config::CliOverrides;
use banker_input::SnapshotForm;

#[derive(Debug, Parser)]
#[command(
    name = "banker",
    version,
    about = "Deadlock safety checker based on the Banker's algorithm",
    long_about = "Checks whether a resource-allocation snapshot is in a safe state.\n\n\
    Matrices are given as comma-separated rows of space-separated integers:\n  \
    banker check --processes \"0 1 2\" --resources \"0 1\" \\\n    \
    --allocation \"1 0, 0 1, 1 1\" --max-need \"2 1, 1 2, 2 2\" --available \"1 1\"\n\n\
    Exit status: 0 safe, 2 deadlock, 1 error."
)]
pub struct Cli {
    /// Config file to use instead of ./banker.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the safety check and print the verdict.
    Check(CheckArgs),
    /// Print the allocation/request graph as Graphviz DOT.
    Graph(GraphArgs),
    /// Print the effective configuration as TOML.
    Config,
}

/// Where the snapshot comes from: a file, or the five text fields.
#[derive(Debug, Clone, Args, Default)]
pub struct InputArgs {
    /// Snapshot file (.toml or .json). Overrides the text fields.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// Process labels, e.g. "0 1 2 3".
    #[arg(long, default_value = "")]
    pub processes: String,
    /// Resource labels, e.g. "0 1".
    #[arg(long, default_value = "")]
    pub resources: String,
    /// Allocation matrix, e.g. "0 1, 2 0".
    #[arg(long, default_value = "")]
    pub allocation: String,
    /// Max need matrix, same format as --allocation.
    #[arg(long = "max-need", default_value = "")]
    pub max_need: String,
    /// Available units per resource, e.g. "3 3".
    #[arg(long, default_value = "")]
    pub available: String,
    /// Accept processes holding more than their max need.
    #[arg(long)]
    pub lenient_need: bool,
}

impl InputArgs {
    pub fn form(&self) -> SnapshotForm {
        SnapshotForm {
            processes: self.processes.clone(),
            resources: self.resources.clone(),
            allocation: self.allocation.clone(),
            max_need: self.max_need.clone(),
            available: self.available.clone(),
        }
    }
}

#[derive(Debug, Clone, Args, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Report format: text or json.
    #[arg(long)]
    pub format: Option<String>,
    /// Separator between processes in the safe sequence.
    #[arg(long)]
    pub separator: Option<String>,
    /// Neither record nor print the step trace.
    #[arg(long)]
    pub no_trace: bool,
    /// Also trace which resource blocked each skipped process.
    #[arg(long)]
    pub verbose_trace: bool,
    /// Also write the allocation/request graph as DOT to this path.
    #[arg(long)]
    pub dot: Option<PathBuf>,
}

#[derive(Debug, Clone, Args, Default)]
pub struct GraphArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Write DOT here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Config-layer overrides implied by the parsed flags.
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            config_path: self.config.clone(),
            ..Default::default()
        };
        match &self.command {
            Command::Check(args) => {
                overrides.format = args.format.clone();
                overrides.separator = args.separator.clone();
                if args.no_trace {
                    overrides.record_trace = Some(false);
                    overrides.show_trace = Some(false);
                }
                if args.verbose_trace {
                    overrides.verbose_trace = Some(true);
                }
                if args.input.lenient_need {
                    overrides.strict_need = Some(false);
                }
            }
            Command::Graph(args) => {
                if args.input.lenient_need {
                    overrides.strict_need = Some(false);
                }
            }
            Command::Config => {}
        }
        overrides
    }
}
