//! Command execution.

use anyhow::{Context, Result};

use banker_core::config::{BankerConfig, OutputFormat};
use banker_core::models::SystemSnapshot;
use banker_graph::ResourceAllocationGraph;
use banker_input::load_snapshot;
use banker_safety::SafetyChecker;

use crate::cli::{CheckArgs, Cli, Command, GraphArgs, InputArgs};
use crate::render::{render_json, render_text};

pub const EXIT_SAFE: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_DEADLOCK: i32 = 2;

/// What the binary should print and exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub exit_code: i32,
}

/// Run one parsed command against an already-resolved config.
pub fn execute(cli: &Cli, config: &BankerConfig) -> Result<Outcome> {
    match &cli.command {
        Command::Check(args) => check(args, config),
        Command::Graph(args) => graph(args, config),
        Command::Config => Ok(Outcome {
            stdout: config.to_toml()?,
            exit_code: EXIT_SAFE,
        }),
    }
}

fn read_snapshot(input: &InputArgs, config: &BankerConfig) -> Result<SystemSnapshot> {
    match &input.snapshot {
        Some(path) => load_snapshot(path, &config.input)
            .with_context(|| format!("loading snapshot {}", path.display())),
        None => input.form().parse(&config.input).context("invalid input"),
    }
}

fn check(args: &CheckArgs, config: &BankerConfig) -> Result<Outcome> {
    let snapshot = read_snapshot(&args.input, config)?;
    let result = SafetyChecker::new(config.checker.clone())
        .check(&snapshot)
        .context("snapshot rejected by checker")?;

    let graph = ResourceAllocationGraph::from_snapshot(&snapshot);
    if let Some(path) = &args.dot {
        std::fs::write(path, graph.to_dot())
            .with_context(|| format!("writing DOT to {}", path.display()))?;
        tracing::info!(path = %path.display(), "graph written");
    }

    let stdout = match config.output.effective_format() {
        OutputFormat::Text => render_text(&result, &config.output),
        OutputFormat::Json => render_json(&result, Some(&graph), &config.output)?,
    };

    Ok(Outcome {
        stdout,
        exit_code: if result.safe { EXIT_SAFE } else { EXIT_DEADLOCK },
    })
}

fn graph(args: &GraphArgs, config: &BankerConfig) -> Result<Outcome> {
    let snapshot = read_snapshot(&args.input, config)?;
    let dot = ResourceAllocationGraph::from_snapshot(&snapshot).to_dot();
    match &args.output {
        Some(path) => {
            std::fs::write(path, &dot)
                .with_context(|| format!("writing DOT to {}", path.display()))?;
            Ok(Outcome {
                stdout: String::new(),
                exit_code: EXIT_SAFE,
            })
        }
        None => Ok(Outcome {
            stdout: dot,
            exit_code: EXIT_SAFE,
        }),
    }
}
