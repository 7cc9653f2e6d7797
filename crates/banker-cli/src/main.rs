use std::process::ExitCode;

use clap::Parser;

use banker_cli::run::{execute, EXIT_ERROR};
use banker_cli::Cli;
use banker_core::tracing::init_tracing;
use banker_core::BankerConfig;

fn main() -> ExitCode {
    // Usage errors exit 1; status 2 is reserved for a deadlock verdict.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let root = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = match BankerConfig::load(&root, Some(&cli.overrides())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_ERROR as u8);
        }
    };
    init_tracing(config.logging.effective_filter());

    match execute(&cli, &config) {
        Ok(outcome) => {
            print!("{}", outcome.stdout);
            ExitCode::from(outcome.exit_code as u8)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR as u8)
        }
    }
}
