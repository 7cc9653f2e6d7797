//! # banker-cli
//!
//! Presenter and command wiring for the `banker` binary. The binary itself is
//! a thin shell over [`run::execute`] so the full command path is testable.

pub mod cli;
pub mod render;
pub mod run;

pub use cli::{Cli, Command};
pub use run::{execute, Outcome};
