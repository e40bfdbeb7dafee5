//! Command execution for the `puntuar` binary
//!
//! Argument definitions live in [`crate::config`]; this module runs them.

mod commands;
mod logging;

pub use crate::config::Cli;
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
