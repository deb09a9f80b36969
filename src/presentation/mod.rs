//! Presentation Layer - Command-line interface

pub mod cli;

pub use cli::{BIN_NAME, Cli, Command, Dispatcher, Outcome};
