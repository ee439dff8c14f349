//! Command-line interface orchestration for the `msf` binary.
//!
//! Reads a graph description from a file or stdin, computes its minimum
//! spanning forest, and renders the four result lines.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, NO_POSITION_SENTINEL, NO_WEIGHT_SENTINEL, render_report, run_cli, run_reader,
};
pub use input::{GraphInput, InputError, read_graph};
