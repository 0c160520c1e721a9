mod args;
mod commands;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use commands::{Command, parse_command};
pub(crate) use output::{PassSummary, print_json, print_plain};
