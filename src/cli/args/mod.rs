mod definitions;
mod options;
mod styles;


use clap::Parser;
pub(crate) use definitions::CliArgs;
pub(crate) use options::OutputFormat;

/// Parse command-line arguments into a [`CliArgs`] instance.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
