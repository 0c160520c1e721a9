use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `combobox` binary.
#[derive(Parser, Debug)]
#[command(
	name = "combobox",
	version,
	long_version = long_version(),
	about = "Drive a searchable combobox from the terminal, one interaction per line",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COMBOBOX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Candidate file, one per line, `label<TAB>json` for labeled values (default: built-in list)"
	)]
	pub(crate) candidates: Option<PathBuf>,
	#[arg(
		short = 'k',
		long,
		value_name = "KEY",
		help = "Session key of the widget (default: combobox)"
	)]
	pub(crate) key: Option<String>,
	#[arg(
		long,
		value_name = "VALUE",
		help = "Result before anything is submitted, parsed as JSON when possible (default: null)"
	)]
	pub(crate) default: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown in the empty input (default: \"Search ...\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Label shown above the input (default: none)"
	)]
	pub(crate) label: Option<String>,
	#[arg(
		short = 'b',
		long = "blank-search",
		value_name = "QUERY",
		help = "Query dispatched on creation and after each reset (default: none)"
	)]
	pub(crate) blank_search: Option<String>,
	#[arg(
		long = "clear-on-submit",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Ask the component to clear suggestions on submit (default: disabled)"
	)]
	pub(crate) clear_on_submit: Option<bool>,
	#[arg(
		long = "rerun-on-update",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Rerun the host script after every completed search (default: disabled)"
	)]
	pub(crate) rerun_on_update: Option<bool>,
	#[arg(
		long = "halt-on-update",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Halt the host script after every completed search (default: disabled)"
	)]
	pub(crate) halt_on_update: Option<bool>,
	#[arg(
		long = "return-only-on-submit",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Only report a value for passes that submitted one (default: disabled)"
	)]
	pub(crate) return_only_on_submit: Option<bool>,
	#[arg(
		long = "max-reruns",
		value_name = "NUM",
		help = "Give up after this many consecutive reruns (default: 16)"
	)]
	pub(crate) max_reruns: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print each pass"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity, repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
}
