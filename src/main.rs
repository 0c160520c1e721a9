mod catalog;
mod cli;
mod settings;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use catalog::Catalog;
use cli::{Command, OutputFormat, PassSummary, parse_cli, parse_command, print_json, print_plain};
use combobox::{
	Candidate, Combobox, ComboboxError, Flow, Interaction, MemorySessionStore, PassEnd, ScriptHost,
	ScriptedComponent, SessionStore, Value, logging,
};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_session(cli.output, resolved)
}

/// Read commands from stdin and run one host pass per command.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let ResolvedConfig {
		widget,
		max_reruns,
		candidates,
	} = settings;

	let catalog = match candidates {
		Some(path) => Catalog::from_file(&path)?,
		None => Catalog::builtin(),
	};
	log::info!("loaded {} candidates", catalog.len());

	let search = move |query: &str| -> Result<Vec<Candidate>> { Ok(catalog.search(query)) };
	let mut combobox = Combobox::new(widget, search)?.with_reset_callback(|| {
		log::info!("combobox was reset");
		Ok(())
	});
	let key = combobox.config().key.clone();
	let mut host = ScriptHost::new(MemorySessionStore::new()).with_max_reruns(max_reruns);
	let mut component = ScriptedComponent::new();

	let stdin = io::stdin();
	for line in stdin.lock().lines() {
		let line = line.context("failed to read from stdin")?;
		let interaction = match parse_command(&line) {
			Ok(Some(Command::Pass(interaction))) => interaction,
			Ok(Some(Command::Quit)) => break,
			Ok(None) => continue,
			Err(err) => {
				eprintln!("{err}");
				continue;
			}
		};

		let command = interaction.as_ref().map_or("show", Interaction::kind);
		if let Some(interaction) = interaction {
			component.push(interaction);
		}

		let report = match host.execute(|store| {
			let outcome = combobox.run(store, &mut component)?;
			Ok(Flow::<Option<Value>>::from(outcome))
		}) {
			Ok(report) => report,
			Err(err @ (ComboboxError::Search { .. } | ComboboxError::OptionOutOfRange { .. })) => {
				eprintln!("{:#}", anyhow::Error::from(err));
				continue;
			}
			Err(err) => return Err(err.into()),
		};

		let entry = host.store().get(&key).ok();
		let summary = PassSummary {
			command,
			reruns: report.reruns,
			halted: report.end == PassEnd::Halted,
			value: report.completed().flatten(),
			search: entry.as_ref().map(|entry| entry.search().to_string()).unwrap_or_default(),
			options: entry.map(|entry| entry.options).unwrap_or_default(),
		};

		match format {
			OutputFormat::Plain => print_plain(&summary),
			OutputFormat::Json => print_json(&summary)?,
		}
	}

	Ok(())
}
