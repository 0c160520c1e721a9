use anyhow::{Result, bail};
use combobox::{Interaction, SubmitValue, Value};

/// A line typed into the demo session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
	/// Run a host pass, optionally after queueing an interaction.
	Pass(Option<Interaction>),
	Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>> {
	let line = line.trim_end_matches(['\r', '\n']);
	if line.trim().is_empty() {
		return Ok(None);
	}

	let (verb, rest) = match line.trim_start().split_once(' ') {
		Some((verb, rest)) => (verb, rest),
		None => (line.trim(), ""),
	};

	let command = match verb {
		"search" | "s" => Command::Pass(Some(Interaction::Search(rest.to_string()))),
		"submit" | "pick" => Command::Pass(Some(Interaction::Submit(parse_submit(rest)?))),
		"reset" | "r" => Command::Pass(Some(Interaction::Reset)),
		"show" => Command::Pass(None),
		"quit" | "exit" | "q" => Command::Quit,
		other => bail!("unknown command '{other}' (expected search, submit, reset, show or quit)"),
	};

	Ok(Some(command))
}

fn parse_submit(raw: &str) -> Result<SubmitValue> {
	let raw = raw.trim();
	if raw.is_empty() {
		bail!("submit needs an option index or a value");
	}
	if let Ok(index) = raw.parse::<usize>() {
		return Ok(SubmitValue::Index(index));
	}
	let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
	Ok(SubmitValue::Verbatim(value))
}
