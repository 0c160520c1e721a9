//! Logging setup for binaries embedding the combobox.
//!
//! The library only emits records through the `log` facade; installing a
//! logger is left to the host.

use log::LevelFilter;

/// Map a `-v` count onto a level filter.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install `env_logger` at the level implied by `verbosity`. `RUST_LOG`
/// still refines individual targets. Calling this twice is harmless.
pub fn initialize(verbosity: u8) {
	let _ = env_logger::Builder::new()
		.filter_level(level_for(verbosity))
		.parse_default_env()
		.try_init();
}
