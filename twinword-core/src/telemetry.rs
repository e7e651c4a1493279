//! Tracing subscriber setup.

use crate::config::ProbeConfig;
use crate::error::{Error, Result};
use tracing::Level;

/// Install a stderr `fmt` subscriber at the configured level.
///
/// Does nothing when a global dispatcher is already set, so repeated calls
/// from tests or from a fuzz target are harmless.
pub fn init(cfg: &ProbeConfig) -> Result<()> {
	cfg.validate()?;
	if tracing::dispatcher::has_been_set() {
		return Ok(());
	}
	let level: Level = cfg.log_level.parse().map_err(|e| Error::config(format!("invalid log_level: {e}")))?;
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(level)
		.with_target(false)
		.with_writer(std::io::stderr)
		.finish();
	if tracing::subscriber::set_global_default(subscriber).is_err() && !tracing::dispatcher::has_been_set() {
		return Err(Error::init("global subscriber rejected"));
	}
	Ok(())
}
