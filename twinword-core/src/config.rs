//! Probe configuration, loaded from TOML or the environment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Log levels accepted by [`ProbeConfig::validate`].
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings for the probe and the replay CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
	/// Maximum level emitted by the tracing subscriber.
	pub log_level: String,
	/// Print one JSON object per replayed input instead of a text line.
	pub json_output: bool,
}

impl Default for ProbeConfig {
	fn default() -> Self {
		Self { log_level: "info".into(), json_output: false }
	}
}

impl ProbeConfig {
	/// Read and validate a TOML file.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let data = fs::read_to_string(path)?;
		let cfg: Self = toml::from_str(&data)?;
		cfg.validate()?;
		Ok(cfg)
	}

	/// Defaults overridden by `TWINWORD_LOG_LEVEL` and `TWINWORD_JSON_OUTPUT`.
	pub fn from_env() -> Result<Self> {
		let mut cfg = Self::default();
		cfg.apply_env();
		cfg.validate()?;
		Ok(cfg)
	}

	/// Overlay environment variables onto an existing config.
	pub fn apply_env(&mut self) {
		if let Ok(v) = std::env::var("TWINWORD_LOG_LEVEL") { self.log_level = v; }
		if let Ok(v) = std::env::var("TWINWORD_JSON_OUTPUT") { self.json_output = v == "1" || v.eq_ignore_ascii_case("true"); }
	}

	/// Serialize to TOML at `path`.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let data = toml::to_string_pretty(self).map_err(|e| Error::config(format!("toml serialize error: {e}")))?;
		fs::write(path, data)?;
		Ok(())
	}

	/// Reject unknown log levels.
	pub fn validate(&self) -> Result<()> {
		if !LOG_LEVELS.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		Ok(())
	}
}
