//! Error type shared by the decoder, configuration and logging setup.

use thiserror::Error;

/// Result alias used throughout `twinword-core`.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures surfaced by `twinword-core`.
///
/// The entry point itself never returns one of these; it folds every input
/// into a [`crate::Verdict`] and reports status 0.
#[derive(Debug, Error)]
pub enum Error {
	/// Reading or writing a configuration file failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A configuration file was not valid TOML for [`crate::ProbeConfig`].
	#[error("toml: {0}")]
	Toml(#[from] toml::de::Error),
	/// A configuration value was rejected by validation.
	#[error("config: {0}")]
	Config(String),
	/// The buffer does not have the length a word pair needs.
	#[error("length: expected {expected} bytes, got {actual}")]
	Length {
		/// Required buffer length.
		expected: usize,
		/// Length that was supplied.
		actual: usize,
	},
	/// Installing the tracing subscriber failed.
	#[error("telemetry init failed: {0}")]
	Init(String),
}

impl Error {
	/// Build a [`Error::Config`] from any message.
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }
	/// Build a [`Error::Init`] from any message.
	pub fn init(msg: impl Into<String>) -> Self { Self::Init(msg.into()) }
	/// Build a [`Error::Length`] for a word-pair buffer of `actual` bytes.
	pub fn length(actual: usize) -> Self { Self::Length { expected: crate::decode::INPUT_LEN, actual } }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn length_error_names_both_sizes() {
		let msg = Error::length(15).to_string();
		assert!(msg.contains("expected 16"));
		assert!(msg.contains("got 15"));
	}

	#[test]
	fn io_converts_via_from() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
		let err: Error = io.into();
		assert!(matches!(err, Error::Io(_)));
	}
}
