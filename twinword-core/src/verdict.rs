//! Classification of an input buffer and the result codes behind it.

use crate::decode::{decode_pair, INPUT_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code for a 16-byte buffer whose halves hold the same word.
pub const CODE_EQUAL: u64 = 1997;
/// Result code for a 16-byte buffer whose halves differ.
pub const CODE_DISTINCT: u64 = 6;
/// Result code for any buffer that is not 16 bytes long.
pub const CODE_WRONG_LENGTH: u64 = 23;

/// Outcome of looking at one input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
	/// Exactly 16 bytes and both words are equal.
	Equal,
	/// Exactly 16 bytes and the words differ.
	Distinct,
	/// Any other length; no bytes were read.
	WrongLength,
}

impl Verdict {
	/// Numeric result code for this verdict.
	pub const fn code(self) -> u64 {
		match self {
			Verdict::Equal => CODE_EQUAL,
			Verdict::Distinct => CODE_DISTINCT,
			Verdict::WrongLength => CODE_WRONG_LENGTH,
		}
	}

	/// Stable lowercase name, matching the serde representation.
	pub const fn as_str(self) -> &'static str {
		match self {
			Verdict::Equal => "equal",
			Verdict::Distinct => "distinct",
			Verdict::WrongLength => "wrong-length",
		}
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Classify `data`.
pub fn evaluate(data: &[u8]) -> Verdict {
	if data.len() != INPUT_LEN {
		return Verdict::WrongLength;
	}
	match decode_pair(data) {
		Ok(pair) if pair.is_matched() => Verdict::Equal,
		Ok(_) => Verdict::Distinct,
		// Unreachable after the length check, folded into the same verdict.
		Err(_) => Verdict::WrongLength,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_match_constants() {
		assert_eq!(Verdict::Equal.code(), 1997);
		assert_eq!(Verdict::Distinct.code(), 6);
		assert_eq!(Verdict::WrongLength.code(), 23);
	}

	#[test]
	fn halves_differing_in_last_byte_are_distinct() {
		let mut data = [7u8; 16];
		data[15] = 8;
		assert_eq!(evaluate(&data), Verdict::Distinct);
	}

	#[test]
	fn display_matches_serde() {
		for v in [Verdict::Equal, Verdict::Distinct, Verdict::WrongLength] {
			let json = serde_json::to_string(&v).unwrap();
			assert_eq!(json, format!("\"{v}\""));
		}
	}
}
