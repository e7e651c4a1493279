//! Bounds-checked decoding of a 16-byte buffer into two little-endian words.

use crate::error::{Error, Result};

/// Size of one word in bytes.
pub const WORD_LEN: usize = 8;

/// Exact buffer length that carries a word pair.
pub const INPUT_LEN: usize = 2 * WORD_LEN;

/// Two unsigned 64-bit words read from the two halves of an input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordPair {
	/// Word read from bytes `0..8`.
	pub first: u64,
	/// Word read from bytes `8..16`.
	pub second: u64,
}

impl WordPair {
	/// Create a pair from two already-decoded words.
	pub const fn new(first: u64, second: u64) -> Self { Self { first, second } }

	/// Decode a pair from an exactly sized buffer. Both words are little-endian.
	pub fn from_bytes(bytes: &[u8; INPUT_LEN]) -> Self {
		let mut first = [0u8; WORD_LEN];
		let mut second = [0u8; WORD_LEN];
		first.copy_from_slice(&bytes[..WORD_LEN]);
		second.copy_from_slice(&bytes[WORD_LEN..]);
		Self { first: u64::from_le_bytes(first), second: u64::from_le_bytes(second) }
	}

	/// Encode the pair back into its 16-byte little-endian form.
	pub fn to_bytes(&self) -> [u8; INPUT_LEN] {
		let mut out = [0u8; INPUT_LEN];
		out[..WORD_LEN].copy_from_slice(&self.first.to_le_bytes());
		out[WORD_LEN..].copy_from_slice(&self.second.to_le_bytes());
		out
	}

	/// True when both words hold the same value.
	pub fn is_matched(&self) -> bool { self.first == self.second }
}

/// Decode `data` as a word pair.
///
/// Any length other than [`INPUT_LEN`] is rejected before a single byte is
/// read. Alignment of `data` is irrelevant.
pub fn decode_pair(data: &[u8]) -> Result<WordPair> {
	let bytes: &[u8; INPUT_LEN] = data.try_into().map_err(|_| Error::length(data.len()))?;
	Ok(WordPair::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn decodes_little_endian_halves() {
		let data = hex!("0100000000000000 ffffffffffffffff");
		let pair = decode_pair(&data).unwrap();
		assert_eq!(pair.first, 1);
		assert_eq!(pair.second, u64::MAX);
		assert!(!pair.is_matched());
	}

	#[test]
	fn to_bytes_restores_input() {
		let data = hex!("0123456789abcdef fedcba9876543210");
		let pair = decode_pair(&data).unwrap();
		assert_eq!(pair.to_bytes(), data);
		assert_eq!(pair.first, 0xefcd_ab89_6745_2301);
	}

	#[test]
	fn rejects_short_and_long_buffers() {
		for len in [0usize, 1, 8, 15, 17, 32] {
			let data = vec![0u8; len];
			match decode_pair(&data) {
				Err(Error::Length { expected, actual }) => {
					assert_eq!(expected, INPUT_LEN);
					assert_eq!(actual, len);
				}
				other => panic!("unexpected {other:?} for len {len}"),
			}
		}
	}

	#[test]
	fn unaligned_slice_decodes() {
		let mut backing = [0u8; INPUT_LEN + 1];
		backing[1..].copy_from_slice(&hex!("0200000000000000 0200000000000000"));
		let pair = decode_pair(&backing[1..]).unwrap();
		assert_eq!(pair, WordPair::new(2, 2));
		assert!(pair.is_matched());
	}
}
