#![forbid(unsafe_code)]
//! Twinword: a fuzz probe that compares the two 64-bit halves of a 16-byte input.
//!
//! [`test_one_input`] is the entry point a fuzzing driver calls. It always
//! returns [`STATUS_CONTINUE`]. [`evaluate`] exposes the verdict the entry
//! point computes and discards.

pub mod config;
pub mod decode;
pub mod error;
pub mod probe;
pub mod telemetry;
pub mod verdict;

pub use config::ProbeConfig;
pub use decode::{decode_pair, WordPair, INPUT_LEN, WORD_LEN};
pub use error::{Error, Result};
pub use probe::{test_one_input, test_one_input_with_len, STATUS_CONTINUE};
pub use verdict::{evaluate, Verdict, CODE_DISTINCT, CODE_EQUAL, CODE_WRONG_LENGTH};
