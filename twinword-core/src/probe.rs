//! The fuzz entry point.
//!
//! A driver calls [`test_one_input`] once per generated buffer. The call
//! always reports [`STATUS_CONTINUE`]; the verdict is computed and then
//! dropped, and only shows up as a trace event.

use crate::verdict::{evaluate, Verdict};
use tracing::trace;

/// Status returned to the driver: keep going, nothing to report.
pub const STATUS_CONTINUE: i32 = 0;

/// Run one input through the probe.
pub fn test_one_input(data: &[u8]) -> i32 {
	let verdict: Verdict = evaluate(data);
	trace!(len = data.len(), verdict = %verdict, code = verdict.code(), "probe input");
	STATUS_CONTINUE
}

/// Run one input given as a buffer plus a declared length.
///
/// # Panics
///
/// Panics when `len` exceeds `data.len()`. That means the driver handed over
/// fewer readable bytes than it declared, which no fuzz input can cause.
pub fn test_one_input_with_len(data: &[u8], len: usize) -> i32 {
	assert!(
		len <= data.len(),
		"driver contract violated: declared length {len} exceeds buffer of {} bytes",
		data.len()
	);
	test_one_input(&data[..len])
}
