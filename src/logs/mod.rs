//! Container log decoding.

pub mod demux;

pub use demux::{demux, is_tty_stream, Frames, LogFrame, StreamType};

/// Smallest tail value sent on the wire.
pub const MIN_TAIL: i64 = 1;
/// Largest tail value sent on the wire.
pub const MAX_TAIL: i64 = 10_000;
/// Tail used when the caller does not specify one.
pub const DEFAULT_TAIL: i64 = 100;

/// Clamp a requested tail into `[MIN_TAIL, MAX_TAIL]`.
#[inline]
pub fn clamp_tail(tail: i64) -> i64 {
    tail.clamp(MIN_TAIL, MAX_TAIL)
}
