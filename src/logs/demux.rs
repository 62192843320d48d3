//! Docker log stream demultiplexer (bytes -> text).
//!
//! Containers started without a TTY emit logs as a multiplexed stream: each
//! chunk is prefixed by an 8-byte header
//!
//! ```text
//! [stream: u8][0, 0, 0][len: u32 big-endian][payload: len bytes]
//! ```
//!
//! where `stream` is 0 (stdin), 1 (stdout) or 2 (stderr). Containers with a TTY
//! emit plain text. There is no out-of-band flag telling the two apart, so the
//! first byte is sniffed: anything above 2 cannot be a frame tag.

/// Size of a multiplexed frame header.
pub const HEADER_LEN: usize = 8;

/// Origin stream of a multiplexed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    Stdin,
    Stdout,
    Stderr,
}

impl StreamType {
    /// Parse a frame tag. Returns `None` for values outside 0..=2.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Stdin),
            1 => Some(Self::Stdout),
            2 => Some(Self::Stderr),
            _ => None,
        }
    }
}

/// One frame borrowed from the input buffer.
///
/// `payload` may be shorter than `declared_len` when the buffer ends mid-frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFrame<'a> {
    pub stream: Option<StreamType>,
    pub declared_len: u32,
    pub payload: &'a [u8],
}

impl LogFrame<'_> {
    pub fn is_truncated(&self) -> bool {
        (self.payload.len() as u64) < u64::from(self.declared_len)
    }
}

/// Iterator over the frames of a multiplexed buffer.
///
/// Stops after a truncated frame, and drops trailing bytes shorter than a header.
pub struct Frames<'a> {
    buf: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Frames<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = LogFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.buf.len() - self.offset < HEADER_LEN {
            return None;
        }

        let header = &self.buf[self.offset..self.offset + HEADER_LEN];
        let stream = StreamType::from_tag(header[0]);
        let declared_len = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
        self.offset += HEADER_LEN;

        let remaining = self.buf.len() - self.offset;
        let len = declared_len as usize;
        let payload = if len > remaining {
            self.done = true;
            &self.buf[self.offset..]
        } else {
            &self.buf[self.offset..self.offset + len]
        };
        self.offset += payload.len();

        Some(LogFrame {
            stream,
            declared_len,
            payload,
        })
    }
}

/// Whether the buffer looks like a TTY (unframed) stream.
#[inline]
pub fn is_tty_stream(buf: &[u8]) -> bool {
    buf.first().map_or(false, |b| *b > 2)
}

/// Decode a log buffer into one combined stdout+stderr transcript in wire order.
///
/// Invalid UTF-8 is replaced rather than rejected; logs are display text.
pub fn demux(buf: &[u8]) -> String {
    if buf.is_empty() {
        return String::new();
    }
    if is_tty_stream(buf) {
        return String::from_utf8_lossy(buf).into_owned();
    }

    // Payloads are joined before decoding so multi-byte characters split
    // across frames survive.
    let mut out = Vec::with_capacity(buf.len());
    for frame in Frames::new(buf) {
        out.extend_from_slice(frame.payload);
    }
    String::from_utf8_lossy(&out).into_owned()
}
