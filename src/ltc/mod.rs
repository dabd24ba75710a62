//! Linear timecode (SMPTE 12M) recovery from 8-bit audio samples.
//!
//! The decoder consumes the conditioned stream one block at a time, finds bit
//! transitions with an adaptive level threshold, and queues completed 80-bit
//! frames for the caller to drain. Both halves of the interface are
//! non-blocking: `write` never waits and `read` returns `None` when no frame
//! has completed yet.

mod decoder;
#[cfg(test)]
pub(crate) mod testsig;

pub use decoder::{LtcDecoder, LtcFrame, DEFAULT_QUEUE_LEN};

use std::fmt;

/// Time fields decoded from one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}
