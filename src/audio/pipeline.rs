//! Per-block processing driven by the capture callback.
//!
//! Each block flows one way: meter the gain-applied signal, step the gain
//! loop, reduce the raw samples to the decoder's 8-bit input, then drain and
//! print whatever timecode frames the decoder finished. The whole sequence is
//! synchronous and bounded by the block length.

use std::io::Write;

use super::{agc, meter, BLOCK_SAMPLES};
use crate::ltc::LtcDecoder;

/// Owns the decoder, the shared gain, and the display flags for the lifetime
/// of one capture stream. Moves into the stream callback, so every field is
/// touched by exactly one thread.
pub struct BlockPipeline<W: Write> {
    decoder: LtcDecoder,
    gain: f32,
    auto_gain: bool,
    show_rms: bool,
    reduced: Vec<u8>,
    out: W,
}

impl<W: Write> BlockPipeline<W> {
    pub fn new(decoder: LtcDecoder, gain: f32, auto_gain: bool, show_rms: bool, out: W) -> Self {
        Self {
            decoder,
            gain: agc::clamp_gain(gain),
            auto_gain,
            show_rms,
            reduced: Vec::with_capacity(BLOCK_SAMPLES as usize),
            out,
        }
    }

    /// Current gain multiplier.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Process one capture block. A missing block (empty slice) is a gap, not
    /// an error: no state advances and no output is produced.
    ///
    /// Metering uses the gain as it stood when the block arrived; the gain
    /// update lands before the status line so operators see the value the
    /// next block will be metered with. The decoder sees raw high bytes
    /// either way.
    pub fn process_block(&mut self, input: &[i16]) {
        if input.is_empty() {
            return;
        }

        let rms = meter::block_rms(input, self.gain);
        self.reduced.clear();
        self.reduced.extend(input.iter().map(|&s| high_byte(s)));

        if self.auto_gain {
            self.gain = agc::next_gain(self.gain, rms);
        }

        if self.show_rms {
            let _ = write!(self.out, "[RMS: {rms:.3} | Gain: {:.2}] ", self.gain);
            let _ = self.out.flush();
        }

        self.decoder.write(&self.reduced);
        while let Some(frame) = self.decoder.read() {
            let _ = writeln!(self.out, "LTC: {}", frame.timecode());
            let _ = self.out.flush();
        }
    }
}

/// Reduce one 16-bit sample to the decoder's 8-bit input unit. The decoder
/// gets the raw high byte; the metering gain deliberately does not reach it.
pub(super) fn high_byte(sample: i16) -> u8 {
    (sample >> 8) as u8
}
