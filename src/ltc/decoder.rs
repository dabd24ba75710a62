//! Biphase-mark decoding of the LTC bitstream.
//!
//! LTC places a level transition at every bit boundary and an extra mid-bit
//! transition for a one. Decoding therefore reduces to measuring the sample
//! intervals between threshold crossings: two short intervals are a one, a
//! long interval is a zero. Bits shift into an 80-bit register until the sync
//! word occupies bits 64..79, at which point the low 64 bits are a frame.

use std::collections::VecDeque;

use super::Timecode;

/// Bits in one SMPTE linear timecode frame.
const FRAME_BITS: u32 = 80;

/// Sync pattern occupying frame bits 64..79, stored with bit 64 as the LSB.
const SYNC_WORD: u16 = 0xBFFC;

/// Completed frames held before writes start dropping, matching the window
/// the original decoder was created with.
pub const DEFAULT_QUEUE_LEN: usize = 32;

/// Intervals shorter than this fraction of the bit period count as half bits.
const HALF_BIT_LIMIT: f32 = 0.75;

/// Intervals longer than this fraction of the bit period are signal gaps.
const FULL_BIT_LIMIT: f32 = 1.5;

/// Smoothing factor for the running bit-period estimate.
const PERIOD_ALPHA: f32 = 0.05;

/// Transition-free run, in bit periods, treated as signal loss.
const DROPOUT_BITS: f32 = 3.0;

/// Per-sample envelope decay toward the current level.
const ENV_DECAY: f32 = 2e-4;

/// Comparator hysteresis as a fraction of the tracked peak-to-peak swing.
const HYSTERESIS_FRACTION: f32 = 0.125;

/// Hysteresis floor, in 8-bit sample units, so idle noise cannot toggle the
/// comparator.
const MIN_HYSTERESIS: f32 = 4.0;

/// One decoded 80-bit frame and the stream position where its sync word
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LtcFrame {
    data: u64,
    position: u64,
}

impl LtcFrame {
    /// Absolute sample index at which this frame was recognized.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// BCD time fields of the frame.
    pub fn timecode(&self) -> Timecode {
        let d = self.data;
        Timecode {
            hours: 10 * field(d, 56, 2) + field(d, 48, 4),
            minutes: 10 * field(d, 40, 3) + field(d, 32, 4),
            seconds: 10 * field(d, 24, 3) + field(d, 16, 4),
            frames: 10 * field(d, 8, 2) + field(d, 0, 4),
        }
    }

    /// Drop-frame counting flag (frame bit 10).
    pub fn drop_frame(&self) -> bool {
        self.data >> 10 & 1 == 1
    }
}

fn field(data: u64, lo: u32, len: u32) -> u8 {
    ((data >> lo) & ((1 << len) - 1)) as u8
}

/// Stateful LTC decoder with a push/pull interface.
///
/// Samples are the high bytes of 16-bit audio, so negative levels arrive
/// wrapped; the comparator folds them back to signed before thresholding.
/// Biphase mark carries no polarity, so an inverted input decodes the same.
pub struct LtcDecoder {
    queue: VecDeque<LtcFrame>,
    queue_len: usize,
    // comparator
    env_min: f32,
    env_max: f32,
    high: bool,
    run: f32,
    // biphase state
    period: f32,
    half_pending: bool,
    reg: u128,
    position: u64,
}

impl LtcDecoder {
    /// `samples_per_frame` seeds the bit-period estimate, e.g. 1920 for
    /// 48 kHz audio carrying 25 fps timecode.
    pub fn new(samples_per_frame: u32, queue_len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(queue_len),
            queue_len: queue_len.max(1),
            env_min: 0.0,
            env_max: 0.0,
            high: false,
            run: 0.0,
            period: samples_per_frame.max(FRAME_BITS) as f32 / FRAME_BITS as f32,
            half_pending: false,
            reg: 0,
            position: 0,
        }
    }

    /// Push one block of 8-bit samples. Completed frames queue up for `read`;
    /// never blocks.
    pub fn write(&mut self, samples: &[u8]) {
        for &raw in samples {
            let level = f32::from(raw as i8);
            self.track_envelope(level);

            let mid = (self.env_max + self.env_min) * 0.5;
            let hysteresis =
                ((self.env_max - self.env_min) * HYSTERESIS_FRACTION).max(MIN_HYSTERESIS);
            let crossed = if self.high {
                level < mid - hysteresis
            } else {
                level > mid + hysteresis
            };

            self.run += 1.0;
            if crossed {
                self.high = !self.high;
                let interval = self.run;
                self.run = 0.0;
                self.bit_interval(interval);
            } else if self.run > self.period * DROPOUT_BITS && (self.reg != 0 || self.half_pending)
            {
                // Signal went quiet mid-frame; nothing in the register survives.
                self.half_pending = false;
                self.reg = 0;
            }
            self.position += 1;
        }
    }

    /// Pop the oldest completed frame, if any. Never blocks.
    pub fn read(&mut self) -> Option<LtcFrame> {
        self.queue.pop_front()
    }

    fn track_envelope(&mut self, level: f32) {
        if level > self.env_max {
            self.env_max = level;
        } else {
            self.env_max -= (self.env_max - level) * ENV_DECAY;
        }
        if level < self.env_min {
            self.env_min = level;
        } else {
            self.env_min += (level - self.env_min) * ENV_DECAY;
        }
    }

    fn bit_interval(&mut self, interval: f32) {
        if interval < self.period * HALF_BIT_LIMIT {
            if self.half_pending {
                self.half_pending = false;
                self.period += (interval * 2.0 - self.period) * PERIOD_ALPHA;
                self.push_bit(true);
            } else {
                self.half_pending = true;
            }
        } else if interval < self.period * FULL_BIT_LIMIT {
            // A stray half interval cannot pair with a full one; the zero
            // resynchronizes the half-bit phase.
            self.half_pending = false;
            self.period += (interval - self.period) * PERIOD_ALPHA;
            self.push_bit(false);
        } else {
            self.half_pending = false;
            self.reg = 0;
        }
    }

    fn push_bit(&mut self, bit: bool) {
        self.reg = (self.reg >> 1) | (u128::from(bit) << (FRAME_BITS - 1));
        if (self.reg >> 64) as u16 == SYNC_WORD {
            if self.queue.len() < self.queue_len {
                self.queue.push_back(LtcFrame {
                    data: self.reg as u64,
                    position: self.position,
                });
            }
            self.reg = 0;
        }
    }
}
