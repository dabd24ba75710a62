use anyhow::{anyhow, Result};

use super::AppConfig;

pub const MIN_SAMPLE_RATE: u32 = 8_000;
pub const MAX_SAMPLE_RATE: u32 = 192_000;
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 60;

impl AppConfig {
    /// Check flag ranges before any audio resource is acquired.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(anyhow!(
                "--sample-rate must be between {MIN_SAMPLE_RATE} and {MAX_SAMPLE_RATE} Hz"
            ));
        }
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            return Err(anyhow!("--fps must be between {MIN_FPS} and {MAX_FPS}"));
        }
        Ok(())
    }

    /// The selected device index, or the usage hint the original tool prints
    /// when none was given.
    pub fn require_device(&self) -> Result<usize> {
        self.device
            .ok_or_else(|| anyhow!("no capture device specified; use --list to see available devices"))
    }

    /// Initial gain with non-positive and non-finite values replaced by 1.0.
    pub fn effective_gain(&self) -> f32 {
        if self.gain.is_finite() && self.gain > 0.0 {
            self.gain
        } else {
            1.0
        }
    }

    /// Audio samples spanning one timecode frame at the configured rates.
    pub fn samples_per_frame(&self) -> u32 {
        (self.sample_rate / self.fps).max(1)
    }
}
