//! Command-line parsing and validation helpers.

mod validation;

use clap::Parser;

/// Reference capture rate; LTC rigs are overwhelmingly 48 kHz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Nominal timecode frame rate used to size the decoder's bit-period guess.
pub const DEFAULT_FPS: u32 = 25;

pub use validation::{MAX_FPS, MAX_SAMPLE_RATE, MIN_FPS, MIN_SAMPLE_RATE};

/// CLI options for the LTC monitor. Validated values keep the decoder and
/// stream setup sane before any device is touched.
#[derive(Debug, Parser, Clone)]
#[command(about = "Live LTC monitor: decode SMPTE timecode from an audio input", author, version)]
pub struct AppConfig {
    /// Print detected capture devices and exit
    #[arg(long = "list", default_value_t = false)]
    pub list: bool,

    /// Capture device index, as printed by --list
    #[arg(long = "device", value_name = "N")]
    pub device: Option<usize>,

    /// Initial gain multiplier applied before level metering
    #[arg(long = "gain", value_name = "X", default_value_t = 1.0, allow_negative_numbers = true)]
    pub gain: f32,

    /// Nudge the gain toward the target loudness band automatically
    #[arg(long = "auto-gain", default_value_t = false)]
    pub auto_gain: bool,

    /// Print per-block RMS and gain annotations
    #[arg(long = "show-rms", default_value_t = false)]
    pub show_rms: bool,

    /// Capture sample rate in Hz
    #[arg(long = "sample-rate", value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Expected timecode frames per second
    #[arg(long = "fps", value_name = "N", default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Enable debug file logging
    #[arg(long = "logs", env = "LTCWATCH_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "LTCWATCH_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}
