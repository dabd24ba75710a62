//! Live linear-timecode monitor.
//!
//! Captures mono audio from a selected input device, meters it, nudges the
//! gain toward a target loudness band, and prints decoded LTC stamps as the
//! decoder completes frames.

pub mod audio;
pub mod config;
mod logging;
pub mod ltc;
mod telemetry;

pub use logging::{init_logging, log_debug, log_file_path};
pub use telemetry::init_tracing;
