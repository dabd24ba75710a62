//! Capture-device resolution and the blocking stream session.
//!
//! The stream callback owns the pipeline; this thread only parks on a bounded
//! error channel, which doubles as the stream-liveness poll.

use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, StreamConfig};
use crossbeam_channel::{bounded, RecvTimeoutError};
use std::io::Write;
use std::time::Duration;

use super::pipeline::BlockPipeline;
use super::BLOCK_SAMPLES;
use crate::log_debug;

/// Idle poll interval while the stream runs; not latency sensitive.
const STREAM_POLL_MS: u64 = 100;

/// Names of the capture devices the host exposes, in `--device` index order.
///
/// `LTCWATCH_TEST_DEVICES` (comma-separated names) overrides the host list so
/// the CLI paths can be exercised without audio hardware.
pub fn input_device_names() -> Result<Vec<String>> {
    if let Ok(raw) = std::env::var("LTCWATCH_TEST_DEVICES") {
        return Ok(raw
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect());
    }
    let host = cpal::default_host();
    let devices = host.input_devices().context("no input devices available")?;
    let mut names = Vec::new();
    for device in devices {
        if let Ok(name) = device.name() {
            names.push(name);
        }
    }
    Ok(names)
}

/// Capture device selected by index, ready to open a stream.
pub struct Listener {
    device: cpal::Device,
    index: usize,
}

impl Listener {
    /// Resolve the device at `index`, validated against the same enumeration
    /// `--list` prints.
    pub fn by_index(index: usize) -> Result<Self> {
        let names = input_device_names()?;
        if index >= names.len() {
            return Err(anyhow!("Invalid device index: {index}"));
        }
        let host = cpal::default_host();
        let device = host
            .input_devices()
            .context("no input devices available")?
            .nth(index)
            .ok_or_else(|| anyhow!("Invalid device index: {index}"))?;
        Ok(Self { device, index })
    }

    /// Name of the resolved capture device.
    pub fn device_name(&self) -> String {
        self.device
            .name()
            .unwrap_or_else(|_| "Unknown Device".to_string())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Open the mono 16-bit stream and block until it fails or the process is
    /// interrupted. The pipeline moves into the callback; a block, once
    /// started, always runs to completion.
    pub fn run<W>(&self, mut pipeline: BlockPipeline<W>, sample_rate: u32) -> Result<()>
    where
        W: Write + Send + 'static,
    {
        let config = StreamConfig {
            channels: 1,
            sample_rate: SampleRate(sample_rate),
            buffer_size: BufferSize::Fixed(BLOCK_SAMPLES),
        };
        log_debug(&format!(
            "opening capture stream: device={} rate={sample_rate}Hz block={BLOCK_SAMPLES}",
            self.device_name()
        ));

        let (err_tx, err_rx) = bounded::<cpal::StreamError>(1);
        let err_fn = move |err| {
            let _ = err_tx.try_send(err);
        };
        let stream = self
            .device
            .build_input_stream(
                &config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| pipeline.process_block(data),
                err_fn,
                None,
            )
            .context("failed to open capture stream")?;
        stream.play().context("failed to start capture stream")?;
        tracing::info!(device = %self.device_name(), sample_rate, "capture stream running");

        loop {
            match err_rx.recv_timeout(Duration::from_millis(STREAM_POLL_MS)) {
                Ok(err) => {
                    tracing::error!(%err, "capture stream failed");
                    return Err(anyhow!("audio stream error: {err}"));
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
    }
}
