//! Live LTC monitor entrypoint: resolve a capture device, open the stream,
//! and print decoded timecode until the stream dies or the operator
//! interrupts the process.

mod cli_utils;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io;
use std::process;

use ltcwatch::audio::{BlockPipeline, Listener};
use ltcwatch::config::AppConfig;
use ltcwatch::ltc::{LtcDecoder, DEFAULT_QUEUE_LEN};
use ltcwatch::{init_logging, init_tracing, log_debug, log_file_path};

fn main() -> Result<()> {
    let config = match AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // clap exits 2 on bad arguments by default; a bad flag is a user
            // error like any other here and exits 1, while --help and
            // --version stay successful.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if config.list {
        cli_utils::list_input_devices()?;
        return Ok(());
    }

    config.validate()?;
    let device_index = config.require_device()?;

    init_logging(&config);
    init_tracing(&config);
    log_debug("=== ltcwatch started ===");
    log_debug(&format!("log file: {:?}", log_file_path()));

    let gain = config.effective_gain();
    if gain != config.gain {
        log_debug(&format!("gain {} coerced to {gain}", config.gain));
    }

    let listener = Listener::by_index(device_index)?;
    println!("Using device {}: {}", listener.index(), listener.device_name());

    let decoder = LtcDecoder::new(config.samples_per_frame(), DEFAULT_QUEUE_LEN);
    let pipeline = BlockPipeline::new(decoder, gain, config.auto_gain, config.show_rms, io::stdout());

    println!(
        "Listening for LTC (gain={gain:.2}, auto-gain={}, RMS={})...",
        if config.auto_gain { "ON" } else { "OFF" },
        if config.show_rms { "ON" } else { "OFF" },
    );

    listener.run(pipeline, config.sample_rate)
}
