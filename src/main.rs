mod config;
mod hid;
mod models;
mod utils;

use std::env;
use std::process;

use log::{error, info};

use config::DeviceConfig;
use hid::{decode_report, open_device, trigger_and_fetch};
use utils::format_sample;

fn main() {
    // A .env file may carry RUST_LOG and HT2000_DEVICE
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let config = match DeviceConfig::from_args(env::args()) {
        Some(config) => config,
        None => {
            config::print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        error!("Readout failed: {}", e);
        process::exit(1);
    }
}

/// One complete readout: open, exchange, decode, print.
fn run(config: &DeviceConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Reading feature report from {}", config.device_path);

    // The handle is closed on drop, whichever way this function leaves.
    let device = open_device(&config.device_path)?;
    let report = trigger_and_fetch(&device)?;
    let sample = decode_report(&report)?;

    println!("{}", format_sample(&sample));

    Ok(())
}
