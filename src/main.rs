//! Stasyan main entry point
//!
//! Sets up logging, loads the configuration, creates the speech engine and
//! hands everything to the window's event loop.

use anyhow::Context;
use log::{error, info};
use stasyan::state::config::Config;
use stasyan::state::AppContext;
use std::process;

fn main() {
    let debug_mode = std::env::args()
        .skip(1)
        .any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to stasyan.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("stasyan.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open stasyan.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "Stasyan version {} starting (debug mode, logging to stasyan.log)",
            stasyan::VERSION
        );
    } else {
        // Normal mode: RUST_LOG if set, warnings otherwise
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    info!("Configuration from {:?}", config.path());

    let ctx = AppContext::new(config).context("Failed to start speech engine")?;
    info!(
        "{} voices available, active voice: {:?}",
        ctx.catalog.len(),
        ctx.active_voice.as_ref().map(|v| &v.name)
    );

    stasyan::ui::run(ctx).context("Main window closed with an error")?;

    info!("Window closed, exiting");
    Ok(())
}
