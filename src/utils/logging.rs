//! Logging utilities
//!
//! The terminal belongs to the UI, so everything goes to a log file in the
//! data directory. `RUST_LOG` wins over `CALCTUI_LOGLEVEL`, which wins over
//! [`default_directives`].

use std::{env, fs};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither environment variable is set.
/// HTTP internals stay quiet unless asked for.
pub fn default_directives() -> String {
    format!("{}=info,reqwest=warn,hyper=warn", env!("CARGO_CRATE_NAME"))
}

fn env_filter() -> EnvFilter {
    let directives = env::var("RUST_LOG")
        .or_else(|_| env::var(LOG_ENV.as_str()))
        .unwrap_or_else(|_| default_directives());

    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {directives:?}: {e}");
        EnvFilter::new(default_directives())
    })
}

pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = fs::File::create(&log_path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());
    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    log::info!("logging to {}", log_path.display());
    Ok(())
}
