use std::fs::File;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber. The alternate screen owns the
/// terminal while the interface runs, so events only go somewhere when a
/// log file was requested; otherwise they are discarded. `MAQUETTE_LOG`
/// overrides the default filter either way.
pub fn init(debug_log: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_env("MAQUETTE_LOG").unwrap_or_else(|_| EnvFilter::new("maquette=debug"));

    match debug_log {
        Some(path) => {
            let log_file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(log_file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(std::io::sink),
                )
                .init();
        }
    }

    Ok(())
}
