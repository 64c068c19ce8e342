use std::{
    fs::{File, OpenOptions},
    path::PathBuf,
};

use tracing_subscriber::{prelude::*, EnvFilter};

/// Directory for log files. Unset means no logging at all, since the
/// terminal belongs to the finder UI while it runs.
pub const LOG_DIR_ENV: &str = "SIFT_LOG_DIR";

pub fn init(verbose: bool) {
    let Some(log_dir) = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_path = log_dir.join(format!("sift.{}.log", std::process::id()));
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    subscriber(file, verbose).init();

    tracing::info!(path = ?log_path, "tracing initialized");
}

fn subscriber(file: File, verbose: bool) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sift=debug,sift_core=debug,sift_tui=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(file_layer)
}
