use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> = Mutex::new(None);

pub fn init(verbose: bool, log_file: Option<&Path>) {
    let stderr_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(path).unwrap_or_else(|e| {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        });

        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        // Store guard to keep file logger alive
        if let Ok(mut g) = LOG_GUARD.lock() {
            *g = Some(guard);
        }

        let file_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::DEBUG.into())
            .from_env_lossy();

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(file_filter);

        registry.with(file_layer).init();
    } else {
        registry.init();
    }
}
