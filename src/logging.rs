//! Tracing setup.
//!
//! Console output honours `RUST_LOG` (default `warn`). A second layer writes
//! `debug` and above to `<data dir>/logs/csv-editor.log`, rotated daily.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init(logs_dir: Option<PathBuf>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = logs_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "csv-editor.log");
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
