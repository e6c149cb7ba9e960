mod app;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use platform::desktop::paths::{default_logs_dir, default_webview_data_dir};

fn main() {
    let logs_dir = match default_logs_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            eprintln!("Warning: Could not initialize file logging: {err:#}");
            None
        }
    };
    logging::init(logs_dir);

    let webview_data_dir = match default_webview_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "cannot prepare webview data directory");
            std::process::exit(1);
        }
    };
    tracing::info!(data_dir = %webview_data_dir.display(), "starting csv editor");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("CSV Editor"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
