mod app;
mod config;
mod error;
mod form;
mod quick_add;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config);

    let mut app = app::App::new(config)?;
    app.run()?;
    Ok(())
}

/// Logs go to a file so they never draw over the alternate screen. Without a
/// writable log file the dashboard runs silently.
fn init_tracing(config: &config::AppConfig) {
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally_tui={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
