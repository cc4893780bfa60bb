use std::{error::Error, fs::File, str::FromStr, sync::Arc};

use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

use crate::dir::SignupDirectory;

pub const GUI_LOG_FILE_NAME: &str = "signup-gui.log";

/// Targets of the GUI and HTTP stacks, too verbose to be useful.
const FILTERED_TARGETS: [&str; 19] = [
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "rustls",
    "hyper",
    "reqwest",
    "tokio",
];

fn is_filtered(target: &str) -> bool {
    FILTERED_TARGETS
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &SignupDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(datadir.log_file())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !is_filtered(metadata.target())
                })),
        )
        .init();

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
