#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::{error, info, warn};

use signup_gui::{
    app::{
        config::{Config, ConfigError, API_URL_ENV},
        App,
    },
    args::{self, parse_args},
    dir::SignupDirectory,
    logger::{parse_log_level, setup_logger},
    services::registration::RegistrationClient,
    VERSION,
};
use signup_ui::{component::text, font, theme};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args::datadir(&args) {
        Some(dir) => dir.clone(),
        None => SignupDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match Config::from_file(&datadir.config_file()) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => return Err(e.into()),
    };

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();
    info!("signup-gui {} using datadir {}", VERSION, datadir.path().display());

    let env_api_url = std::env::var(API_URL_ENV).ok();
    let registration = config.registration(args::api_url(&args), env_api_url.as_deref())?;
    info!("Registration API at {}", registration.base_url);
    let client = RegistrationClient::new(registration)?;

    let settings = Settings {
        id: Some("Signup".to_string()),
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 900.0,
            height: 760.0,
        },
        min_size: Some(Size {
            width: 480.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(client))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush stdout: {}", e);
        }
        std::process::exit(1);
    }));
}
