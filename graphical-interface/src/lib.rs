use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

use chrono::Local;
use logger::{Color, Logger};
use viewport::{
    ConfigurationError, EnvOverride, FileConfig, MapHost, StyleCatalog, ViewerOptions,
    CLUJ_BOUNDS,
};

mod camera;
pub mod errors;
mod location;
mod map;
mod plugins;
mod sources;
mod state;
mod types;
mod widgets;

pub use errors::InterfaceError;
use map::MapApp;

/// Reads the configuration file, letting `MAPTILER_KEY` override the stored key.
/// A missing file is treated as empty, so the environment alone can configure the viewer.
pub(crate) fn load_config(path: &Path) -> Result<EnvOverride<FileConfig>, ConfigurationError> {
    let file = if path.exists() {
        FileConfig::from_path(path)?
    } else {
        FileConfig::default()
    };
    Ok(EnvOverride::new(file))
}

/// Starts the viewer with the configuration stored at `config_path` and blocks
/// until the window is closed.
///
/// # Errors
/// Fails before opening the window when the key is missing or a placeholder, an
/// option is malformed, or the log cannot be created. A fatal error raised while
/// running (a configuration reload with a bad key) is returned once the window closes.
pub fn run(config_path: &Path) -> Result<(), InterfaceError> {
    let config = load_config(config_path)?;
    let options = ViewerOptions::from_source(&config)?;

    let session = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let logger = Logger::new(Path::new(&options.log_dir), &session, true)?;

    let (host, startup) = match MapHost::new(StyleCatalog::maptiler(), CLUJ_BOUNDS, options, &config)
    {
        Ok(created) => created,
        Err(error) => {
            let _ = logger.error(&error.to_string());
            return Err(error.into());
        }
    };
    let _ = logger.info(
        &format!(
            "Viewer started (follow clamped to box: {})",
            host.options().clamp_follow_to_box
        ),
        Color::Green,
    );

    let fatal = Rc::new(RefCell::new(None));
    let app_fatal = Rc::clone(&fatal);
    let config_path: PathBuf = config_path.to_path_buf();

    eframe::run_native(
        "Bounded Map",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(MapApp::new(
                cc.egui_ctx.clone(),
                host,
                startup,
                logger,
                config_path,
                app_fatal,
            )))
        }),
    )?;

    let stopped_with = fatal.borrow_mut().take();
    match stopped_with {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
