use std::env;
use std::path::PathBuf;

use viewport::config::DEFAULT_CONFIG_FILE;

/// Opens the bounded map viewer.
///
/// # Usage
///
/// ```sh
/// cargo run -- [config_file]
/// ```
///
/// The configuration file defaults to `viewer_config.csv` in the current
/// directory; `MAPTILER_KEY` overrides the key stored in it. The viewer refuses
/// to start without a real MapTiler key.
fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        return Err("Usage: program [config_file]".to_string());
    }

    let config_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    graphical_interface::run(&config_path).map_err(|e| e.to_string())
}
