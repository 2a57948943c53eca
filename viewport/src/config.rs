use std::collections::HashMap;
use std::env;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigurationError;

/// Name of the configuration entry holding the MapTiler key.
pub const MAPTILER_KEY: &str = "MapTilerKey";
/// Environment variable that overrides [`MAPTILER_KEY`].
pub const MAPTILER_KEY_ENV: &str = "MAPTILER_KEY";
/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "viewer_config.csv";

const CLAMP_FOLLOW_TO_BOX: &str = "ClampFollowToBox";
const MINIMUM_ZOOM_LEVEL: &str = "MinimumZoomLevel";
const LOG_DIR: &str = "LogDir";

const DEFAULT_MINIMUM_ZOOM: f64 = 13.0;
const DEFAULT_LOG_DIR: &str = "logs";

/// Anything the viewer can read named string settings from.
pub trait ConfigSource {
    fn value(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

/// Settings loaded from a two-column CSV file with a `key,value` header.
///
/// ```text
/// key,value
/// MapTilerKey,abcdef
/// ClampFollowToBox,false
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileConfig {
    values: HashMap<String, String>,
}

impl FileConfig {
    /// Reads the settings stored at `path`.
    ///
    /// # Errors
    /// - `ConfigurationError::Unreadable` if the file cannot be opened or a row
    ///   does not have both columns.
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| {
                ConfigurationError::Unreadable(format!("{}: {}", path.display(), e))
            })?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, ConfigurationError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, ConfigurationError> {
        let mut values = HashMap::new();
        for record in reader.deserialize::<ConfigEntry>() {
            let entry = record.map_err(|e| ConfigurationError::Unreadable(e.to_string()))?;
            values.insert(entry.key, entry.value);
        }
        Ok(Self { values })
    }
}

impl ConfigSource for FileConfig {
    fn value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// In-memory settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Lets the `MAPTILER_KEY` environment variable take precedence over the
/// wrapped source's `MapTilerKey`. An empty variable counts as unset.
pub struct EnvOverride<S> {
    inner: S,
}

impl<S: ConfigSource> EnvOverride<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ConfigSource> ConfigSource for EnvOverride<S> {
    fn value(&self, name: &str) -> Option<String> {
        if name == MAPTILER_KEY {
            if let Some(var) = env::var(MAPTILER_KEY_ENV).ok().filter(|v| !v.is_empty()) {
                return Some(var);
            }
        }
        self.inner.value(name)
    }
}

/// Viewer behavior read from the configuration, next to the key.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Whether location-follow re-centering must also stay inside the bounding box.
    pub clamp_follow_to_box: bool,
    pub minimum_zoom: f64,
    pub log_dir: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            clamp_follow_to_box: false,
            minimum_zoom: DEFAULT_MINIMUM_ZOOM,
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl ViewerOptions {
    /// Reads the options from `source`, falling back to the defaults for absent entries.
    ///
    /// # Errors
    /// - `ConfigurationError::InvalidValue` if an entry is present but malformed.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, ConfigurationError> {
        let mut options = Self::default();

        if let Some(raw) = source.value(CLAMP_FOLLOW_TO_BOX) {
            options.clamp_follow_to_box = match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => return Err(invalid(CLAMP_FOLLOW_TO_BOX, &raw)),
            };
        }

        if let Some(raw) = source.value(MINIMUM_ZOOM_LEVEL) {
            let zoom: f64 = raw.parse().map_err(|_| invalid(MINIMUM_ZOOM_LEVEL, &raw))?;
            if !(0.0..=26.0).contains(&zoom) {
                return Err(invalid(MINIMUM_ZOOM_LEVEL, &raw));
            }
            options.minimum_zoom = zoom;
        }

        if let Some(raw) = source.value(LOG_DIR) {
            if raw.is_empty() {
                return Err(invalid(LOG_DIR, &raw));
            }
            options.log_dir = raw;
        }

        Ok(options)
    }
}

fn invalid(name: &str, value: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}
