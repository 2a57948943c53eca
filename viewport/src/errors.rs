use std::fmt::{self, Display};

/// Errors raised while reading the viewer configuration.
///
/// The possible errors are:
///
/// - `MissingKey`: the MapTiler key is absent or empty.
/// - `PlaceholderKey`: the MapTiler key was left as the `placeholder` literal.
/// - `InvalidValue`: an option is present but cannot be parsed.
/// - `Unreadable`: the configuration file could not be opened or decoded.
///
/// All of them are fatal at startup: the caller is expected to stop rather than
/// show a map without a usable credential.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    MissingKey,
    PlaceholderKey,
    InvalidValue { name: String, value: String },
    Unreadable(String),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingKey => write!(
                f,
                "[MissingKey]: Failed to read the MapTiler key from the configuration"
            ),
            ConfigurationError::PlaceholderKey => write!(
                f,
                "[PlaceholderKey]: Please enter a correct MapTiler key in the configuration"
            ),
            ConfigurationError::InvalidValue { name, value } => {
                write!(f, "[InvalidValue]: '{}' is not a valid {}", value, name)
            }
            ConfigurationError::Unreadable(msg) => write!(f, "[Unreadable]: {}", msg),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A composed style URL that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlParseError {
    pub input: String,
    pub reason: String,
}

impl Display for UrlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[UrlParseError]: '{}' ({})", self.input, self.reason)
    }
}

impl std::error::Error for UrlParseError {}

/// Failures reported by the platform location service. None of them stop tracking.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    PermissionDenied,
    SignalLost,
    Other(String),
}

impl Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => {
                write!(f, "[PermissionDenied]: Location permission was denied")
            }
            LocationError::SignalLost => write!(f, "[SignalLost]: Location signal was lost"),
            LocationError::Other(msg) => write!(f, "[LocationError]: {}", msg),
        }
    }
}

impl std::error::Error for LocationError {}

/// Top level error of the viewport crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    Configuration(ConfigurationError),
    UrlParse(UrlParseError),
    /// The style catalog was built with no entries.
    EmptyCatalog,
}

impl Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            ViewportError::UrlParse(e) => write!(f, "Style URL Error: {}", e),
            ViewportError::EmptyCatalog => write!(f, "[EmptyCatalog]: The style catalog has no entries"),
        }
    }
}

impl std::error::Error for ViewportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewportError::Configuration(e) => Some(e),
            ViewportError::UrlParse(e) => Some(e),
            ViewportError::EmptyCatalog => None,
        }
    }
}

impl From<ConfigurationError> for ViewportError {
    fn from(error: ConfigurationError) -> Self {
        ViewportError::Configuration(error)
    }
}

impl From<UrlParseError> for ViewportError {
    fn from(error: UrlParseError) -> Self {
        ViewportError::UrlParse(error)
    }
}
