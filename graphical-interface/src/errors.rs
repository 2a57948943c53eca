use std::fmt::{self, Display};

use logger::LoggerError;
use viewport::{ConfigurationError, ViewportError};

/// Errors that stop the viewer.
#[derive(Debug)]
pub enum InterfaceError {
    /// The map host refused to start or hit a fatal configuration change.
    Viewport(ViewportError),
    /// The session log could not be opened.
    Logger(LoggerError),
    /// The window could not be created.
    Window(String),
}

impl Display for InterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceError::Viewport(e) => write!(f, "{}", e),
            InterfaceError::Logger(e) => write!(f, "Logger Error: {}", e),
            InterfaceError::Window(msg) => write!(f, "Window Error: {}", msg),
        }
    }
}

impl std::error::Error for InterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InterfaceError::Viewport(e) => Some(e),
            InterfaceError::Logger(e) => Some(e),
            InterfaceError::Window(_) => None,
        }
    }
}

impl From<ViewportError> for InterfaceError {
    fn from(error: ViewportError) -> Self {
        InterfaceError::Viewport(error)
    }
}

impl From<ConfigurationError> for InterfaceError {
    fn from(error: ConfigurationError) -> Self {
        InterfaceError::Viewport(ViewportError::Configuration(error))
    }
}

impl From<LoggerError> for InterfaceError {
    fn from(error: LoggerError) -> Self {
        InterfaceError::Logger(error)
    }
}

impl From<eframe::Error> for InterfaceError {
    fn from(error: eframe::Error) -> Self {
        InterfaceError::Window(error.to_string())
    }
}
