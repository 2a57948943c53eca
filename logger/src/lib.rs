use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info(_) => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn ansi_code(&self) -> &'static str {
        match self {
            LogLevel::Info(color) => color.to_ansi_code(),
            LogLevel::Warn => "\x1b[93m",
            LogLevel::Error => "\x1b[91m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Appends timestamped lines to `map_<session>.log`, optionally echoing them
/// to the console in color.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
    to_console: bool,
}

impl Logger {
    /// Creates a new `Logger` for one viewer session.
    ///
    /// # Parameters
    /// - `log_dir`: Directory holding the log file. Created if it does not exist.
    /// - `session`: Name included in the log file name.
    /// - `to_console`: Whether every line is also printed to stdout.
    ///
    /// # Errors
    /// - `LoggerError::InvalidPath` if `log_dir` exists but is not a directory.
    /// - `LoggerError::IoError` if the directory or the file cannot be created.
    pub fn new(log_dir: &Path, session: &str, to_console: bool) -> Result<Self, LoggerError> {
        if log_dir.exists() && !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory",
                log_dir.display()
            )));
        }
        std::fs::create_dir_all(log_dir)?;

        let log_file = log_dir.join(format!("map_{}.log", sanitize(session)));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file,
            to_console,
        })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Writes one line at `level`.
    pub fn log(&self, level: LogLevel, message: &str) -> Result<(), LoggerError> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if self.to_console {
            print!("{}{}\x1b[0m", level.ansi_code(), line);
            io::stdout().flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    pub fn info(&self, message: &str, color: Color) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message)
    }

    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message)
    }
}

fn sanitize(session: &str) -> String {
    session
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
