use std::fmt;

use crate::config::{ConfigSource, MAPTILER_KEY};
use crate::errors::ConfigurationError;

const PLACEHOLDER: &str = "placeholder";

/// A MapTiler key that passed validation: non-empty and not the placeholder literal.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedKey(String);

impl ResolvedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ResolvedKey {
    // Keeps the credential out of debug output and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedKey(***)")
    }
}

/// Reads the MapTiler key from `source` and validates it.
///
/// # Errors
/// - `ConfigurationError::MissingKey` if the entry is absent or empty.
/// - `ConfigurationError::PlaceholderKey` if the value is `placeholder`, in any case.
pub fn resolve_key<S: ConfigSource + ?Sized>(source: &S) -> Result<ResolvedKey, ConfigurationError> {
    validate_key(source.value(MAPTILER_KEY))
}

/// Validates a raw key value without reading any configuration.
pub fn validate_key(raw: Option<String>) -> Result<ResolvedKey, ConfigurationError> {
    let key = match raw {
        Some(key) if !key.is_empty() => key,
        _ => return Err(ConfigurationError::MissingKey),
    };

    if key.eq_ignore_ascii_case(PLACEHOLDER) {
        return Err(ConfigurationError::PlaceholderKey);
    }

    Ok(ResolvedKey(key))
}
