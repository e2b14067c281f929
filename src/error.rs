//! Error types for envswitch operations.
//!
//! This module defines [`SettingsError`], the error type returned by
//! registration and resolution, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `DuplicateRegistration` and `MultipleMatch` are start-up misconfigurations
//!   and are expected to abort whatever is wiring providers together
//! - `InvalidProvider` is logged and swallowed by the controller; it only
//!   surfaces from constructors such as [`RuleProvider::from_spec`]
//! - `NoMatch` means a required setting has no source at all
//!
//! [`RuleProvider::from_spec`]: crate::rules::RuleProvider::from_spec

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envswitch operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The identical provider instance was registered twice.
    #[error("Provider already registered: {provider}")]
    DuplicateRegistration { provider: String },

    /// A second provider detected its environment while one was already active.
    #[error("Multiple environments matched: '{candidate}' detected while '{active}' is active")]
    MultipleMatch { active: String, candidate: String },

    /// The object handed to registration cannot act as a provider.
    #[error("Invalid provider '{provider}': {message}")]
    InvalidProvider { provider: String, message: String },

    /// No source could supply a required setting.
    #[error("No value for setting '{name}'")]
    NoMatch { name: String },

    /// Providers file not found at the expected location.
    #[error("Providers file not found: {path}")]
    ProvidersNotFound { path: PathBuf },

    /// Failed to parse a providers file.
    #[error("Failed to parse providers at {path}: {message}")]
    ProvidersParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SettingsError {
    /// Shorthand for a [`SettingsError::NoMatch`] on `name`.
    pub fn no_match(name: impl Into<String>) -> Self {
        Self::NoMatch { name: name.into() }
    }
}

/// Result type alias for envswitch operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_displays_provider() {
        let err = SettingsError::DuplicateRegistration {
            provider: "LaptopSettings".into(),
        };
        assert!(err.to_string().contains("LaptopSettings"));
    }

    #[test]
    fn multiple_match_displays_both_providers() {
        let err = SettingsError::MultipleMatch {
            active: "kristine-dev".into(),
            candidate: "lee-dev".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("kristine-dev"));
        assert!(msg.contains("lee-dev"));
    }

    #[test]
    fn invalid_provider_displays_provider_and_message() {
        let err = SettingsError::InvalidProvider {
            provider: "staging".into(),
            message: "no detection rules".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("staging"));
        assert!(msg.contains("no detection rules"));
    }

    #[test]
    fn no_match_displays_setting_name() {
        let err = SettingsError::no_match("DBPassword");
        assert!(matches!(err, SettingsError::NoMatch { .. }));
        assert!(err.to_string().contains("DBPassword"));
    }

    #[test]
    fn providers_parse_error_displays_path_and_message() {
        let err = SettingsError::ProvidersParseError {
            path: PathBuf::from("/envswitch.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/envswitch.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(SettingsError::no_match("HOST"))
        }
        assert!(returns_error().is_err());
    }
}
