//! Providers file loading.
//!
//! A providers file lists environments by name. Environments are registered
//! in name order, so a double match always reports the same pair.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::provider::{EnvironmentSpec, RuleProvider};
use crate::controller::Controller;
use crate::error::{Result, SettingsError};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_PROVIDERS_FILE: &str = "envswitch.yml";

/// Parsed providers file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersFile {
    /// Make environment variables trump providers regardless of detection.
    #[serde(default)]
    pub environ_trump: bool,

    /// Environments by name.
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentSpec>,
}

/// Load and parse a providers file.
///
/// # Errors
///
/// Returns `ProvidersNotFound` if the file doesn't exist.
/// Returns `ProvidersParseError` if the YAML is invalid.
pub fn load_providers_file(path: &Path) -> Result<ProvidersFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SettingsError::ProvidersNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SettingsError::Io(e)
        }
    })?;

    parse_providers(&content, path)
}

/// Parse YAML content into a [`ProvidersFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_providers(content: &str, source_path: &Path) -> Result<ProvidersFile> {
    if content.trim().is_empty() {
        return Ok(ProvidersFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| SettingsError::ProvidersParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Register every environment in `file` with `controller`.
///
/// Rule providers read environment variables through the controller's
/// lookup. Invalid environments are logged and skipped.
///
/// # Errors
///
/// Returns `MultipleMatch` if more than one environment is detected.
pub fn register_providers(controller: &mut Controller, file: &ProvidersFile) -> Result<()> {
    if file.environ_trump {
        controller.set_environ_trump(true);
    }

    for (name, spec) in &file.environments {
        debug!("Registering environment {}", name);
        let env_lookup = controller.env_lookup();
        controller.register_factory(|| {
            RuleProvider::from_spec(name.as_str(), spec.clone())
                .map(|provider| provider.with_env_lookup(env_lookup))
        })?;
    }

    Ok(())
}
