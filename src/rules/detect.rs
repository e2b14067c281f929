//! Detection rules.
//!
//! A rule holds one or more criteria. Every criterion present in a rule must
//! hold for the rule to match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A detection rule: environment variable, marker path and/or OS checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectRule {
    /// The environment variable to check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    /// If set, the variable must equal this value. If None, just checks presence
    /// (an empty variable is present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// A file or directory that must exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Operating system (`linux`, `macos`, `windows`) or family (`unix`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

impl DetectRule {
    /// Rule matching when `env` is set to anything, including an empty string.
    pub fn env(name: impl Into<String>) -> Self {
        Self {
            env: Some(name.into()),
            ..Self::default()
        }
    }

    /// Rule matching when `env` equals `value`.
    pub fn env_equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            env: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Rule matching when `path` exists.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Rule matching on the operating system.
    pub fn os(os: impl Into<String>) -> Self {
        Self {
            os: Some(os.into()),
            ..Self::default()
        }
    }

    /// Check that the rule can be evaluated.
    pub fn validate(&self) -> Result<(), String> {
        if self.env.is_none() && self.path.is_none() && self.os.is_none() {
            return Err("detection rule has no criteria".to_string());
        }
        if self.value.is_some() && self.env.is_none() {
            return Err("detection rule sets 'value' without 'env'".to_string());
        }
        Ok(())
    }

    /// Check if this rule matches, reading variables through `env_fn`.
    pub fn matches<F>(&self, env_fn: &F) -> bool
    where
        F: Fn(&str) -> Option<String> + ?Sized,
    {
        if self.validate().is_err() {
            return false;
        }

        if let Some(name) = &self.env {
            match env_fn(name.as_str()) {
                Some(actual) => {
                    if let Some(expected) = &self.value {
                        if &actual != expected {
                            return false;
                        }
                    }
                }
                None => return false,
            }
        }

        if let Some(path) = &self.path {
            if !path.exists() {
                return false;
            }
        }

        if let Some(os) = &self.os {
            if !os_matches(os) {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for DetectRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match (&self.env, &self.value) {
            (Some(env), Some(value)) => parts.push(format!("env {}={}", env, value)),
            (Some(env), None) => parts.push(format!("env {}", env)),
            _ => {}
        }
        if let Some(path) = &self.path {
            parts.push(format!("path {}", path.display()));
        }
        if let Some(os) = &self.os {
            parts.push(format!("os {}", os));
        }
        write!(f, "{}", parts.join(", "))
    }
}

fn os_matches(expected: &str) -> bool {
    let expected = expected.to_ascii_lowercase();
    let expected = match expected.as_str() {
        "darwin" | "mac" | "osx" => "macos",
        other => other,
    };
    expected == std::env::consts::OS || expected == std::env::consts::FAMILY
}
