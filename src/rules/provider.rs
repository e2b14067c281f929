//! Providers built from declarative specs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::detect::DetectRule;
use crate::environ::{process_env, EnvLookup};
use crate::error::{Result, SettingsError};
use crate::provider::{EnvironmentProvider, SettingValue, Settings};

/// One environment as written in a providers file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSpec {
    /// Rules recognising this environment. Any matching rule is enough.
    #[serde(default)]
    pub detect: Vec<DetectRule>,

    /// Make environment variables trump every provider once detected.
    #[serde(default)]
    pub environ_trump: bool,

    /// Settings supplied when detected.
    #[serde(default)]
    pub values: BTreeMap<String, ValueSpec>,
}

/// A setting as written in a providers file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    /// Read from an environment variable at lookup time.
    FromEnv(FromEnv),
    /// Any YAML scalar, list or map.
    Literal(Value),
}

/// `{ from_env: NAME }`: read `NAME`, falling back to the production value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FromEnv {
    pub from_env: String,
}

/// An [`EnvironmentProvider`] driven by detection rules.
///
/// # Example
///
/// ```
/// use envswitch::environ::from_pairs;
/// use envswitch::provider::EnvironmentProvider;
/// use envswitch::rules::{DetectRule, EnvironmentSpec, RuleProvider};
///
/// let spec = EnvironmentSpec {
///     detect: vec![DetectRule::env_equals("DEPLOY_ENV", "test")],
///     ..EnvironmentSpec::default()
/// };
/// let provider = RuleProvider::from_spec("test-server", spec)
///     .unwrap()
///     .with_env_lookup(from_pairs([("DEPLOY_ENV", "test")]));
///
/// assert_eq!(provider.name(), "test-server");
/// assert!(provider.detect());
/// ```
pub struct RuleProvider {
    name: String,
    spec: EnvironmentSpec,
    env_lookup: EnvLookup,
}

impl RuleProvider {
    /// Build a provider from a spec.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProvider` if the spec has no detection rules or any
    /// rule cannot be evaluated.
    pub fn from_spec(name: impl Into<String>, spec: EnvironmentSpec) -> Result<Self> {
        let name = name.into();

        if spec.detect.is_empty() {
            return Err(SettingsError::InvalidProvider {
                provider: name,
                message: "no detection rules".to_string(),
            });
        }

        for (index, rule) in spec.detect.iter().enumerate() {
            if let Err(message) = rule.validate() {
                return Err(SettingsError::InvalidProvider {
                    provider: name,
                    message: format!("rule {}: {}", index + 1, message),
                });
            }
        }

        Ok(Self {
            name,
            spec,
            env_lookup: process_env(),
        })
    }

    /// Read environment variables through `env_lookup` instead of the process environment.
    pub fn with_env_lookup(mut self, env_lookup: EnvLookup) -> Self {
        self.env_lookup = env_lookup;
        self
    }

    /// The spec this provider was built from.
    pub fn spec(&self) -> &EnvironmentSpec {
        &self.spec
    }

    /// The first rule that matches, if any.
    pub fn matched_rule(&self) -> Option<&DetectRule> {
        self.spec
            .detect
            .iter()
            .find(|rule| rule.matches(&*self.env_lookup))
    }

    fn setting_for(&self, spec: &ValueSpec) -> SettingValue {
        match spec {
            ValueSpec::Literal(value) => SettingValue::Literal(value.clone()),
            ValueSpec::FromEnv(FromEnv { from_env }) => {
                let lookup = self.env_lookup.clone();
                let var = from_env.clone();
                SettingValue::computed(move |production| {
                    lookup(var.as_str())
                        .filter(|v| !v.is_empty())
                        .map(Value::String)
                        .or_else(|| production.cloned())
                        .unwrap_or(Value::Null)
                })
            }
        }
    }
}

impl EnvironmentProvider for RuleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(&self) -> bool {
        self.matched_rule().is_some()
    }

    fn values(&self) -> Settings {
        self.spec
            .values
            .iter()
            .map(|(name, spec)| (name.clone(), self.setting_for(spec)))
            .collect()
    }

    fn wants_environ_trump(&self) -> bool {
        self.spec.environ_trump
    }
}

impl fmt::Debug for RuleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleProvider")
            .field("name", &self.name)
            .field("spec", &self.spec)
            .finish()
    }
}
