//! The settings a provider contributes.

use serde_json::Value;
use std::collections::BTreeMap;

use super::value::SettingValue;

/// Mapping from setting name to value, as contributed by the active provider.
///
/// Names are kept sorted so listings are deterministic.
///
/// # Example
///
/// ```
/// use envswitch::provider::Settings;
/// use serde_json::json;
///
/// let settings = Settings::new()
///     .with("HOST", "192.168.56.101")
///     .with_computed("SECRET", |production| {
///         json!(production.and_then(|v| v.as_str()).unwrap_or("").to_uppercase())
///     });
///
/// assert_eq!(settings.get("HOST", Some(json!("127.0.0.1"))), Some(json!("192.168.56.101")));
/// assert_eq!(settings.get("PORT", Some(json!(80))), Some(json!(80)));
/// assert_eq!(settings.get("SECRET", Some(json!("abc"))), Some(json!("ABC")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: BTreeMap<String, SettingValue>,
}

impl Settings {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a computed entry, builder style.
    pub fn with_computed<F>(self, name: impl Into<String>, producer: F) -> Self
    where
        F: Fn(Option<&Value>) -> Value + Send + Sync + 'static,
    {
        self.with(name, SettingValue::computed(producer))
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up `name`, falling back to `production_value` when absent.
    ///
    /// Computed entries are invoked with the production value.
    pub fn get(&self, name: &str, production_value: Option<Value>) -> Option<Value> {
        match self.values.get(name) {
            Some(entry) => Some(entry.evaluate(production_value.as_ref())),
            None => production_value,
        }
    }

    /// The raw entry for `name`, without evaluating it.
    pub fn entry(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    /// Check if a setting is supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Setting names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no settings are supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Settings::new();
        for (name, value) in iter {
            settings.insert(name, value);
        }
        settings
    }
}
