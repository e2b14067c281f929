//! Rendering values for terminal output.

use serde_json::Value;

use crate::provider::SettingValue;

/// Shown in place of values computed at lookup time.
pub const COMPUTED_PLACEHOLDER: &str = "<computed>";

/// Render a resolved value: strings raw, everything else as JSON.
pub fn render_value(value: &Value, json: bool) -> String {
    match value {
        Value::String(s) if !json => s.clone(),
        other => other.to_string(),
    }
}

/// Render a provider entry without invoking computed producers.
pub fn render_setting(setting: &SettingValue) -> String {
    match setting.as_literal() {
        Some(value) => render_value(value, false),
        None => COMPUTED_PLACEHOLDER.to_string(),
    }
}

/// JSON form of a provider entry without invoking computed producers.
pub fn setting_to_json(setting: &SettingValue) -> Value {
    setting
        .as_literal()
        .cloned()
        .unwrap_or_else(|| Value::String(COMPUTED_PLACEHOLDER.to_string()))
}

/// Parse a fallback given on the command line.
///
/// Valid JSON (`80`, `true`, `["a"]`) is taken as such; anything else is a string.
pub fn parse_fallback(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
