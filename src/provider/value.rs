//! Setting values.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Computes a setting at lookup time.
///
/// Receives the caller's fallback (the production value), if any.
pub type Producer = Arc<dyn Fn(Option<&Value>) -> Value + Send + Sync>;

/// A single entry in a provider's [`Settings`](super::Settings).
///
/// # Example
///
/// ```
/// use envswitch::provider::SettingValue;
/// use serde_json::{json, Value};
///
/// let literal = SettingValue::from("192.168.56.101");
/// assert_eq!(literal.evaluate(None), json!("192.168.56.101"));
///
/// let shout = SettingValue::computed(|production| match production {
///     Some(Value::String(s)) => Value::String(s.to_uppercase()),
///     _ => Value::Null,
/// });
/// assert_eq!(shout.evaluate(Some(&json!("abc"))), json!("ABC"));
/// ```
#[derive(Clone)]
pub enum SettingValue {
    /// Returned as-is.
    Literal(Value),
    /// Invoked with the production value on every lookup.
    Computed(Producer),
}

impl SettingValue {
    /// Create a literal value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a computed value from a producer function.
    pub fn computed<F>(producer: F) -> Self
    where
        F: Fn(Option<&Value>) -> Value + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(producer))
    }

    /// Resolve this entry, passing `production_value` to computed producers.
    pub fn evaluate(&self, production_value: Option<&Value>) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Computed(producer) => producer(production_value),
        }
    }

    /// Whether this entry is computed at lookup time.
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// The literal value, if this entry is not computed.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Computed(_) => None,
        }
    }
}

impl fmt::Debug for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Literal(Value::String(value))
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Literal(Value::Bool(value))
    }
}

/// Whether a value counts as "not set" for environment-trump strictness.
///
/// Null, empty strings, `false`, numeric zero and empty collections are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_ignores_production_value() {
        let value = SettingValue::literal(8080);
        assert_eq!(value.evaluate(Some(&json!(80))), json!(8080));
        assert!(!value.is_computed());
        assert_eq!(value.as_literal(), Some(&json!(8080)));
    }

    #[test]
    fn computed_receives_production_value() {
        let value = SettingValue::computed(|production| {
            json!(format!("decrypted:{}", production.and_then(Value::as_str).unwrap_or("")))
        });
        assert!(value.is_computed());
        assert!(value.as_literal().is_none());
        assert_eq!(value.evaluate(Some(&json!("abc"))), json!("decrypted:abc"));
        assert_eq!(value.evaluate(None), json!("decrypted:"));
    }

    #[test]
    fn debug_hides_producer() {
        let value = SettingValue::computed(|_| Value::Null);
        assert_eq!(format!("{:?}", value), "Computed(..)");
    }

    #[test]
    fn conversions_build_literals() {
        assert_eq!(SettingValue::from("x").evaluate(None), json!("x"));
        assert_eq!(SettingValue::from(String::from("y")).evaluate(None), json!("y"));
        assert_eq!(SettingValue::from(5_i64).evaluate(None), json!(5));
        assert_eq!(SettingValue::from(true).evaluate(None), json!(true));
    }

    #[test]
    fn falsy_values() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!([])));
        assert!(is_falsy(&json!({})));
    }

    #[test]
    fn truthy_values() {
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(-1)));
        assert!(!is_falsy(&json!([0])));
        assert!(!is_falsy(&json!({"a": null})));
    }
}
