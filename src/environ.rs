//! Environment-variable access.
//!
//! Everything that reads the process environment goes through an
//! [`EnvLookup`] so tests (and embedders) can substitute a fixed map instead
//! of mutating real variables.

use std::collections::HashMap;
use std::sync::Arc;

/// Looks up an environment variable by name.
///
/// Returns `None` when the variable is unset or not valid unicode.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Lookup backed by the real process environment.
pub fn process_env() -> EnvLookup {
    Arc::new(|key: &str| std::env::var(key).ok())
}

/// Lookup backed by a fixed set of variables.
///
/// # Example
///
/// ```
/// use envswitch::environ::from_pairs;
///
/// let env = from_pairs([("HOST", "10.0.0.9")]);
/// assert_eq!(env("HOST").as_deref(), Some("10.0.0.9"));
/// assert_eq!(env("PORT"), None);
/// ```
pub fn from_pairs<I, K, V>(pairs: I) -> EnvLookup
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map: HashMap<String, String> = pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    Arc::new(move |key: &str| map.get(key).cloned())
}
