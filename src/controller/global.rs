//! Process-wide default controller.
//!
//! Thin wrappers for callers that register providers once at start-up and
//! look values up from anywhere afterwards. Prefer constructing a
//! [`Controller`] and passing it around where that is practical.
//!
//! Providers must not call back into these functions from `detect` or
//! `values`: registration holds the write lock.
//!
//! # Example
//!
//! ```
//! use envswitch::controller::global;
//! use serde_json::json;
//!
//! // Nothing registered: the production value is used.
//! assert_eq!(global::value_or("DBServer", "127.0.0.1").unwrap(), json!("127.0.0.1"));
//! ```

use serde_json::Value;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::resolver::Controller;
use crate::error::Result;
use crate::provider::{EnvironmentProvider, Settings};

static DEFAULT_CONTROLLER: LazyLock<RwLock<Controller>> =
    LazyLock::new(|| RwLock::new(Controller::new()));

// Controller state is plain data, so a panic mid-update leaves nothing to repair.
fn read() -> RwLockReadGuard<'static, Controller> {
    DEFAULT_CONTROLLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Controller> {
    DEFAULT_CONTROLLER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register a provider instance with the default controller.
pub fn register(provider: Arc<dyn EnvironmentProvider>) -> Result<()> {
    write().register_instance(provider)
}

/// Register a provider built by `factory` with the default controller.
pub fn register_factory<P, F, E>(factory: F) -> Result<()>
where
    P: EnvironmentProvider + 'static,
    F: FnOnce() -> std::result::Result<P, E>,
    E: fmt::Display,
{
    write().register_factory(factory)
}

/// Register a provider by type with the default controller.
pub fn register_default<P>() -> Result<()>
where
    P: EnvironmentProvider + Default + 'static,
{
    write().register_default::<P>()
}

/// Resolve a setting from the default controller.
pub fn value(name: &str, fallback: Option<Value>) -> Result<Value> {
    read().resolve(name, fallback)
}

/// Resolve a setting with a present fallback from the default controller.
pub fn value_or(name: &str, fallback: impl Into<Value>) -> Result<Value> {
    read().resolve_or(name, fallback)
}

/// A copy of the active provider's settings, if any.
pub fn values() -> Option<Settings> {
    read().all_values().cloned()
}

/// Reset the default controller.
pub fn reset() {
    write().reset();
}

/// Turn environment-trump mode on or off for the default controller.
pub fn set_environ_trump_globally(flag: bool) {
    write().set_environ_trump(flag);
}

/// Inspect the default controller.
pub fn with_controller<R>(f: impl FnOnce(&Controller) -> R) -> R {
    f(&read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use serde_json::json;
    use serial_test::serial;

    struct TestServer;

    impl EnvironmentProvider for TestServer {
        fn detect(&self) -> bool {
            true
        }

        fn values(&self) -> Settings {
            Settings::new().with("HOST", "192.168.56.101")
        }
    }

    #[derive(Default)]
    struct Production;

    impl EnvironmentProvider for Production {
        fn detect(&self) -> bool {
            true
        }

        fn values(&self) -> Settings {
            Settings::new().with("HOST", "10.100.1.250")
        }
    }

    #[test]
    #[serial]
    fn register_and_resolve_through_default_controller() {
        reset();
        register(Arc::new(TestServer)).unwrap();
        assert_eq!(value_or("HOST", "127.0.0.1").unwrap(), json!("192.168.56.101"));
        assert_eq!(value_or("PORT", 80).unwrap(), json!(80));
        assert!(values().unwrap().contains("HOST"));
        reset();
    }

    #[test]
    #[serial]
    fn second_match_through_default_controller_fails() {
        reset();
        register(Arc::new(TestServer)).unwrap();
        let err = register_default::<Production>().unwrap_err();
        assert!(matches!(err, SettingsError::MultipleMatch { .. }));
        assert!(with_controller(|c| c.did_find_multiple_matches()));
        assert_eq!(value("HOST", None).unwrap(), json!("192.168.56.101"));
        reset();
    }

    #[test]
    #[serial]
    fn reset_clears_default_controller() {
        reset();
        register_factory(|| Ok::<_, String>(Production)).unwrap();
        set_environ_trump_globally(true);
        reset();
        assert!(values().is_none());
        assert!(with_controller(|c| !c.environ_trump() && c.registered_count() == 0));
        assert!(value("HOST", None).is_err());
    }

    #[test]
    #[serial]
    fn global_trump_reads_process_environment() {
        reset();
        temp_env::with_var("ENVSWITCH_GLOBAL_TEST_HOST", Some("10.0.0.9"), || {
            set_environ_trump_globally(true);
            assert_eq!(
                value_or("ENVSWITCH_GLOBAL_TEST_HOST", "anything").unwrap(),
                json!("10.0.0.9")
            );
        });
        reset();
    }
}
