//! The resolution controller.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::environ::{process_env, EnvLookup};
use crate::error::{Result, SettingsError};
use crate::provider::{is_falsy, EnvironmentProvider, Settings};

/// The provider whose environment was detected, with its initialized settings.
struct ActiveProvider {
    provider: Arc<dyn EnvironmentProvider>,
    settings: Settings,
}

/// Registry of environment providers and resolver of setting values.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use envswitch::controller::Controller;
/// use envswitch::provider::{EnvironmentProvider, Settings};
/// use serde_json::json;
///
/// struct TestServer;
///
/// impl EnvironmentProvider for TestServer {
///     fn detect(&self) -> bool {
///         true
///     }
///
///     fn values(&self) -> Settings {
///         Settings::new().with("HOST", "192.168.56.101")
///     }
/// }
///
/// let mut controller = Controller::new();
/// controller.register_instance(Arc::new(TestServer)).unwrap();
///
/// assert_eq!(controller.resolve_or("HOST", "127.0.0.1").unwrap(), json!("192.168.56.101"));
/// assert_eq!(controller.resolve_or("PORT", 80).unwrap(), json!(80));
/// assert!(controller.resolve("ADMIN_LOGIN", None).is_err());
/// ```
pub struct Controller {
    /// Every admitted provider, in registration order.
    registered: Vec<Arc<dyn EnvironmentProvider>>,
    active: Option<ActiveProvider>,
    did_find_multiple_matches: bool,
    environ_trump: bool,
    env_lookup: EnvLookup,
}

impl Controller {
    /// Create a controller reading the real process environment.
    pub fn new() -> Self {
        Self::with_env_lookup(process_env())
    }

    /// Create a controller reading environment variables through `env_lookup`.
    pub fn with_env_lookup(env_lookup: EnvLookup) -> Self {
        Self {
            registered: Vec::new(),
            active: None,
            did_find_multiple_matches: false,
            environ_trump: false,
            env_lookup,
        }
    }

    /// The environment lookup this controller resolves against.
    pub fn env_lookup(&self) -> EnvLookup {
        Arc::clone(&self.env_lookup)
    }

    /// Register a constructed provider.
    ///
    /// Detection runs immediately. If it succeeds the provider's settings
    /// are initialized and it becomes the active provider.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegistration` if this exact instance (by `Arc`
    /// identity) is already registered. Returns `MultipleMatch` if the
    /// provider detects its environment while another provider is active;
    /// the active provider is kept.
    pub fn register_instance(&mut self, provider: Arc<dyn EnvironmentProvider>) -> Result<()> {
        if self.is_registered(&provider) {
            warn!("Re-registering provider: {}", provider.name());
            return Err(SettingsError::DuplicateRegistration {
                provider: provider.name().to_string(),
            });
        }
        self.admit(provider)
    }

    /// Register a provider built by `factory`.
    ///
    /// A factory that fails means the entry cannot act as a provider. That is
    /// logged and the registration is skipped rather than failing start-up.
    ///
    /// # Errors
    ///
    /// Returns `MultipleMatch` under the same conditions as
    /// [`register_instance`](Self::register_instance).
    pub fn register_factory<P, F, E>(&mut self, factory: F) -> Result<()>
    where
        P: EnvironmentProvider + 'static,
        F: FnOnce() -> std::result::Result<P, E>,
        E: fmt::Display,
    {
        match factory() {
            Ok(provider) => self.admit(Arc::new(provider)),
            Err(e) => {
                error!("Not a usable provider {}: {}", std::any::type_name::<P>(), e);
                Ok(())
            }
        }
    }

    /// Register a provider by type, using its `Default` constructor.
    pub fn register_default<P>(&mut self) -> Result<()>
    where
        P: EnvironmentProvider + Default + 'static,
    {
        self.register_factory(|| Ok::<_, std::convert::Infallible>(P::default()))
    }

    fn is_registered(&self, provider: &Arc<dyn EnvironmentProvider>) -> bool {
        self.registered.iter().any(|p| Arc::ptr_eq(p, provider))
    }

    fn admit(&mut self, provider: Arc<dyn EnvironmentProvider>) -> Result<()> {
        if provider.detect() {
            if let Some(active) = &self.active {
                self.did_find_multiple_matches = true;
                error!(
                    "Multiple environments matched: {} detected while {} is active",
                    provider.name(),
                    active.provider.name()
                );
                return Err(SettingsError::MultipleMatch {
                    active: active.provider.name().to_string(),
                    candidate: provider.name().to_string(),
                });
            }

            let settings = provider.values();
            if provider.wants_environ_trump() {
                self.environ_trump = true;
            }
            info!(
                "Environment detected: {} ({} settings)",
                provider.name(),
                settings.len()
            );
            self.active = Some(ActiveProvider {
                provider: Arc::clone(&provider),
                settings,
            });
        } else {
            debug!("Environment not detected: {}", provider.name());
        }

        self.registered.push(provider);
        Ok(())
    }

    /// Resolve a setting.
    ///
    /// A `None` or `null` fallback means the setting is required. A `null`
    /// from the active provider is treated like a missing setting.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` when nothing supplies a required setting, or when
    /// environment-trump mode is on and the resolved value is falsy.
    pub fn resolve(&self, name: &str, fallback: Option<Value>) -> Result<Value> {
        if self.environ_trump {
            if let Some(value) = (self.env_lookup)(name).filter(|v| !v.is_empty()) {
                debug!("{} resolved from environment variable", name);
                return Ok(Value::String(value));
            }
        }

        let fallback = fallback.filter(|v| !v.is_null());

        let Some(active) = &self.active else {
            debug!("{} resolved from fallback (no active environment)", name);
            return fallback.ok_or_else(|| SettingsError::no_match(name));
        };

        if active.settings.contains(name) {
            debug!("{} resolved through {}", name, active.provider.name());
        } else {
            debug!("{} not supplied by {}, using fallback", name, active.provider.name());
        }

        // A null from the provider counts as missing.
        let value = match active.settings.get(name, fallback.clone()) {
            Some(value) if !value.is_null() => value,
            _ => fallback.ok_or_else(|| SettingsError::no_match(name))?,
        };

        if self.environ_trump && is_falsy(&value) {
            return Err(SettingsError::no_match(name));
        }

        Ok(value)
    }

    /// Resolve a setting with a present fallback.
    pub fn resolve_or(&self, name: &str, fallback: impl Into<Value>) -> Result<Value> {
        self.resolve(name, Some(fallback.into()))
    }

    /// The active provider's settings, if any provider is active.
    pub fn all_values(&self) -> Option<&Settings> {
        self.active.as_ref().map(|active| &active.settings)
    }

    /// Name of the active provider.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.provider.name())
    }

    /// Names of every registered provider, in registration order.
    pub fn registered_names(&self) -> Vec<&str> {
        self.registered.iter().map(|p| p.name()).collect()
    }

    /// Number of registered providers.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Whether a second provider ever matched while one was active.
    pub fn did_find_multiple_matches(&self) -> bool {
        self.did_find_multiple_matches
    }

    /// Whether environment variables take precedence over providers.
    pub fn environ_trump(&self) -> bool {
        self.environ_trump
    }

    /// Turn environment-trump mode on or off.
    pub fn set_environ_trump(&mut self, flag: bool) {
        self.environ_trump = flag;
    }

    /// Clear all registration state.
    ///
    /// The environment lookup is kept.
    pub fn reset(&mut self) {
        self.registered.clear();
        self.active = None;
        self.did_find_multiple_matches = false;
        self.environ_trump = false;
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("registered", &self.registered_names())
            .field("active", &self.active_name())
            .field("did_find_multiple_matches", &self.did_find_multiple_matches)
            .field("environ_trump", &self.environ_trump)
            .finish()
    }
}
