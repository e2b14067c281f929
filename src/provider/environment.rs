//! The environment provider contract.

use super::settings::Settings;

/// One possible runtime environment.
///
/// Implementors decide how to recognise their environment (a marker file,
/// the OS, an environment variable) and which settings they override once
/// recognised. Register them with a
/// [`Controller`](crate::controller::Controller); at most one may detect
/// its environment.
///
/// # Example
///
/// ```
/// use envswitch::provider::{EnvironmentProvider, Settings};
///
/// struct KristineDev;
///
/// impl EnvironmentProvider for KristineDev {
///     fn detect(&self) -> bool {
///         std::path::Path::new("/home/kristine/.dev-box").exists()
///     }
///
///     fn values(&self) -> Settings {
///         Settings::new()
///             .with("DBServer", "192.168.56.101")
///             .with("DBUsername", "dev")
///     }
/// }
///
/// assert!(!KristineDev.wants_environ_trump());
/// assert!(KristineDev.name().ends_with("KristineDev"));
/// ```
pub trait EnvironmentProvider: Send + Sync {
    /// Name used in logs and error messages.
    ///
    /// Defaults to the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether the process is running in this environment.
    ///
    /// Invoked exactly once, by the controller, during registration.
    fn detect(&self) -> bool;

    /// The settings this environment overrides.
    ///
    /// Invoked exactly once, and only if [`detect`](Self::detect) returned true.
    fn values(&self) -> Settings;

    /// Whether activating this environment should make environment
    /// variables take precedence over every provider.
    fn wants_environ_trump(&self) -> bool {
        false
    }
}
