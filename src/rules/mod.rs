//! Declarative environment providers.
//!
//! Environments can be described in a YAML providers file instead of code:
//!
//! ```yaml
//! environments:
//!   kristine-dev:
//!     detect:
//!       - path: /home/kristine/.dev-box
//!     values:
//!       DBServer: 192.168.56.101
//!   ci:
//!     environ_trump: true
//!     detect:
//!       - env: CI
//!       - env: DEPLOY_ENV
//!         value: test
//!     values:
//!       DBPassword: { from_env: CI_DB_PASSWORD }
//! ```
//!
//! - [`detect`] - detection rules (environment variables, marker paths, OS)
//! - [`provider`] - [`RuleProvider`], an [`EnvironmentProvider`] built from a spec
//! - [`loader`] - reading providers files and registering them
//!
//! [`EnvironmentProvider`]: crate::provider::EnvironmentProvider

pub mod detect;
pub mod loader;
pub mod provider;

pub use detect::DetectRule;
pub use loader::{
    load_providers_file, parse_providers, register_providers, ProvidersFile,
    DEFAULT_PROVIDERS_FILE,
};
pub use provider::{EnvironmentSpec, FromEnv, RuleProvider, ValueSpec};
