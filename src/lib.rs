//! envswitch - Environment-detected settings overrides.
//!
//! Keep one base configuration and let each environment (a developer's
//! laptop, the test server, production) override only what differs. Every
//! environment is an [`EnvironmentProvider`](provider::EnvironmentProvider)
//! that knows how to recognise itself; at most one may match. Settings
//! resolve from the matching environment, or fall back to the production
//! value declared next to the setting.
//!
//! # Modules
//!
//! - [`controller`] - Provider registry and value resolution
//! - [`environ`] - Environment-variable access
//! - [`error`] - Error types and result aliases
//! - [`provider`] - The environment provider contract and setting values
//! - [`rules`] - Providers declared in YAML with detection rules
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use envswitch::controller::Controller;
//! use envswitch::provider::{EnvironmentProvider, Settings};
//! use serde_json::json;
//!
//! struct KristineDev;
//!
//! impl EnvironmentProvider for KristineDev {
//!     fn detect(&self) -> bool {
//!         true
//!     }
//!
//!     fn values(&self) -> Settings {
//!         Settings::new()
//!             .with("DBServer", "192.168.56.101")
//!             .with("DBUsername", "dev")
//!     }
//! }
//!
//! let mut controller = Controller::new();
//! controller.register_instance(Arc::new(KristineDev)).unwrap();
//!
//! let host = controller.resolve_or("DBServer", "127.0.0.1").unwrap();
//! let name = controller.resolve_or("DBName", "bit_bucket").unwrap();
//! assert_eq!(host, json!("192.168.56.101"));
//! assert_eq!(name, json!("bit_bucket"));
//! ```

pub mod cli;
pub mod controller;
pub mod environ;
pub mod error;
pub mod provider;
pub mod rules;

pub use controller::Controller;
pub use error::{Result, SettingsError};
pub use provider::{EnvironmentProvider, SettingValue, Settings};
