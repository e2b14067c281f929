//! Environment providers.
//!
//! A provider represents one possible runtime environment (a developer's
//! laptop, the CI server, production). It knows how to detect whether the
//! process is running in that environment and which settings it overrides
//! when it is.
//!
//! - [`EnvironmentProvider`] - the trait every environment implements
//! - [`Settings`] - the name to value mapping a provider contributes
//! - [`SettingValue`] - a literal value or a producer computed at lookup time

pub mod environment;
pub mod settings;
pub mod value;

pub use environment::EnvironmentProvider;
pub use settings::Settings;
pub use value::{is_falsy, Producer, SettingValue};
