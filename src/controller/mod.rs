//! Settings resolution.
//!
//! The [`Controller`] owns every registered provider, enforces that at most
//! one of them detects its environment, and answers value lookups. The
//! precedence for a lookup is:
//!
//! 1. Environment variables, when environment-trump mode is on
//! 2. The active provider's settings
//! 3. The caller's fallback (production value)
//!
//! [`global`] wraps a process-wide default controller for callers that do
//! not want to thread one through their start-up code.

pub mod global;
pub mod resolver;

pub use resolver::Controller;
