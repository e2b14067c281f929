//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with a shared [`ProvidersContext`].

pub mod context;
pub mod detect;
pub mod dispatcher;
pub mod display;
pub mod get;
pub mod show;

pub use context::ProvidersContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
