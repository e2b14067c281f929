//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use super::context::ProvidersContext;
use crate::cli::args::Commands;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Where results are written
    /// * `err` - Where diagnostics for the user are written
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: ProvidersContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher sharing `context` with every command.
    pub fn new(context: ProvidersContext) -> Self {
        Self { context }
    }

    /// Get the providers context.
    pub fn context(&self) -> &ProvidersContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(
        &self,
        command: &Commands,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<CommandResult> {
        match command {
            Commands::Get(args) => {
                let cmd = super::get::GetCommand::new(self.context.clone(), args.clone());
                cmd.execute(out, err)
            }
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(self.context.clone(), args.clone());
                cmd.execute(out, err)
            }
            Commands::Detect => {
                let cmd = super::detect::DetectCommand::new(self.context.clone());
                cmd.execute(out, err)
            }
        }
    }
}
