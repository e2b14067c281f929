//! Get command implementation.
//!
//! The `envswitch get` command resolves a single setting.

use std::io::Write;
use tracing::debug;

use super::context::ProvidersContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{parse_fallback, render_value};
use crate::cli::args::GetArgs;
use crate::error::{Result, SettingsError};
use crate::rules::ProvidersFile;

/// The get command implementation.
pub struct GetCommand {
    context: ProvidersContext,
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(context: ProvidersContext, args: GetArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &GetArgs {
        &self.args
    }
}

impl Command for GetCommand {
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult> {
        // Without a providers file every lookup falls back to its production value.
        let file = match self.context.load_file() {
            Ok(file) => file,
            Err(SettingsError::ProvidersNotFound { path }) => {
                debug!("No providers file at {}", path.display());
                ProvidersFile::default()
            }
            Err(e) => return Err(e),
        };

        let controller = self.context.build_controller(&file)?;
        let fallback = self.args.fallback.as_deref().map(parse_fallback);

        match controller.resolve(&self.args.name, fallback) {
            Ok(value) => {
                writeln!(out, "{}", render_value(&value, self.args.json))?;
                Ok(CommandResult::success())
            }
            Err(e @ SettingsError::NoMatch { .. }) => {
                writeln!(err, "Error: {}", e)?;
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
