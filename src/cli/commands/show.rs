//! Show command implementation.
//!
//! The `envswitch show` command prints the detected environment and every
//! setting it supplies. Computed settings are not invoked.

use serde_json::{Map, Value};
use std::io::Write;

use super::context::ProvidersContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{render_setting, setting_to_json};
use crate::cli::args::ShowArgs;
use crate::error::{Result, SettingsError};

/// The show command implementation.
pub struct ShowCommand {
    context: ProvidersContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: ProvidersContext, args: ShowArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult> {
        let file = match self.context.load_file() {
            Ok(file) => file,
            Err(SettingsError::ProvidersNotFound { path }) => {
                writeln!(err, "No providers file found at {}", path.display())?;
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let controller = self.context.build_controller(&file)?;

        if self.args.json {
            let values: Map<String, Value> = controller
                .all_values()
                .map(|settings| {
                    settings
                        .iter()
                        .map(|(name, setting)| (name.to_string(), setting_to_json(setting)))
                        .collect()
                })
                .unwrap_or_default();
            let report = serde_json::json!({
                "environment": controller.active_name(),
                "environ_trump": controller.environ_trump(),
                "values": values,
            });
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| SettingsError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        match (controller.active_name(), controller.all_values()) {
            (Some(name), Some(settings)) => {
                writeln!(out, "Environment: {}", name)?;
                for (key, setting) in settings.iter() {
                    writeln!(out, "  {} = {}", key, render_setting(setting))?;
                }
            }
            _ => writeln!(out, "No environment detected; production values apply")?,
        }

        if controller.environ_trump() {
            writeln!(out, "Environment variables take precedence")?;
        }

        Ok(CommandResult::success())
    }
}
