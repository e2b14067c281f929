//! Detect command implementation.
//!
//! The `envswitch detect` command evaluates every environment's rules and
//! reports which ones match, without resolving any values.

use std::io::Write;

use super::context::ProvidersContext;
use super::dispatcher::{Command, CommandResult};
use crate::error::{Result, SettingsError};
use crate::rules::RuleProvider;

/// The detect command implementation.
pub struct DetectCommand {
    context: ProvidersContext,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(context: ProvidersContext) -> Self {
        Self { context }
    }
}

impl Command for DetectCommand {
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult> {
        let file = match self.context.load_file() {
            Ok(file) => file,
            Err(SettingsError::ProvidersNotFound { path }) => {
                writeln!(err, "No providers file found at {}", path.display())?;
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if file.environments.is_empty() {
            writeln!(out, "No environments defined in {}", self.context.path().display())?;
            return Ok(CommandResult::success());
        }

        let mut detected = Vec::new();
        for (name, spec) in &file.environments {
            let provider = match RuleProvider::from_spec(name.as_str(), spec.clone()) {
                Ok(provider) => provider.with_env_lookup(self.context.env_lookup()),
                Err(e) => {
                    writeln!(out, "{}: invalid ({})", name, e)?;
                    continue;
                }
            };

            match provider.matched_rule() {
                Some(rule) => {
                    writeln!(out, "{}: detected via {}", name, rule)?;
                    detected.push(name.as_str());
                }
                None => writeln!(out, "{}: not detected", name)?,
            }
        }

        if detected.len() > 1 {
            writeln!(
                err,
                "Multiple environments detected: {}. Only one may match.",
                detected.join(", ")
            )?;
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
