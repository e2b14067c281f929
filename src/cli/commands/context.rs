//! Shared state for commands: where providers live and how to read the environment.

use std::path::{Path, PathBuf};

use crate::controller::Controller;
use crate::environ::{process_env, EnvLookup};
use crate::error::Result;
use crate::rules::{load_providers_file, register_providers, ProvidersFile};

/// Where to load providers from and how to evaluate them.
#[derive(Clone)]
pub struct ProvidersContext {
    path: PathBuf,
    environ_trump: bool,
    env_lookup: EnvLookup,
}

impl ProvidersContext {
    /// Context for the providers file at `path`, reading the process environment.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            environ_trump: false,
            env_lookup: process_env(),
        }
    }

    /// Force environment-trump mode on.
    pub fn with_environ_trump(mut self, flag: bool) -> Self {
        self.environ_trump = flag;
        self
    }

    /// Read environment variables through `env_lookup`.
    pub fn with_env_lookup(mut self, env_lookup: EnvLookup) -> Self {
        self.env_lookup = env_lookup;
        self
    }

    /// Path of the providers file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The environment lookup in use.
    pub fn env_lookup(&self) -> EnvLookup {
        self.env_lookup.clone()
    }

    /// Load the providers file.
    pub fn load_file(&self) -> Result<ProvidersFile> {
        load_providers_file(&self.path)
    }

    /// Build a controller with every environment in `file` registered.
    pub fn build_controller(&self, file: &ProvidersFile) -> Result<Controller> {
        let mut controller = Controller::with_env_lookup(self.env_lookup());
        if self.environ_trump {
            controller.set_environ_trump(true);
        }
        register_providers(&mut controller, file)?;
        Ok(controller)
    }
}

impl std::fmt::Debug for ProvidersContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvidersContext")
            .field("path", &self.path)
            .field("environ_trump", &self.environ_trump)
            .finish()
    }
}
