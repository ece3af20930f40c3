use anyhow::Result;

use crate::{AppError, Config};

/// Application configuration and lifecycle
#[derive(Debug)]
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance from the user's config file
    pub fn new() -> Result<Self, AppError> {
        let (config, _) = Config::load_validated()?;
        Ok(Self::with_config(config))
    }

    /// Create an application instance from the user's config file, falling
    /// back to defaults if it cannot be loaded
    pub fn new_or_default() -> Self {
        Self::or_default(Self::new())
    }

    fn or_default(loaded: Result<Self, AppError>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!("{} ({})", e.user_message(), e);
            Self::with_config(Config::default())
        })
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Where the weather dataset should be read from
    pub fn data_path(&self) -> std::path::PathBuf {
        self.config.data.resolve_path()
    }

    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }
}
