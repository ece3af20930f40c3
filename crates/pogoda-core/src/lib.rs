pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{Config, DataConfig, UiConfig, ValidationResult};
pub use error::{AppError, ConfigError, WeatherError};

use anyhow::Result;

/// Initialize logging for the application
pub fn init() -> Result<()> {
    // RUST_LOG wins; default to info
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Pogoda core initialized");
    }
    Ok(())
}
