//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::application::projection::View;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Catalog output configuration
    pub catalog: CatalogSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// What the catalog tool prints.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Name substituted for the attachment representation `F`
    pub attachment_repr: String,

    /// View the operations are projected through
    pub view: View,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Print only this operation (wire name)
    #[serde(default)]
    pub operation: Option<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the attachment representation is blank.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("catalog.attachment_repr", "F")?
            .set_default("catalog.view", View::Direct.as_str())?
            .set_default("catalog.pretty", true)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__CATALOG__VIEW=options -> catalog.view = options
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.catalog.attachment_repr.trim().is_empty() {
                    return Err(ConfigError::Message(
                        "catalog.attachment_repr must not be empty".into(),
                    ));
                }
                Ok(settings)
            })
    }
}
