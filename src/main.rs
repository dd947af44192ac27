//! # Botgram
//!
//! Prints the operation catalog as JSON, projected through the configured
//! view and with the configured attachment representation substituted.
//!
//! This is the application entry point that:
//! - Initializes tracing
//! - Loads configuration
//! - Builds and checks the catalog

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use botgram::application::projection::{Catalog, View, ViewSignature};
use botgram::config::Settings;

#[derive(Serialize)]
struct Output<'a> {
    attachment_repr: &'a str,
    view: View,
    operations: Vec<ViewSignature>,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    botgram::telemetry::init_tracing();

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    let catalog_settings = &settings.catalog;
    info!(
        view = %catalog_settings.view,
        attachment_repr = %catalog_settings.attachment_repr,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let catalog = Catalog::canonical().context("Invalid declarations")?;
    catalog.check().context("Catalog check failed")?;
    let catalog = catalog.instantiate(&catalog_settings.attachment_repr);

    let operations = match &catalog_settings.operation {
        Some(name) => {
            let operation = catalog
                .operation(name)
                .with_context(|| format!("Unknown operation `{}`", name))?;
            vec![catalog_settings.view.project(operation)]
        }
        None => catalog.view(catalog_settings.view),
    };
    info!(count = operations.len(), "Catalog projected");

    let output = Output {
        attachment_repr: &catalog_settings.attachment_repr,
        view: catalog_settings.view,
        operations,
    };
    let json = if catalog_settings.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
