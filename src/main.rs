//! Contact Directory - Main entry point
//!
//! Builds the directory over an in-memory store, applies the optional seed
//! file, and prints a JSON report of the first page of contacts to stdout.

use anyhow::Result;
use contact_directory::{
    AreaCodeService, AreaCodeServiceImpl, Config, ContactService, ContactServiceImpl,
    InMemoryStore, Metrics, PageRequest, SeedData, SeedReport, UserId,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can apply
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (stderr only; stdout carries the report)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = InMemoryStore::new();
    let metrics = Metrics::new();
    let units = Arc::new(store.unit_of_work_factory());
    let area_code_factory = Arc::new(store.area_code_factory());

    let area_codes =
        AreaCodeServiceImpl::new(area_code_factory.clone(), units.clone(), &config, metrics.clone());
    let contacts = ContactServiceImpl::new(
        Arc::new(store.contact_repository()),
        area_code_factory,
        units,
        &config,
        metrics.clone(),
    );

    let seed = match &config.seed_file {
        Some(path) => {
            info!(path = %path, "Applying seed file");
            let data = SeedData::from_file(path)?;
            data.apply(&area_codes, &contacts, UserId::new()).await?
        }
        None => SeedReport::default(),
    };

    let report = serde_json::json!({
        "seed": seed,
        "area_codes": area_codes.recover_all(PageRequest::default()).await?,
        "contacts": contacts.recover_all(PageRequest::default()).await?,
        "metrics": metrics.summary(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Contact directory report complete");
    Ok(())
}
