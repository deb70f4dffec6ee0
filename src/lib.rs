pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod slug;
pub mod state;
pub mod ui;
pub mod views;

use std::sync::Arc;

use tracing::info;

use crate::catalog::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::AppState;
use crate::views::Templates;

/// Loads the catalog named by `config` and compiles the page templates.
pub async fn build_state(config: &AppConfig) -> Result<AppState, AppError> {
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path.clone())),
        None => Box::new(BuiltinCatalog),
    };
    let catalog = source.load().await?;
    info!(
        "catalog ready: {} courses, {} sessions",
        catalog.courses().len(),
        catalog.sessions().len()
    );

    Ok(AppState {
        catalog: Arc::new(catalog),
        landing: Arc::new(crate::catalog::data::landing()),
        templates: Arc::new(Templates::new()?),
    })
}
