use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use tracing::info;

use chemmap::catalog::Catalog;
use chemmap::server::{start_server, AppState};
use chemmap::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chemmap=info,tower_http=warn".into()),
        )
        .init();

    println!("🗺️  ChemMap - chemical landmarks of Saint Petersburg");

    let settings = Settings::load().with_context(|| "Failed to load settings")?;
    let catalog = Catalog::builtin().with_context(|| "Built-in catalog failed validation")?;

    let stats = catalog.stats();
    info!(
        "Catalog loaded: {} landmarks ({} with photo, {} with details)",
        stats.total, stats.with_photo, stats.with_details
    );
    if let Some(bounds) = catalog.bounds() {
        info!(
            "Coverage: [{:.4}, {:.4}] .. [{:.4}, {:.4}]",
            bounds.south, bounds.west, bounds.north, bounds.east
        );
    }
    if settings.select_first_on_load {
        info!("Panel will show the first landmark on load");
    }

    let app_state = AppState {
        catalog: Arc::new(catalog),
        settings: Arc::new(Mutex::new(settings)),
    };

    start_server(app_state).await?;

    Ok(())
}
