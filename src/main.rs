// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tracing::info;

use food_dashboard::api::{FoodApi, HttpFoodApi};
use food_dashboard::config::Config;
use food_dashboard::dashboard::Dashboard;
use food_dashboard::logging::setup_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    setup_logging(&config.log_level, config.log_json)?;

    info!("Starting food-dashboard v{}", env!("CARGO_PKG_VERSION"));

    let api: Arc<dyn FoodApi> = Arc::new(HttpFoodApi::from_config(&config)?);
    info!(api = %config.api_base_url, "Food API client initialized");

    // Mount: a failed initial load is fatal
    let mut dashboard = Dashboard::new(api);
    dashboard.load().await?;

    for food in dashboard.foods() {
        info!(
            food_id = food.id,
            name = %food.name,
            price = %food.price,
            available = food.available,
            "Food"
        );
    }

    info!(count = dashboard.foods().len(), "Dashboard ready");
    Ok(())
}
