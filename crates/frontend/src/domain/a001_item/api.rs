use contracts::domain::a001_item::Item;

use crate::shared::api_utils::get_json;
use crate::shared::config::AppConfig;

/// Fetch the collectible item catalog
pub async fn fetch_items(config: &AppConfig) -> Result<Vec<Item>, String> {
    get_json::<Vec<Item>>(&config.api_url("items"), None)
        .await
        .map_err(|e| format!("Failed to fetch items: {}", e))
}
