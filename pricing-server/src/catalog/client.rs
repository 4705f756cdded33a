//! Catalog HTTP client
//!
//! Reads menu items and inventory rows from the content store's item API
//! (`/items/<collection>?filter[id][_in]=...`), unwrapping its `{ "data":
//! [...] }` envelope. Results are cached per id-set: 5 minutes for menu
//! data, 1 minute for inventory, which changes more often.
//!
//! Handlers depend on the [`CatalogSource`] trait rather than the concrete
//! client so tests can substitute a canned catalog.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::Config;
use crate::pricing::{InventoryFact, MenuItemFact};
use crate::utils::{AppError, AppResult};

use super::cache::TtlCache;

/// Read access to menu and inventory facts
///
/// Both reads are independent; callers may issue them concurrently.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Menu facts for the given ids, keyed by item id.
    /// Ids unknown to the catalog are simply absent from the map.
    async fn fetch_menu_items(&self, item_ids: &[i64]) -> AppResult<HashMap<i64, MenuItemFact>>;

    /// Inventory facts for the given ids, keyed by menu item id.
    /// Items without an inventory row are absent from the map.
    async fn fetch_inventory(&self, item_ids: &[i64]) -> AppResult<HashMap<i64, InventoryFact>>;
}

/// Content-store response envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// HTTP catalog client with an in-process TTL cache
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    cache: TtlCache,
    menu_ttl: Duration,
    inventory_ttl: Duration,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.catalog_url.trim_end_matches('/').to_string(),
            cache: TtlCache::new(),
            menu_ttl: Duration::from_secs(config.menu_cache_ttl_secs),
            inventory_ttl: Duration::from_secs(config.inventory_cache_ttl_secs),
        }
    }

    /// Fetch one collection for an id set, going through the cache
    async fn fetch_collection<T>(
        &self,
        collection: &str,
        filter_field: &str,
        fields: &str,
        item_ids: &[i64],
        ttl: Duration,
    ) -> AppResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = item_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let cache_key = format!("{}:{}", collection, ids);

        if let Some(cached) = self.cache.get(&cache_key) {
            return serde_json::from_value(cached)
                .map_err(|e| AppError::Internal(format!("corrupt cache entry: {}", e)));
        }

        let url = format!(
            "{}/items/{}?filter[{}][_in]={}&fields={}",
            self.base_url, collection, filter_field, ids, fields
        );
        tracing::debug!(target: "catalog", %url, "Fetching from catalog");

        let envelope: Envelope<T> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AppError::Upstream(format!("catalog returned {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("malformed catalog response: {}", e)))?;

        let payload = serde_json::to_value(&envelope.data)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        self.cache.insert(cache_key, payload, ttl);

        Ok(envelope.data)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_menu_items(&self, item_ids: &[i64]) -> AppResult<HashMap<i64, MenuItemFact>> {
        let items: Vec<MenuItemFact> = self
            .fetch_collection(
                "menu_items",
                "id",
                "id,name,price,category_id,is_available",
                item_ids,
                self.menu_ttl,
            )
            .await?;
        Ok(items.into_iter().map(|item| (item.id, item)).collect())
    }

    async fn fetch_inventory(&self, item_ids: &[i64]) -> AppResult<HashMap<i64, InventoryFact>> {
        let rows: Vec<InventoryFact> = self
            .fetch_collection(
                "inventory",
                "menu_item_id",
                "menu_item_id,current_stock,minimum_stock",
                item_ids,
                self.inventory_ttl,
            )
            .await?;
        Ok(rows.into_iter().map(|row| (row.menu_item_id, row)).collect())
    }
}
