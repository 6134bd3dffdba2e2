use itemdesk_items::ItemStore;

use crate::config::ApiConfig;

/// State shared by every handler.
#[derive(Debug)]
pub struct AppServices {
    items: ItemStore,
}

impl AppServices {
    pub fn new(items: ItemStore) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }
}

/// Construct the process-wide services once at startup.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let items = if config.seed_data {
        ItemStore::with_seed()
    } else {
        ItemStore::new()
    };
    tracing::info!(records = items.len(), seeded = config.seed_data, "item store ready");
    AppServices::new(items)
}
