use faultline_api_types::{Item, Page};
use serde::{Deserialize, Serialize};

/// One page of items plus the full table size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub total: usize,
}

impl From<Page<Item>> for ItemListResponse {
    fn from(page: Page<Item>) -> Self {
        Self {
            items: page.records,
            total: page.total,
        }
    }
}
