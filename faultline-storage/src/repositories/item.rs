//! Item repository

use async_trait::async_trait;
use faultline_api_types::{Item, Page, PageRequest, RecordId};
use faultline_interfaces::{ItemRepository, RecordRepository, Repository, StoreResult};
use tracing::debug;

use crate::memory::MemoryTable;

#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    table: MemoryTable<Item>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            table: MemoryTable::with_records(items),
        }
    }
}

#[async_trait]
impl Repository for InMemoryItemRepository {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl RecordRepository<Item> for InMemoryItemRepository {
    async fn find_by_id(&self, id: RecordId) -> StoreResult<Item> {
        self.table.get(id).await
    }

    async fn list(&self, page: PageRequest) -> StoreResult<Page<Item>> {
        Ok(self.table.page(page).await)
    }

    async fn create(&self, record: Item) -> StoreResult<Item> {
        debug!("Inserting item {}", record.id);
        self.table.insert_new(record).await
    }

    async fn all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.table.snapshot().await)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.table.len().await)
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn update(&self, id: RecordId, item: Item) -> StoreResult<Item> {
        debug!("Replacing item {}", id);
        self.table.replace(id, item).await
    }

    async fn delete(&self, id: RecordId) -> StoreResult<Item> {
        debug!("Removing item {}", id);
        self.table.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_interfaces::StoreError;

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryItemRepository::new();
        let item = Item::new(999, "Test Item", 99.99).with_description("Test Description");

        repo.create(item.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(999).await.unwrap(), item);
    }

    #[tokio::test]
    async fn test_update_keeps_path_key() {
        let repo = InMemoryItemRepository::with_records(vec![Item::new(1, "old", 1.0)]);

        let updated = repo.update(1, Item::new(1, "new", 2.5)).await.unwrap();

        assert_eq!(updated.name, "new");
        assert_eq!(repo.find_by_id(1).await.unwrap().price, 2.5);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryItemRepository::new();
        assert_eq!(
            repo.delete(12).await.unwrap_err(),
            StoreError::NotFound { entity: "Item", id: 12 }
        );
    }
}
