//! User repository

use async_trait::async_trait;
use faultline_api_types::{Page, PageRequest, RecordId, User};
use faultline_interfaces::{RecordRepository, Repository, StoreResult, UserRepository};
use tracing::debug;

use crate::memory::MemoryTable;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: MemoryTable<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            table: MemoryTable::with_records(users),
        }
    }
}

#[async_trait]
impl Repository for InMemoryUserRepository {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl RecordRepository<User> for InMemoryUserRepository {
    async fn find_by_id(&self, id: RecordId) -> StoreResult<User> {
        self.table.get(id).await
    }

    async fn list(&self, page: PageRequest) -> StoreResult<Page<User>> {
        Ok(self.table.page(page).await)
    }

    async fn create(&self, record: User) -> StoreResult<User> {
        debug!("Inserting user {}", record.id);
        self.table.insert_new(record).await
    }

    async fn all(&self) -> StoreResult<Vec<User>> {
        Ok(self.table.snapshot().await)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.table.len().await)
    }
}

impl UserRepository for InMemoryUserRepository {}
