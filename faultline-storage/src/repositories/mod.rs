//! Repository implementations over in-memory tables

pub mod item;
pub mod user;

pub use item::InMemoryItemRepository;
pub use user::InMemoryUserRepository;

use async_trait::async_trait;
use faultline_interfaces::{ItemRepository, RepositoryFactory, StoreResult, UserRepository};

use crate::seed::{seed_items, seed_users};

/// Factory owning one item table and one user table
///
/// Each factory is an independent store, so tests can build as many as they
/// like without sharing state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryFactory {
    items: InMemoryItemRepository,
    users: InMemoryUserRepository,
}

impl InMemoryRepositoryFactory {
    /// Empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables holding the demo records
    pub fn seeded() -> Self {
        Self {
            items: InMemoryItemRepository::with_records(seed_items()),
            users: InMemoryUserRepository::with_records(seed_users()),
        }
    }
}

#[async_trait]
impl RepositoryFactory for InMemoryRepositoryFactory {
    fn item_repository(&self) -> &dyn ItemRepository {
        &self.items
    }

    fn user_repository(&self) -> &dyn UserRepository {
        &self.users
    }

    async fn health_check(&self) -> StoreResult<()> {
        // Memory tables cannot lose their connection
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_interfaces::RecordRepository;

    #[tokio::test]
    async fn test_seeded_factory_has_demo_records() {
        let factory = InMemoryRepositoryFactory::seeded();
        assert_eq!(factory.item_repository().count().await.unwrap(), 2);
        assert_eq!(factory.user_repository().count().await.unwrap(), 2);
        assert!(factory.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_factories_are_independent() {
        let first = InMemoryRepositoryFactory::seeded();
        let second = InMemoryRepositoryFactory::seeded();

        first.item_repository().delete(1).await.unwrap();

        assert_eq!(first.item_repository().count().await.unwrap(), 1);
        assert_eq!(second.item_repository().count().await.unwrap(), 2);
    }
}
