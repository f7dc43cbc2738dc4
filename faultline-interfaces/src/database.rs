//! Record store interfaces
//!
//! The store has no locking discipline beyond what an implementation needs
//! for memory safety. Concurrent writers to the same id race and the
//! resulting order is undefined.

use async_trait::async_trait;
use faultline_api_types::{Item, Page, PageRequest, Record, RecordId, User};

/// Record store error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("{entity} already exists")]
    Conflict { entity: &'static str, id: RecordId },
}

impl StoreError {
    pub fn not_found<T: Record>(id: RecordId) -> Self {
        StoreError::NotFound { entity: T::ENTITY, id }
    }

    pub fn conflict<T: Record>(id: RecordId) -> Self {
        StoreError::Conflict { entity: T::ENTITY, id }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Base repository trait with health check capability
#[async_trait]
pub trait Repository: Send + Sync {
    /// Check if the repository is healthy and can serve requests
    async fn health_check(&self) -> StoreResult<()>;
}

/// Operations every record table supports
#[async_trait]
pub trait RecordRepository<T: Record>: Repository {
    /// Find a record by id, failing with `NotFound` when absent
    async fn find_by_id(&self, id: RecordId) -> StoreResult<T>;

    /// Slice the current snapshot; the total is always the full table size
    async fn list(&self, page: PageRequest) -> StoreResult<Page<T>>;

    /// Insert a new record, failing with `Conflict` when the id is taken
    async fn create(&self, record: T) -> StoreResult<T>;

    /// Snapshot of every record in iteration order
    async fn all(&self) -> StoreResult<Vec<T>>;

    /// Number of records currently stored
    async fn count(&self) -> StoreResult<usize>;
}

/// Item table: full CRUD
#[async_trait]
pub trait ItemRepository: RecordRepository<Item> {
    /// Replace the record stored under `id` wholesale
    async fn update(&self, id: RecordId, item: Item) -> StoreResult<Item>;

    /// Remove the record stored under `id`, returning it
    async fn delete(&self, id: RecordId) -> StoreResult<Item>;
}

/// User table: create and read only
#[async_trait]
pub trait UserRepository: RecordRepository<User> {}

/// Repository factory for creating repository instances
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Get item repository instance
    fn item_repository(&self) -> &dyn ItemRepository;

    /// Get user repository instance
    fn user_repository(&self) -> &dyn UserRepository;

    /// Check health of all repositories
    async fn health_check(&self) -> StoreResult<()> {
        self.item_repository().health_check().await?;
        self.user_repository().health_check().await
    }
}
