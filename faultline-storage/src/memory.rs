//! Shared keyed table backing every repository

use faultline_api_types::{Page, PageRequest, Record, RecordId};
use faultline_interfaces::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-lifetime table of records keyed by id
///
/// Cloning shares the underlying storage. Iteration order is ascending id.
#[derive(Debug)]
pub struct MemoryTable<T: Record> {
    rows: Arc<RwLock<BTreeMap<RecordId, T>>>,
}

impl<T: Record> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Build a table pre-populated with records keyed by their own ids
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let rows = records.into_iter().map(|record| (record.id(), record)).collect();
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub async fn get(&self, id: RecordId) -> StoreResult<T> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found::<T>(id))
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    pub async fn page(&self, request: PageRequest) -> Page<T> {
        let rows = self.rows.read().await;
        let start = request.skip.min(rows.len());
        let records = rows.values().skip(start).take(request.limit).cloned().collect();

        Page {
            records,
            total: rows.len(),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Insert under the record's own id; an existing entry is left untouched
    pub async fn insert_new(&self, record: T) -> StoreResult<T> {
        let mut rows = self.rows.write().await;
        let id = record.id();
        if rows.contains_key(&id) {
            return Err(StoreError::conflict::<T>(id));
        }
        rows.insert(id, record.clone());
        Ok(record)
    }

    /// Replace the entry stored under `id`, which must already exist
    pub async fn replace(&self, id: RecordId, record: T) -> StoreResult<T> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(StoreError::not_found::<T>(id)),
        }
    }

    pub async fn remove(&self, id: RecordId) -> StoreResult<T> {
        self.rows
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| StoreError::not_found::<T>(id))
    }
}
