//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemstore_core::item::{Record, UpdateDirective};
use itemstore_core::storage::{ItemRepository, Result};

/// In-memory storage backend for testing.
///
/// Mirrors DynamoDB's default semantics: puts overwrite, updates upsert,
/// deletes of unknown ids succeed. Data is not persisted and will be lost
/// when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<String, Record>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with records.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let items = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the repository holds no records.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Looks up a single record.
    pub async fn get(&self, id: &str) -> Option<Record> {
        self.items.read().await.get(id).cloned()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn put_item(&self, record: &Record) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn scan_items(&self) -> Result<Vec<Record>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn update_item(&self, id: &str, directive: &UpdateDirective) -> Result<Record> {
        let mut items = self.items.write().await;
        let record = items
            .entry(id.to_string())
            .or_insert_with(|| Record::bare(id));
        directive.apply(record);
        Ok(record.clone())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }
}
