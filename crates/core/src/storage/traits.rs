use async_trait::async_trait;

use crate::item::{Record, UpdateDirective};

use super::Result;

/// Repository for the items table.
///
/// Every method maps to exactly one storage call from the caller's point of
/// view. None of them check for existence first.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Writes a record, replacing any record with the same id.
    async fn put_item(&self, record: &Record) -> Result<()>;

    /// Returns every record in the table, in storage order.
    async fn scan_items(&self) -> Result<Vec<Record>>;

    /// Applies a directive to the record with the given id and returns the
    /// record as stored afterwards. A missing record is created.
    async fn update_item(&self, id: &str, directive: &UpdateDirective) -> Result<Record>;

    /// Deletes the record with the given id. Deleting a missing id succeeds.
    async fn delete_item(&self, id: &str) -> Result<()>;
}
