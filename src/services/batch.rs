//! Batch record service interface

use async_trait::async_trait;

use crate::core::batch::{Batch, BatchType};
use crate::utils::error::Result;

#[cfg(test)]
use mockall::automock;

/// Read/write access to batch records and batch types
///
/// Safe for concurrent use; the gateway issues one call per request and
/// performs no locking of its own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BatchService: Send + Sync {
    /// All batches, in store order
    async fn get_batch_all(&self) -> Result<Vec<Batch>>;

    /// Batches led by the given trainer, in store order
    async fn get_batch_by_trainer_id(&self, trainer_id: i32) -> Result<Vec<Batch>>;

    /// A single batch by ID
    async fn get_batch_by_id(&self, batch_id: i32) -> Result<Option<Batch>>;

    /// Create a batch (no ID) or update an existing one (known ID)
    ///
    /// Returns the stored record, with a store-assigned ID on create.
    /// `None` means the store rejected the payload.
    async fn add_or_update_batch(&self, batch: Batch) -> Result<Option<Batch>>;

    /// All batch types
    async fn get_all_batch_types(&self) -> Result<Vec<BatchType>>;

    /// All batches currently in progress, regardless of trainer
    async fn current_batches(&self) -> Result<Vec<Batch>>;
}
