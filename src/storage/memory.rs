//! In-memory batch store
//!
//! Implements both service traits over plain vectors behind a single
//! `RwLock`. Insertion order is preserved and updates replace records in
//! place, so the "first in-progress batch" lookup stays deterministic
//! across reads.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::batch::{Batch, BatchType, Trainer, window};
use crate::services::{BatchService, TrainerService};
use crate::utils::error::{GatewayError, Result};

/// Seed fixture for the in-memory store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    /// Trainers known to the store
    #[serde(default)]
    pub trainers: Vec<Trainer>,
    /// Batch type reference data
    #[serde(default)]
    pub batch_types: Vec<BatchType>,
    /// Batch records, kept in file order
    #[serde(default)]
    pub batches: Vec<Batch>,
}

/// In-memory store implementing [`BatchService`] and [`TrainerService`]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    batches: Vec<Batch>,
    batch_types: Vec<BatchType>,
    trainers: Vec<Trainer>,
    next_batch_id: i32,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                batches: Vec::new(),
                batch_types: Vec::new(),
                trainers: Vec::new(),
                next_batch_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the given fixture
    ///
    /// Seed batches without an ID get one assigned in file order.
    pub fn with_seed(seed: SeedData) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            inner.trainers = seed.trainers;
            inner.batch_types = seed.batch_types;
            for mut batch in seed.batches {
                let id = batch.id.unwrap_or(inner.next_batch_id);
                batch.id = Some(id);
                inner.next_batch_id = inner.next_batch_id.max(id + 1);
                inner.batches.push(batch);
            }
        }
        store
    }

    /// Load a seed fixture from a YAML file
    pub async fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading seed data from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            GatewayError::config(format!("Failed to read seed file {:?}: {}", path, e))
        })?;

        let seed: SeedData = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::config(format!("Failed to parse seed file: {}", e)))?;

        debug!(
            "Seed loaded: {} trainers, {} batch types, {} batches",
            seed.trainers.len(),
            seed.batch_types.len(),
            seed.batches.len()
        );

        Ok(Self::with_seed(seed))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchService for MemoryStore {
    async fn get_batch_all(&self) -> Result<Vec<Batch>> {
        Ok(self.inner.read().batches.clone())
    }

    async fn get_batch_by_trainer_id(&self, trainer_id: i32) -> Result<Vec<Batch>> {
        let inner = self.inner.read();
        Ok(inner
            .batches
            .iter()
            .filter(|b| b.trainer_id == trainer_id)
            .cloned()
            .collect())
    }

    async fn get_batch_by_id(&self, batch_id: i32) -> Result<Option<Batch>> {
        let inner = self.inner.read();
        Ok(inner
            .batches
            .iter()
            .find(|b| b.id == Some(batch_id))
            .cloned())
    }

    async fn add_or_update_batch(&self, mut batch: Batch) -> Result<Option<Batch>> {
        let mut inner = self.inner.write();
        match batch.id {
            None => {
                batch.id = Some(inner.next_batch_id);
                inner.next_batch_id += 1;
                inner.batches.push(batch.clone());
                info!("Created batch {:?} ({})", batch.id, batch.name);
                Ok(Some(batch))
            }
            Some(id) => {
                match inner.batches.iter_mut().find(|b| b.id == Some(id)) {
                    Some(existing) => {
                        // Replace in place to keep store order stable.
                        *existing = batch.clone();
                        info!("Updated batch {} ({})", id, batch.name);
                        Ok(Some(batch))
                    }
                    None => {
                        debug!("Rejected update for unknown batch id {}", id);
                        Ok(None)
                    }
                }
            }
        }
    }

    async fn get_all_batch_types(&self) -> Result<Vec<BatchType>> {
        Ok(self.inner.read().batch_types.clone())
    }

    async fn current_batches(&self) -> Result<Vec<Batch>> {
        let batches = self.inner.read().batches.clone();
        Ok(window::in_progress(batches, Utc::now()))
    }
}

#[async_trait]
impl TrainerService for MemoryStore {
    async fn get_trainer_by_email(&self, email: &str) -> Result<Option<Trainer>> {
        let inner = self.inner.read();
        Ok(inner.trainers.iter().find(|t| t.email == email).cloned())
    }
}
