//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use chrono::{DateTime, Duration, Utc};

use batch_gateway::storage::{MemoryStore, SeedData};
use batch_gateway::{Batch, BatchType, Trainer};

/// Factory for creating test batches
pub struct BatchFactory;

impl BatchFactory {
    /// Create a batch with an explicit window, offset in days from now
    pub fn with_window(name: &str, trainer_id: i32, start_days: i64, end_days: i64) -> Batch {
        Batch {
            id: None,
            name: name.to_string(),
            start_date: Self::days_from_now(start_days),
            end_date: Self::days_from_now(end_days),
            trainer_id,
            co_trainer_id: None,
            skill: Some("Java".to_string()),
            location: Some("Reston".to_string()),
            batch_type_id: Some(1),
        }
    }

    /// A batch that ended a month ago
    pub fn past(name: &str, trainer_id: i32) -> Batch {
        Self::with_window(name, trainer_id, -90, -30)
    }

    /// A batch running right now
    pub fn in_progress(name: &str, trainer_id: i32) -> Batch {
        Self::with_window(name, trainer_id, -14, 14)
    }

    /// A batch starting in a month
    pub fn future(name: &str, trainer_id: i32) -> Batch {
        Self::with_window(name, trainer_id, 30, 90)
    }

    fn days_from_now(days: i64) -> DateTime<Utc> {
        Utc::now() + Duration::days(days)
    }
}

/// Factory for creating test trainers
pub struct TrainerFactory;

impl TrainerFactory {
    /// Create a trainer with a derived email
    pub fn create(id: i32, name: &str) -> Trainer {
        Trainer {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }
}

/// A store seeded with one trainer and one batch per time window
///
/// Trainer `dana@example.com` (id 1) owns, in insertion order:
/// "ended" (past), "running" (in progress), "upcoming" (future).
/// Trainer `lee@example.com` (id 2) owns nothing.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::with_seed(SeedData {
        trainers: vec![
            TrainerFactory::create(1, "Dana"),
            TrainerFactory::create(2, "Lee"),
        ],
        batch_types: vec![
            BatchType {
                id: 1,
                name: "Java/MSA".to_string(),
            },
            BatchType {
                id: 2,
                name: "Rust Systems".to_string(),
            },
        ],
        batches: vec![
            BatchFactory::past("ended", 1),
            BatchFactory::in_progress("running", 1),
            BatchFactory::future("upcoming", 1),
        ],
    })
}
