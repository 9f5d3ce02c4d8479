//! Batch record types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A training cohort with a defined start/end time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Batch ID, assigned by the backing store on create
    pub id: Option<i32>,
    /// Display name of the cohort
    pub name: String,
    /// When training starts
    pub start_date: DateTime<Utc>,
    /// When training ends
    pub end_date: DateTime<Utc>,
    /// Primary trainer ID
    pub trainer_id: i32,
    /// Co-trainer ID, if any
    pub co_trainer_id: Option<i32>,
    /// Skill track taught in this batch
    pub skill: Option<String>,
    /// Training location
    pub location: Option<String>,
    /// Reference to a batch type
    pub batch_type_id: Option<i32>,
}

impl Batch {
    /// The batch ended at or before `now`
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.end_date <= now
    }

    /// The batch starts at or after `now`
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.start_date >= now
    }

    /// `now` falls strictly inside the batch window
    pub fn is_in_progress(&self, now: DateTime<Utc>) -> bool {
        self.start_date < now && now < self.end_date
    }
}

/// Classification value associated with batches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchType {
    /// Type ID
    pub id: i32,
    /// Descriptive label
    pub name: String,
}

/// A person who runs batches, looked up by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Trainer ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Email address, the external lookup key
    pub email: String,
}
