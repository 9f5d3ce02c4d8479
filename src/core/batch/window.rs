//! Time-window filters over batch collections
//!
//! All filters take `now` explicitly. Callers capture it once at the start
//! of filtering so every record in a request is judged against the same
//! instant. Source order is preserved throughout; the single in-progress
//! lookup is defined as the first match in that order.

use chrono::{DateTime, Utc};

use super::types::Batch;

/// Keep only batches that ended at or before `now`
pub fn past(batches: Vec<Batch>, now: DateTime<Utc>) -> Vec<Batch> {
    batches.into_iter().filter(|b| b.is_past(now)).collect()
}

/// Keep only batches that start at or after `now`
pub fn future(batches: Vec<Batch>, now: DateTime<Utc>) -> Vec<Batch> {
    batches.into_iter().filter(|b| b.is_future(now)).collect()
}

/// Keep only batches whose window strictly contains `now`
pub fn in_progress(batches: Vec<Batch>, now: DateTime<Utc>) -> Vec<Batch> {
    batches
        .into_iter()
        .filter(|b| b.is_in_progress(now))
        .collect()
}

/// First batch in source order whose window strictly contains `now`
pub fn first_in_progress(batches: &[Batch], now: DateTime<Utc>) -> Option<&Batch> {
    batches.iter().find(|b| b.is_in_progress(now))
}
