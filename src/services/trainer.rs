//! Trainer lookup service interface

use async_trait::async_trait;

use crate::core::batch::Trainer;
use crate::utils::error::Result;

#[cfg(test)]
use mockall::automock;

/// Resolves trainers from their email address
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrainerService: Send + Sync {
    /// The trainer registered under `email`, if any
    async fn get_trainer_by_email(&self, email: &str) -> Result<Option<Trainer>>;
}
