//! Snapshot repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::snapshots_model::Snapshot;
use crate::errors::Result;

/// Trait defining the contract for the snapshot store.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Inserts or replaces the row keyed `(user, portfolio-or-null, date)`.
    async fn upsert(&self, snapshot: Snapshot) -> Result<Snapshot>;

    /// Fetches one row by its composite key.
    fn get(
        &self,
        user_id: &str,
        portfolio_id: Option<&str>,
        date: NaiveDate,
    ) -> Result<Option<Snapshot>>;

    /// The most recent global row, by date descending.
    fn latest_global(&self, user_id: &str) -> Result<Option<Snapshot>>;

    /// All per-portfolio rows for a given date (the global row excluded).
    fn portfolio_snapshots_on(&self, user_id: &str, date: NaiveDate) -> Result<Vec<Snapshot>>;
}
