//! Snapshots module - persisted daily valuation rows.

mod snapshots_model;
mod snapshots_traits;

pub use snapshots_model::Snapshot;
pub use snapshots_traits::SnapshotRepositoryTrait;
