//! Refresh module - the orchestrator that pulls fresh market data and
//! persists daily snapshots, plus the no-network overview paths.

mod overview_service;
mod refresh_service;

pub use overview_service::{OverviewService, PortfolioOverview};
pub use refresh_service::{RefreshOutcome, RefreshService};
