//! Dashboard messages.

use sentra_api::client::ApiError;
use sentra_api::schema::{StatsPeriod, StatsResponse};

/// Messages for the statistics dashboard.
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    /// Reporting period picked
    PeriodSelected(StatsPeriod),

    /// Statistics fetch completed for a period
    Loaded(StatsPeriod, Result<StatsResponse, ApiError>),
}
