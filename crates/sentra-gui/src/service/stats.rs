//! Dashboard statistics service.

use sentra_api::client::{ApiError, SentraClient};
use sentra_api::schema::{StatsPeriod, StatsResponse};
use sentra_api::validate;

pub async fn fetch_stats(
    client: SentraClient,
    period: StatsPeriod,
) -> Result<StatsResponse, ApiError> {
    client
        .get_query(
            "/api/stats",
            &[("period", period.as_str().to_string())],
            Some(validate::stats_response),
        )
        .await
}
