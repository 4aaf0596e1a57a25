//! Dashboard statistics wire types.

use serde::{Deserialize, Serialize};

/// Reporting window for the stats endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatsPeriod {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 3] = [StatsPeriod::Week, StatsPeriod::Month, StatsPeriod::Quarter];

    /// Query parameter value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatsPeriod::Week => "7d",
            StatsPeriod::Month => "30d",
            StatsPeriod::Quarter => "90d",
        }
    }

    /// Label for the period selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StatsPeriod::Week => "Last 7 days",
            StatsPeriod::Month => "Last 30 days",
            StatsPeriod::Quarter => "Last 90 days",
        }
    }
}

/// One point of a growth series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: String,
    pub count: u64,
}

/// A labeled growth series with its period total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub label: String,
    #[serde(default)]
    pub data: Vec<TimePoint>,
    pub total: u64,
}

/// Entity totals across the whole platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTotals {
    pub users: u64,
    pub companies: u64,
    pub videos: u64,
    pub questions: u64,
    pub answers: u64,
}

/// User counts per role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBreakdown {
    pub user: u64,
    pub admin: u64,
    pub superadmin: u64,
}

/// Growth series per entity kind over the requested period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsGrowth {
    pub users: TimeSeries,
    pub companies: TimeSeries,
    pub videos: TimeSeries,
    pub questions: TimeSeries,
}

/// Aggregate dashboard metrics, GET /api/stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub totals: StatsTotals,
    pub role_breakdown: RoleBreakdown,
    pub growth: StatsGrowth,
    pub period: StatsPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_wire_values() {
        assert_eq!(StatsPeriod::Week.as_str(), "7d");
        assert_eq!(StatsPeriod::default(), StatsPeriod::Month);
        let period: StatsPeriod = serde_json::from_str("\"90d\"").expect("deserialize");
        assert_eq!(period, StatsPeriod::Quarter);
    }

    #[test]
    fn stats_parse() {
        let json = serde_json::json!({
            "totals": {"users": 12, "companies": 3, "videos": 5, "questions": 9, "answers": 31},
            "roleBreakdown": {"user": 9, "admin": 2, "superadmin": 1},
            "growth": {
                "users": {"label": "Users", "data": [{"date": "2026-01-01", "count": 2}], "total": 2},
                "companies": {"label": "Companies", "data": [], "total": 0},
                "videos": {"label": "Videos", "data": [], "total": 1},
                "questions": {"label": "Questions", "data": [], "total": 4}
            },
            "period": "30d"
        });
        let stats: StatsResponse = serde_json::from_value(json).expect("parse stats");
        assert_eq!(stats.totals.users, 12);
        assert_eq!(stats.role_breakdown.superadmin, 1);
        assert_eq!(stats.growth.users.data.len(), 1);
        assert_eq!(stats.period, StatsPeriod::Month);
    }
}
