//! Cache key conventions for every resource the console reads.
//!
//! Each fetchable resource has exactly one [`QueryKey`] shape. Mutations
//! target entries through an [`InvalidationSelector`], which either names
//! one key or sweeps a whole [`EntityKind`].

use std::fmt;

use sentra_api::schema::{Role, StatsPeriod};

/// Resource family a cache entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Companies,
    Users,
    Videos,
    Questions,
    Stats,
    Auth,
}

/// Server-side filters for the user list.
///
/// The filters are part of the cache key, so each filter combination is
/// cached independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserFilters {
    pub company_id: Option<String>,
    pub role: Option<Role>,
}

impl UserFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company_id.is_none() && self.role.is_none()
    }

    /// Query parameters for the user list request. Unset filters are
    /// omitted entirely, never sent as empty strings.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(company_id) = &self.company_id {
            pairs.push(("companyId", company_id.clone()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        pairs
    }
}

/// Identity of one cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// All companies.
    Companies,
    /// One company by id, with domains and counts.
    Company(String),
    /// Users matching a filter combination.
    Users(UserFilters),
    /// One user by id.
    User(String),
    /// All videos.
    Videos,
    /// One video by id.
    Video(String),
    /// The ordered question list of one video.
    VideoQuestions(String),
    /// One question by id.
    Question(String),
    /// Platform statistics for a period.
    Stats(StatsPeriod),
    /// The authenticated user's own record.
    AuthMe,
}

impl QueryKey {
    /// The resource family this key belongs to.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Companies | Self::Company(_) => EntityKind::Companies,
            Self::Users(_) | Self::User(_) => EntityKind::Users,
            Self::Videos | Self::Video(_) => EntityKind::Videos,
            Self::VideoQuestions(_) | Self::Question(_) => EntityKind::Questions,
            Self::Stats(_) => EntityKind::Stats,
            Self::AuthMe => EntityKind::Auth,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Companies => write!(f, "companies"),
            Self::Company(id) => write!(f, "companies/{id}"),
            Self::Users(filters) if filters.is_empty() => write!(f, "users"),
            Self::Users(filters) => {
                write!(f, "users")?;
                let mut sep = '?';
                for (name, value) in filters.query_pairs() {
                    write!(f, "{sep}{name}={value}")?;
                    sep = '&';
                }
                Ok(())
            }
            Self::User(id) => write!(f, "users/{id}"),
            Self::Videos => write!(f, "videos"),
            Self::Video(id) => write!(f, "videos/{id}"),
            Self::VideoQuestions(video_id) => write!(f, "questions/video/{video_id}"),
            Self::Question(id) => write!(f, "questions/{id}"),
            Self::Stats(period) => write!(f, "stats/{}", period.as_str()),
            Self::AuthMe => write!(f, "auth/me"),
        }
    }
}

/// Which cache entries a mutation touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationSelector {
    /// Every entry of the given family, lists and single records alike.
    Kind(EntityKind),
    /// Exactly one entry.
    Exact(QueryKey),
}

impl InvalidationSelector {
    #[must_use]
    pub fn matches(&self, key: &QueryKey) -> bool {
        match self {
            Self::Kind(kind) => key.kind() == *kind,
            Self::Exact(exact) => key == exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_selector_sweeps_lists_and_records() {
        let selector = InvalidationSelector::Kind(EntityKind::Videos);
        assert!(selector.matches(&QueryKey::Videos));
        assert!(selector.matches(&QueryKey::Video("v1".to_string())));
        assert!(!selector.matches(&QueryKey::VideoQuestions("v1".to_string())));
        assert!(!selector.matches(&QueryKey::Companies));
    }

    #[test]
    fn exact_selector_spares_siblings() {
        let selector =
            InvalidationSelector::Exact(QueryKey::VideoQuestions("v1".to_string()));
        assert!(selector.matches(&QueryKey::VideoQuestions("v1".to_string())));
        assert!(!selector.matches(&QueryKey::VideoQuestions("v2".to_string())));
        assert!(!selector.matches(&QueryKey::Question("q1".to_string())));
    }

    #[test]
    fn filter_pairs_omit_unset_values() {
        let empty = UserFilters::default();
        assert!(empty.query_pairs().is_empty());

        let filters = UserFilters {
            company_id: Some("c1".to_string()),
            role: Some(Role::Admin),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("companyId", "c1".to_string()),
                ("role", "admin".to_string()),
            ]
        );
    }

    #[test]
    fn distinct_filters_are_distinct_keys() {
        let all = QueryKey::Users(UserFilters::default());
        let admins = QueryKey::Users(UserFilters {
            company_id: None,
            role: Some(Role::Admin),
        });
        assert_ne!(all, admins);
        assert_eq!(all.kind(), admins.kind());
    }
}
