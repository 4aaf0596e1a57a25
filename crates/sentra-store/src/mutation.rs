//! Mutation lifecycle state and cache effects.

use sentra_api::ApiError;

use crate::key::{EntityKind, InvalidationSelector, QueryKey};

/// Lifecycle of one in-flight write.
///
/// Each screen owns one of these per mutation it can issue, so a slow
/// delete never blocks an unrelated save button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Success,
    Error(ApiError),
}

impl MutationState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// A completed write, classified by what it touched.
///
/// Question writes target their video's question list precisely; only an
/// edit also refreshes the single-question entry. Writes to the other
/// entities sweep their whole family, because list rows embed relations
/// (company names on videos, user counts on companies) that any write
/// may have changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    CreateQuestion { video_id: String },
    UpdateQuestion { question_id: String, video_id: String },
    DeleteQuestion { video_id: String },
    ReorderQuestions { video_id: String },
    VideoWrite,
    CompanyWrite,
    UserWrite,
}

impl MutationKind {
    /// The cache entries this mutation makes stale.
    #[must_use]
    pub fn invalidations(&self) -> Vec<InvalidationSelector> {
        match self {
            Self::CreateQuestion { video_id }
            | Self::DeleteQuestion { video_id }
            | Self::ReorderQuestions { video_id } => vec![InvalidationSelector::Exact(
                QueryKey::VideoQuestions(video_id.clone()),
            )],
            Self::UpdateQuestion {
                question_id,
                video_id,
            } => vec![
                InvalidationSelector::Exact(QueryKey::VideoQuestions(video_id.clone())),
                InvalidationSelector::Exact(QueryKey::Question(question_id.clone())),
            ],
            Self::VideoWrite => vec![InvalidationSelector::Kind(EntityKind::Videos)],
            Self::CompanyWrite => vec![InvalidationSelector::Kind(EntityKind::Companies)],
            Self::UserWrite => vec![InvalidationSelector::Kind(EntityKind::Users)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_touches_only_the_video_list() {
        let effects = MutationKind::CreateQuestion {
            video_id: "v1".to_string(),
        }
        .invalidations();
        assert_eq!(
            effects,
            vec![InvalidationSelector::Exact(QueryKey::VideoQuestions(
                "v1".to_string()
            ))]
        );
    }

    #[test]
    fn update_also_touches_the_single_entry() {
        let effects = MutationKind::UpdateQuestion {
            question_id: "q7".to_string(),
            video_id: "v1".to_string(),
        }
        .invalidations();
        assert_eq!(effects.len(), 2);
        assert!(effects.contains(&InvalidationSelector::Exact(QueryKey::Question(
            "q7".to_string()
        ))));
    }

    #[test]
    fn question_writes_never_sweep_videos() {
        for kind in [
            MutationKind::CreateQuestion {
                video_id: "v1".to_string(),
            },
            MutationKind::DeleteQuestion {
                video_id: "v1".to_string(),
            },
            MutationKind::ReorderQuestions {
                video_id: "v1".to_string(),
            },
        ] {
            for selector in kind.invalidations() {
                assert!(!selector.matches(&QueryKey::Videos));
                assert!(!selector.matches(&QueryKey::Video("v1".to_string())));
            }
        }
    }

    #[test]
    fn mutation_error_is_readable() {
        let state = MutationState::Error(ApiError::Transport("offline".to_string()));
        assert!(!state.is_pending());
        assert!(state.error().is_some());
        assert!(MutationState::Pending.is_pending());
        assert!(MutationState::Idle.error().is_none());
    }
}
