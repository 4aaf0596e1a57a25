//! Query cache and mutation effects for Sentra Admin Studio.
//!
//! This crate holds the client-side state conventions shared by every
//! screen: one cache key per fetchable resource, a response cache with
//! staleness tracking, and the precise set of cache entries each write
//! invalidates.
//!
//! The cache is deliberately passive. The GUI decides when to fetch by
//! asking [`ResourceCache::needs_fetch`], spawns the request itself, and
//! reports the outcome back. Mutations report a [`MutationKind`] on
//! success, and [`ResourceCache::apply`] marks exactly the affected
//! entries stale.

#![warn(clippy::all)]

pub mod cache;
pub mod key;
pub mod mutation;

pub use cache::{CacheEntry, CachedPayload, QueryStatus, ResourceCache};
pub use key::{EntityKind, InvalidationSelector, QueryKey, UserFilters};
pub use mutation::{MutationKind, MutationState};

#[cfg(test)]
mod tests {
    use super::*;
    use sentra_api::schema::{Question, Role, User};

    fn question(id: &str, video_id: &str) -> Question {
        Question {
            id: id.to_string(),
            text: "What does the safety briefing cover?".to_string(),
            order: 0,
            video_id: video_id.to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            answers: vec![],
        }
    }

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            auth_id: format!("auth-{id}"),
            email: format!("{id}@acme.com"),
            first_name: None,
            last_name: None,
            role,
            company_id: "c1".to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            company: None,
        }
    }

    #[test]
    fn editing_a_question_refreshes_list_and_entry() {
        let mut cache = ResourceCache::new();
        let list = QueryKey::VideoQuestions("v1".to_string());
        let entry = QueryKey::Question("q1".to_string());
        cache.resolve(
            list.clone(),
            CachedPayload::Questions(vec![question("q1", "v1")]),
        );
        cache.resolve(entry.clone(), CachedPayload::Question(question("q1", "v1")));

        cache.apply(&MutationKind::UpdateQuestion {
            question_id: "q1".to_string(),
            video_id: "v1".to_string(),
        });

        assert!(cache.needs_fetch(&list));
        assert!(cache.needs_fetch(&entry));
    }

    #[test]
    fn user_writes_sweep_every_filter_combination() {
        let mut cache = ResourceCache::new();
        let all = QueryKey::Users(UserFilters::default());
        let admins = QueryKey::Users(UserFilters {
            company_id: None,
            role: Some(Role::Admin),
        });
        cache.resolve(all.clone(), CachedPayload::Users(vec![user("u1", Role::User)]));
        cache.resolve(
            admins.clone(),
            CachedPayload::Users(vec![user("u2", Role::Admin)]),
        );

        cache.apply(&MutationKind::UserWrite);

        assert!(cache.needs_fetch(&all));
        assert!(cache.needs_fetch(&admins));
        // Stale data stays readable until the refetch lands.
        assert!(cache.users(&UserFilters::default()).is_some());
    }
}
