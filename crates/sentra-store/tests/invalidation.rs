//! Property-based tests for cache invalidation.
//!
//! These tests verify that every mutation kind invalidates exactly the
//! cache entries it should: question writes stay inside one video's
//! question family, and entity sweeps hit their whole family without
//! crossing into another.

use proptest::prelude::*;
use sentra_api::schema::{
    Company, Question, Role, RoleBreakdown, StatsGrowth, StatsPeriod, StatsResponse, StatsTotals,
    TimeSeries, User, Video,
};
use sentra_store::{
    CacheEntry, CachedPayload, EntityKind, InvalidationSelector, MutationKind, QueryKey,
    ResourceCache, UserFilters,
};

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::User),
        Just(Role::Admin),
        Just(Role::Superadmin),
    ]
}

fn filters_strategy() -> impl Strategy<Value = UserFilters> {
    (
        prop::option::of(id_strategy()),
        prop::option::of(role_strategy()),
    )
        .prop_map(|(company_id, role)| UserFilters { company_id, role })
}

fn period_strategy() -> impl Strategy<Value = StatsPeriod> {
    prop_oneof![
        Just(StatsPeriod::Week),
        Just(StatsPeriod::Month),
        Just(StatsPeriod::Quarter),
    ]
}

fn query_key_strategy() -> impl Strategy<Value = QueryKey> {
    prop_oneof![
        Just(QueryKey::Companies),
        id_strategy().prop_map(QueryKey::Company),
        filters_strategy().prop_map(QueryKey::Users),
        id_strategy().prop_map(QueryKey::User),
        Just(QueryKey::Videos),
        id_strategy().prop_map(QueryKey::Video),
        id_strategy().prop_map(QueryKey::VideoQuestions),
        id_strategy().prop_map(QueryKey::Question),
        period_strategy().prop_map(QueryKey::Stats),
        Just(QueryKey::AuthMe),
    ]
}

fn mutation_strategy() -> impl Strategy<Value = MutationKind> {
    prop_oneof![
        id_strategy().prop_map(|video_id| MutationKind::CreateQuestion { video_id }),
        (id_strategy(), id_strategy()).prop_map(|(question_id, video_id)| {
            MutationKind::UpdateQuestion {
                question_id,
                video_id,
            }
        }),
        id_strategy().prop_map(|video_id| MutationKind::DeleteQuestion { video_id }),
        id_strategy().prop_map(|video_id| MutationKind::ReorderQuestions { video_id }),
        Just(MutationKind::VideoWrite),
        Just(MutationKind::CompanyWrite),
        Just(MutationKind::UserWrite),
    ]
}

const STAMP: &str = "2026-01-01T00:00:00.000Z";

fn company(id: &str) -> Company {
    Company {
        id: id.to_string(),
        name: format!("Company {id}"),
        timezone: "UTC".to_string(),
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
        domains: vec![],
        count: None,
        users: None,
    }
}

fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        auth_id: format!("auth-{id}"),
        email: format!("{id}@acme.com"),
        first_name: None,
        last_name: None,
        role: Role::User,
        company_id: "c1".to_string(),
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
        company: None,
    }
}

fn video(id: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        url: format!("https://cdn.example.com/{id}.mp4"),
        publish_date: STAMP.to_string(),
        company_id: None,
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
        company: None,
    }
}

fn question(id: &str) -> Question {
    Question {
        id: id.to_string(),
        text: "Generated question".to_string(),
        order: 0,
        video_id: "v1".to_string(),
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
        answers: vec![],
    }
}

fn stats(period: StatsPeriod) -> StatsResponse {
    let series = |label: &str| TimeSeries {
        label: label.to_string(),
        data: vec![],
        total: 0,
    };
    StatsResponse {
        totals: StatsTotals::default(),
        role_breakdown: RoleBreakdown::default(),
        growth: StatsGrowth {
            users: series("Users"),
            companies: series("Companies"),
            videos: series("Videos"),
            questions: series("Questions"),
        },
        period,
    }
}

fn payload_for(key: &QueryKey) -> CachedPayload {
    match key {
        QueryKey::Companies => CachedPayload::Companies(vec![]),
        QueryKey::Company(id) => CachedPayload::Company(company(id)),
        QueryKey::Users(_) => CachedPayload::Users(vec![]),
        QueryKey::User(id) => CachedPayload::User(user(id)),
        QueryKey::Videos => CachedPayload::Videos(vec![]),
        QueryKey::Video(id) => CachedPayload::Video(video(id)),
        QueryKey::VideoQuestions(_) => CachedPayload::Questions(vec![]),
        QueryKey::Question(id) => CachedPayload::Question(question(id)),
        QueryKey::Stats(period) => CachedPayload::Stats(stats(*period)),
        QueryKey::AuthMe => CachedPayload::AuthUser(user("me")),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn question_mutations_stay_inside_their_family(
        video_id in id_strategy(),
        question_id in id_strategy(),
        key in query_key_strategy(),
    ) {
        let kinds = [
            MutationKind::CreateQuestion { video_id: video_id.clone() },
            MutationKind::UpdateQuestion {
                question_id,
                video_id: video_id.clone(),
            },
            MutationKind::DeleteQuestion { video_id: video_id.clone() },
            MutationKind::ReorderQuestions { video_id },
        ];
        for kind in kinds {
            for selector in kind.invalidations() {
                if selector.matches(&key) {
                    prop_assert_eq!(key.kind(), EntityKind::Questions);
                }
            }
        }
    }

    #[test]
    fn entity_sweeps_match_exactly_their_kind(key in query_key_strategy()) {
        let cases = [
            (MutationKind::VideoWrite, EntityKind::Videos),
            (MutationKind::CompanyWrite, EntityKind::Companies),
            (MutationKind::UserWrite, EntityKind::Users),
        ];
        for (mutation, kind) in cases {
            let matched = mutation
                .invalidations()
                .iter()
                .any(|selector| selector.matches(&key));
            prop_assert_eq!(matched, key.kind() == kind);
        }
    }

    #[test]
    fn create_question_targets_exactly_one_list(
        video_id in id_strategy(),
        key in query_key_strategy(),
    ) {
        let mutation = MutationKind::CreateQuestion { video_id: video_id.clone() };
        let matched = mutation
            .invalidations()
            .iter()
            .any(|selector| selector.matches(&key));
        prop_assert_eq!(matched, key == QueryKey::VideoQuestions(video_id));
    }

    #[test]
    fn selectors_agree_with_key_identity(key in query_key_strategy()) {
        prop_assert!(InvalidationSelector::Kind(key.kind()).matches(&key));
        prop_assert!(InvalidationSelector::Exact(key.clone()).matches(&key));
    }

    #[test]
    fn apply_invalidates_exactly_the_matched_entries(
        keys in prop::collection::vec(query_key_strategy(), 1..12),
        mutation in mutation_strategy(),
    ) {
        let mut cache = ResourceCache::new();
        for key in &keys {
            cache.resolve(key.clone(), payload_for(key));
        }

        cache.apply(&mutation);

        let selectors = mutation.invalidations();
        for key in &keys {
            let expected = selectors.iter().any(|selector| selector.matches(key));
            let got = cache.entry(key).is_some_and(CacheEntry::is_invalidated);
            prop_assert_eq!(got, expected, "key {}", key);
        }
    }
}
