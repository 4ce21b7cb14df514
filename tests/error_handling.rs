//! Failure semantics: only the user lookup can fail; per-event scoring is
//! total and degrades to zero or neutral scores instead of erroring.

use volmatch::{demo, AvailabilityWindow, MatchEngine, MatchError};

#[test]
fn unknown_user_is_the_only_ranking_failure() {
    let engine = MatchEngine::default();
    let users = demo::demo_users();
    let events = demo::demo_events();

    let err = engine
        .rank_for_user("no-such-user", &users, &events)
        .expect_err("lookup should fail");
    assert!(matches!(err, MatchError::UserNotFound { .. }));

    // Every known user ranks without error.
    for user in &users {
        assert!(engine.rank_for_user(&user.id, &users, &events).is_ok());
    }
}

#[test]
fn not_found_error_names_the_user() {
    let engine = MatchEngine::default();
    let err = engine
        .rank_for_user("ghost", &demo::demo_users(), &demo::demo_events())
        .expect_err("lookup should fail");

    assert_eq!(err.to_string(), "user with id ghost not found");
}

#[test]
fn malformed_availability_never_aborts_a_batch() {
    let engine = MatchEngine::default();
    let mut users = demo::demo_users();

    // Corrupt every window of the first user.
    users[0].availability = vec![
        AvailabilityWindow {
            day_of_week: 0,
            start_time: "soonish".into(),
            end_time: "17:00".into(),
        },
        AvailabilityWindow {
            day_of_week: 6,
            start_time: "08:00".into(),
            end_time: "".into(),
        },
    ];

    let events = demo::demo_events();
    let matches = engine
        .rank_for_user("user1", &users, &events)
        .expect("malformed windows must not error");

    // The whole batch is still ranked; the corrupted windows just contribute
    // zero availability.
    assert_eq!(matches.len(), events.len());
    assert!(matches
        .iter()
        .all(|m| m.breakdown.availability_match == 0.0));
}

#[test]
fn sparse_records_resolve_to_defined_scores() {
    let engine = MatchEngine::default();
    let mut users = demo::demo_users();
    users[0].skills.clear();
    users[0].availability.clear();
    users[0].cause_preferences.clear();

    let events = demo::demo_events();
    let matches = engine
        .rank_for_user("user1", &users, &events)
        .expect("sparse user must not error");

    for m in &matches {
        assert!(m.breakdown.availability_match == 0.0);
        assert!(m.breakdown.cause_affinity == 0.5);
        assert!((0.0..=1.0).contains(&m.match_score));
    }
}

#[test]
fn empty_event_collection_ranks_to_empty() {
    let engine = MatchEngine::default();
    let matches = engine
        .rank_for_user("user1", &demo::demo_users(), &[])
        .expect("empty candidate set is fine");
    assert!(matches.is_empty());
}
