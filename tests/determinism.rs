//! The engine is a pure function of its inputs: repeated calls agree, inputs
//! come back untouched, and tie ordering is reproducible.

use volmatch::{demo, MatchEngine};

#[test]
fn repeated_ranking_is_identical() {
    let engine = MatchEngine::default();
    let users = demo::demo_users();
    let events = demo::demo_events();

    let first = engine.rank_for_user("user1", &users, &events).expect("rank");
    let second = engine.rank_for_user("user1", &users, &events).expect("rank");

    assert_eq!(first, second);
}

#[test]
fn scoring_does_not_mutate_inputs() {
    let engine = MatchEngine::default();
    let users = demo::demo_users();
    let events = demo::demo_events();

    let users_before = users.clone();
    let events_before = events.clone();

    for user in &users {
        let _ = engine.rank_for_user(&user.id, &users, &events).expect("rank");
    }

    assert_eq!(users, users_before);
    assert_eq!(events, events_before);
}

#[test]
fn ranking_is_independent_of_engine_instance() {
    let users = demo::demo_users();
    let events = demo::demo_events();

    let a = MatchEngine::default()
        .rank_for_user("user2", &users, &events)
        .expect("rank");
    let b = MatchEngine::default()
        .rank_for_user("user2", &users, &events)
        .expect("rank");

    assert_eq!(a, b);
}

#[test]
fn score_event_is_idempotent() {
    let engine = MatchEngine::default();
    let users = demo::demo_users();
    let user = &users[0];

    for event in &demo::demo_events() {
        let first = engine.score_event(user, event);
        let second = engine.score_event(user, event);
        assert_eq!(first, second);
    }
}
