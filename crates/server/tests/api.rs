//! HTTP-level tests driving the router directly, no socket involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use server::{build_router, ServerConfig, ServerState};

fn test_app() -> Router {
    let state = ServerState::new(ServerConfig::default()).expect("state should build");
    build_router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should not fail");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, json)
}

#[tokio::test]
async fn suggest_returns_ranked_matches() {
    let (status, body) = get(test_app(), "/matching/suggest?userId=user1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "user1");
    assert_eq!(body["totalMatches"], 8);
    assert!(body["timestamp"].is_string());

    let matches = body["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 8);

    // Sorted best-first, every entry carrying its breakdown.
    let scores: Vec<f64> = matches
        .iter()
        .map(|m| m["matchScore"].as_f64().expect("numeric score"))
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    for m in matches {
        for key in [
            "skillMatch",
            "availabilityMatch",
            "distanceScore",
            "causeAffinity",
        ] {
            let score = m["breakdown"][key].as_f64().expect("breakdown score");
            assert!((0.0..=1.0).contains(&score));
        }
    }
}

#[tokio::test]
async fn suggest_applies_limit_at_the_boundary() {
    let (status, body) = get(test_app(), "/matching/suggest?userId=user1&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"].as_array().map(Vec::len), Some(2));
    // totalMatches still reports the full ranked count.
    assert_eq!(body["totalMatches"], 8);
}

#[tokio::test]
async fn suggest_without_user_id_is_bad_request() {
    let (status, body) = get(test_app(), "/matching/suggest").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .expect("message")
        .contains("userId"));
}

#[tokio::test]
async fn suggest_rejects_bad_limits() {
    for uri in [
        "/matching/suggest?userId=user1&limit=abc",
        "/matching/suggest?userId=user1&limit=0",
        "/matching/suggest?userId=user1&limit=-2",
    ] {
        let (status, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST", "{uri}");
    }
}

#[tokio::test]
async fn suggest_unknown_user_is_not_found() {
    let (status, body) = get(test_app(), "/matching/suggest?userId=nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn suggest_by_path_matches_query_variant() {
    let (status, body) = get(test_app(), "/matching/suggest/user2?limit=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "user2");
    assert_eq!(body["matches"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn suggest_filters_narrow_the_candidate_set() {
    // The demo events are all in early 2024, so upcomingOnly leaves nothing.
    let (status, body) =
        get(test_app(), "/matching/suggest?userId=user1&upcomingOnly=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatches"], 0);

    // A tight travel radius keeps only nearby events.
    let (status, body) =
        get(test_app(), "/matching/suggest?userId=user1&maxDistanceKm=3").await;
    assert_eq!(status, StatusCode::OK);
    let total = body["totalMatches"].as_u64().expect("count");
    assert!(total > 0 && total < 8, "got {total}");
}

#[tokio::test]
async fn health_and_ready_respond() {
    let (status, body) = get(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(test_app(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["directory"]["users"], 5);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, body) = get(test_app(), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
