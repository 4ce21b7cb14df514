use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use volmatch::{CandidateFilter, MatchError, MatchResult};

/// Query parameters for the suggest endpoints.
///
/// `limit` stays a raw string so a non-numeric value produces this API's own
/// 400 body rather than the extractor's rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestParams {
    /// Volunteer to rank events for (query-parameter variant only).
    pub user_id: Option<String>,

    /// Maximum number of results to return. Defaults to the server config.
    pub limit: Option<String>,

    /// Drop events that already started.
    #[serde(default)]
    pub upcoming_only: bool,

    /// Drop events farther than this many kilometers from the volunteer.
    pub max_distance_km: Option<f64>,

    /// Keep only events starting at or after this instant (RFC 3339).
    pub starts_after: Option<DateTime<Utc>>,

    /// Keep only events starting at or before this instant (RFC 3339).
    pub starts_before: Option<DateTime<Utc>>,
}

impl SuggestParams {
    fn candidate_filter(&self) -> CandidateFilter {
        CandidateFilter {
            upcoming_only: self.upcoming_only,
            max_distance_km: self.max_distance_km,
            starts_after: self.starts_after,
            starts_before: self.starts_before,
            ..CandidateFilter::default()
        }
    }
}

/// Suggest response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub user_id: String,
    pub matches: Vec<MatchResult>,
    /// Number of ranked candidates before the limit was applied.
    pub total_matches: usize,
    pub timestamp: String,
}

fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, ServerError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| {
            ServerError::BadRequest("Invalid limit parameter. Must be a positive number.".into())
        })
}

/// Get event suggestions for a user.
///
/// `GET /matching/suggest?userId=<id>&limit=<n>`
///
/// The engine ranks every candidate the directory supplies; the limit is
/// applied here at the boundary, which is why `totalMatches` can exceed the
/// number of entries in `matches`. Optional filter parameters
/// (`upcomingOnly`, `maxDistanceKm`, `startsAfter`, `startsBefore`) narrow
/// the candidate set before ranking.
pub async fn suggest(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SuggestParams>,
) -> ServerResult<Json<SuggestResponse>> {
    let user_id = params.user_id.clone().ok_or_else(|| {
        ServerError::BadRequest("Missing required parameter: userId".into())
    })?;

    suggest_for_user(&state, &user_id, &params)
}

/// Path-parameter variant of [`suggest`].
///
/// `GET /matching/suggest/{userId}?limit=<n>`
pub async fn suggest_by_path(
    State(state): State<Arc<ServerState>>,
    Path(user_id): Path<String>,
    Query(params): Query<SuggestParams>,
) -> ServerResult<Json<SuggestResponse>> {
    suggest_for_user(&state, &user_id, &params)
}

fn suggest_for_user(
    state: &ServerState,
    user_id: &str,
    params: &SuggestParams,
) -> ServerResult<Json<SuggestResponse>> {
    let limit = parse_limit(params.limit.as_deref(), state.config.suggest_limit)?;

    let users = state.directory.users();
    let mut events = state.directory.events();

    let filter = params.candidate_filter();
    if !filter.is_noop() {
        // Distance and recency filtering need the volunteer's record; a miss
        // here is the same 404 the engine would produce.
        let user = users.iter().find(|u| u.id == user_id).ok_or_else(|| {
            ServerError::Match(MatchError::UserNotFound {
                user_id: user_id.to_string(),
            })
        })?;
        events = filter.apply(user, &events, Utc::now());
    }

    let mut matches = state.engine.rank_for_user(user_id, &users, &events)?;
    let total_matches = matches.len();
    matches.truncate(limit);

    tracing::debug!(
        user_id = %user_id,
        total_matches,
        returned = matches.len(),
        "Suggestions computed"
    );

    Ok(Json(SuggestResponse {
        user_id: user_id.to_string(),
        matches,
        total_matches,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(parse_limit(None, 10).unwrap(), 10);
    }

    #[test]
    fn limit_parses_positive_integers() {
        assert_eq!(parse_limit(Some("3"), 10).unwrap(), 3);
        assert_eq!(parse_limit(Some(" 25 "), 10).unwrap(), 25);
    }

    #[test]
    fn limit_rejects_non_numeric_and_non_positive() {
        for raw in ["abc", "0", "-1", "1.5", ""] {
            assert!(
                matches!(parse_limit(Some(raw), 10), Err(ServerError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
