use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Instant;

use chrono::{Datelike, Timelike};
use tracing::debug;

use crate::geo::haversine_km;
use crate::metrics::metrics_recorder;
use crate::types::{Event, MatchError, MatchPolicy, MatchResult, ScoreBreakdown, User};


/// Scores and ranks candidate events for a volunteer.
///
/// The engine is a pure function of its inputs: it holds nothing but a
/// validated [`MatchPolicy`], never mutates the records it is given, and is
/// safe to share across threads and call concurrently.
pub struct MatchEngine {
    policy: MatchPolicy,
}

impl Default for MatchEngine {
    fn default() -> Self {
        // The default policy is known-valid (types.rs pins this in a test).
        Self {
            policy: MatchPolicy::default(),
        }
    }
}

impl MatchEngine {
    /// Construct an engine with an explicit scoring policy.
    ///
    /// The policy is validated once here so every scoring path can assume a
    /// well-formed one.
    pub fn new(policy: MatchPolicy) -> Result<Self, MatchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy this engine scores with.
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Fraction of the event's required skills the volunteer has, in `[0, 1]`.
    ///
    /// An event with no required skills is a perfect match for everyone.
    /// Labels are compared case-insensitively; there is no partial credit for
    /// near-matching names. A duplicate label in `required_skills` counts on
    /// both sides of the division.
    pub fn skill_match(&self, user: &User, event: &Event) -> f64 {
        if event.required_skills.is_empty() {
            return 1.0;
        }

        let user_skills: HashSet<String> =
            user.skills.iter().map(|s| s.to_lowercase()).collect();
        let matching = event
            .required_skills
            .iter()
            .filter(|skill| user_skills.contains(&skill.to_lowercase()))
            .count();

        matching as f64 / event.required_skills.len() as f64
    }

    /// How well the event's time fits the volunteer's weekly availability,
    /// in `[0, 1]`.
    ///
    /// The first window listed for the event's day of week is the one that
    /// counts. Full containment scores 1.0; an event that starts inside the
    /// window but runs past its end earns the overlap ratio discounted by
    /// `partial_overlap_discount`; anything else scores 0. A malformed window
    /// or a non-positive duration also scores 0 rather than erroring.
    ///
    /// Windows are interpreted in the timezone of the event timestamp (UTC).
    pub fn availability_match(&self, user: &User, event: &Event) -> f64 {
        let event_day = event.event_date.weekday().num_days_from_sunday();
        let window = match user
            .availability
            .iter()
            .find(|w| u32::from(w.day_of_week) == event_day)
        {
            Some(window) => window,
            None => return 0.0,
        };

        let (window_start, window_end) = match (window.start_minutes(), window.end_minutes()) {
            (Some(start), Some(end)) => (f64::from(start), f64::from(end)),
            _ => return 0.0,
        };

        let duration_minutes = event.duration_hours * 60.0;
        if duration_minutes <= 0.0 {
            return 0.0;
        }

        let event_start =
            f64::from(event.event_date.hour() * 60 + event.event_date.minute());
        let event_end = event_start + duration_minutes;

        if event_start >= window_start && event_end <= window_end {
            1.0
        } else if event_start >= window_start && event_start < window_end {
            let overlap_minutes = window_end - event_start;
            self.policy.partial_overlap_discount * (overlap_minutes / duration_minutes).min(1.0)
        } else {
            0.0
        }
    }

    /// Geographic proximity between volunteer and event, in `[0, 1]`.
    ///
    /// Full credit inside `full_score_radius_km`, zero at or beyond
    /// `zero_score_radius_km`, linear in between. Monotonically non-increasing
    /// in the great-circle distance.
    pub fn distance_score(&self, user: &User, event: &Event) -> f64 {
        let distance_km = haversine_km(&user.location, &event.location);
        let policy = &self.policy;

        if distance_km <= policy.full_score_radius_km {
            1.0
        } else if distance_km >= policy.zero_score_radius_km {
            0.0
        } else {
            1.0 - (distance_km - policy.full_score_radius_km)
                / (policy.zero_score_radius_km - policy.full_score_radius_km)
        }
    }

    /// Alignment between the event's cause and the volunteer's preferred
    /// causes, in `[0, 1]`.
    ///
    /// No stated preferences is neutral (`neutral_cause_score`), an exact
    /// case-insensitive label match scores 1.0, and substring containment in
    /// either direction earns `related_cause_score` (e.g. "Education" vs
    /// "Educational Technology").
    pub fn cause_affinity(&self, user: &User, event: &Event) -> f64 {
        if user.cause_preferences.is_empty() {
            return self.policy.neutral_cause_score;
        }

        let event_cause = event.cause.to_lowercase();
        let preferences: Vec<String> = user
            .cause_preferences
            .iter()
            .map(|c| c.to_lowercase())
            .collect();

        if preferences.iter().any(|p| *p == event_cause) {
            return 1.0;
        }

        if preferences
            .iter()
            .any(|p| p.contains(&event_cause) || event_cause.contains(p.as_str()))
        {
            return self.policy.related_cause_score;
        }

        0.0
    }

    /// Score a single event for a volunteer.
    ///
    /// The breakdown is always populated; it is what lets a caller show why
    /// an event was suggested.
    pub fn score_event(&self, user: &User, event: &Event) -> MatchResult {
        let breakdown = ScoreBreakdown {
            skill_match: self.skill_match(user, event),
            availability_match: self.availability_match(user, event),
            distance_score: self.distance_score(user, event),
            cause_affinity: self.cause_affinity(user, event),
        };

        let policy = &self.policy;
        let match_score = breakdown.skill_match * policy.skill_weight
            + breakdown.availability_match * policy.availability_weight
            + breakdown.distance_score * policy.distance_weight
            + breakdown.cause_affinity * policy.cause_weight;

        MatchResult {
            event: event.clone(),
            match_score,
            breakdown,
        }
    }
}

impl MatchEngine {
    /// Rank every supplied event for the given user, best match first.
    ///
    /// Fails with [`MatchError::UserNotFound`] if `user_id` has no record in
    /// `users`. Every event in `events` is scored; eligibility filtering
    /// ("already attended", "not published") is the caller's job, as is
    /// truncating the ranked list to a display limit.
    ///
    /// The sort is stable, so events with equal composite scores keep the
    /// caller's input order.
    pub fn rank_for_user(
        &self,
        user_id: &str,
        users: &[User],
        events: &[Event],
    ) -> Result<Vec<MatchResult>, MatchError> {
        let user = users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| MatchError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        let start = Instant::now();

        let mut matches: Vec<MatchResult> = events
            .iter()
            .map(|event| self.score_event(user, event))
            .collect();

        // Sort by composite score descending.
        // Note: NaN scores are treated as less than any valid score.
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        let latency = start.elapsed();
        debug!(
            user_id = %user_id,
            candidate_count = events.len(),
            top_score = matches.first().map(|m| m.match_score),
            "Ranking complete"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_rank(user_id, latency, events.len(), matches.len());
        }

        Ok(matches)
    }
}
