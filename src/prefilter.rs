//! Caller-side candidate eligibility filtering.
//!
//! The engine scores whatever it is given ([`MatchEngine::rank_for_user`]
//! performs no pre-filtering); this module is the companion piece callers use
//! to narrow the candidate set first: drop events the volunteer already
//! attended or applied to, events that already happened, events outside a
//! practical travel radius, or events outside a date range.
//!
//! `now` is an explicit parameter so filtering stays deterministic and
//! testable; nothing in this crate reads the wall clock.
//!
//! [`MatchEngine::rank_for_user`]: crate::engine::MatchEngine::rank_for_user

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::haversine_km;
use crate::types::{Event, User};

/// Eligibility criteria applied before ranking. The default filters nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    /// Keep only events whose start instant is after `now`.
    #[serde(default)]
    pub upcoming_only: bool,
    /// Event ids to drop, e.g. events the volunteer already attended or has
    /// an open application for.
    #[serde(default)]
    pub exclude_event_ids: HashSet<String>,
    /// Drop events farther than this many kilometers from the volunteer.
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    /// Keep only events starting at or after this instant.
    #[serde(default)]
    pub starts_after: Option<DateTime<Utc>>,
    /// Keep only events starting at or before this instant.
    #[serde(default)]
    pub starts_before: Option<DateTime<Utc>>,
}

impl CandidateFilter {
    /// True when no criterion is set, letting callers skip the pass entirely.
    pub fn is_noop(&self) -> bool {
        !self.upcoming_only
            && self.exclude_event_ids.is_empty()
            && self.max_distance_km.is_none()
            && self.starts_after.is_none()
            && self.starts_before.is_none()
    }

    /// Whether a single event survives the filter for this volunteer.
    pub fn admits(&self, user: &User, event: &Event, now: DateTime<Utc>) -> bool {
        if self.exclude_event_ids.contains(&event.id) {
            return false;
        }
        if self.upcoming_only && event.event_date <= now {
            return false;
        }
        if let Some(after) = self.starts_after {
            if event.event_date < after {
                return false;
            }
        }
        if let Some(before) = self.starts_before {
            if event.event_date > before {
                return false;
            }
        }
        if let Some(max_km) = self.max_distance_km {
            if haversine_km(&user.location, &event.location) > max_km {
                return false;
            }
        }
        true
    }

    /// Filter a candidate slice down to the admissible events.
    pub fn apply(&self, user: &User, events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
        events
            .iter()
            .filter(|event| self.admits(user, event, now))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 6, 0, 0, 0).unwrap()
    }

    #[test]
    fn default_filter_admits_everything() {
        let filter = CandidateFilter::default();
        assert!(filter.is_noop());

        let users = demo::demo_users();
        let events = demo::demo_events();
        assert_eq!(
            filter.apply(&users[0], &events, fixed_now()).len(),
            events.len()
        );
    }

    #[test]
    fn upcoming_only_drops_past_events() {
        let filter = CandidateFilter {
            upcoming_only: true,
            ..CandidateFilter::default()
        };

        let users = demo::demo_users();
        let kept = filter.apply(&users[0], &demo::demo_events(), fixed_now());

        assert!(!kept.is_empty());
        assert!(kept.iter().all(|e| e.event_date > fixed_now()));
    }

    #[test]
    fn excluded_ids_are_dropped() {
        let filter = CandidateFilter {
            exclude_event_ids: ["event1".to_string(), "event3".to_string()].into(),
            ..CandidateFilter::default()
        };

        let users = demo::demo_users();
        let kept = filter.apply(&users[0], &demo::demo_events(), fixed_now());

        assert!(kept.iter().all(|e| e.id != "event1" && e.id != "event3"));
        assert_eq!(kept.len(), demo::demo_events().len() - 2);
    }

    #[test]
    fn max_distance_uses_the_volunteer_location() {
        let filter = CandidateFilter {
            max_distance_km: Some(3.0),
            ..CandidateFilter::default()
        };

        let users = demo::demo_users();
        let user = &users[0];
        let kept = filter.apply(user, &demo::demo_events(), fixed_now());

        assert!(kept
            .iter()
            .all(|e| haversine_km(&user.location, &e.location) <= 3.0));
        assert!(kept.len() < demo::demo_events().len());
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 2, 5, 10, 0, 0).unwrap();
        let filter = CandidateFilter {
            starts_after: Some(start),
            starts_before: Some(start),
            ..CandidateFilter::default()
        };

        let users = demo::demo_users();
        let kept = filter.apply(&users[0], &demo::demo_events(), fixed_now());

        // Exactly one demo event starts at that instant.
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].event_date, start);
    }
}
