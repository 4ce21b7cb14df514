//! # volmatch
//!
//! ## Purpose
//!
//! `volmatch` ranks candidate volunteer events for a user by predicted
//! relevance. Four independent, explainable sub-scores (skill overlap,
//! weekly-availability fit, geographic proximity, cause affinity) are combined
//! by fixed linear weights into a composite score in `[0, 1]`, and candidates
//! come back sorted best-first with the full per-component breakdown attached.
//!
//! The engine owns no storage, transport, or presentation: callers hand it a
//! user record and a slice of candidate events (already filtered for basic
//! eligibility, or narrowed with [`CandidateFilter`]) and get ranked
//! [`MatchResult`]s back. It is synchronous, side-effect free, and never
//! mutates its inputs, so concurrent calls need no coordination.
//!
//! ## Core Types
//!
//! - [`User`] / [`Event`]: the matching-relevant slices of the domain model.
//! - [`AvailabilityWindow`]: a recurring weekly `"HH:MM"` time range.
//! - [`MatchPolicy`]: the component weights and threshold constants, validated
//!   before use.
//! - [`MatchEngine`]: the scorer; one method per sub-score plus
//!   [`MatchEngine::score_event`] and [`MatchEngine::rank_for_user`].
//! - [`MatchResult`] / [`ScoreBreakdown`]: a scored event and the "why"
//!   behind its composite score.
//!
//! ## Example Usage
//!
//! ```
//! use volmatch::{demo, MatchEngine};
//!
//! let engine = MatchEngine::default();
//! let users = demo::demo_users();
//! let events = demo::demo_events();
//!
//! let matches = engine.rank_for_user("user1", &users, &events).expect("rank");
//! for m in &matches {
//!     println!(
//!         "{} score={:.3} (skills {:.2}, availability {:.2})",
//!         m.event.title, m.match_score, m.breakdown.skill_match,
//!         m.breakdown.availability_match,
//!     );
//! }
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-request latency and result counts. This is typically done once
//! during service startup so all calls through [`MatchEngine`] share the same
//! metrics backend.

pub mod engine;
pub mod geo;
pub mod metrics;
pub mod prefilter;
pub mod types;

#[doc(hidden)]
pub mod demo;

pub use crate::engine::MatchEngine;
pub use crate::geo::haversine_km;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::prefilter::CandidateFilter;
pub use crate::types::{
    AvailabilityWindow, Event, GeoPoint, MatchError, MatchPolicy, MatchResult, ScoreBreakdown,
    User,
};
