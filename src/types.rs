use serde::{Deserialize, Serialize};
use thiserror::Error;

use chrono::{DateTime, Utc};

/// Weight given to the skill-overlap sub-score in the composite.
pub const SKILL_MATCH_WEIGHT: f64 = 0.50;
/// Weight given to the availability sub-score in the composite.
pub const AVAILABILITY_MATCH_WEIGHT: f64 = 0.20;
/// Weight given to the proximity sub-score in the composite.
pub const DISTANCE_SCORE_WEIGHT: f64 = 0.20;
/// Weight given to the cause-affinity sub-score in the composite.
pub const CAUSE_AFFINITY_WEIGHT: f64 = 0.10;

/// Events at or under this distance from the volunteer score full proximity credit.
pub const FULL_SCORE_RADIUS_KM: f64 = 5.0;
/// Events at or beyond this distance score zero proximity credit; the score
/// ramps down linearly between the two radii.
pub const ZERO_SCORE_RADIUS_KM: f64 = 50.0;

/// Discount applied when an event starts inside an availability window but
/// runs past its end, relative to full containment.
pub const PARTIAL_OVERLAP_DISCOUNT: f64 = 0.7;

/// Cause-affinity score for a volunteer with no stated cause preferences.
/// Absence of preference is neutral, not a mismatch.
pub const NEUTRAL_CAUSE_SCORE: f64 = 0.5;
/// Cause-affinity score when the event cause and a preference are related by
/// substring containment rather than an exact label match.
pub const RELATED_CAUSE_SCORE: f64 = 0.7;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A recurring weekly time range during which a volunteer is willing to work.
///
/// `day_of_week` uses 0 = Sunday through 6 = Saturday. Times are `"HH:MM"`
/// strings at minute precision; a string that does not parse makes the window
/// score zero rather than fail (see [`MatchEngine::availability_match`]).
///
/// [`MatchEngine::availability_match`]: crate::engine::MatchEngine::availability_match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityWindow {
    /// Window start as minutes since midnight, or `None` if malformed.
    pub fn start_minutes(&self) -> Option<u32> {
        parse_hhmm(&self.start_time)
    }

    /// Window end as minutes since midnight, or `None` if malformed.
    pub fn end_minutes(&self) -> Option<u32> {
        parse_hhmm(&self.end_time)
    }
}

/// Parse an `"HH:MM"` string into minutes since midnight.
///
/// Deliberately permissive about digit counts (`"9:00"` is fine) but returns
/// `None` for anything that is not two colon-separated integers.
fn parse_hhmm(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// A volunteer, reduced to the fields the matcher cares about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Free-text skill labels; compared case-insensitively.
    pub skills: Vec<String>,
    /// Recurring weekly availability. Zero windows is valid and simply means
    /// every availability sub-score is zero.
    pub availability: Vec<AvailabilityWindow>,
    pub location: GeoPoint,
    /// Free-text cause labels; compared case-insensitively.
    pub cause_preferences: Vec<String>,
}

/// A candidate volunteer event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Skill labels the event asks for; empty means no requirement.
    pub required_skills: Vec<String>,
    /// The event's start instant.
    pub event_date: DateTime<Utc>,
    /// Event length in hours.
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    pub location: GeoPoint,
    /// The event's social/charitable focus area, e.g. "Hunger Relief".
    pub cause: String,
    pub organization_id: String,
    pub organization_name: String,
}

/// Scoring policy: the component weights and the fixed thresholds behind the
/// proximity, availability, and cause sub-scores.
///
/// `MatchPolicy` is cheap to clone and serde-friendly so it can ride inside
/// higher-level configuration. The default policy is the production one; a
/// custom policy must pass [`MatchPolicy::validate`] before an engine will
/// accept it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPolicy {
    /// Weight of the skill-overlap sub-score. All four weights must sum to 1.
    #[serde(default = "MatchPolicy::default_skill_weight")]
    pub skill_weight: f64,
    /// Weight of the availability sub-score.
    #[serde(default = "MatchPolicy::default_availability_weight")]
    pub availability_weight: f64,
    /// Weight of the proximity sub-score.
    #[serde(default = "MatchPolicy::default_distance_weight")]
    pub distance_weight: f64,
    /// Weight of the cause-affinity sub-score.
    #[serde(default = "MatchPolicy::default_cause_weight")]
    pub cause_weight: f64,
    /// Distance at or under which proximity scores 1.0, in kilometers.
    #[serde(default = "MatchPolicy::default_full_score_radius_km")]
    pub full_score_radius_km: f64,
    /// Distance at or beyond which proximity scores 0.0, in kilometers.
    #[serde(default = "MatchPolicy::default_zero_score_radius_km")]
    pub zero_score_radius_km: f64,
    /// Multiplier applied to the overlap ratio when an event spills past the
    /// end of an availability window.
    #[serde(default = "MatchPolicy::default_partial_overlap_discount")]
    pub partial_overlap_discount: f64,
    /// Cause score for volunteers with no stated preferences.
    #[serde(default = "MatchPolicy::default_neutral_cause_score")]
    pub neutral_cause_score: f64,
    /// Cause score for substring-related (but not identical) labels.
    #[serde(default = "MatchPolicy::default_related_cause_score")]
    pub related_cause_score: f64,
}

impl MatchPolicy {
    pub(crate) fn default_skill_weight() -> f64 {
        SKILL_MATCH_WEIGHT
    }

    pub(crate) fn default_availability_weight() -> f64 {
        AVAILABILITY_MATCH_WEIGHT
    }

    pub(crate) fn default_distance_weight() -> f64 {
        DISTANCE_SCORE_WEIGHT
    }

    pub(crate) fn default_cause_weight() -> f64 {
        CAUSE_AFFINITY_WEIGHT
    }

    pub(crate) fn default_full_score_radius_km() -> f64 {
        FULL_SCORE_RADIUS_KM
    }

    pub(crate) fn default_zero_score_radius_km() -> f64 {
        ZERO_SCORE_RADIUS_KM
    }

    pub(crate) fn default_partial_overlap_discount() -> f64 {
        PARTIAL_OVERLAP_DISCOUNT
    }

    pub(crate) fn default_neutral_cause_score() -> f64 {
        NEUTRAL_CAUSE_SCORE
    }

    pub(crate) fn default_related_cause_score() -> f64 {
        RELATED_CAUSE_SCORE
    }

    /// Sum of the four component weights.
    pub fn weight_sum(&self) -> f64 {
        self.skill_weight + self.availability_weight + self.distance_weight + self.cause_weight
    }

    /// Validate the policy.
    ///
    /// Weights must be non-negative and sum to 1 (so the composite stays in
    /// `[0, 1]` by construction), the distance radii must be ordered, and the
    /// fixed sub-score values must themselves lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, weight) in [
            ("skill_weight", self.skill_weight),
            ("availability_weight", self.availability_weight),
            ("distance_weight", self.distance_weight),
            ("cause_weight", self.cause_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(MatchError::InvalidPolicy(format!(
                    "{name} must be between 0.0 and 1.0"
                )));
            }
        }
        if (self.weight_sum() - 1.0).abs() > 1e-6 {
            return Err(MatchError::InvalidPolicy(
                "component weights must sum to 1.0".into(),
            ));
        }
        if self.full_score_radius_km < 0.0 {
            return Err(MatchError::InvalidPolicy(
                "full_score_radius_km must be >= 0.0".into(),
            ));
        }
        if self.zero_score_radius_km <= self.full_score_radius_km {
            return Err(MatchError::InvalidPolicy(
                "zero_score_radius_km must be greater than full_score_radius_km".into(),
            ));
        }
        for (name, score) in [
            ("partial_overlap_discount", self.partial_overlap_discount),
            ("neutral_cause_score", self.neutral_cause_score),
            ("related_cause_score", self.related_cause_score),
        ] {
            if !(0.0..=1.0).contains(&score) {
                return Err(MatchError::InvalidPolicy(format!(
                    "{name} must be between 0.0 and 1.0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            skill_weight: Self::default_skill_weight(),
            availability_weight: Self::default_availability_weight(),
            distance_weight: Self::default_distance_weight(),
            cause_weight: Self::default_cause_weight(),
            full_score_radius_km: Self::default_full_score_radius_km(),
            zero_score_radius_km: Self::default_zero_score_radius_km(),
            partial_overlap_discount: Self::default_partial_overlap_discount(),
            neutral_cause_score: Self::default_neutral_cause_score(),
            related_cause_score: Self::default_related_cause_score(),
        }
    }
}


/// Per-component sub-scores behind a composite match score.
///
/// The breakdown is the explainability contract of the engine: it is always
/// populated so a caller can show *why* an event was suggested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Fraction of the event's required skills the volunteer has.
    pub skill_match: f64,
    /// How well the event's time fits the volunteer's weekly availability.
    pub availability_match: f64,
    /// Geographic proximity between volunteer and event.
    pub distance_score: f64,
    /// Alignment between the event's cause and the volunteer's preferences.
    pub cause_affinity: f64,
}

/// One scored candidate event. Produced fresh on every call; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub event: Event,
    /// Weighted combination of the four sub-scores, in `[0, 1]`.
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Errors produced by the matching engine.
///
/// Per-event scoring is total and never errors; only the user lookup in
/// [`rank_for_user`] and policy validation can fail.
///
/// [`rank_for_user`]: crate::engine::MatchEngine::rank_for_user
#[derive(Debug, Error)]
pub enum MatchError {
    /// The requested user has no record in the supplied collection.
    #[error("user with id {user_id} not found")]
    UserNotFound { user_id: String },
    /// A custom scoring policy failed validation.
    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
}
