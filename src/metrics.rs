// Metrics hooks for the matching engine.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`], then `MatchEngine` reports per-request latency and
// result counts for each call to `rank_for_user`. This keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for ranking operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a ranking call.
    ///
    /// `user_id` is the volunteer the ranking was computed for, `latency` is
    /// the wall-clock duration of the call, `candidate_count` is the number of
    /// events supplied, and `result_count` the number of results returned
    /// (equal to `candidate_count` today, but the contract does not promise
    /// that).
    fn record_rank(
        &self,
        user_id: &str,
        latency: Duration,
        candidate_count: usize,
        result_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during service startup so all `MatchEngine`
/// instances share the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}
