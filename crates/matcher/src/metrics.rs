// Metrics hooks for the matcher.
//
// A process-wide `MatchMetrics` recorder is installed with [`set_match_metrics`];
// every evaluation of a non-blank query reports its latency and bucket sizes
// to it. No metrics backend is assumed.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Bucket sizes of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSummary {
    /// Documents considered.
    pub candidates: usize,
    pub exact: usize,
    pub similar: usize,
    /// Whether a suggestion was offered.
    pub suggested: bool,
}

/// Metrics observer for match evaluations.
pub trait MatchMetrics: Send + Sync {
    fn record_match(&self, summary: &MatchSummary, latency: Duration);
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
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
