use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// Observer for scan activity.
///
/// Install one process-wide with [`set_match_metrics`]; every `find` and
/// `replace` then reports the elements it scanned and the matches it kept.
pub trait MatchMetrics: Send + Sync {
    fn record_find(&self, latency: Duration, scanned: usize, matches: usize);
}

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}
