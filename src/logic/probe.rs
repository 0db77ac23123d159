//! Per-Metric Probe Outcomes
//!
//! A process with restricted permissions still contributes partial data: each
//! deeper metric is probed independently and a denied metric only costs its
//! own field, never the record. Only a process that exits (or turns zombie)
//! mid-build costs the whole record.

use crate::logic::record::ProcessFacts;

/// Why a process contributed no record this round.
///
/// Skips are non-fatal and silent apart from per-round debug counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Process exited between enumeration and query
    Vanished,
    /// The process object itself cannot be queried
    AccessDenied,
    /// Terminal, non-queryable state
    Zombie,
}

/// Outcome of probing one optional metric category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricProbe<T> {
    /// Metric read successfully
    Value(T),
    /// Access denied for this metric only; substitute the sentinel
    Denied,
    /// Process disappeared mid-probe; discard the whole record
    Vanished,
}

impl<T> MetricProbe<T> {
    /// Collapse the outcome into a field value, substituting `sentinel` on
    /// denial. A vanished process aborts record construction instead.
    pub fn resolve(self, sentinel: T) -> Result<T, SkipReason> {
        match self {
            MetricProbe::Value(v) => Ok(v),
            MetricProbe::Denied => Ok(sentinel),
            MetricProbe::Vanished => Err(SkipReason::Vanished),
        }
    }
}

/// One live process handle, queryable for base facts and deeper metrics.
///
/// The OS-backed implementation lives in `collector`; tests drive the
/// builder and sampler through fakes.
pub trait ProcessProbe {
    /// Base identity/resource attributes. Fails with the skip reason when the
    /// process as a whole is unqueryable.
    fn facts(&self) -> Result<ProcessFacts, SkipReason>;

    fn thread_count(&self) -> MetricProbe<i64>;

    /// Open network (socket) connections
    fn connection_count(&self) -> MetricProbe<i64>;

    fn open_file_count(&self) -> MetricProbe<i64>;

    /// Cumulative read/write byte counters. Denied jointly: the counters come
    /// from a single privileged source.
    fn io_counters(&self) -> MetricProbe<(i64, i64)>;

    /// Share of total system memory held by this process, in percent
    fn memory_percent(&self) -> MetricProbe<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_passes_value_through() {
        assert_eq!(MetricProbe::Value(7i64).resolve(-1), Ok(7));
    }

    #[test]
    fn resolve_substitutes_sentinel_on_denial() {
        let probe: MetricProbe<i64> = MetricProbe::Denied;
        assert_eq!(probe.resolve(-1), Ok(-1));
    }

    #[test]
    fn resolve_aborts_on_vanished() {
        let probe: MetricProbe<(i64, i64)> = MetricProbe::Vanished;
        assert_eq!(probe.resolve((-1, -1)), Err(SkipReason::Vanished));
    }
}
