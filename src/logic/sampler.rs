//! Sampler - Round Orchestration
//!
//! Runs N strictly sequential rounds: stamp the round, enumerate, build one
//! record per queryable process, sleep, repeat. Skipped processes are counted
//! per reason but never surfaced as errors; readings within a round carry
//! measurable wall-clock skew because probing is one process at a time.

use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::constants::TIMESTAMP_FORMAT;
use crate::logic::config::SamplerConfig;
use crate::logic::dataset::Dataset;
use crate::logic::probe::{ProcessProbe, SkipReason};
use crate::logic::record::build_record;

/// Enumerates the current process set, one probe per live process.
pub trait ProcessSource {
    type Probe: ProcessProbe;

    fn processes(&mut self) -> Vec<Self::Probe>;
}

/// Skip counters for one round; observability only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSkips {
    pub vanished: u32,
    pub access_denied: u32,
    pub zombie: u32,
}

impl RoundSkips {
    fn count(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Vanished => self.vanished += 1,
            SkipReason::AccessDenied => self.access_denied += 1,
            SkipReason::Zombie => self.zombie += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.vanished + self.access_denied + self.zombie
    }
}

pub struct Sampler<S> {
    config: SamplerConfig,
    source: S,
}

impl<S: ProcessSource> Sampler<S> {
    pub fn new(config: SamplerConfig, source: S) -> Self {
        Sampler { config, source }
    }

    /// Execute the full collection run and hand back the owned dataset.
    ///
    /// Records are appended in round order; within a round they follow
    /// enumeration order. Nothing is persisted here - the caller writes the
    /// dataset exactly once after the run, so an interruption mid-run loses
    /// the collected data. Accepted limitation of the one-shot strategy.
    pub fn run(mut self) -> Dataset {
        let mut dataset = Dataset::new();
        let rounds = self.config.num_snapshots;

        for round in 0..rounds {
            let snapshot_time = Local::now().format(TIMESTAMP_FORMAT).to_string();
            log::info!(
                "Taking snapshot {}/{} at {}",
                round + 1,
                rounds,
                snapshot_time
            );

            let mut skips = RoundSkips::default();
            let probes = self.source.processes();
            for probe in &probes {
                match build_record(probe, &snapshot_time) {
                    Ok(record) => dataset.push(record),
                    Err(reason) => skips.count(reason),
                }
            }

            log::info!("Snapshot {}: {} records so far", round + 1, dataset.len());
            if skips.total() > 0 {
                log::debug!(
                    "Snapshot {} skips: vanished={} access_denied={} zombie={}",
                    round + 1,
                    skips.vanished,
                    skips.access_denied,
                    skips.zombie
                );
            }

            if round + 1 < rounds && self.config.interval_seconds > 0 {
                log::info!(
                    "Waiting {}s before the next snapshot",
                    self.config.interval_seconds
                );
                thread::sleep(Duration::from_secs(self.config.interval_seconds));
            }
        }

        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::probe::MetricProbe;
    use crate::logic::record::ProcessFacts;

    struct StubProbe {
        pid: u32,
        skip: Option<SkipReason>,
    }

    impl ProcessProbe for StubProbe {
        fn facts(&self) -> Result<ProcessFacts, SkipReason> {
            match self.skip {
                Some(reason) => Err(reason),
                None => Ok(ProcessFacts {
                    pid: self.pid,
                    name: format!("stub-{}", self.pid),
                    rss_bytes: 1_048_576,
                    ..ProcessFacts::default()
                }),
            }
        }
        fn thread_count(&self) -> MetricProbe<i64> {
            MetricProbe::Value(1)
        }
        fn connection_count(&self) -> MetricProbe<i64> {
            MetricProbe::Value(0)
        }
        fn open_file_count(&self) -> MetricProbe<i64> {
            MetricProbe::Value(3)
        }
        fn io_counters(&self) -> MetricProbe<(i64, i64)> {
            MetricProbe::Value((10, 20))
        }
        fn memory_percent(&self) -> MetricProbe<f64> {
            MetricProbe::Value(0.1)
        }
    }

    /// Fixed process table, optionally failing chosen pids every round.
    struct StubSource {
        pids: Vec<u32>,
        skip: Option<(u32, SkipReason)>,
    }

    impl ProcessSource for StubSource {
        type Probe = StubProbe;

        fn processes(&mut self) -> Vec<StubProbe> {
            self.pids
                .iter()
                .map(|&pid| StubProbe {
                    pid,
                    skip: self.skip.filter(|(p, _)| *p == pid).map(|(_, r)| r),
                })
                .collect()
        }
    }

    #[test]
    fn two_rounds_of_three_processes_yield_six_records() {
        let source = StubSource {
            pids: vec![100, 200, 300],
            skip: None,
        };
        let dataset = Sampler::new(SamplerConfig::new(2, 0), source).run();

        assert_eq!(dataset.len(), 6);

        // Round grouping: first three share one timestamp, last three another
        // (or the same if both rounds ran within a second), and within each
        // round the enumeration order is preserved.
        let records = dataset.records();
        let first_round: Vec<u32> = records[..3].iter().map(|r| r.pid).collect();
        let second_round: Vec<u32> = records[3..].iter().map(|r| r.pid).collect();
        assert_eq!(first_round, vec![100, 200, 300]);
        assert_eq!(second_round, vec![100, 200, 300]);
        assert!(records[..3]
            .iter()
            .all(|r| r.snapshot_time == records[0].snapshot_time));
        assert!(records[3..]
            .iter()
            .all(|r| r.snapshot_time == records[3].snapshot_time));
    }

    #[test]
    fn record_count_scales_with_rounds() {
        let source = StubSource {
            pids: vec![1, 2, 3, 4],
            skip: None,
        };
        let dataset = Sampler::new(SamplerConfig::new(5, 0), source).run();
        assert_eq!(dataset.len(), 5 * 4);
    }

    #[test]
    fn skipped_processes_are_dropped_silently() {
        for reason in [
            SkipReason::Vanished,
            SkipReason::AccessDenied,
            SkipReason::Zombie,
        ] {
            let source = StubSource {
                pids: vec![1, 2, 3],
                skip: Some((2, reason)),
            };
            let dataset = Sampler::new(SamplerConfig::new(2, 0), source).run();

            assert_eq!(dataset.len(), 4);
            assert!(dataset.records().iter().all(|r| r.pid != 2));
        }
    }

    #[test]
    fn skip_counters_accumulate_by_reason() {
        let mut skips = RoundSkips::default();
        skips.count(SkipReason::Vanished);
        skips.count(SkipReason::Vanished);
        skips.count(SkipReason::Zombie);
        assert_eq!(skips.vanished, 2);
        assert_eq!(skips.zombie, 1);
        assert_eq!(skips.access_denied, 0);
        assert_eq!(skips.total(), 3);
    }
}
