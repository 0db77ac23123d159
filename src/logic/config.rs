//! Run Configuration
//!
//! Round count and inter-round delay were hardcoded in early revisions; they
//! are explicit configuration now, read from the environment with fixed
//! defaults in `constants`.

use crate::constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of snapshot rounds, at least 1
    pub num_snapshots: u32,
    /// Blocking delay between rounds; no delay after the last round
    pub interval_seconds: u64,
}

impl SamplerConfig {
    pub fn new(num_snapshots: u32, interval_seconds: u64) -> Self {
        SamplerConfig {
            num_snapshots: num_snapshots.max(1),
            interval_seconds,
        }
    }

    pub fn from_env() -> Self {
        Self::new(constants::get_num_snapshots(), constants::get_interval_secs())
    }

    /// Wall-clock floor of the whole run, for the startup announcement
    pub fn total_duration_secs(&self) -> u64 {
        u64::from(self.num_snapshots.saturating_sub(1)) * self.interval_seconds
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_NUM_SNAPSHOTS,
            constants::DEFAULT_INTERVAL_SECS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_count_is_clamped_to_one() {
        assert_eq!(SamplerConfig::new(0, 5).num_snapshots, 1);
        assert_eq!(SamplerConfig::new(3, 5).num_snapshots, 3);
    }

    #[test]
    fn duration_excludes_trailing_delay() {
        assert_eq!(SamplerConfig::new(4, 15).total_duration_secs(), 45);
        assert_eq!(SamplerConfig::new(1, 15).total_duration_secs(), 0);
    }
}
