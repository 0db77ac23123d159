//! procsnap - Multi-Round Process Telemetry Snapshots
//!
//! Samples per-process resource telemetry across several time-spaced rounds,
//! persists the accumulated dataset as CSV for manual benign/malicious
//! labeling, and computes descriptive statistics and pairwise correlations
//! over the numeric columns in a separate analysis stage.

pub mod constants;
pub mod logic;
