//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Run parameters can be overridden through environment variables.

use std::path::PathBuf;

/// App name
pub const APP_NAME: &str = "procsnap";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed dataset file name, shared by the collect and analyze stages
pub const DATASET_FILENAME: &str = "process_data_multi_snapshot_raw.csv";

/// JSON report written by the analyze stage next to the dataset
pub const REPORT_FILENAME: &str = "process_data_analysis_report.json";

/// Default number of snapshot rounds
pub const DEFAULT_NUM_SNAPSHOTS: u32 = 4;

/// Default delay between rounds (seconds)
pub const DEFAULT_INTERVAL_SECS: u64 = 15;

/// Placeholder written for any telemetry field denied by the OS.
///
/// The sentinel parses as a legitimate number, so the analyze stage includes
/// it in every statistic. That is the documented behavior of this pipeline;
/// do not filter it out here or downstream.
pub const SENTINEL: i64 = -1;

/// Float flavor of [`SENTINEL`]
pub const SENTINEL_F: f64 = -1.0;

/// Calendar format used for `snapshot_time` and `create_time_readable`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Initial classification label; edited by hand before the analyze stage
pub const LABEL_UNKNOWN: &str = "unknown";

/// Columns the analyze stage coerces to numeric and computes statistics over
pub const NUMERIC_COLUMNS: [&str; 8] = [
    "cpu_percent",
    "memory_mb",
    "num_threads",
    "num_connections",
    "num_open_files",
    "io_read_bytes",
    "io_write_bytes",
    "memory_percent",
];

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Number of snapshot rounds from environment or default
pub fn get_num_snapshots() -> u32 {
    std::env::var("PROCSNAP_SNAPSHOTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_NUM_SNAPSHOTS)
}

/// Inter-round delay from environment or default
pub fn get_interval_secs() -> u64 {
    std::env::var("PROCSNAP_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS)
}

/// Dataset path from environment or the fixed default in the working directory
pub fn get_dataset_path() -> PathBuf {
    std::env::var("PROCSNAP_DATASET")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DATASET_FILENAME))
}

/// Report path from environment or the fixed default in the working directory
pub fn get_report_path() -> PathBuf {
    std::env::var("PROCSNAP_REPORT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(REPORT_FILENAME))
}
