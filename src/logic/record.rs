//! Record Builder - One Process, One Round
//!
//! Composes a full `ProcessSnapshotRecord` from a process probe, isolating
//! per-metric denials behind the `-1` sentinel. Whole-record failures
//! (vanished, denied, zombie) discard the record for this round only.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::constants::{LABEL_UNKNOWN, SENTINEL, SENTINEL_F, TIMESTAMP_FORMAT};
use crate::logic::probe::{ProcessProbe, SkipReason};

/// CSV column order, fixed by the record's field set.
pub const COLUMNS: [&str; 17] = [
    "snapshot_time",
    "pid",
    "name",
    "exe",
    "username",
    "status",
    "create_time_readable",
    "cmdline_str",
    "cpu_percent",
    "memory_mb",
    "num_threads",
    "num_connections",
    "num_open_files",
    "io_read_bytes",
    "io_write_bytes",
    "memory_percent",
    "is_malicious",
];

/// Base attributes read in one shot from the process handle.
///
/// Everything deeper (threads, connections, open files, I/O, memory share)
/// goes through the per-metric probes instead.
#[derive(Debug, Clone, Default)]
pub struct ProcessFacts {
    pub pid: u32,
    pub name: String,
    pub exe: String,
    pub username: String,
    pub status: String,
    /// Unix seconds of process creation
    pub create_time_secs: i64,
    pub cmdline: Vec<String>,
    pub cpu_percent: f32,
    /// Resident set size in bytes
    pub rss_bytes: u64,
}

/// One observation of one process at one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSnapshotRecord {
    pub snapshot_time: String,
    pub pid: u32,
    pub name: String,
    pub exe: String,
    pub username: String,
    pub status: String,
    pub create_time_readable: String,
    /// Space-joined argv. Lossy when arguments embed spaces; accepted.
    pub cmdline_str: String,
    pub cpu_percent: f32,
    pub memory_mb: f64,
    pub num_threads: i64,
    pub num_connections: i64,
    pub num_open_files: i64,
    pub io_read_bytes: i64,
    pub io_write_bytes: i64,
    pub memory_percent: f64,
    pub is_malicious: String,
}

impl ProcessSnapshotRecord {
    /// Field values in [`COLUMNS`] order, rendered for CSV.
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.snapshot_time.clone(),
            self.pid.to_string(),
            self.name.clone(),
            self.exe.clone(),
            self.username.clone(),
            self.status.clone(),
            self.create_time_readable.clone(),
            self.cmdline_str.clone(),
            self.cpu_percent.to_string(),
            self.memory_mb.to_string(),
            self.num_threads.to_string(),
            self.num_connections.to_string(),
            self.num_open_files.to_string(),
            self.io_read_bytes.to_string(),
            self.io_write_bytes.to_string(),
            self.memory_percent.to_string(),
            self.is_malicious.clone(),
        ]
    }
}

/// Build one record for the given round timestamp.
///
/// Per-metric denials substitute the sentinel for that field only; a process
/// that vanishes mid-build (or fails at the facts level) yields the matching
/// `SkipReason` and no record.
pub fn build_record(
    probe: &dyn ProcessProbe,
    snapshot_time: &str,
) -> Result<ProcessSnapshotRecord, SkipReason> {
    let facts = probe.facts()?;

    let num_threads = probe.thread_count().resolve(SENTINEL)?;
    let num_connections = probe.connection_count().resolve(SENTINEL)?;
    let num_open_files = probe.open_file_count().resolve(SENTINEL)?;
    let (io_read_bytes, io_write_bytes) = probe.io_counters().resolve((SENTINEL, SENTINEL))?;
    let memory_percent = probe.memory_percent().resolve(SENTINEL_F)?;

    Ok(ProcessSnapshotRecord {
        snapshot_time: snapshot_time.to_string(),
        pid: facts.pid,
        name: facts.name,
        exe: facts.exe,
        username: facts.username,
        status: facts.status,
        create_time_readable: format_create_time(facts.create_time_secs),
        cmdline_str: facts.cmdline.join(" "),
        cpu_percent: facts.cpu_percent,
        memory_mb: facts.rss_bytes as f64 / (1024.0 * 1024.0),
        num_threads,
        num_connections,
        num_open_files,
        io_read_bytes,
        io_write_bytes,
        memory_percent,
        is_malicious: LABEL_UNKNOWN.to_string(),
    })
}

fn format_create_time(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}
