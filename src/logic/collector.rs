//! Collector - OS-Backed Process Probes
//!
//! Enumerates live processes through sysinfo and probes the deeper metrics
//! (threads, sockets, open files, I/O counters) straight from `/proc`, so a
//! permission failure on one metric never disturbs its siblings.

use std::fs;
use std::io;
use std::path::PathBuf;

use sysinfo::{Process, ProcessStatus, System, Users};

use crate::logic::probe::{MetricProbe, ProcessProbe, SkipReason};
use crate::logic::record::ProcessFacts;
use crate::logic::sampler::ProcessSource;

/// Owns the sysinfo state shared across rounds. CPU percentages are deltas
/// against the previous refresh, so the instance must live for the whole run.
pub struct SystemSource {
    sys: System,
    users: Users,
}

impl SystemSource {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        SystemSource {
            sys,
            users: Users::new_with_refreshed_list(),
        }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for SystemSource {
    type Probe = SysProcessProbe;

    /// Point-in-time, unordered enumeration of the current process set.
    fn processes(&mut self) -> Vec<SysProcessProbe> {
        self.sys.refresh_all();
        let total_memory = self.sys.total_memory();

        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                SysProcessProbe::capture(pid.as_u32(), process, &self.users, total_memory)
            })
            .collect()
    }
}

/// One enumerated process. Base facts are captured eagerly from sysinfo;
/// deeper metrics hit `/proc/<pid>` lazily at probe time and can therefore
/// observe the process vanishing mid-round.
pub struct SysProcessProbe {
    pid: u32,
    facts: Result<ProcessFacts, SkipReason>,
    rss_bytes: u64,
    total_memory: u64,
}

impl SysProcessProbe {
    fn capture(pid: u32, process: &Process, users: &Users, total_memory: u64) -> Self {
        let status = process.status();
        let facts = if matches!(status, ProcessStatus::Zombie) {
            Err(SkipReason::Zombie)
        } else {
            Ok(ProcessFacts {
                pid,
                name: process.name().to_string(),
                exe: process
                    .exe()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                username: process
                    .user_id()
                    .and_then(|uid| users.get_user_by_id(uid))
                    .map(|u| u.name().to_string())
                    .unwrap_or_default(),
                status: status.to_string(),
                create_time_secs: process.start_time() as i64,
                cmdline: process.cmd().to_vec(),
                cpu_percent: process.cpu_usage(),
                rss_bytes: process.memory(),
            })
        };

        SysProcessProbe {
            pid,
            facts,
            rss_bytes: process.memory(),
            total_memory,
        }
    }
}

impl ProcessProbe for SysProcessProbe {
    fn facts(&self) -> Result<ProcessFacts, SkipReason> {
        self.facts.clone()
    }

    /// `Threads:` line of `/proc/<pid>/status`
    fn thread_count(&self) -> MetricProbe<i64> {
        let raw = match fs::read_to_string(proc_path(self.pid, "status")) {
            Ok(raw) => raw,
            Err(err) => return probe_failure(&err),
        };
        match parse_keyed_u64(&raw, "Threads:") {
            Some(n) => MetricProbe::Value(n as i64),
            None => MetricProbe::Denied,
        }
    }

    /// Count of `socket:` targets under `/proc/<pid>/fd`
    fn connection_count(&self) -> MetricProbe<i64> {
        self.count_fd_targets(|target| target.starts_with("socket:"))
    }

    /// Count of path-backed targets under `/proc/<pid>/fd`
    fn open_file_count(&self) -> MetricProbe<i64> {
        self.count_fd_targets(|target| target.starts_with('/'))
    }

    /// `read_bytes:` / `write_bytes:` of `/proc/<pid>/io`. The file is only
    /// readable for same-user processes, which is the canonical source of
    /// sentinel values in real datasets.
    fn io_counters(&self) -> MetricProbe<(i64, i64)> {
        let raw = match fs::read_to_string(proc_path(self.pid, "io")) {
            Ok(raw) => raw,
            Err(err) => return probe_failure(&err),
        };
        match (
            parse_keyed_u64(&raw, "read_bytes:"),
            parse_keyed_u64(&raw, "write_bytes:"),
        ) {
            (Some(read), Some(write)) => MetricProbe::Value((read as i64, write as i64)),
            _ => MetricProbe::Denied,
        }
    }

    fn memory_percent(&self) -> MetricProbe<f64> {
        if self.total_memory == 0 {
            return MetricProbe::Value(0.0);
        }
        MetricProbe::Value(self.rss_bytes as f64 / self.total_memory as f64 * 100.0)
    }
}

impl SysProcessProbe {
    fn count_fd_targets(&self, matches: impl Fn(&str) -> bool) -> MetricProbe<i64> {
        let entries = match fs::read_dir(proc_path(self.pid, "fd")) {
            Ok(entries) => entries,
            Err(err) => return probe_failure(&err),
        };

        let mut count = 0i64;
        for entry in entries.flatten() {
            if let Ok(target) = fs::read_link(entry.path()) {
                if matches(&target.to_string_lossy()) {
                    count += 1;
                }
            }
        }
        MetricProbe::Value(count)
    }
}

fn proc_path(pid: u32, leaf: &str) -> PathBuf {
    PathBuf::from(format!("/proc/{}/{}", pid, leaf))
}

/// A missing `/proc` entry means the process exited mid-round; everything
/// else (chiefly EACCES) is an access denial for this metric alone.
fn probe_failure<T>(err: &io::Error) -> MetricProbe<T> {
    match err.kind() {
        io::ErrorKind::NotFound => MetricProbe::Vanished,
        _ => MetricProbe::Denied,
    }
}

fn parse_keyed_u64(raw: &str, key: &str) -> Option<u64> {
    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(key) {
            return rest.split_whitespace().next()?.parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_parse_reads_proc_status_threads() {
        let status = "Name:\tcargo\nUmask:\t0022\nThreads:\t12\nSigQ:\t0/62432\n";
        assert_eq!(parse_keyed_u64(status, "Threads:"), Some(12));
        assert_eq!(parse_keyed_u64(status, "VmRSS:"), None);
    }

    #[test]
    fn keyed_parse_reads_proc_io_counters() {
        let io = "rchar: 922\nwchar: 0\nread_bytes: 4096\nwrite_bytes: 8192\n";
        assert_eq!(parse_keyed_u64(io, "read_bytes:"), Some(4096));
        assert_eq!(parse_keyed_u64(io, "write_bytes:"), Some(8192));
    }

    #[test]
    fn missing_proc_entry_reads_as_vanished() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(probe_failure::<i64>(&err), MetricProbe::Vanished);

        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(probe_failure::<i64>(&err), MetricProbe::Denied);
    }

    #[test]
    fn enumeration_yields_live_processes() {
        let mut source = SystemSource::new();
        let probes = source.processes();
        assert!(!probes.is_empty());

        // At least our own process must produce a full record's worth of facts.
        let own = std::process::id();
        let me = probes.iter().find(|p| p.pid == own).expect("own pid listed");
        let facts = me.facts().expect("own process queryable");
        assert_eq!(facts.pid, own);
        assert!(facts.rss_bytes > 0);
    }
}
