//! Dataset Module - Accumulation & One-Shot Persistence
//!
//! Holds the ordered record sequence for the whole run and writes it exactly
//! once after the last round. The analysis stage reloads the file through
//! `reader` in a separate execution.

pub mod reader;
pub mod writer;


pub use reader::{load_table, DataTable, DatasetError};
pub use writer::write_csv;

use crate::logic::record::ProcessSnapshotRecord;

/// Append-only record accumulator, owned for the run's duration and handed
/// to the writer once. Never mutated after persistence.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<ProcessSnapshotRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Dataset::default()
    }

    pub fn push(&mut self, record: ProcessSnapshotRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProcessSnapshotRecord] {
        &self.records
    }
}
