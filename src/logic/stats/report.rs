//! Analysis Report
//!
//! Assembles per-column summaries, the correlation matrix and the label
//! counts into one report, rendered as text for the terminal and exported as
//! pretty JSON next to the dataset.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::correlation::{pearson_matrix, CorrelationMatrix};
use super::descriptive::{mean, median, mode, sample_std};
use super::NumericFrame;
use crate::logic::dataset::DataTable;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub mean: f64,
    pub median: f64,
    /// All values tied at maximum frequency, ascending
    pub mode: Vec<f64>,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Rows in the persisted file
    pub dataset_rows: usize,
    /// Rows surviving numeric coercion and row-wise elimination
    pub analyzed_rows: usize,
    pub summaries: Vec<ColumnSummary>,
    pub correlation: CorrelationMatrix,
    /// `is_malicious` tally, most frequent first
    pub label_counts: Vec<LabelCount>,
}

/// Compute the full report for one loaded dataset.
pub fn build_report(table: &DataTable, frame: &NumericFrame) -> AnalysisReport {
    let summaries = frame
        .columns()
        .iter()
        .zip(frame.column_values())
        .map(|(column, values)| ColumnSummary {
            column: column.clone(),
            mean: mean(values),
            median: median(values),
            mode: mode(values),
            std_dev: sample_std(values),
        })
        .collect();

    AnalysisReport {
        dataset_rows: table.row_count(),
        analyzed_rows: frame.row_count(),
        summaries,
        correlation: pearson_matrix(frame),
        label_counts: count_labels(table),
    }
}

fn count_labels(table: &DataTable) -> Vec<LabelCount> {
    let Some(cells) = table.column("is_malicious") else {
        return Vec::new();
    };

    let mut counts: Vec<LabelCount> = Vec::new();
    for cell in cells {
        match counts.iter_mut().find(|lc| lc.label == cell) {
            Some(lc) => lc.count += 1,
            None => counts.push(LabelCount {
                label: cell.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
    counts
}

/// Write the report as pretty JSON. NaN entries serialize as `null`.
pub fn write_json(report: &AnalysisReport, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    let json = serde_json::to_string_pretty(report)?;
    file.write_all(json.as_bytes())?;
    file.flush()
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rows: {} loaded, {} analyzed after dropping incomplete rows",
            self.dataset_rows, self.analyzed_rows
        )?;

        writeln!(f, "\n--- Descriptive statistics ---")?;
        for s in &self.summaries {
            let modes = s
                .mode
                .iter()
                .map(|v| fmt_value(*v))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "{:<18} mean={:<14} median={:<14} std={:<14} mode=[{}]",
                s.column,
                fmt_value(s.mean),
                fmt_value(s.median),
                fmt_value(s.std_dev),
                modes
            )?;
        }

        writeln!(f, "\n--- Correlation matrix ---")?;
        write!(f, "{:<18}", "")?;
        for column in &self.correlation.columns {
            write!(f, "{:>18}", truncate(column, 16))?;
        }
        writeln!(f)?;
        for (i, column) in self.correlation.columns.iter().enumerate() {
            write!(f, "{:<18}", truncate(column, 16))?;
            for value in &self.correlation.values[i] {
                write!(f, "{:>18}", fmt_value(*value))?;
            }
            writeln!(f)?;
        }

        if !self.label_counts.is_empty() {
            writeln!(f, "\n--- Classification counts ---")?;
            for lc in &self.label_counts {
                writeln!(f, "{:<12} {}", lc.label, lc.count)?;
            }
        }

        Ok(())
    }
}

fn fmt_value(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.4}", value)
    }
}

fn truncate(name: &str, max: usize) -> &str {
    &name[..name.len().min(max)]
}
