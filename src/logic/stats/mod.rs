//! Stats Module - Descriptive Statistics & Correlations
//!
//! Coerces the configured numeric columns, eliminates incomplete rows, and
//! feeds the surviving values to the descriptive and correlation engines.

pub mod correlation;
pub mod descriptive;
pub mod report;

#[cfg(test)]
mod tests;

use crate::logic::dataset::DataTable;

/// Column-major numeric view of the dataset, restricted to the configured
/// columns that actually exist and to rows where every one of them parsed.
///
/// Row-wise elimination is deliberate: a single unparseable cell removes the
/// whole row from every column's statistics. The `-1` access-denial sentinel
/// parses cleanly, so it is never eliminated and participates in every
/// statistic below. Known, preserved behavior.
#[derive(Debug, Clone)]
pub struct NumericFrame {
    columns: Vec<String>,
    /// One value vector per column, all the same length
    data: Vec<Vec<f64>>,
}

impl NumericFrame {
    pub fn from_table(table: &DataTable, requested: &[&str]) -> NumericFrame {
        let present: Vec<(String, usize)> = requested
            .iter()
            .filter_map(|name| {
                table
                    .column_index(name)
                    .map(|idx| (name.to_string(), idx))
            })
            .collect();

        let mut data = vec![Vec::new(); present.len()];
        for row in &table.rows {
            let parsed: Vec<Option<f64>> = present
                .iter()
                .map(|(_, idx)| coerce_numeric(&row[*idx]))
                .collect();

            if parsed.iter().all(Option::is_some) {
                for (values, cell) in data.iter_mut().zip(parsed) {
                    values.push(cell.unwrap_or_default());
                }
            }
        }

        NumericFrame {
            columns: present.into_iter().map(|(name, _)| name).collect(),
            data,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(&self.data[idx])
    }

    pub fn column_values(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Rows surviving elimination
    pub fn row_count(&self) -> usize {
        self.data.first().map(Vec::len).unwrap_or(0)
    }
}

/// Parse one cell. Non-numeric and non-finite values become missing, which
/// later eliminates the whole row.
fn coerce_numeric(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
