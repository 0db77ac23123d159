//! One-Shot CSV Writer
//!
//! Column order comes from the record's field set. Fields embedding commas,
//! quotes or newlines are quoted with doubled quotes; everything else is
//! written verbatim so the file stays hand-editable for labeling.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::logic::dataset::Dataset;
use crate::logic::record::COLUMNS;

/// Persist the full dataset. Called exactly once, after the last round.
pub fn write_csv(dataset: &Dataset, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "{}", COLUMNS.join(","))?;
    for record in dataset.records() {
        let row: Vec<String> = record
            .csv_fields()
            .iter()
            .map(|field| escape_field(field))
            .collect();
        writeln!(file, "{}", row.join(","))?;
    }

    file.flush()
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod escape_tests {
    use super::escape_field;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(escape_field("chrome"), "chrome");
        assert_eq!(escape_field("-1"), "-1");
    }

    #[test]
    fn commas_and_quotes_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
