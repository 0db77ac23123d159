use super::correlation::{pearson, pearson_matrix};
use super::descriptive::{mean, median, mode, sample_std};
use super::report::build_report;
use super::NumericFrame;
use crate::logic::dataset::DataTable;

fn table(columns: &[&str], rows: &[&[&str]]) -> DataTable {
    DataTable {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

#[test]
fn frame_restricts_to_columns_present_in_the_table() {
    let t = table(&["cpu_percent", "name"], &[&["1.5", "init"]]);
    let frame = NumericFrame::from_table(&t, &["cpu_percent", "num_threads"]);

    assert_eq!(frame.columns(), &["cpu_percent".to_string()]);
    assert_eq!(frame.row_count(), 1);
}

#[test]
fn one_bad_cell_eliminates_the_whole_row() {
    let t = table(
        &["cpu_percent", "memory_mb"],
        &[
            &["1.0", "10.0"],
            &["oops", "20.0"], // bad cpu cell; memory 20.0 must vanish too
            &["3.0", "30.0"],
        ],
    );
    let frame = NumericFrame::from_table(&t, &["cpu_percent", "memory_mb"]);

    assert_eq!(frame.row_count(), 2);
    assert_eq!(frame.column("memory_mb").unwrap(), &[10.0, 30.0]);
    assert_eq!(frame.column("cpu_percent").unwrap(), &[1.0, 3.0]);
}

#[test]
fn empty_cells_and_non_finite_values_count_as_missing() {
    let t = table(
        &["a", "b"],
        &[&["1", ""], &["NaN", "2"], &["inf", "3"], &["4", "5"]],
    );
    let frame = NumericFrame::from_table(&t, &["a", "b"]);
    assert_eq!(frame.row_count(), 1);
    assert_eq!(frame.column("a").unwrap(), &[4.0]);
}

#[test]
fn sentinel_minus_one_is_kept_in_statistics() {
    // Regression guard: the access-denial sentinel parses as a number and
    // must flow into every statistic unfiltered.
    let t = table(
        &["num_connections"],
        &[&["-1"], &["-1"], &["4"], &["5"], &["8"]],
    );
    let frame = NumericFrame::from_table(&t, &["num_connections"]);

    assert_eq!(frame.row_count(), 5);
    let values = frame.column("num_connections").unwrap();
    assert_eq!(mean(values), 3.0);
    assert_eq!(median(values), 4.0);
    assert_eq!(mode(values), vec![-1.0]);
}

#[test]
fn mean_median_std_match_hand_computation() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(mean(&values), 5.0);
    assert_eq!(median(&values), 4.5);
    // Sample std: sum of squared deviations 32, n-1 = 7
    let expected = (32.0f64 / 7.0).sqrt();
    assert!((sample_std(&values) - expected).abs() < 1e-12);
}

#[test]
fn median_of_odd_count_is_the_middle_value() {
    assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
}

#[test]
fn mode_returns_all_values_tied_at_max_frequency() {
    assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
    assert_eq!(mode(&[7.0]), vec![7.0]);
    assert!(mode(&[]).is_empty());
}

#[test]
fn std_of_fewer_than_two_values_is_nan() {
    assert!(sample_std(&[]).is_nan());
    assert!(sample_std(&[3.0]).is_nan());
}

#[test]
fn perfectly_linear_series_correlate_at_one() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let up = [2.0, 4.0, 6.0, 8.0];
    let down = [8.0, 6.0, 4.0, 2.0];
    assert!((pearson(&x, &up) - 1.0).abs() < 1e-12);
    assert!((pearson(&x, &down) + 1.0).abs() < 1e-12);
}

#[test]
fn zero_variance_column_yields_nan_not_panic() {
    let flat = [5.0, 5.0, 5.0];
    let x = [1.0, 2.0, 3.0];
    assert!(pearson(&flat, &x).is_nan());
}

#[test]
fn correlation_matrix_is_symmetric_with_unit_diagonal() {
    let t = table(
        &["a", "b", "c"],
        &[
            &["1", "2", "-1"],
            &["2", "1", "7"],
            &["3", "5", "2"],
            &["4", "4", "9"],
        ],
    );
    let frame = NumericFrame::from_table(&t, &["a", "b", "c"]);
    let matrix = pearson_matrix(&frame);

    assert_eq!(matrix.size(), 3);
    for i in 0..3 {
        assert!((matrix.values[i][i] - 1.0).abs() < 1e-12);
        for j in 0..3 {
            let rij = matrix.values[i][j];
            let rji = matrix.values[j][i];
            assert_eq!(rij.to_bits(), rji.to_bits());
            if i != j {
                assert!(rij >= -1.0 - 1e-12 && rij <= 1.0 + 1e-12);
            }
        }
    }
}

#[test]
fn report_counts_labels_most_frequent_first() {
    let t = table(
        &["cpu_percent", "is_malicious"],
        &[
            &["1.0", "unknown"],
            &["2.0", "legitimate"],
            &["3.0", "unknown"],
            &["bad", "malicious"], // eliminated from stats, still counted
        ],
    );
    let frame = NumericFrame::from_table(&t, &["cpu_percent"]);
    let report = build_report(&t, &frame);

    assert_eq!(report.dataset_rows, 4);
    assert_eq!(report.analyzed_rows, 3);
    assert_eq!(report.label_counts[0].label, "unknown");
    assert_eq!(report.label_counts[0].count, 2);
    assert_eq!(report.label_counts.len(), 3);

    // Rendering must not panic on any value, NaN included.
    let text = report.to_string();
    assert!(text.contains("cpu_percent"));
}

#[test]
fn report_serializes_nan_as_null() {
    let t = table(&["a"], &[&["5"], &["5"]]);
    let frame = NumericFrame::from_table(&t, &["a"]);
    let report = build_report(&t, &frame);

    let json = serde_json::to_string(&report).unwrap();
    // Zero-variance column: correlations would be NaN; std is 0 here, but
    // single-column matrices only hold the diagonal.
    assert!(json.contains("\"analyzed_rows\":2"));

    let single = table(&["a"], &[&["5"]]);
    let single_frame = NumericFrame::from_table(&single, &["a"]);
    let single_report = build_report(&single, &single_frame);
    let json = serde_json::to_string(&single_report).unwrap();
    // std of one value is NaN -> null in JSON
    assert!(json.contains("\"std_dev\":null"));
}
