//! Descriptive Statistics
//!
//! Mean, median, mode and sample standard deviation per column. Empty input
//! yields NaN (never a panic); callers render NaN as "n/a".

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median; average of the middle pair for even counts.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// All values tied at the maximum frequency, ascending. More than one value
/// is common in short captures, so the full tie set is returned.
pub fn mode(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    // Runs of equal values in a sorted slice
    let mut groups: Vec<(f64, usize)> = Vec::new();
    for &value in &sorted {
        match groups.last_mut() {
            Some((current, count)) if *current == value => *count += 1,
            _ => groups.push((value, 1)),
        }
    }

    let max_count = groups.iter().map(|(_, count)| *count).max().unwrap_or(0);
    groups
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
        .collect()
}

/// Sample standard deviation (n - 1 denominator); NaN for fewer than two
/// values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
