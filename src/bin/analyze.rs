//! Analysis Stage - Entry Point
//!
//! Loads the persisted dataset, computes descriptive statistics and the
//! Pearson correlation matrix over the configured numeric columns, prints the
//! report and exports it as JSON. A missing dataset file is the only fatal
//! condition.

use procsnap::constants;
use procsnap::logic::dataset::{load_table, DatasetError};
use procsnap::logic::stats::report::{build_report, write_json};
use procsnap::logic::stats::NumericFrame;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset_path = constants::get_dataset_path();
    let table = match load_table(&dataset_path) {
        Ok(table) => table,
        Err(DatasetError::Missing(path)) => {
            log::error!(
                "Dataset file '{}' not found. Run the collect stage first, or \
                 point PROCSNAP_DATASET at the labeled file.",
                path.display()
            );
            std::process::exit(1);
        }
        Err(err) => {
            log::error!("Failed to load dataset: {}", err);
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} rows from '{}'",
        table.row_count(),
        dataset_path.display()
    );

    let frame = NumericFrame::from_table(&table, &constants::NUMERIC_COLUMNS);
    let report = build_report(&table, &frame);
    println!("{}", report);

    let report_path = constants::get_report_path();
    match write_json(&report, &report_path) {
        Ok(()) => log::info!("Report written to '{}'", report_path.display()),
        Err(err) => log::warn!(
            "Could not write JSON report to '{}': {}",
            report_path.display(),
            err
        ),
    }
}
