//! Collection Stage - Entry Point
//!
//! Runs the multi-round sampler and persists the dataset once at the end.
//! The resulting CSV is meant to be labeled by hand (column `is_malicious`)
//! before the analyze stage runs against it.

use procsnap::constants;
use procsnap::logic::collector::SystemSource;
use procsnap::logic::config::SamplerConfig;
use procsnap::logic::dataset::write_csv;
use procsnap::logic::sampler::Sampler;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SamplerConfig::from_env();
    let dataset_path = constants::get_dataset_path();

    log::info!(
        "Starting {} v{}: {} snapshots every {}s (about {}s total)",
        constants::APP_NAME,
        constants::APP_VERSION,
        config.num_snapshots,
        config.interval_seconds,
        config.total_duration_secs()
    );

    let dataset = Sampler::new(config, SystemSource::new()).run();
    log::info!("Collected {} process records", dataset.len());

    if let Err(err) = write_csv(&dataset, &dataset_path) {
        log::error!(
            "Failed to write dataset to '{}': {}",
            dataset_path.display(),
            err
        );
        std::process::exit(1);
    }

    log::info!("Dataset saved to '{}'", dataset_path.display());
    log::info!(
        "Review the 'is_malicious' column and relabel rows as 'legitimate' or \
         'malicious' before running the analyze stage. Do not share the file \
         without anonymizing sensitive command lines."
    );
}
