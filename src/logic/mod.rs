//! Logic Module - Sampling & Analysis Engines
//!
//! - `probe` / `collector` - per-metric probing with failure isolation
//! - `record` / `sampler` - record construction and round orchestration
//! - `dataset` - accumulation, one-shot CSV persistence, reloading
//! - `stats` - descriptive statistics and Pearson correlations

pub mod collector;
pub mod config;
pub mod dataset;
pub mod probe;
pub mod record;
pub mod sampler;
pub mod stats;
