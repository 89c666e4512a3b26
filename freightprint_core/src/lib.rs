#![forbid(unsafe_code)]

//! Core domain model and pipeline for the Freightprint analyzer.
//!
//! This crate provides:
//! - Domain types (logistics entries, suggestions, reports)
//! - The emission factor table
//! - Record ingestion from delimited input
//! - Emissions aggregation and the suggestion advisor
//! - Observability events, configuration, logging setup

pub mod types;
pub mod error;
pub mod factors;
pub mod config;
pub mod logging;
pub mod events;
pub mod loader;
pub mod emissions;
pub mod advisor;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use events::{Event, EventSink, FanoutSink, JsonlEventSink, Level, MemorySink, TracingSink};
pub use factors::{build_default_table, default_factor_table, EmissionFactorTable};
pub use loader::load_entries;
pub use emissions::compute_total;
pub use advisor::advise;
pub use engine::run_analysis;
