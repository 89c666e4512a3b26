//! Emissions aggregation over a batch of logistics entries.
//!
//! Each entry contributes `factor * distance * weight / 1000` kilograms
//! of CO2, where the factor is grams per ton-km. Unknown modes are
//! skipped per entry; a numeric parse failure aborts the whole batch.

use crate::events::EventSink;
use crate::factors::EmissionFactorTable;
use crate::{Error, LogisticsEntry, Result};

/// Factors are grams per ton-km; totals are reported in kilograms
const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Total CO2 mass for a batch, in kilograms
///
/// The sum is order-independent and exactly `0.0` for an empty batch.
pub fn compute_total(
    entries: &[LogisticsEntry],
    table: &EmissionFactorTable,
    sink: &dyn EventSink,
) -> Result<f64> {
    match accumulate(entries, table, sink) {
        Ok(total) => {
            sink.info(&format!("Total emissions calculated: {:.2}kg CO2", total));
            Ok(total)
        }
        Err(e) => {
            sink.error(&format!("Error during emissions calculation: {}", e));
            Err(e)
        }
    }
}

fn accumulate(
    entries: &[LogisticsEntry],
    table: &EmissionFactorTable,
    sink: &dyn EventSink,
) -> Result<f64> {
    let mut total = 0.0;

    for entry in entries {
        let mode = entry.normalized_mode();
        // Both fields parse before the mode is checked, so a bad number on
        // an unknown-mode row still fails the batch
        let distance = parse_field("distance", &entry.distance)?;
        let weight = parse_field("weight", &entry.weight)?;

        match table.factor(&mode) {
            Some(factor) => {
                let emissions = factor * distance * weight / GRAMS_PER_KILOGRAM;
                total += emissions;
                sink.debug(&format!(
                    "Mode: {}, Distance: {}, Weight: {}, Emissions: {}",
                    mode, distance, weight, emissions
                ));
            }
            None => {
                sink.warn(&format!("Unknown transport mode: {}", mode));
            }
        }
    }

    Ok(total)
}

fn parse_field(name: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::Computation(format!("Invalid {} value: '{}'", name, value)))
}
