//! Pipeline orchestration: load, aggregate, advise.
//!
//! The three stages run strictly in sequence, each consuming the output
//! of the previous one. There is no cross-run state.

use crate::advisor::advise;
use crate::emissions::compute_total;
use crate::events::EventSink;
use crate::factors::EmissionFactorTable;
use crate::loader::load_entries;
use crate::{AnalysisReport, Result};
use std::path::Path;
use uuid::Uuid;

/// Run the full analysis over one input resource
///
/// Returns `Ok(None)` when the loader produced no entries (missing or
/// empty input); the caller prints nothing in that case. A calculator
/// fault propagates as an error and suppresses the whole report, never
/// a partial one.
pub fn run_analysis(
    run_id: Uuid,
    input: &Path,
    table: &EmissionFactorTable,
    sink: &dyn EventSink,
) -> Result<Option<AnalysisReport>> {
    let entries = load_entries(input, sink);
    if entries.is_empty() {
        return Ok(None);
    }

    let total_kg_co2 = compute_total(&entries, table, sink)?;
    let suggestion = advise(&entries, sink);

    Ok(Some(AnalysisReport {
        run_id,
        entries_processed: entries.len(),
        total_kg_co2,
        suggestion,
    }))
}
