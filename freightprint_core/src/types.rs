//! Core domain types for the freight carbon-footprint analyzer.
//!
//! This module defines the fundamental types used throughout the system:
//! - Logistics entries read from the input resource
//! - The advisory produced for a batch
//! - The report for one full pipeline run

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Input Types
// ============================================================================

/// One logistics record: a single shipment leg from the input resource
///
/// `distance` (km) and `weight` (tons) keep the raw text from the input.
/// Numeric parsing happens during aggregation, so a malformed cell is an
/// aggregation fault rather than a load fault.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogisticsEntry {
    pub transport_mode: String,
    pub distance: String,
    pub weight: String,
}

impl LogisticsEntry {
    /// Transport mode normalized for factor-table lookup
    pub fn normalized_mode(&self) -> String {
        self.transport_mode.to_lowercase()
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// The optimization advice derived from the modes present in a batch
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// At least one leg uses air freight
    SwitchAirToSea,
    /// No air freight in the batch
    AlreadyOptimized,
}

impl Suggestion {
    /// The fixed advisory line shown to the user
    pub fn text(&self) -> &'static str {
        match self {
            Suggestion::SwitchAirToSea => {
                "Consider switching from air to sea freight for long distances to reduce emissions."
            }
            Suggestion::AlreadyOptimized => {
                "Logistics already optimized for minimal carbon emissions."
            }
        }
    }
}

/// Outcome of one full pipeline run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub entries_processed: usize,
    pub total_kg_co2: f64,
    pub suggestion: Suggestion,
}
