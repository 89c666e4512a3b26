//! Heuristic optimization advice.
//!
//! A placeholder policy over the set of transport modes present in a
//! batch: air freight anywhere triggers the sea-freight suggestion,
//! otherwise the batch is considered already optimized. No numeric
//! reasoning happens here.

use crate::events::EventSink;
use crate::{LogisticsEntry, Suggestion};
use std::collections::HashSet;

/// Pick the advisory for a batch from the modes it contains
pub fn advise(entries: &[LogisticsEntry], sink: &dyn EventSink) -> Suggestion {
    let modes: HashSet<String> = entries.iter().map(|e| e.normalized_mode()).collect();

    let suggestion = if modes.contains("plane") {
        Suggestion::SwitchAirToSea
    } else {
        Suggestion::AlreadyOptimized
    };

    match suggestion {
        Suggestion::SwitchAirToSea => {
            sink.info("Optimization suggestion: Consider switching from air to sea freight.")
        }
        Suggestion::AlreadyOptimized => {
            sink.info("Optimization suggestion: Logistics already optimized.")
        }
    }

    suggestion
}
