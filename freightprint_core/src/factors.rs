//! Emission factors per transport mode.
//!
//! The built-in table covers the supported freight modes in grams of CO2
//! per ton-km. Lookups are keyed by lowercase mode name; any mode absent
//! from the table is "unknown" and contributes nothing to a batch total.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Immutable mapping from lowercase transport mode to grams CO2 per ton-km
#[derive(Clone, Debug)]
pub struct EmissionFactorTable {
    factors: HashMap<String, f64>,
}

impl EmissionFactorTable {
    /// Look up the factor for an already-normalized (lowercase) mode
    pub fn factor(&self, mode: &str) -> Option<f64> {
        self.factors.get(mode).copied()
    }

    /// Build a new table with overrides applied on top of this one
    ///
    /// Override keys are lowercased before insertion so the all-lowercase
    /// key invariant holds regardless of how the config spells a mode.
    pub fn with_overrides(&self, overrides: &HashMap<String, f64>) -> Result<Self> {
        let mut factors = self.factors.clone();
        for (mode, factor) in overrides {
            if *factor < 0.0 {
                return Err(Error::Config(format!(
                    "Negative emission factor for mode '{}': {}",
                    mode, factor
                )));
            }
            factors.insert(mode.to_lowercase(), *factor);
        }
        Ok(Self { factors })
    }
}

/// Cached default table - built once and reused across all runs
static DEFAULT_TABLE: Lazy<EmissionFactorTable> = Lazy::new(build_default_table);

/// Get a reference to the cached default factor table
pub fn default_factor_table() -> &'static EmissionFactorTable {
    &DEFAULT_TABLE
}

/// Builds the default table with the built-in mode factors
///
/// **Note**: For production use, prefer `default_factor_table()` which
/// returns a cached reference. This function is retained for testing and
/// custom table construction.
pub fn build_default_table() -> EmissionFactorTable {
    let mut factors = HashMap::new();
    factors.insert("truck".into(), 62.0);
    factors.insert("train".into(), 21.0);
    factors.insert("ship".into(), 15.0);
    factors.insert("plane".into(), 602.0);
    EmissionFactorTable { factors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let table = build_default_table();
        assert_eq!(table.factor("truck"), Some(62.0));
        assert_eq!(table.factor("train"), Some(21.0));
        assert_eq!(table.factor("ship"), Some(15.0));
        assert_eq!(table.factor("plane"), Some(602.0));
    }

    #[test]
    fn test_unknown_mode_has_no_factor() {
        let table = build_default_table();
        assert_eq!(table.factor("bicycle"), None);
        assert_eq!(table.factor(""), None);
    }

    #[test]
    fn test_lookup_is_by_lowercase_key() {
        // Callers normalize before lookup; the table itself stays lowercase
        let table = build_default_table();
        assert_eq!(table.factor("Truck"), None);
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let table = build_default_table();
        let mut overrides = HashMap::new();
        overrides.insert("truck".to_string(), 31.0);
        overrides.insert("Barge".to_string(), 8.0);

        let merged = table.with_overrides(&overrides).unwrap();
        assert_eq!(merged.factor("truck"), Some(31.0));
        assert_eq!(merged.factor("barge"), Some(8.0));
        // Untouched modes keep their defaults
        assert_eq!(merged.factor("plane"), Some(602.0));
    }

    #[test]
    fn test_negative_override_rejected() {
        let table = build_default_table();
        let mut overrides = HashMap::new();
        overrides.insert("truck".to_string(), -1.0);

        let result = table.with_overrides(&overrides);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
