use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Standard-weight (Ws) equation parameters
// ---------------------------------------------------------------------------

/// Coefficients of the metric standard-weight power law for one species:
/// `log10(Ws) = intercept + slope * log10(L)` with Ws in grams and L in mm.
///
/// The equation is only applicable at or above `min_length_mm`; below it the
/// standard weight is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WsParams {
    pub intercept: f64,
    pub slope: f64,
    pub min_length_mm: f64,
}

// ---------------------------------------------------------------------------
// Five-cell length categories (PSD cutoffs)
// ---------------------------------------------------------------------------

/// Gabelhouse five-cell length cutoffs in mm, strictly increasing
/// (stock < quality < preferred < memorable < trophy).
///
/// Monotonicity is assumed correct by construction of the table; the engine
/// does not re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthCategories {
    pub stock_mm: f64,
    pub quality_mm: f64,
    pub preferred_mm: f64,
    pub memorable_mm: f64,
    pub trophy_mm: f64,
}

// ---------------------------------------------------------------------------
// Species reference table
// ---------------------------------------------------------------------------

/// Reference data for one species. Either part may be absent; metrics that
/// need the missing part report undefined values for that species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub ws: Option<WsParams>,
    pub categories: Option<LengthCategories>,
}

/// Immutable reference table keyed by species name.
///
/// Lookup is case-insensitive on the trimmed name: field data sheets are
/// inconsistent about capitalization ("walleye", "Walleye", "WALLEYE").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesTable {
    entries: BTreeMap<String, SpeciesEntry>,
}

impl SpeciesTable {
    /// An empty table. Every lookup misses; all condition/PSD fields
    /// degrade to undefined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table of published values for common North American
    /// sportfish: standard-weight coefficients from the Anderson & Neumann
    /// equations, length categories from Gabelhouse's five-cell system.
    /// The Ws minimum length is the species' stock cutoff.
    pub fn reference() -> Self {
        let mut table = Self::default();
        for &(name, intercept, slope, cuts) in REFERENCE {
            table.insert(
                name,
                SpeciesEntry {
                    ws: Some(WsParams {
                        intercept,
                        slope,
                        min_length_mm: cuts[0],
                    }),
                    categories: Some(LengthCategories {
                        stock_mm: cuts[0],
                        quality_mm: cuts[1],
                        preferred_mm: cuts[2],
                        memorable_mm: cuts[3],
                        trophy_mm: cuts[4],
                    }),
                },
            );
        }
        table
    }

    /// Insert or replace the entry for a species.
    pub fn insert(&mut self, name: &str, entry: SpeciesEntry) {
        self.entries.insert(normalize(name), entry);
    }

    /// Look up a species entry.
    pub fn get(&self, name: &str) -> Option<&SpeciesEntry> {
        self.entries.get(&normalize(name))
    }

    /// Standard-weight parameters for a species, if known.
    pub fn ws(&self, name: &str) -> Option<&WsParams> {
        self.get(name).and_then(|e| e.ws.as_ref())
    }

    /// Length categories for a species, if known.
    pub fn categories(&self, name: &str) -> Option<&LengthCategories> {
        self.get(name).and_then(|e| e.categories.as_ref())
    }

    /// Number of species in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// (species, Ws intercept, Ws slope, [S, Q, P, M, T] cutoffs in mm).
const REFERENCE: &[(&str, f64, f64, [f64; 5])] = &[
    ("Black Crappie", -5.618, 3.345, [130.0, 200.0, 250.0, 300.0, 380.0]),
    ("Bluegill", -5.374, 3.316, [80.0, 150.0, 200.0, 250.0, 300.0]),
    ("Channel Catfish", -5.800, 3.294, [280.0, 410.0, 610.0, 710.0, 910.0]),
    ("Largemouth Bass", -5.528, 3.273, [200.0, 300.0, 380.0, 510.0, 630.0]),
    ("Northern Pike", -5.437, 3.096, [350.0, 530.0, 710.0, 860.0, 1120.0]),
    ("Smallmouth Bass", -5.329, 3.200, [180.0, 280.0, 350.0, 430.0, 510.0]),
    ("Walleye", -5.453, 3.180, [250.0, 380.0, 510.0, 630.0, 760.0]),
    ("White Crappie", -5.642, 3.332, [130.0, 200.0, 250.0, 300.0, 380.0]),
    ("Yellow Perch", -5.386, 3.230, [130.0, 200.0, 250.0, 300.0, 380.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = SpeciesTable::reference();
        assert!(table.ws("Walleye").is_some());
        assert!(table.ws("walleye").is_some());
        assert!(table.ws(" WALLEYE ").is_some());
        assert!(table.ws("Sturgeon").is_none());
    }

    #[test]
    fn walleye_reference_values() {
        let table = SpeciesTable::reference();
        let ws = table.ws("Walleye").unwrap();
        assert_eq!(ws.intercept, -5.453);
        assert_eq!(ws.slope, 3.180);
        assert_eq!(ws.min_length_mm, 250.0);

        let cats = table.categories("Walleye").unwrap();
        assert_eq!(cats.stock_mm, 250.0);
        assert_eq!(cats.trophy_mm, 760.0);
    }

    #[test]
    fn categories_strictly_increasing() {
        let table = SpeciesTable::reference();
        for &(name, ..) in REFERENCE {
            let c = table.categories(name).unwrap();
            assert!(
                c.stock_mm < c.quality_mm
                    && c.quality_mm < c.preferred_mm
                    && c.preferred_mm < c.memorable_mm
                    && c.memorable_mm < c.trophy_mm,
                "{name} cutoffs not increasing"
            );
        }
    }

    #[test]
    fn custom_entries_override() {
        let mut table = SpeciesTable::empty();
        table.insert(
            "Burbot",
            SpeciesEntry {
                ws: Some(WsParams {
                    intercept: -5.218,
                    slope: 3.075,
                    min_length_mm: 200.0,
                }),
                categories: None,
            },
        );
        assert_eq!(table.len(), 1);
        assert!(table.ws("burbot").is_some());
        assert!(table.categories("burbot").is_none());
    }
}
