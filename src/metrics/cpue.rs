use serde::Serialize;

use crate::data::extract::SurveyRecord;
use crate::data::group::group_by_species;

/// One row of the CPUE table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpueRow {
    pub species: String,
    pub fish_count: u64,
    /// Fish per hour of sampling effort.
    pub cpue: f64,
}

/// Catch per unit effort per species, sorted by descending count (ties
/// broken alphabetically so output order is deterministic).
///
/// Every fish shares the one total-effort denominator regardless of which
/// sample unit caught it. An empty input yields an empty table.
pub fn cpue_table(records: &[SurveyRecord], total_effort: f64) -> Vec<CpueRow> {
    let mut rows: Vec<CpueRow> = group_by_species(records)
        .into_iter()
        .map(|(species, indices)| {
            let fish_count = indices.len() as u64;
            CpueRow {
                species,
                fish_count,
                cpue: fish_count as f64 / total_effort,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.fish_count
            .cmp(&a.fish_count)
            .then_with(|| a.species.cmp(&b.species))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(species: &str) -> SurveyRecord {
        SurveyRecord {
            species: species.into(),
            length_mm: Some(300.0),
            weight_g: None,
            effort_hours: Some(2.0),
            sample_unit: "N-01".into(),
        }
    }

    #[test]
    fn counts_and_rates() {
        let records = vec![
            record("Walleye"),
            record("Walleye"),
            record("Walleye"),
            record("Bluegill"),
        ];
        let rows = cpue_table(&records, 2.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].species, "Walleye");
        assert_eq!(rows[0].fish_count, 3);
        assert_eq!(rows[0].cpue, 1.5);
        assert_eq!(rows[1].fish_count, 1);
        assert_eq!(rows[1].cpue, 0.5);
    }

    #[test]
    fn counts_sum_to_row_total() {
        let records = vec![
            record("Walleye"),
            record("Bluegill"),
            record("Bluegill"),
            record("Yellow Perch"),
        ];
        let rows = cpue_table(&records, 4.0);
        let total: u64 = rows.iter().map(|r| r.fish_count).sum();
        assert_eq!(total as usize, records.len());
    }

    #[test]
    fn sorted_descending_with_alphabetical_ties() {
        let records = vec![record("Yellow Perch"), record("Bluegill")];
        let rows = cpue_table(&records, 1.0);
        assert_eq!(rows[0].species, "Bluegill");
        assert_eq!(rows[1].species, "Yellow Perch");
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        assert!(cpue_table(&[], 4.0).is_empty());
    }
}
