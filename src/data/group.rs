use std::collections::BTreeMap;

use super::extract::SurveyRecord;

/// Row indices per species label, species in alphabetical order.
///
/// Grouping is by the label exactly as it appears in the data; only the
/// reference-table lookup is case-insensitive.
pub type SpeciesGroups = BTreeMap<String, Vec<usize>>;

/// Group record indices by species.
pub fn group_by_species(records: &[SurveyRecord]) -> SpeciesGroups {
    let mut groups = SpeciesGroups::new();
    for (idx, record) in records.iter().enumerate() {
        groups
            .entry(record.species.clone())
            .or_default()
            .push(idx);
    }
    groups
}
