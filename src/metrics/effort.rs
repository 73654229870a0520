use std::collections::BTreeSet;

use crate::data::extract::SurveyRecord;
use crate::error::{MetricsError, Result};

/// Total sampling effort in hours.
///
/// Effort is attached per sample unit, so repeated rows from the same unit
/// are deduplicated before summing: the first occurrence of each unit wins.
/// Units whose effort cell was missing contribute nothing (logged).
///
/// Fails with [`MetricsError::InvalidEffort`] when the sum is not a
/// positive finite number; no rate-based metric is defined in that case.
pub fn total_effort(records: &[SurveyRecord]) -> Result<f64> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut total = 0.0;
    let mut missing = 0usize;

    for record in records {
        if !seen.insert(record.sample_unit.as_str()) {
            continue;
        }
        match record.effort_hours {
            Some(hours) => total += hours,
            None => missing += 1,
        }
    }

    if missing > 0 {
        log::warn!("{missing} sample units have no effort value");
    }
    if !(total > 0.0) || !total.is_finite() {
        return Err(MetricsError::InvalidEffort { total });
    }
    log::debug!("total effort {total} h over {} sample units", seen.len());
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(unit: &str, effort: Option<f64>) -> SurveyRecord {
        SurveyRecord {
            species: "Walleye".into(),
            length_mm: Some(300.0),
            weight_g: None,
            effort_hours: effort,
            sample_unit: unit.into(),
        }
    }

    #[test]
    fn sums_each_unit_once() {
        let records = vec![
            record("N-01", Some(2.0)),
            record("N-01", Some(2.0)),
            record("N-02", Some(3.5)),
        ];
        assert_eq!(total_effort(&records).unwrap(), 5.5);
    }

    #[test]
    fn duplicate_rows_leave_total_unchanged() {
        let mut records = vec![record("N-01", Some(2.0)), record("N-02", Some(3.5))];
        let before = total_effort(&records).unwrap();
        records.push(records[0].clone());
        assert_eq!(total_effort(&records).unwrap(), before);
    }

    #[test]
    fn first_occurrence_wins_on_conflicting_effort() {
        let records = vec![record("N-01", Some(2.0)), record("N-01", Some(9.0))];
        assert_eq!(total_effort(&records).unwrap(), 2.0);
    }

    #[test]
    fn missing_effort_units_contribute_nothing() {
        let records = vec![record("N-01", Some(2.0)), record("N-02", None)];
        assert_eq!(total_effort(&records).unwrap(), 2.0);
    }

    #[test]
    fn empty_or_nonpositive_effort_is_invalid() {
        assert!(matches!(
            total_effort(&[]),
            Err(MetricsError::InvalidEffort { .. })
        ));
        let records = vec![record("N-01", Some(0.0)), record("N-02", Some(-1.0))];
        assert!(matches!(
            total_effort(&records),
            Err(MetricsError::InvalidEffort { .. })
        ));
    }
}
