use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::model::{CellValue, SurveyDataset, SurveyRow};
use crate::error::{MetricsError, Result};

// ---------------------------------------------------------------------------
// Column role mapping
// ---------------------------------------------------------------------------

/// Which dataset column supplies each survey field.
///
/// The mapping is explicit configuration handed in once per computation;
/// the engine holds no column-selection state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    /// Species name column.
    pub species: String,
    /// Total length column, millimetres.
    pub length_mm: String,
    /// Weight column, grams. Optional: surveys that never weighed fish
    /// still get counts, lengths, and PSD.
    pub weight_g: Option<String>,
    /// Sampling effort column, hours, attached per sample unit.
    pub effort_hours: String,
    /// Sample-unit (net/site) identifier column grouping rows that share
    /// one effort value.
    pub sample_unit: String,
}

impl ColumnRoles {
    /// Check that every named column exists in the dataset.
    ///
    /// An empty dataset has no columns to check against and passes: the
    /// metrics themselves decide what an empty table means.
    pub fn validate(&self, dataset: &SurveyDataset) -> Result<()> {
        if dataset.is_empty() {
            return Ok(());
        }
        let mut required = vec![
            self.species.as_str(),
            self.length_mm.as_str(),
            self.effort_hours.as_str(),
            self.sample_unit.as_str(),
        ];
        if let Some(weight) = &self.weight_g {
            required.push(weight.as_str());
        }
        for column in required {
            if !dataset.has_column(column) {
                return Err(MetricsError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Typed record extraction
// ---------------------------------------------------------------------------

/// One survey row seen through the role mapping.
///
/// Extraction is the single place raw cells are coerced; the metrics never
/// read the raw table again. Missing or non-numeric measurements degrade
/// per-field to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub species: String,
    pub length_mm: Option<f64>,
    pub weight_g: Option<f64>,
    pub effort_hours: Option<f64>,
    pub sample_unit: String,
}

/// Extract the role-mapped typed records from a dataset.
///
/// Rows without a species label are dropped (there is nothing to group
/// them under); the drop count is logged once. Rows without a sample-unit
/// label fall into a shared unlabelled unit.
pub fn extract_records(dataset: &SurveyDataset, roles: &ColumnRoles) -> Result<Vec<SurveyRecord>> {
    roles.validate(dataset)?;

    let mut records = Vec::with_capacity(dataset.len());
    let mut dropped = 0usize;

    for row in &dataset.rows {
        let species = match row.get(&roles.species).and_then(CellValue::as_label) {
            Some(s) => s,
            None => {
                dropped += 1;
                continue;
            }
        };
        let sample_unit = row
            .get(&roles.sample_unit)
            .and_then(CellValue::as_label)
            .unwrap_or_default();

        records.push(SurveyRecord {
            species,
            length_mm: row.get(&roles.length_mm).and_then(CellValue::as_f64),
            weight_g: roles
                .weight_g
                .as_ref()
                .and_then(|col| row.get(col))
                .and_then(CellValue::as_f64),
            effort_hours: row.get(&roles.effort_hours).and_then(CellValue::as_f64),
            sample_unit,
        });
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} rows with no species value");
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// In-memory JSON record adapter
// ---------------------------------------------------------------------------

/// Build a [`SurveyDataset`] from an in-memory array of JSON records, the
/// records-oriented shape ingestion layers typically produce:
///
/// ```json
/// [
///   { "species": "Walleye", "length_mm": 412, "weight_g": 640,
///     "effort_hours": 2.5, "net_id": "N-01" },
///   ...
/// ]
/// ```
///
/// Non-object entries are skipped with a logged count.
pub fn dataset_from_json_records(records: &[JsonValue]) -> SurveyDataset {
    let mut rows = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for rec in records {
        let Some(obj) = rec.as_object() else {
            skipped += 1;
            continue;
        };
        let row: SurveyRow = obj
            .iter()
            .map(|(k, v)| (k.clone(), cell_from_json(v)))
            .collect();
        rows.push(row);
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} non-object JSON records");
    }
    SurveyDataset::from_rows(rows)
}

fn cell_from_json(value: &JsonValue) -> CellValue {
    match value {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}
