use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the survey table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64` measurement.
    ///
    /// Strings are parsed leniently ("412", "412.5") because spreadsheet
    /// exports routinely stringify numeric columns. Non-finite results are
    /// treated as missing.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Interpret the cell as a grouping label (species name, sample-unit
    /// identifier). `Null` carries no label.
    pub fn as_label(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            other => Some(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// SurveyDataset – the in-memory survey table
// ---------------------------------------------------------------------------

/// One row of the source table: column name → cell value.
pub type SurveyRow = BTreeMap<String, CellValue>;

/// The full survey table as handed over by the ingestion collaborator.
///
/// The engine never mutates a dataset; every derived value lives in the
/// result tables.
#[derive(Debug, Clone, Default)]
pub struct SurveyDataset {
    /// All rows, in source order.
    pub rows: Vec<SurveyRow>,
    /// Ordered list of column names observed across all rows.
    pub column_names: Vec<String>,
}

impl SurveyDataset {
    /// Build the column-name index from the given rows.
    pub fn from_rows(rows: Vec<SurveyRow>) -> Self {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        for row in &rows {
            for col in row.keys() {
                names.insert(col.as_str());
            }
        }
        let column_names = names.into_iter().map(str::to_string).collect();
        SurveyDataset { rows, column_names }
    }

    /// Whether a column appears anywhere in the table.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_coercions() {
        assert_eq!(CellValue::Float(12.5).as_f64(), Some(12.5));
        assert_eq!(CellValue::Integer(12).as_f64(), Some(12.0));
        assert_eq!(CellValue::String(" 12.5 ".into()).as_f64(), Some(12.5));
        assert_eq!(CellValue::String("n/a".into()).as_f64(), None);
        assert_eq!(CellValue::Float(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
        assert_eq!(CellValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn as_label_coercions() {
        assert_eq!(
            CellValue::String(" Walleye ".into()).as_label(),
            Some("Walleye".into())
        );
        assert_eq!(CellValue::Integer(7).as_label(), Some("7".into()));
        assert_eq!(CellValue::String("   ".into()).as_label(), None);
        assert_eq!(CellValue::Null.as_label(), None);
    }

    #[test]
    fn column_index_covers_ragged_rows() {
        let mut a = SurveyRow::new();
        a.insert("species".into(), CellValue::String("Walleye".into()));
        let mut b = SurveyRow::new();
        b.insert("length_mm".into(), CellValue::Float(412.0));

        let ds = SurveyDataset::from_rows(vec![a, b]);
        assert_eq!(ds.len(), 2);
        assert!(ds.has_column("species"));
        assert!(ds.has_column("length_mm"));
        assert!(!ds.has_column("weight_g"));
    }
}
