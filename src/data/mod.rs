/// Data layer: the generic survey table, role mapping, and grouping.
///
/// Architecture:
/// ```text
///  in-memory records (ingestion collaborator)
///        │
///        ▼
///   ┌──────────────┐
///   │ SurveyDataset │  Vec<row: column → CellValue>, column index
///   └──────────────┘
///        │  + ColumnRoles
///        ▼
///   ┌──────────────┐
///   │   extract     │  coerce cells once → Vec<SurveyRecord>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │    group      │  row indices per species
///   └──────────────┘
/// ```

pub mod extract;
pub mod group;
pub mod model;
