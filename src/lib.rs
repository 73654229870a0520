//! Fisheries survey metrics engine.
//!
//! Takes an in-memory survey table plus a column role mapping and produces
//! the standard report tables: catch per unit effort, species
//! abundance/condition, proportional size distribution, length-weight
//! regression, and the length-frequency distribution. Spreadsheet
//! ingestion, column-selection UI, and chart/report rendering live in the
//! surrounding application, not here.
//!
//! ```text
//!  SurveyDataset + ColumnRoles
//!        │
//!        ▼
//!   ┌───────────────────────┐
//!   │ FisheriesMetricsEngine │  species reference table (Ws, PSD cutoffs)
//!   └───────────────────────┘
//!        │
//!        ▼
//!   SurveyReport { cpue, abundance, psd, length_weight, length_frequency }
//! ```
//!
//! Every computation is stateless and leaves the input table untouched.
//! Unknown species degrade their own condition/PSD fields; only an
//! unusable total effort or an unfittable regression abort a computation.

pub mod data;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod species;

pub use data::extract::{dataset_from_json_records, ColumnRoles, SurveyRecord};
pub use data::model::{CellValue, SurveyDataset, SurveyRow};
pub use engine::{AbundanceRow, FisheriesMetricsEngine, PsdRow, SurveyReport};
pub use error::{MetricsError, Result};
pub use metrics::cpue::CpueRow;
pub use metrics::frequency::LengthBin;
pub use metrics::psd::PsdValues;
pub use metrics::regression::RegressionResult;
pub use species::{LengthCategories, SpeciesEntry, SpeciesTable, WsParams};
