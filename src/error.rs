use thiserror::Error;

/// Errors that abort a whole computation.
///
/// Per-species gaps (unknown species, missing reference data) are never
/// errors: they degrade the affected fields to undefined values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// A role-mapped column is not present in the dataset.
    #[error("column '{column}' not found in dataset")]
    MissingColumn { column: String },

    /// Total sampling effort must be positive for any rate-based metric.
    #[error("total sampling effort must be > 0, got {total}")]
    InvalidEffort { total: f64 },

    /// The length-weight regression needs at least two valid pairs with
    /// distinct lengths.
    #[error("regression needs at least {needed} paired length/weight observations, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, MetricsError>;
