use polars::prelude::PolarsError;
use thiserror::Error;

/// Dataset preparation errors
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Data error: {0}")]
    Polars(#[from] PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    /// Invalid caller-supplied parameters
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Numeric column with nulls but no observed value to take a median from
    #[error("Cannot impute column '{column}': median is undefined (no non-null values)")]
    UndefinedMedian { column: String },

    #[error("Cannot split {rows} rows with test size {test_size}: train set would be empty")]
    InsufficientRows { rows: usize, test_size: f64 },
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// Validation functions
pub fn validate_test_size(test_size: f64) -> Result<()> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(PrepError::ValidationError(format!(
            "Test size must be strictly between 0 and 1, got {}",
            test_size
        )));
    }
    Ok(())
}

pub fn validate_predictors(predictors: &[String], target: &str) -> Result<()> {
    if predictors.is_empty() {
        return Err(PrepError::ValidationError(
            "At least one predictor column is required".to_string(),
        ));
    }
    if predictors.iter().any(|p| p == target) {
        return Err(PrepError::ValidationError(format!(
            "Target column '{}' cannot also be a predictor",
            target
        )));
    }
    Ok(())
}
