//! Pipeline configuration
//!
//! Defaults match the Ames housing dataset layout (`train.csv`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{validate_test_size, Result};

/// Token marking a missing cell in the raw CSV
pub const NULL_SENTINEL: &str = "NA";

/// Placeholder written into missing categorical cells
pub const CATEGORICAL_PLACEHOLDER: &str = "Desconocido";

/// Column to predict
pub const DEFAULT_TARGET: &str = "SalePrice";

/// Fraction of rows held out for testing
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

pub const DEFAULT_SEED: u64 = 42;

/// Known categorical fields imputed with the placeholder
pub const CATEGORICAL_COLUMNS: [&str; 22] = [
    "MSZoning",
    "Street",
    "LotShape",
    "LandContour",
    "Utilities",
    "LotConfig",
    "LandSlope",
    "Neighborhood",
    "Condition1",
    "Condition2",
    "BldgType",
    "HouseStyle",
    "RoofStyle",
    "Exterior1st",
    "Exterior2nd",
    "MasVnrType",
    "Foundation",
    "Heating",
    "CentralAir",
    "GarageType",
    "SaleType",
    "SaleCondition",
];

/// Mostly-empty columns removed before feature selection
pub const DROPPED_COLUMNS: [&str; 4] = ["Alley", "PoolQC", "Fence", "MiscFeature"];

/// Dataset preparation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Cell value read as null
    pub null_sentinel: String,
    /// Columns imputed with `categorical_placeholder`
    pub categorical_columns: Vec<String>,
    pub categorical_placeholder: String,
    /// Columns removed during cleaning
    pub dropped_columns: Vec<String>,
    /// Target used when the caller doesn't name one
    pub target_column: String,
    /// Held-out fraction, strictly between 0 and 1
    pub test_size: f64,
    /// Shuffle seed for the train/test split
    pub seed: u64,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            null_sentinel: NULL_SENTINEL.to_string(),
            categorical_columns: CATEGORICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            categorical_placeholder: CATEGORICAL_PLACEHOLDER.to_string(),
            dropped_columns: DROPPED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            target_column: DEFAULT_TARGET.to_string(),
            test_size: DEFAULT_TEST_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl PrepConfig {
    /// Load a config from JSON; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PrepConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_test_size(self.test_size)
    }
}
