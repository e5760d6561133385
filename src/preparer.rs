use polars::prelude::DataFrame;
use std::path::Path;
use tracing::{error, info};

use crate::config::PrepConfig;
use crate::data::{load_csv, DataCleaner, FeaturePreparer, TrainTestSplit};
use crate::error::Result;

/// Loads a housing dataset and prepares it for model training
///
/// Owns the table; every cleaning step replaces it in place. Failures are
/// logged and returned unchanged.
pub struct DatasetPreparer {
    data: DataFrame,
    config: PrepConfig,
}

impl DatasetPreparer {
    /// Load a CSV using the default configuration
    pub fn new<P: AsRef<Path>>(data_path: P) -> Result<Self> {
        Self::with_config(data_path, PrepConfig::default())
    }

    /// Load a CSV using a custom configuration
    pub fn with_config<P: AsRef<Path>>(data_path: P, config: PrepConfig) -> Result<Self> {
        config
            .validate()
            .inspect_err(|e| error!("Invalid configuration: {}", e))?;

        let data = load_csv(data_path, &config.null_sentinel)?;
        info!("Data loaded successfully");

        Ok(Self { data, config })
    }

    /// Wrap a table that is already in memory
    pub fn from_frame(data: DataFrame, config: PrepConfig) -> Self {
        Self { data, config }
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Impute nulls and drop irrelevant columns
    ///
    /// On error the table is left as it was before the call.
    pub fn clean_data(&mut self) -> Result<()> {
        let cleaned = DataCleaner::new(&self.config)
            .clean(&self.data)
            .inspect_err(|e| error!("Failed to clean data: {}", e))?;

        self.data = cleaned;
        info!("Data cleaned successfully");
        Ok(())
    }

    /// Select predictors and target, then split 80/20 into train and test sets
    ///
    /// `target` defaults to the configured target column and `predictors` to
    /// every other column. Returns `Ok(None)` for an empty table.
    pub fn prepare_features(
        &self,
        target: Option<&str>,
        predictors: Option<&[String]>,
    ) -> Result<Option<TrainTestSplit>> {
        let target = target.unwrap_or(&self.config.target_column);

        let split = FeaturePreparer::prepare(
            &self.data,
            target,
            predictors,
            self.config.test_size,
            self.config.seed,
        )
        .inspect_err(|e| error!("Failed to prepare features: {}", e))?;

        if split.is_some() {
            info!("Features prepared and data split successfully");
        }
        Ok(split)
    }
}
