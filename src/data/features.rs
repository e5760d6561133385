//! Feature Preparation
//!
//! Select predictor and target columns and partition rows into train/test sets

use polars::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::error::{validate_predictors, validate_test_size, PrepError, Result};

/// Train/test partitions of predictors (`x_*`) and target (`y_*`)
///
/// Row `i` of `x_train` corresponds to row `i` of `y_train`, and likewise for
/// the test pair.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: DataFrame,
    pub x_test: DataFrame,
    pub y_train: DataFrame,
    pub y_test: DataFrame,
}

impl TrainTestSplit {
    /// Unpack as `(x_train, x_test, y_train, y_test)`
    pub fn into_parts(self) -> (DataFrame, DataFrame, DataFrame, DataFrame) {
        (self.x_train, self.x_test, self.y_train, self.y_test)
    }
}

/// Feature selection and splitting
pub struct FeaturePreparer;

impl FeaturePreparer {
    /// Resolve the predictor list: explicit names, or every column except the target
    pub fn resolve_predictors(
        df: &DataFrame,
        target: &str,
        predictors: Option<&[String]>,
    ) -> Result<Vec<String>> {
        let predictors: Vec<String> = match predictors {
            Some(names) => names.to_vec(),
            None => df
                .get_column_names()
                .into_iter()
                .filter(|name| name.as_str() != target)
                .map(|name| name.to_string())
                .collect(),
        };

        validate_predictors(&predictors, target)?;

        if let Some(missing) = predictors
            .iter()
            .find(|name| df.get_column_index(name).is_none())
        {
            return Err(PrepError::MissingColumn(missing.clone()));
        }

        Ok(predictors)
    }

    /// Split a table into predictor and target tables
    pub fn select_features(
        df: &DataFrame,
        target: &str,
        predictors: Option<&[String]>,
    ) -> Result<(DataFrame, DataFrame)> {
        if df.get_column_index(target).is_none() {
            return Err(PrepError::MissingColumn(target.to_string()));
        }

        let predictors = Self::resolve_predictors(df, target, predictors)?;
        info!("Selected predictors: {:?}", predictors);

        let x = df.select(predictors.iter().map(|name| name.as_str()))?;
        let y = df.select([target])?;

        Ok((x, y))
    }

    /// Shuffled `(train, test)` row indices for `n_rows` rows
    ///
    /// The test set takes `ceil(n_rows * test_size)` rows. The same seed
    /// always yields the same partition.
    pub fn split_indices(
        n_rows: usize,
        test_size: f64,
        seed: u64,
    ) -> Result<(Vec<IdxSize>, Vec<IdxSize>)> {
        validate_test_size(test_size)?;

        let n_test = (n_rows as f64 * test_size).ceil() as usize;
        if n_test >= n_rows {
            return Err(PrepError::InsufficientRows {
                rows: n_rows,
                test_size,
            });
        }

        let mut indices: Vec<IdxSize> = (0..n_rows as IdxSize).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let train = indices.split_off(n_test);
        Ok((train, indices))
    }

    /// Randomly partition aligned predictor and target tables
    ///
    /// Returns `Ok(None)` when there are no rows to split.
    pub fn train_test_split(
        x: &DataFrame,
        y: &DataFrame,
        test_size: f64,
        seed: u64,
    ) -> Result<Option<TrainTestSplit>> {
        if x.height() != y.height() {
            return Err(PrepError::ValidationError(format!(
                "Predictor and target row counts differ: {} vs {}",
                x.height(),
                y.height()
            )));
        }

        info!("Predictors before split: {:?}", x.shape());

        if x.height() == 0 {
            warn!("No rows available to split into train and test sets");
            return Ok(None);
        }

        let (train_idx, test_idx) = Self::split_indices(x.height(), test_size, seed)?;
        let train_idx = IdxCa::from_vec("train".into(), train_idx);
        let test_idx = IdxCa::from_vec("test".into(), test_idx);

        let split = TrainTestSplit {
            x_train: x.take(&train_idx)?,
            x_test: x.take(&test_idx)?,
            y_train: y.take(&train_idx)?,
            y_test: y.take(&test_idx)?,
        };

        info!(
            "Split into {} train and {} test rows",
            split.x_train.height(),
            split.x_test.height()
        );
        Ok(Some(split))
    }

    /// Select features and split them in one step
    pub fn prepare(
        df: &DataFrame,
        target: &str,
        predictors: Option<&[String]>,
        test_size: f64,
        seed: u64,
    ) -> Result<Option<TrainTestSplit>> {
        let (x, y) = Self::select_features(df, target, predictors)?;
        Self::train_test_split(&x, &y, test_size, seed)
    }
}
