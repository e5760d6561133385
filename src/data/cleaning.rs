//! Data cleaning
//!
//! Median imputation for numeric columns, placeholder imputation for known
//! categorical columns, and removal of irrelevant columns.

use polars::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::PrepConfig;
use crate::error::{PrepError, Result};

/// Check whether a column holds integer or floating-point values
pub fn is_numeric(dtype: &DataType) -> bool {
    dtype.is_float() || dtype.is_integer()
}

/// Names of all integer and floating-point columns, in table order
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| is_numeric(c.dtype()))
        .map(|c| c.name().to_string())
        .collect()
}

/// Null count for every column, in table order
pub fn null_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|c| (c.name().to_string(), c.null_count()))
        .collect()
}

/// Cleaning steps driven by a [`PrepConfig`]
pub struct DataCleaner<'a> {
    config: &'a PrepConfig,
}

impl<'a> DataCleaner<'a> {
    pub fn new(config: &'a PrepConfig) -> Self {
        Self { config }
    }

    /// Run every cleaning step and return the cleaned table
    ///
    /// Fails with [`PrepError::UndefinedMedian`] when a numeric column has
    /// nulls but no value to take a median from. The input is left unchanged
    /// on failure.
    pub fn clean(&self, df: &DataFrame) -> Result<DataFrame> {
        info!("Data before cleaning: {:?}", df.shape());
        info!("Null counts per column:\n{}", df.null_count());

        let df = Self::impute_numeric(df)?;
        let df = self.impute_categorical(&df)?;
        let df = self.drop_columns(&df)?;

        info!("Data after cleaning: {:?}", df.shape());
        info!("Null counts per column after cleaning:\n{}", df.null_count());

        Ok(df)
    }

    /// Fill nulls in every numeric column with the column median
    ///
    /// Columns with nulls become `Float64`; complete columns keep their dtype.
    pub fn impute_numeric(df: &DataFrame) -> Result<DataFrame> {
        let mut fills = Vec::new();

        for column in df.get_columns() {
            if !is_numeric(column.dtype()) {
                continue;
            }

            let name = column.name().to_string();
            let nulls = column.null_count();
            if nulls == 0 {
                debug!("No nulls in {}", name);
                continue;
            }

            let median = column
                .cast(&DataType::Float64)?
                .f64()?
                .median()
                .ok_or_else(|| PrepError::UndefinedMedian {
                    column: name.clone(),
                })?;

            info!("Filled {} nulls in {} with median {}", nulls, name, median);
            fills.push(
                col(name.as_str())
                    .cast(DataType::Float64)
                    .fill_null(lit(median)),
            );
        }

        if fills.is_empty() {
            return Ok(df.clone());
        }

        Ok(df.clone().lazy().with_columns(fills).collect()?)
    }

    /// Fill nulls in the configured categorical columns with the placeholder
    ///
    /// Configured names missing from the table are skipped.
    pub fn impute_categorical(&self, df: &DataFrame) -> Result<DataFrame> {
        let placeholder = self.config.categorical_placeholder.as_str();
        let mut seen = HashSet::new();
        let mut fills = Vec::new();

        for name in &self.config.categorical_columns {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let Ok(column) = df.column(name) else {
                continue;
            };

            let nulls = column.null_count();
            if nulls == 0 {
                continue;
            }

            info!("Filled {} nulls in {} with '{}'", nulls, name, placeholder);
            fills.push(
                col(name.as_str())
                    .cast(DataType::String)
                    .fill_null(lit(placeholder)),
            );
        }

        if fills.is_empty() {
            return Ok(df.clone());
        }

        Ok(df.clone().lazy().with_columns(fills).collect()?)
    }

    /// Remove the configured columns; names not in the table are ignored
    pub fn drop_columns(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut result = df.clone();

        for name in &self.config.dropped_columns {
            if result.get_column_index(name).is_some() {
                result = result.drop(name)?;
                debug!("Dropped column {}", name);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df! {
            "Id" => [1i64, 2, 3, 4],
            "LotFrontage" => [Some(60i64), None, Some(80), Some(70)],
            "MasVnrArea" => [Some(1.0f64), Some(3.0), None, None],
            "MSZoning" => [Some("RL"), None, Some("RM"), Some("RL")],
            "GarageType" => [None, Some("Attchd"), None, Some("Detchd")],
            "FireplaceQu" => [None, Some("TA"), None, Some("Gd")],
            "Alley" => [None::<&str>, None, Some("Grvl"), None],
            "PoolQC" => [None::<&str>, None, None, None],
            "SalePrice" => [208500i64, 181500, 223500, 140000],
        }
        .unwrap()
    }

    #[test]
    fn test_numeric_columns() {
        let df = sample_frame();
        assert_eq!(
            numeric_columns(&df),
            vec!["Id", "LotFrontage", "MasVnrArea", "SalePrice"]
        );
    }

    #[test]
    fn test_impute_numeric_uses_median() {
        let df = DataCleaner::impute_numeric(&sample_frame()).unwrap();

        // median of 60, 80, 70
        let frontage = df.column("LotFrontage").unwrap();
        assert_eq!(frontage.null_count(), 0);
        assert_eq!(frontage.dtype(), &DataType::Float64);
        assert_eq!(frontage.f64().unwrap().get(1), Some(70.0));
        assert_eq!(frontage.f64().unwrap().get(0), Some(60.0));

        // median of 1.0, 3.0
        let area = df.column("MasVnrArea").unwrap().f64().unwrap();
        assert_eq!(area.get(2), Some(2.0));
        assert_eq!(area.get(3), Some(2.0));
    }

    #[test]
    fn test_impute_numeric_keeps_complete_columns() {
        let df = DataCleaner::impute_numeric(&sample_frame()).unwrap();
        assert_eq!(df.column("Id").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("SalePrice").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_impute_numeric_all_null_column_fails() {
        let df = df! {
            "Id" => [1i64, 2],
            "Empty" => [None::<f64>, None],
        }
        .unwrap();

        let err = DataCleaner::impute_numeric(&df).unwrap_err();
        match err {
            PrepError::UndefinedMedian { column } => assert_eq!(column, "Empty"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_impute_categorical_listed_only() {
        let config = PrepConfig::default();
        let cleaner = DataCleaner::new(&config);
        let df = cleaner.impute_categorical(&sample_frame()).unwrap();

        let zoning = df.column("MSZoning").unwrap().str().unwrap();
        assert_eq!(zoning.null_count(), 0);
        assert_eq!(zoning.get(1), Some("Desconocido"));
        assert_eq!(zoning.get(0), Some("RL"));

        let garage = df.column("GarageType").unwrap().str().unwrap();
        assert_eq!(garage.null_count(), 0);
        assert_eq!(garage.get(0), Some("Desconocido"));

        // not in the categorical list
        assert_eq!(df.column("FireplaceQu").unwrap().null_count(), 2);
    }

    #[test]
    fn test_impute_categorical_skips_absent_columns() {
        let config = PrepConfig {
            categorical_columns: vec!["Street".to_string(), "MSZoning".to_string()],
            ..PrepConfig::default()
        };
        let cleaner = DataCleaner::new(&config);
        let df = cleaner.impute_categorical(&sample_frame()).unwrap();

        assert!(df.column("Street").is_err());
        assert_eq!(df.column("MSZoning").unwrap().null_count(), 0);
    }

    #[test]
    fn test_drop_columns() {
        let config = PrepConfig::default();
        let cleaner = DataCleaner::new(&config);
        let df = cleaner.drop_columns(&sample_frame()).unwrap();

        // Fence and MiscFeature are absent from the input
        assert!(df.column("Alley").is_err());
        assert!(df.column("PoolQC").is_err());
        assert_eq!(df.width(), 7);
    }

    #[test]
    fn test_clean_full() {
        let config = PrepConfig::default();
        let cleaner = DataCleaner::new(&config);
        let df = cleaner.clean(&sample_frame()).unwrap();

        for name in numeric_columns(&df) {
            assert_eq!(df.column(&name).unwrap().null_count(), 0, "{}", name);
        }
        for name in &config.categorical_columns {
            if let Ok(column) = df.column(name) {
                assert_eq!(column.null_count(), 0, "{}", name);
                assert!(column.str().unwrap().into_iter().all(|v| v != Some("NA")));
            }
        }
        for name in &config.dropped_columns {
            assert!(df.column(name).is_err(), "{} should be dropped", name);
        }
        assert_eq!(df.height(), 4);
    }

    #[test]
    fn test_clean_empty_frame() {
        let df = df! {
            "LotFrontage" => Vec::<i64>::new(),
            "MSZoning" => Vec::<&str>::new(),
            "Alley" => Vec::<&str>::new(),
        }
        .unwrap();

        let config = PrepConfig::default();
        let cleaned = DataCleaner::new(&config).clean(&df).unwrap();

        assert_eq!(cleaned.height(), 0);
        assert_eq!(cleaned.width(), 2);
    }

    #[test]
    fn test_null_counts() {
        let counts = null_counts(&sample_frame());
        assert_eq!(counts[0], ("Id".to_string(), 0));
        assert_eq!(counts[1], ("LotFrontage".to_string(), 1));
        assert_eq!(counts[7], ("PoolQC".to_string(), 4));
    }
}
