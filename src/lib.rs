//! Housing Prep - Data preparation for house price prediction
//!
//! This library provides:
//! - CSV loading with `NA` sentinel handling
//! - Median imputation for numeric columns and placeholder imputation for
//!   known categorical columns
//! - Removal of mostly-empty columns
//! - Predictor/target selection and a reproducible 80/20 train/test split
//!
//! # Example
//!
//! ```no_run
//! use housing_prep::DatasetPreparer;
//!
//! let mut preparer = DatasetPreparer::new("data/input/train.csv")?;
//! preparer.clean_data()?;
//!
//! if let Some(split) = preparer.prepare_features(Some("SalePrice"), None)? {
//!     println!("Train rows: {}", split.x_train.height());
//! }
//! # Ok::<(), housing_prep::PrepError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod preparer;

// Re-export commonly used types
pub use config::PrepConfig;
pub use data::{load_csv, DataCleaner, FeaturePreparer, TrainTestSplit};
pub use error::{PrepError, Result};
pub use preparer::DatasetPreparer;
