//! Data loading, cleaning, and feature preparation modules

pub mod cleaning;
pub mod csv_loader;
pub mod features;

// Re-export commonly used types
pub use cleaning::{null_counts, numeric_columns, DataCleaner};
pub use csv_loader::load_csv;
pub use features::{FeaturePreparer, TrainTestSplit};
