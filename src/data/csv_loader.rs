//! CSV loading for raw housing data

use polars::prelude::*;
use std::path::Path;
use tracing::{error, info};

use crate::error::Result;

/// Load a headered CSV, reading every cell equal to `null_sentinel` as null
///
/// The sentinel applies to all columns before type inference, so a numeric
/// column with `NA` gaps is still inferred as numeric.
pub fn load_csv<P: AsRef<Path>>(csv_path: P, null_sentinel: &str) -> Result<DataFrame> {
    let path = csv_path.as_ref();

    let parse_options = CsvParseOptions::default()
        .with_null_values(Some(NullValues::AllColumnsSingle(null_sentinel.into())));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .inspect_err(|e| error!("Failed to load {:?}: {}", path, e))?;

    info!(
        "Loaded {:?}: {} rows x {} columns",
        path,
        df.height(),
        df.width()
    );
    Ok(df)
}
