use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::model::Dataset;

/// Writes the dataset as pretty-printed JSON, once, at the end of the run.
/// Any failure here is fatal.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<(), AppError> {
    let body = serde_json::to_vec_pretty(dataset).map_err(|err| AppError::Persistence {
        path: path.to_path_buf(),
        source: io::Error::other(err),
    })?;
    fs::write(path, body).map_err(|err| AppError::Persistence {
        path: path.to_path_buf(),
        source: err,
    })?;
    info!(path = %path.display(), courses = dataset.data.len(), "dataset written");
    Ok(())
}
