use std::path::PathBuf;

use banner_common::error::CommonError;

/// Application errors for a catalog run.
///
/// Infrastructure failures stay [`CommonError`]; this enum adds the
/// conditions that end a run. The binary maps any of these to a non-zero
/// exit.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("gave up on page at offset {offset} after {attempts} attempts")]
    FetchExhausted {
        offset: usize,
        attempts: u32,
        #[source]
        source: CommonError,
    },

    #[error("failed to write dataset to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
