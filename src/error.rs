// Error types for writing and reading point triplets
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// Creating, writing or reading one of the triplet files failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File length is not a whole number of f32 records
    #[error("{} is truncated: {len} bytes is not a multiple of 4", path.display())]
    Truncated { path: PathBuf, len: u64 },

    /// The three sequences do not describe the same number of points
    #[error("sequence lengths differ: lats={lats}, lons={lons}, values={values}")]
    LengthMismatch {
        lats: usize,
        lons: usize,
        values: usize,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
