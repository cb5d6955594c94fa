pub mod series;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::model::Series;
pub use series::{SeriesParseError, parse_series};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("log file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SeriesParseError,
    },
}

impl ReadError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Read and parse `directory/filename` as a series.
///
/// Every call goes back to disk; callers that need a series more than once
/// keep the returned value.
pub fn read_series(directory: &Path, filename: &str) -> Result<Series, ReadError> {
    let path = directory.join(filename);
    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ReadError::NotFound { path });
        }
        Err(source) => return Err(ReadError::Io { path, source }),
    };

    let series = parse_series(filename, &data).map_err(|source| ReadError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), rows = series.len(), "read series");
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("time.log"), "0.0,\n0.1,\n0.2,\n").unwrap();
        let series = read_series(dir.path(), "time.log").unwrap();
        assert_eq!(series.name(), "time.log");
        assert_eq!(series.len(), 3);
        assert_eq!(series.row(2), Some(&[0.2][..]));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_series(dir.path(), "resampled_x.log").unwrap_err();
        assert!(matches!(err, ReadError::NotFound { .. }));
        assert_eq!(err.path(), dir.path().join("resampled_x.log"));
    }

    #[test]
    fn bad_token_is_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("predicted_x.log"), "1.0,x,3.0\n").unwrap();
        let err = read_series(dir.path(), "predicted_x.log").unwrap_err();
        assert!(matches!(
            err,
            ReadError::Parse {
                source: SeriesParseError::InvalidNumber { row: 1, column: 2, .. },
                ..
            }
        ));
        assert!(err.to_string().contains("predicted_x.log"));
    }

    #[test]
    fn rereads_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("time.log");
        std::fs::write(&path, "0.0\n").unwrap();
        assert_eq!(read_series(dir.path(), "time.log").unwrap().len(), 1);
        std::fs::write(&path, "0.0\n0.1\n").unwrap();
        assert_eq!(read_series(dir.path(), "time.log").unwrap().len(), 2);
    }
}
