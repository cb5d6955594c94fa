use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::series::Series;
use crate::model::trajectory::{TIME_FILE, TrajectoryKind};
use crate::parsers::{ReadError, read_series};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("time.log has no rows")]
    EmptyTimeSeries,
    #[error("{file} has {rows} rows, time.log has {required}")]
    ShortSeries {
        file: &'static str,
        rows: usize,
        required: usize,
    },
    #[error("{kind}: row {row} has {x_len} x values but {y_len} y values")]
    MismatchedRow {
        kind: TrajectoryKind,
        row: usize,
        x_len: usize,
        y_len: usize,
    },
}

#[derive(Debug, Clone)]
struct TrajectorySeries {
    kind: TrajectoryKind,
    x: Series,
    y: Series,
}

/// Every series of one run, read once and checked for consistency.
///
/// Once loaded, each coordinate series has at least [`RunLogs::time_steps`]
/// rows, and row `i` of a kind's X and Y series have the same length.
#[derive(Debug, Clone)]
pub struct RunLogs {
    directory: PathBuf,
    time: Series,
    trajectories: Vec<TrajectorySeries>,
}

impl RunLogs {
    /// Read `time.log` and the X/Y series of every trajectory kind from
    /// `directory`.
    pub fn load(directory: impl AsRef<Path>) -> Result<Self, RunError> {
        let directory = directory.as_ref().to_path_buf();
        let time = read_series(&directory, TIME_FILE)?;

        let mut trajectories = Vec::with_capacity(TrajectoryKind::ALL.len());
        for kind in TrajectoryKind::ALL {
            trajectories.push(TrajectorySeries {
                kind,
                x: read_series(&directory, kind.x_file())?,
                y: read_series(&directory, kind.y_file())?,
            });
        }

        let run = Self {
            directory,
            time,
            trajectories,
        };
        run.validate()?;
        info!(
            run = %run.name(),
            time_steps = run.time_steps(),
            "loaded trajectory run"
        );
        Ok(run)
    }

    fn validate(&self) -> Result<(), RunError> {
        let required = self.time.len();
        if required == 0 {
            return Err(RunError::EmptyTimeSeries);
        }

        for t in &self.trajectories {
            for (file, series) in [(t.kind.x_file(), &t.x), (t.kind.y_file(), &t.y)] {
                if series.len() < required {
                    return Err(RunError::ShortSeries {
                        file,
                        rows: series.len(),
                        required,
                    });
                }
            }

            let pairs = t.x.rows().iter().zip(t.y.rows()).take(required);
            for (row, (xs, ys)) in pairs.enumerate() {
                if xs.len() != ys.len() {
                    return Err(RunError::MismatchedRow {
                        kind: t.kind,
                        row,
                        x_len: xs.len(),
                        y_len: ys.len(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Basename of the run directory, e.g. `trajectory_20240101-120000`.
    pub fn name(&self) -> String {
        self.directory
            .file_name()
            .unwrap_or(self.directory.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Number of time steps, always at least one.
    pub fn time_steps(&self) -> usize {
        self.time.len()
    }

    /// Row `index` of `time.log`.
    pub fn time_row(&self, index: usize) -> Option<&[f64]> {
        self.time.row(index)
    }

    pub fn x_row(&self, kind: TrajectoryKind, index: usize) -> Option<&[f64]> {
        self.series(kind).and_then(|t| t.x.row(index))
    }

    pub fn y_row(&self, kind: TrajectoryKind, index: usize) -> Option<&[f64]> {
        self.series(kind).and_then(|t| t.y.row(index))
    }

    fn series(&self, kind: TrajectoryKind) -> Option<&TrajectorySeries> {
        self.trajectories.iter().find(|t| t.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_run(dir: &Path, rows: usize) {
        let time: String = (0..rows).map(|i| format!("{}.0,\n", i)).collect();
        std::fs::write(dir.join(TIME_FILE), time).unwrap();
        for kind in TrajectoryKind::ALL {
            let body: String = (0..rows).map(|i| format!("{i}.0,{i}.5,\n")).collect();
            std::fs::write(dir.join(kind.x_file()), &body).unwrap();
            std::fs::write(dir.join(kind.y_file()), &body).unwrap();
        }
    }

    #[test]
    fn loads_consistent_run() {
        let dir = tempfile::tempdir().unwrap();
        write_run(dir.path(), 4);
        let run = RunLogs::load(dir.path()).unwrap();
        assert_eq!(run.time_steps(), 4);
        assert_eq!(run.time_row(3), Some(&[3.0][..]));
        assert_eq!(
            run.x_row(TrajectoryKind::Predicted, 2),
            Some(&[2.0, 2.5][..])
        );
    }

    #[test]
    fn empty_time_log_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_run(dir.path(), 2);
        std::fs::write(dir.path().join(TIME_FILE), "").unwrap();
        let err = RunLogs::load(dir.path()).unwrap_err();
        assert!(matches!(err, RunError::EmptyTimeSeries));
    }

    #[test]
    fn short_series_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_run(dir.path(), 3);
        std::fs::write(dir.path().join("predicted_frenet_y.log"), "1.0,\n2.0,\n").unwrap();
        let err = RunLogs::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            RunError::ShortSeries {
                file: "predicted_frenet_y.log",
                rows: 2,
                required: 3
            }
        ));
    }

    #[test]
    fn longer_series_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        write_run(dir.path(), 3);
        std::fs::write(dir.path().join(TIME_FILE), "0.0\n0.1\n").unwrap();
        let run = RunLogs::load(dir.path()).unwrap();
        assert_eq!(run.time_steps(), 2);
    }

    #[test]
    fn mismatched_pair_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_run(dir.path(), 2);
        std::fs::write(dir.path().join("cgmres_predicted_y.log"), "0.0,0.5,\n1.0,\n").unwrap();
        let err = RunLogs::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            RunError::MismatchedRow {
                kind: TrajectoryKind::CgmresPredicted,
                row: 1,
                x_len: 2,
                y_len: 1
            }
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_run(dir.path(), 2);
        std::fs::remove_file(dir.path().join("resampled_y.log")).unwrap();
        let err = RunLogs::load(dir.path()).unwrap_err();
        assert!(matches!(err, RunError::Read(ReadError::NotFound { .. })));
    }

    #[test]
    fn name_is_directory_basename() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("trajectory_007");
        std::fs::create_dir(&dir).unwrap();
        write_run(&dir, 1);
        let run = RunLogs::load(&dir).unwrap();
        assert_eq!(run.name(), "trajectory_007");
    }
}
