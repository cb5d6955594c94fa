use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::model::frame::{Bounds, Frame, FrameLine};
use crate::model::run::RunLogs;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewerError {
    #[error("run has no time steps")]
    EmptyTimeSeries,
    #[error("time index {index} out of range 0..={last}")]
    IndexOutOfRange { index: usize, last: usize },
}

/// The interactive state of one opened run.
///
/// Owns the loaded series, the selected time index, the lines currently on
/// screen, and their axis limits. Construction renders index 0; after that
/// every [`TrajectoryViewer::update`] swaps all five lines to the requested
/// row and refits the axis limits once.
#[derive(Debug, Clone)]
pub struct TrajectoryViewer {
    run: RunLogs,
    time_index: usize,
    frame: Frame,
    bounds: Bounds,
    limits_recomputed: u64,
}

impl TrajectoryViewer {
    pub fn new(run: RunLogs) -> Result<Self, ViewerError> {
        if run.time_steps() == 0 {
            return Err(ViewerError::EmptyTimeSeries);
        }
        let mut viewer = Self {
            run,
            time_index: 0,
            frame: Frame::empty(),
            bounds: Bounds::UNIT,
            limits_recomputed: 0,
        };
        viewer.apply(0);
        Ok(viewer)
    }

    /// Show time step `index`.
    pub fn update(&mut self, index: usize) -> Result<&Frame, ViewerError> {
        if !self.index_range().contains(&index) {
            return Err(ViewerError::IndexOutOfRange {
                index,
                last: self.last_index(),
            });
        }
        self.apply(index);
        Ok(&self.frame)
    }

    /// Move the time index by `delta` steps, stopping at either end.
    pub fn step(&mut self, delta: isize) -> &Frame {
        let index = self
            .time_index
            .saturating_add_signed(delta)
            .min(self.last_index());
        self.apply(index);
        &self.frame
    }

    fn apply(&mut self, index: usize) {
        self.frame.time_index = index;
        for line in &mut self.frame.lines {
            *line = FrameLine {
                kind: line.kind,
                xs: self.run.x_row(line.kind, index).unwrap_or_default().to_vec(),
                ys: self.run.y_row(line.kind, index).unwrap_or_default().to_vec(),
            };
        }
        self.time_index = index;
        self.recompute_limits();
        debug!(index, "updated frame");
    }

    fn recompute_limits(&mut self) {
        self.bounds = Bounds::from_frame(&self.frame);
        self.limits_recomputed += 1;
    }

    pub fn run(&self) -> &RunLogs {
        &self.run
    }

    pub fn time_index(&self) -> usize {
        self.time_index
    }

    pub fn time_steps(&self) -> usize {
        self.run.time_steps()
    }

    pub fn last_index(&self) -> usize {
        self.time_steps().saturating_sub(1)
    }

    /// Valid time indices, `0..=T-1`.
    pub fn index_range(&self) -> RangeInclusive<usize> {
        0..=self.last_index()
    }

    /// First value of the current `time.log` row, if it has one.
    pub fn current_time(&self) -> Option<f64> {
        self.run
            .time_row(self.time_index)
            .and_then(|row| row.first().copied())
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// How many times the axis limits have been refitted.
    pub fn limits_recomputed(&self) -> u64 {
        self.limits_recomputed
    }

    pub fn title(&self) -> String {
        format!("Trajectory Comparison\n{}", self.run.name())
    }
}
