//! Core of trajview: finding a run's log directory, reading its series, and
//! turning the selected time step into render commands.
//!
//! ```text
//!   locator ──▶ RunLogs::load ──▶ TrajectoryViewer ──▶ views::render_plot ──▶ RenderCommand[]
//!   (which dir)   (parsers)        (time index, frame,     (equal-aspect plot,
//!                                   axis limits)            grid, legend)
//! ```

pub mod locator;
pub mod model;
pub mod parsers;
pub mod views;
