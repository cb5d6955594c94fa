//! Integration test: lay out run directories on disk, locate and load them,
//! and drive the viewer through its time steps.

use std::path::Path;

use trajview_core::locator::{self, LocateError};
use trajview_core::model::{
    Bounds, RunError, RunLogs, TIME_FILE, TrajectoryKind, TrajectoryViewer, ViewerError,
};
use trajview_core::views::render_plot;
use trajview_protocol::{RenderCommand, Viewport};

/// Distinct, recognizable values per kind, axis, and row.
fn sample(kind_idx: usize, axis: usize, row: usize, col: usize) -> f64 {
    (kind_idx * 1000 + axis * 100 + row * 10 + col) as f64 + 0.25
}

fn write_run(dir: &Path, rows: usize) {
    std::fs::create_dir_all(dir).unwrap();
    let time: String = (0..rows).map(|i| format!("{}.5,\n", i)).collect();
    std::fs::write(dir.join(TIME_FILE), time).unwrap();

    for (k, kind) in TrajectoryKind::ALL.into_iter().enumerate() {
        for (axis, file) in [(0, kind.x_file()), (1, kind.y_file())] {
            let body: String = (0..rows)
                .map(|row| {
                    // Row r has r + 2 samples so rows differ in length.
                    let fields: Vec<String> = (0..row + 2)
                        .map(|col| sample(k, axis, row, col).to_string())
                        .collect();
                    format!("{},\n", fields.join(","))
                })
                .collect();
            std::fs::write(dir.join(file), body).unwrap();
        }
    }
}

fn open(dir: &Path) -> TrajectoryViewer {
    let run = RunLogs::load(dir).unwrap();
    TrajectoryViewer::new(run).unwrap()
}

#[test]
fn index_range_matches_time_log() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 3);
    std::fs::write(dir.path().join(TIME_FILE), "0.0\n0.1\n").unwrap();

    let viewer = open(dir.path());
    assert_eq!(viewer.time_steps(), 2);
    assert_eq!(viewer.index_range(), 0..=1);
}

#[test]
fn construction_shows_first_row() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 3);

    let viewer = open(dir.path());
    assert_eq!(viewer.time_index(), 0);
    assert_eq!(viewer.limits_recomputed(), 1);
    let line = viewer.frame().line(TrajectoryKind::Resampled).unwrap();
    assert_eq!(line.xs, vec![sample(0, 0, 0, 0), sample(0, 0, 0, 1)]);
    assert_eq!(line.ys, vec![sample(0, 1, 0, 0), sample(0, 1, 0, 1)]);
}

#[test]
fn update_shows_exact_rows_and_refits_once() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 3);
    let run = RunLogs::load(dir.path()).unwrap();
    let mut viewer = TrajectoryViewer::new(run.clone()).unwrap();

    let before = viewer.limits_recomputed();
    let frame = viewer.update(2).unwrap().clone();
    assert_eq!(viewer.limits_recomputed(), before + 1);
    assert_eq!(frame.time_index, 2);
    assert_eq!(frame.lines.len(), TrajectoryKind::ALL.len());

    for kind in TrajectoryKind::ALL {
        let line = frame.line(kind).unwrap();
        assert_eq!(Some(line.xs.as_slice()), run.x_row(kind, 2), "{kind}");
        assert_eq!(Some(line.ys.as_slice()), run.y_row(kind, 2), "{kind}");
        assert_eq!(line.xs.len(), 4);
    }
    assert_eq!(viewer.bounds(), Bounds::from_frame(&frame));
    assert_eq!(viewer.current_time(), Some(2.5));
}

#[test]
fn every_update_refits_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 4);
    let mut viewer = open(dir.path());

    for (n, index) in [3, 1, 1, 0, 2].into_iter().enumerate() {
        viewer.update(index).unwrap();
        assert_eq!(viewer.limits_recomputed(), n as u64 + 2);
        assert_eq!(viewer.time_index(), index);
    }
}

#[test]
fn out_of_range_update_is_rejected_without_change() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 3);
    let mut viewer = open(dir.path());
    viewer.update(1).unwrap();
    let frame = viewer.frame().clone();
    let count = viewer.limits_recomputed();

    let err = viewer.update(3).unwrap_err();
    assert_eq!(err, ViewerError::IndexOutOfRange { index: 3, last: 2 });
    assert_eq!(viewer.frame(), &frame);
    assert_eq!(viewer.limits_recomputed(), count);
}

#[test]
fn step_clamps_at_both_ends() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 3);
    let mut viewer = open(dir.path());

    assert_eq!(viewer.step(-1).time_index, 0);
    assert_eq!(viewer.step(1).time_index, 1);
    assert_eq!(viewer.step(10).time_index, 2);
    assert_eq!(viewer.step(-10).time_index, 0);
}

#[test]
fn title_names_the_run() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("trajectory_042");
    write_run(&dir, 1);
    let viewer = open(&dir);
    assert_eq!(viewer.title(), "Trajectory Comparison\ntrajectory_042");
}

#[test]
fn locate_then_load_latest_run() {
    let root = tempfile::tempdir().unwrap();
    write_run(&root.path().join("trajectory_001"), 1);
    write_run(&root.path().join("trajectory_002"), 2);
    write_run(&root.path().join("trajectory_010"), 3);

    let dir = locator::locate(None, root.path()).unwrap();
    assert_eq!(dir, root.path().join("trajectory_010"));
    assert_eq!(open(&dir).time_steps(), 3);
}

#[test]
fn locate_ignores_broken_runs_contents() {
    // Selecting a run never looks inside it: an empty run directory is
    // still chosen, and only loading it fails.
    let root = tempfile::tempdir().unwrap();
    write_run(&root.path().join("trajectory_001"), 2);
    std::fs::create_dir(root.path().join("trajectory_002")).unwrap();

    let dir = locator::locate(None, root.path()).unwrap();
    assert_eq!(dir, root.path().join("trajectory_002"));
    assert!(matches!(RunLogs::load(&dir), Err(RunError::Read(_))));
}

#[test]
fn empty_root_has_no_run() {
    let root = tempfile::tempdir().unwrap();
    let err = locator::locate(None, root.path()).unwrap_err();
    assert!(matches!(err, LocateError::NoRunFound { .. }));
}

#[test]
fn explicit_missing_directory_fails_at_load() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("gone");
    let dir = locator::locate(Some(missing.as_path()), root.path()).unwrap();
    assert_eq!(dir, missing);
    assert!(RunLogs::load(&dir).is_err());
}

#[test]
fn current_frame_renders_every_kind() {
    let dir = tempfile::tempdir().unwrap();
    write_run(dir.path(), 2);
    let mut viewer = open(dir.path());
    viewer.update(1).unwrap();

    let cmds = render_plot(
        viewer.frame(),
        viewer.bounds(),
        &viewer.title(),
        &Viewport::sized(900.0, 700.0),
    );
    let polylines = cmds
        .iter()
        .filter(|c| matches!(c, RenderCommand::DrawPolyline { .. }))
        .count();
    assert_eq!(polylines, TrajectoryKind::ALL.len());
}
