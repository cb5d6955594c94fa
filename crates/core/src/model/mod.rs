pub mod frame;
pub mod run;
pub mod series;
pub mod trajectory;
pub mod viewer;

pub use frame::{Bounds, Frame, FrameLine};
pub use run::{RunError, RunLogs};
pub use series::Series;
pub use trajectory::{TIME_FILE, TrajectoryKind};
pub use viewer::{TrajectoryViewer, ViewerError};
