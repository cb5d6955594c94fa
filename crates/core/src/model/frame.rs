use crate::model::trajectory::TrajectoryKind;

/// Fraction of the data span added on each side when fitting axis limits.
pub const DATA_MARGIN: f64 = 0.05;

/// The data currently assigned to one trajectory's line.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLine {
    pub kind: TrajectoryKind,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl FrameLine {
    pub fn empty(kind: TrajectoryKind) -> Self {
        Self {
            kind,
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Paired `(x, y)` samples.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// What is on screen for one time index: a line per trajectory kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time_index: usize,
    pub lines: Vec<FrameLine>,
}

impl Frame {
    /// One empty line per kind, in legend order.
    pub fn empty() -> Self {
        Self {
            time_index: 0,
            lines: TrajectoryKind::ALL.into_iter().map(FrameLine::empty).collect(),
        }
    }

    pub fn line(&self, kind: TrajectoryKind) -> Option<&FrameLine> {
        self.lines.iter().find(|l| l.kind == kind)
    }
}

/// Axis limits in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const UNIT: Self = Self {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };

    /// Axis limits that fit every finite point of `frame` with a
    /// [`DATA_MARGIN`] on each side. Falls back to [`Bounds::UNIT`] when the
    /// frame has no finite point.
    pub fn from_frame(frame: &Frame) -> Self {
        match Self::data_extent(frame) {
            Some(extent) => extent.widen_degenerate().padded(DATA_MARGIN),
            None => Self::UNIT,
        }
    }

    /// Tight min/max over all points whose coordinates are both finite.
    pub fn data_extent(frame: &Frame) -> Option<Self> {
        let mut extent: Option<Self> = None;
        for (x, y) in frame.lines.iter().flat_map(FrameLine::points) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            extent = Some(match extent {
                None => Self {
                    x_min: x,
                    x_max: x,
                    y_min: y,
                    y_max: y,
                },
                Some(b) => Self {
                    x_min: b.x_min.min(x),
                    x_max: b.x_max.max(x),
                    y_min: b.y_min.min(y),
                    y_max: b.y_max.max(y),
                },
            });
        }
        extent
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Grow each side by `fraction` of the span on that axis.
    pub fn padded(self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self {
            x_min: self.x_min - dx,
            x_max: self.x_max + dx,
            y_min: self.y_min - dy,
            y_max: self.y_max + dy,
        }
    }

    /// A zero-width axis (single point, or a vertical/horizontal line) gets
    /// a unit span centered on its value.
    fn widen_degenerate(self) -> Self {
        let mut b = self;
        if b.width() <= 0.0 {
            b.x_min -= 0.5;
            b.x_max += 0.5;
        }
        if b.height() <= 0.0 {
            b.y_min -= 0.5;
            b.y_max += 0.5;
        }
        b
    }
}
