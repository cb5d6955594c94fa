use trajview_protocol::{MarkerShape, ThemeToken};

/// File whose row count defines the number of time steps in a run.
pub const TIME_FILE: &str = "time.log";

/// The trajectories the controller logs, each as an X and a Y series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrajectoryKind {
    /// Reference path resampled onto the prediction horizon.
    Resampled,
    Predicted,
    PredictedFrenet,
    CgmresPredictedFrenet,
    CgmresPredicted,
}

impl TrajectoryKind {
    /// All kinds, in drawing and legend order.
    pub const ALL: [Self; 5] = [
        Self::Resampled,
        Self::Predicted,
        Self::PredictedFrenet,
        Self::CgmresPredictedFrenet,
        Self::CgmresPredicted,
    ];

    /// Stable identifier, also the file stem shared by the X/Y logs.
    pub fn id(self) -> &'static str {
        match self {
            Self::Resampled => "resampled",
            Self::Predicted => "predicted",
            Self::PredictedFrenet => "predicted_frenet",
            Self::CgmresPredictedFrenet => "cgmres_predicted_frenet",
            Self::CgmresPredicted => "cgmres_predicted",
        }
    }

    pub fn x_file(self) -> &'static str {
        match self {
            Self::Resampled => "resampled_x.log",
            Self::Predicted => "predicted_x.log",
            Self::PredictedFrenet => "predicted_frenet_x.log",
            Self::CgmresPredictedFrenet => "cgmres_predicted_frenet_x.log",
            Self::CgmresPredicted => "cgmres_predicted_x.log",
        }
    }

    pub fn y_file(self) -> &'static str {
        match self {
            Self::Resampled => "resampled_y.log",
            Self::Predicted => "predicted_y.log",
            Self::PredictedFrenet => "predicted_frenet_y.log",
            Self::CgmresPredictedFrenet => "cgmres_predicted_frenet_y.log",
            Self::CgmresPredicted => "cgmres_predicted_y.log",
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Resampled => "Resampled Reference Trajectory",
            Self::Predicted => "Predicted Trajectory",
            Self::PredictedFrenet => "Predicted Frenet Trajectory",
            Self::CgmresPredictedFrenet => "CGMRES Predicted Frenet Trajectory",
            Self::CgmresPredicted => "CGMRES Predicted Trajectory",
        }
    }

    pub fn marker(self) -> MarkerShape {
        match self {
            Self::Resampled => MarkerShape::Square,
            Self::Predicted => MarkerShape::Diamond,
            Self::PredictedFrenet => MarkerShape::TriangleUp,
            Self::CgmresPredictedFrenet => MarkerShape::TriangleDown,
            Self::CgmresPredicted => MarkerShape::TriangleLeft,
        }
    }

    pub fn color(self) -> ThemeToken {
        match self {
            Self::Resampled => ThemeToken::SeriesResampled,
            Self::Predicted => ThemeToken::SeriesPredicted,
            Self::PredictedFrenet => ThemeToken::SeriesPredictedFrenet,
            Self::CgmresPredictedFrenet => ThemeToken::SeriesCgmresPredictedFrenet,
            Self::CgmresPredicted => ThemeToken::SeriesCgmresPredicted,
        }
    }
}

impl std::fmt::Display for TrajectoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
