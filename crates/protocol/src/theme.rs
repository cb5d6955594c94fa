use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // One per trajectory kind
    SeriesResampled,
    SeriesPredicted,
    SeriesPredictedFrenet,
    SeriesCgmresPredictedFrenet,
    SeriesCgmresPredicted,

    PlotBackground,
    PlotBorder,
    GridLine,
    AxisText,
    TitleText,

    LegendBackground,
    LegendBorder,
    LegendText,

    Background,
}
