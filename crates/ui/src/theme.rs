use trajview_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => egui::Visuals::dark(),
            Self::Light => egui::Visuals::light(),
        }
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        SeriesResampled => ResolvedColor::rgb(0x89, 0xb4, 0xfa), // Blue
        SeriesPredicted => ResolvedColor::rgb(0xfa, 0xb3, 0x87), // Peach
        SeriesPredictedFrenet => ResolvedColor::rgb(0xa6, 0xe3, 0xa1), // Green
        SeriesCgmresPredictedFrenet => ResolvedColor::rgb(0xf3, 0x8b, 0xa8), // Red
        SeriesCgmresPredicted => ResolvedColor::rgb(0xcb, 0xa6, 0xf7), // Mauve

        PlotBackground => ResolvedColor::rgb(0x1e, 0x1e, 0x2e), // Base
        PlotBorder => ResolvedColor::rgb(0x45, 0x47, 0x5a),     // Surface1
        GridLine => ResolvedColor::rgb(0x31, 0x32, 0x44),       // Surface0
        AxisText => ResolvedColor::rgb(0xa6, 0xad, 0xc8),       // Subtext0
        TitleText => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),      // Text

        LegendBackground => ResolvedColor::rgba(0x18, 0x18, 0x25, 220), // Mantle
        LegendBorder => ResolvedColor::rgb(0x45, 0x47, 0x5a),
        LegendText => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1

        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    // matplotlib's default cycle for the series
    use ThemeToken::*;
    match token {
        SeriesResampled => ResolvedColor::rgb(0x1f, 0x77, 0xb4),
        SeriesPredicted => ResolvedColor::rgb(0xff, 0x7f, 0x0e),
        SeriesPredictedFrenet => ResolvedColor::rgb(0x2c, 0xa0, 0x2c),
        SeriesCgmresPredictedFrenet => ResolvedColor::rgb(0xd6, 0x27, 0x28),
        SeriesCgmresPredicted => ResolvedColor::rgb(0x94, 0x67, 0xbd),

        PlotBackground => ResolvedColor::rgb(255, 255, 255),
        PlotBorder => ResolvedColor::rgb(40, 40, 50),
        GridLine => ResolvedColor::rgb(220, 220, 228),
        AxisText => ResolvedColor::rgb(60, 60, 70),
        TitleText => ResolvedColor::rgb(20, 20, 30),

        LegendBackground => ResolvedColor::rgba(255, 255, 255, 220),
        LegendBorder => ResolvedColor::rgb(210, 210, 220),
        LegendText => ResolvedColor::rgb(40, 40, 50),

        Background => ResolvedColor::rgb(245, 245, 248),
    }
}
