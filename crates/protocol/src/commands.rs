use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per frame. Renderers consume this
/// list sequentially; each command carries all the data it needs and all
/// coordinates are in viewport pixels (y grows downward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle with an optional border.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
    },

    /// Draw a text string at a position. Multi-line text is laid out
    /// downward from `position`.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Draw a connected open path through `points`.
    DrawPolyline {
        points: Vec<Point>,
        color: ThemeToken,
        width: f64,
    },

    /// Draw a filled marker centered on `center`. `size` is the marker's
    /// bounding-box edge in pixels.
    DrawMarker {
        center: Point,
        shape: MarkerShape,
        size: f64,
        color: ThemeToken,
    },

    /// Restrict subsequent drawing to a rectangular region.
    SetClip { rect: Rect },

    /// Remove the active clip region.
    ClearClip,

    /// Begin a logical group (e.g. one trajectory line). Renderers may use
    /// this for batching or layer separation.
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Marker glyphs, one per trajectory kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerShape {
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
}

impl MarkerShape {
    /// Outline vertices of the marker in unit space, centered on the origin
    /// with y pointing down. Scale by `size / 2` to get pixels.
    pub fn unit_outline(self) -> &'static [(f64, f64)] {
        match self {
            Self::Square => &[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)],
            Self::Diamond => &[(0.0, -1.0), (0.7, 0.0), (0.0, 1.0), (-0.7, 0.0)],
            Self::TriangleUp => &[(0.0, -1.0), (1.0, 1.0), (-1.0, 1.0)],
            Self::TriangleDown => &[(-1.0, -1.0), (1.0, -1.0), (0.0, 1.0)],
            Self::TriangleLeft => &[(-1.0, 0.0), (1.0, -1.0), (1.0, 1.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_outlines_fit_unit_box() {
        for shape in [
            MarkerShape::Square,
            MarkerShape::Diamond,
            MarkerShape::TriangleUp,
            MarkerShape::TriangleDown,
            MarkerShape::TriangleLeft,
        ] {
            let outline = shape.unit_outline();
            assert!(outline.len() >= 3, "{shape:?}");
            assert!(
                outline
                    .iter()
                    .all(|&(x, y)| (-1.0..=1.0).contains(&x) && (-1.0..=1.0).contains(&y)),
                "{shape:?}"
            );
        }
    }

    #[test]
    fn triangle_up_points_up() {
        // Screen y grows downward, so the apex has the smallest y.
        let apex = MarkerShape::TriangleUp
            .unit_outline()
            .iter()
            .fold(f64::INFINITY, |acc, &(_, y)| acc.min(y));
        assert_eq!(apex, -1.0);
    }

    #[test]
    fn commands_serialize_to_json() {
        let cmd = RenderCommand::DrawMarker {
            center: Point::new(1.0, 2.0),
            shape: MarkerShape::Diamond,
            size: 6.0,
            color: ThemeToken::SeriesPredicted,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        assert!(json.contains("DrawMarker"));
        assert!(json.contains("Diamond"));
        let back: Option<RenderCommand> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cmd));
    }
}
