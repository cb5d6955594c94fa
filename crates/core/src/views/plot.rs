use trajview_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::model::{Bounds, Frame, FrameLine};
use crate::views::axis;

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 44.0;

const TITLE_FONT_SIZE: f64 = 13.0;
const LABEL_FONT_SIZE: f64 = 12.0;
const TICK_FONT_SIZE: f64 = 10.0;
const LEGEND_FONT_SIZE: f64 = 11.0;

const LINE_WIDTH: f64 = 1.5;
const GRID_WIDTH: f64 = 0.5;
const MARKER_SIZE: f64 = 7.0;

const LEGEND_ROW_HEIGHT: f64 = 16.0;
const LEGEND_PADDING: f64 = 6.0;
const LEGEND_SAMPLE_WIDTH: f64 = 24.0;
const LEGEND_INSET: f64 = 8.0;
/// Rough advance of one label character, as a fraction of the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Placement of the plot box in the viewport and the data-to-pixel mapping.
///
/// The mapping has one scale for both axes (equal aspect ratio); the box is
/// shrunk along one axis to keep it and centered in the space left by the
/// margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub area: Rect,
    pub bounds: Bounds,
    /// Pixels per data unit.
    pub scale: f64,
}

impl PlotLayout {
    /// `None` if the viewport is too small or the bounds are empty.
    pub fn new(bounds: Bounds, viewport: &Viewport) -> Option<Self> {
        let avail_w = viewport.width - MARGIN_LEFT - MARGIN_RIGHT;
        let avail_h = viewport.height - MARGIN_TOP - MARGIN_BOTTOM;
        if avail_w < 1.0 || avail_h < 1.0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return None;
        }

        let scale = (avail_w / bounds.width()).min(avail_h / bounds.height());
        if !scale.is_finite() {
            return None;
        }
        let w = bounds.width() * scale;
        let h = bounds.height() * scale;
        let area = Rect::new(
            MARGIN_LEFT + (avail_w - w) / 2.0,
            MARGIN_TOP + (avail_h - h) / 2.0,
            w,
            h,
        );
        Some(Self {
            area,
            bounds,
            scale,
        })
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.area.x + (x - self.bounds.x_min) * self.scale,
            self.area.y + (self.bounds.y_max - y) * self.scale,
        )
    }

    pub fn to_data(&self, p: Point) -> (f64, f64) {
        (
            self.bounds.x_min + (p.x - self.area.x) / self.scale,
            self.bounds.y_max - (p.y - self.area.y) / self.scale,
        )
    }
}

/// Render one frame as an X/Y plot: title, grid, axis labels, a line with
/// markers per trajectory, and a legend.
///
/// Returns no commands when the viewport cannot hold a plot.
pub fn render_plot(
    frame: &Frame,
    bounds: Bounds,
    title: &str,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let Some(layout) = PlotLayout::new(bounds, viewport) else {
        return Vec::new();
    };
    let area = layout.area;

    let mut commands = Vec::with_capacity(128);

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, viewport.width, viewport.height),
        color: ThemeToken::Background,
        border_color: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: area,
        color: ThemeToken::PlotBackground,
        border_color: Some(ThemeToken::PlotBorder),
    });

    push_title(&mut commands, title, &area);
    push_grid(&mut commands, &layout);

    commands.push(RenderCommand::SetClip { rect: area });
    for line in &frame.lines {
        push_line(&mut commands, line, &layout);
    }
    commands.push(RenderCommand::ClearClip);

    push_legend(&mut commands, frame, &area);
    commands
}

fn push_title(commands: &mut Vec<RenderCommand>, title: &str, area: &Rect) {
    let lines: Vec<&str> = title.lines().collect();
    let line_height = TITLE_FONT_SIZE + 4.0;
    for (i, text) in lines.iter().enumerate() {
        let from_bottom = (lines.len() - 1 - i) as f64;
        commands.push(RenderCommand::DrawText {
            position: Point::new(
                area.x + area.w / 2.0,
                area.y - 10.0 - from_bottom * line_height,
            ),
            text: (*text).to_string(),
            color: ThemeToken::TitleText,
            font_size: TITLE_FONT_SIZE,
            align: TextAlign::Center,
        });
    }
}

fn push_grid(commands: &mut Vec<RenderCommand>, layout: &PlotLayout) {
    let area = layout.area;
    let b = layout.bounds;

    let (xs, x_step) = axis::ticks(b.x_min, b.x_max, area.w);
    for x in xs {
        let px = layout.to_screen(x, b.y_min).x;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(px, area.y),
            to: Point::new(px, area.bottom()),
            color: ThemeToken::GridLine,
            width: GRID_WIDTH,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(px, area.bottom() + 10.0),
            text: axis::format_tick(x, x_step),
            color: ThemeToken::AxisText,
            font_size: TICK_FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    let (ys, y_step) = axis::ticks(b.y_min, b.y_max, area.h);
    for y in ys {
        let py = layout.to_screen(b.x_min, y).y;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(area.x, py),
            to: Point::new(area.right(), py),
            color: ThemeToken::GridLine,
            width: GRID_WIDTH,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(area.x - 6.0, py),
            text: axis::format_tick(y, y_step),
            color: ThemeToken::AxisText,
            font_size: TICK_FONT_SIZE,
            align: TextAlign::Right,
        });
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(area.x + area.w / 2.0, area.bottom() + 28.0),
        text: "X".to_string(),
        color: ThemeToken::AxisText,
        font_size: LABEL_FONT_SIZE,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new((area.x - 50.0).max(8.0), area.y + area.h / 2.0),
        text: "Y".to_string(),
        color: ThemeToken::AxisText,
        font_size: LABEL_FONT_SIZE,
        align: TextAlign::Center,
    });
}

fn push_line(commands: &mut Vec<RenderCommand>, line: &FrameLine, layout: &PlotLayout) {
    let kind = line.kind;
    commands.push(RenderCommand::BeginGroup {
        id: kind.id().to_string(),
        label: Some(kind.label().to_string()),
    });

    // Non-finite samples break the line.
    let mut markers = Vec::new();
    let mut segment: Vec<Point> = Vec::new();
    for (x, y) in line.points() {
        if x.is_finite() && y.is_finite() {
            let p = layout.to_screen(x, y);
            segment.push(p);
            markers.push(p);
        } else {
            flush_segment(commands, &mut segment, line);
        }
    }
    flush_segment(commands, &mut segment, line);

    for center in markers {
        commands.push(RenderCommand::DrawMarker {
            center,
            shape: kind.marker(),
            size: MARKER_SIZE,
            color: kind.color(),
        });
    }

    commands.push(RenderCommand::EndGroup);
}

fn flush_segment(commands: &mut Vec<RenderCommand>, segment: &mut Vec<Point>, line: &FrameLine) {
    if segment.len() >= 2 {
        commands.push(RenderCommand::DrawPolyline {
            points: std::mem::take(segment),
            color: line.kind.color(),
            width: LINE_WIDTH,
        });
    } else {
        segment.clear();
    }
}

fn push_legend(commands: &mut Vec<RenderCommand>, frame: &Frame, area: &Rect) {
    if frame.lines.is_empty() {
        return;
    }
    let longest = frame
        .lines
        .iter()
        .map(|l| l.kind.label().chars().count())
        .max()
        .unwrap_or(0) as f64;
    let width = LEGEND_PADDING * 3.0
        + LEGEND_SAMPLE_WIDTH
        + longest * LEGEND_FONT_SIZE * CHAR_WIDTH_RATIO;
    let height = LEGEND_PADDING * 2.0 + LEGEND_ROW_HEIGHT * frame.lines.len() as f64;
    let x = area.right() - width - LEGEND_INSET;
    let y = area.y + LEGEND_INSET;

    commands.push(RenderCommand::BeginGroup {
        id: "legend".to_string(),
        label: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(x, y, width, height),
        color: ThemeToken::LegendBackground,
        border_color: Some(ThemeToken::LegendBorder),
    });

    for (i, line) in frame.lines.iter().enumerate() {
        let kind = line.kind;
        let cy = y + LEGEND_PADDING + LEGEND_ROW_HEIGHT * (i as f64 + 0.5);
        let sample_x = x + LEGEND_PADDING;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(sample_x, cy),
            to: Point::new(sample_x + LEGEND_SAMPLE_WIDTH, cy),
            color: kind.color(),
            width: LINE_WIDTH,
        });
        commands.push(RenderCommand::DrawMarker {
            center: Point::new(sample_x + LEGEND_SAMPLE_WIDTH / 2.0, cy),
            shape: kind.marker(),
            size: MARKER_SIZE,
            color: kind.color(),
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(sample_x + LEGEND_SAMPLE_WIDTH + LEGEND_PADDING, cy),
            text: kind.label().to_string(),
            color: ThemeToken::LegendText,
            font_size: LEGEND_FONT_SIZE,
            align: TextAlign::Left,
        });
    }
    commands.push(RenderCommand::EndGroup);
}
