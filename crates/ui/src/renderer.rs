use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Shape, Stroke, StrokeKind};
use trajview_protocol::{Point, RenderCommand, TextAlign};

use crate::theme::{self, ThemeMode};

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area; command
/// coordinates are relative to it.
pub fn render_commands(
    painter: &mut egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) {
    let to_pos = |p: &Point| Pos2::new(p.x as f32 + offset.x, p.y as f32 + offset.y);
    let mut clip_stack: Vec<Rect> = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
            } => {
                let min = to_pos(&Point::new(rect.x, rect.y));
                let egui_rect =
                    Rect::from_min_size(min, egui::vec2(rect.w as f32, rect.h as f32));
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }
                painter.rect_filled(egui_rect, CornerRadius::ZERO, theme::resolve(*color, mode));
                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        CornerRadius::ZERO,
                        Stroke::new(1.0, theme::resolve(*bc, mode)),
                        StrokeKind::Inside,
                    );
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let size = *font_size as f32;
                if size < 1.0 {
                    continue;
                }
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };
                painter.text(
                    to_pos(position),
                    anchor,
                    text,
                    FontId::proportional(size),
                    theme::resolve(*color, mode),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [to_pos(from), to_pos(to)],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::DrawPolyline {
                points,
                color,
                width,
            } => {
                if points.len() < 2 {
                    continue;
                }
                painter.add(Shape::line(
                    points.iter().map(to_pos).collect(),
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                ));
            }

            RenderCommand::DrawMarker {
                center,
                shape,
                size,
                color,
            } => {
                let c = to_pos(center);
                let half = (*size / 2.0) as f32;
                let marker_rect = Rect::from_center_size(c, egui::vec2(2.0 * half, 2.0 * half));
                // Cull off-screen
                if !painter.clip_rect().intersects(marker_rect) {
                    continue;
                }
                let outline: Vec<Pos2> = shape
                    .unit_outline()
                    .iter()
                    .map(|&(x, y)| Pos2::new(c.x + x as f32 * half, c.y + y as f32 * half))
                    .collect();
                painter.add(Shape::convex_polygon(
                    outline,
                    theme::resolve(*color, mode),
                    Stroke::NONE,
                ));
            }

            RenderCommand::SetClip { rect } => {
                let min = to_pos(&Point::new(rect.x, rect.y));
                let clip_rect = Rect::from_min_size(min, egui::vec2(rect.w as f32, rect.h as f32));
                clip_stack.push(painter.clip_rect());
                let intersected = painter.clip_rect().intersect(clip_rect);
                painter.set_clip_rect(intersected);
            }

            RenderCommand::ClearClip => {
                if let Some(prev) = clip_stack.pop() {
                    painter.set_clip_rect(prev);
                }
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups are semantic — no visual effect in egui
            }
        }
    }
}
