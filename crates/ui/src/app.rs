use std::path::Path;

use eframe::egui;
use tracing::{info, warn};
use trajview_core::model::{RunLogs, TrajectoryViewer};
use trajview_core::views::{PlotLayout, render_plot};
use trajview_protocol::{Point, RenderCommand, ThemeToken, Viewport};

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Main application state.
pub struct TrajViewApp {
    viewer: TrajectoryViewer,
    theme_mode: ThemeMode,
    /// Cached render commands for the current frame.
    commands: Vec<RenderCommand>,
    /// Canvas size `commands` was built for; `None` when stale.
    commands_size: Option<egui::Vec2>,
    layout: Option<PlotLayout>,
    /// Data coordinates under the pointer.
    hover: Option<(f64, f64)>,
    /// Error message to display.
    error: Option<String>,
}

impl TrajViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, viewer: TrajectoryViewer) -> Self {
        let theme_mode = ThemeMode::Dark;
        cc.egui_ctx.set_visuals(theme_mode.visuals());

        Self {
            viewer,
            theme_mode,
            commands: Vec::new(),
            commands_size: None,
            layout: None,
            hover: None,
            error: None,
        }
    }

    fn set_time_index(&mut self, index: usize) {
        match self.viewer.update(index) {
            Ok(_) => self.invalidate_commands(),
            Err(e) => {
                warn!(%e, "ignoring time index");
                self.error = Some(e.to_string());
            }
        }
    }

    fn step(&mut self, delta: isize) {
        self.viewer.step(delta);
        self.invalidate_commands();
    }

    /// Replace the current run. On failure the current run stays loaded.
    fn open_run(&mut self, directory: &Path) {
        let loaded = RunLogs::load(directory)
            .map_err(|e| e.to_string())
            .and_then(|run| TrajectoryViewer::new(run).map_err(|e| e.to_string()));
        match loaded {
            Ok(viewer) => {
                info!(run = %directory.display(), "switched run");
                self.viewer = viewer;
                self.error = None;
                self.invalidate_commands();
            }
            Err(e) => {
                warn!(run = %directory.display(), error = %e, "failed to open run");
                self.error = Some(format!("Failed to open {}: {e}", directory.display()));
            }
        }
    }

    fn invalidate_commands(&mut self) {
        self.commands_size = None;
    }

    fn ensure_commands(&mut self, size: egui::Vec2) {
        if self.commands_size == Some(size) {
            return;
        }
        let viewport = Viewport::sized(size.x as f64, size.y as f64);
        self.layout = PlotLayout::new(self.viewer.bounds(), &viewport);
        self.commands = render_plot(
            self.viewer.frame(),
            self.viewer.bounds(),
            &self.viewer.title(),
            &viewport,
        );
        self.commands_size = Some(size);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // The focused slider handles arrows itself.
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let (delta, home, end) = ctx.input(|i| {
            let mut delta = 0isize;
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                delta -= 1;
            }
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                delta += 1;
            }
            (
                delta,
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::End),
            )
        });

        if home {
            self.set_time_index(0);
        } else if end {
            self.set_time_index(self.viewer.last_index());
        } else if delta != 0 {
            self.step(delta);
        }
    }
}

impl eframe::App for TrajViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("trajview");
                ui.separator();
                ui.label(self.viewer.run().name());
                ui.separator();

                if ui.button("📂 Open run…").clicked()
                    && let Some(dir) = rfd::FileDialog::new()
                        .set_directory(
                            self.viewer
                                .run()
                                .directory()
                                .parent()
                                .unwrap_or(self.viewer.run().directory()),
                        )
                        .pick_folder()
                {
                    self.open_run(&dir);
                }

                ui.separator();

                let theme_label = match self.theme_mode {
                    ThemeMode::Dark => "🌙 Dark",
                    ThemeMode::Light => "☀ Light",
                };
                if ui.button(theme_label).clicked() {
                    self.theme_mode = self.theme_mode.toggled();
                    ctx.set_visuals(self.theme_mode.visuals());
                }
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                    return;
                }
                let mut status = format!(
                    "Step {} / {}",
                    self.viewer.time_index(),
                    self.viewer.last_index()
                );
                if let Some(t) = self.viewer.current_time() {
                    status.push_str(&format!(" | t = {t}"));
                }
                if let Some((x, y)) = self.hover {
                    status.push_str(&format!(" | x = {x:.3}, y = {y:.3}"));
                }
                ui.label(status);
            });
        });

        // Time slider
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(100.0);
                let mut index = self.viewer.time_index();
                let last = self.viewer.last_index();
                let response = ui.add(egui::Slider::new(&mut index, 0..=last).text("Time"));
                if response.changed() {
                    self.set_time_index(index);
                }
            });
            ui.add_space(4.0);
        });

        // Central panel: the plot
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(available, egui::Sense::hover());
            self.ensure_commands(available.size());

            let mut painter = ui.painter_at(available);
            painter.rect_filled(
                available,
                egui::CornerRadius::ZERO,
                theme::resolve(ThemeToken::Background, self.theme_mode),
            );
            renderer::render_commands(&mut painter, &self.commands, available.min, self.theme_mode);

            self.hover = response.hover_pos().and_then(|pos| {
                let layout = self.layout?;
                let local = Point::new(
                    (pos.x - available.min.x) as f64,
                    (pos.y - available.min.y) as f64,
                );
                layout.area.contains(local).then(|| layout.to_data(local))
            });
        });
    }
}
