//! Control panel (left sidebar) rendering.

use eframe::egui::{self, Margin};
use rfd::FileDialog;

use heatbrush_algorithms::Colormap;

use super::theme::{accent, form_label, palette, primary_button, section_header, stat_label, stat_value};
use crate::app::HeatbrushApp;

impl HeatbrushApp {
    /// Render the left control panel.
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("ctrl")
            .default_width(250.0)
            .frame(
                egui::Frame::none()
                    .fill(palette::BG_PANEL)
                    .inner_margin(Margin::symmetric(14.0, 12.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_file_section(ui);
                        ui.add_space(14.0);
                        self.render_brush_section(ui);
                        ui.add_space(14.0);
                        self.render_view_section(ui);
                        ui.add_space(14.0);
                        self.render_actions_section(ui);
                        ui.add_space(14.0);
                        self.render_help_section(ui);
                        ui.add_space(10.0);
                        self.render_status(ui);
                    });
            });
    }

    fn render_file_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Image"));
        ui.separator();

        let name = self.selected_file.as_ref().map_or_else(
            || "No image loaded".to_string(),
            |p| p.file_name().unwrap_or_default().to_string_lossy().to_string(),
        );
        ui.label(stat_value(&name));

        if let Some(session) = &self.session {
            ui.horizontal(|ui| {
                ui.label(stat_label("Size"));
                ui.label(stat_value(&format!(
                    "{}x{}",
                    session.width(),
                    session.height()
                )));
            });
        }

        let can_open = !self.tasks.is_loading;
        if ui
            .add_enabled(can_open, egui::Button::new("Open image…"))
            .clicked()
        {
            if let Some(path) = FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                .pick_file()
            {
                self.load_image(path);
            }
        }
    }

    fn render_brush_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Brush"));
        ui.separator();

        ui.label(form_label("Sigma"));
        ui.add(egui::TextEdit::singleline(&mut self.sigma_text).desired_width(f32::INFINITY));

        ui.add_space(4.0);
        ui.label(form_label("Increment value"));
        ui.add(egui::TextEdit::singleline(&mut self.increment_text).desired_width(f32::INFINITY));

        ui.add_space(6.0);
        let has_session = self.session.is_some();
        if ui
            .add_enabled(has_session, egui::Button::new("Update parameters"))
            .clicked()
        {
            self.apply_parameter_text();
        }

        if let Some(session) = &self.session {
            let params = session.params();
            ui.horizontal(|ui| {
                ui.label(stat_label("Active"));
                ui.label(stat_value(&format!(
                    "sigma {} / inc {} / r {}",
                    params.sigma, params.increment, params.radius
                )));
            });
        }
    }

    fn render_view_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("View"));
        ui.separator();

        ui.label(form_label("Colormap"));
        egui::ComboBox::from_id_salt("colormap_select")
            .selected_text(self.colormap.to_string())
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                for cmap in Colormap::ALL {
                    if ui
                        .selectable_value(&mut self.colormap, cmap, cmap.to_string())
                        .clicked()
                    {
                        self.texture = None;
                    }
                }
            });
    }

    fn render_actions_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Actions"));
        ui.separator();

        let has_session = self.session.is_some();
        let can_save = has_session && !self.tasks.is_saving;

        if ui
            .add_enabled(
                can_save,
                primary_button("Save image").min_size(egui::vec2(ui.available_width(), 0.0)),
            )
            .clicked()
        {
            self.request_save();
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(has_session, egui::Button::new("Undo")).clicked() {
                self.undo();
            }
            if ui
                .add_enabled(has_session, egui::Button::new("Clear"))
                .clicked()
            {
                self.clear_overlay();
            }
        });

        if let Some(session) = &self.session {
            ui.horizontal(|ui| {
                ui.label(stat_label("Undo steps"));
                ui.label(stat_value(&session.undo_depth().to_string()));
            });
            ui.horizontal(|ui| {
                ui.label(stat_label("Next file"));
                ui.label(stat_value(
                    &self
                        .writer
                        .peek_path()
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy(),
                ));
            });
        }
    }

    fn render_help_section(&mut self, ui: &mut egui::Ui) {
        let header = egui::CollapsingHeader::new(section_header("Usage"))
            .default_open(self.ui_state.show_help);
        header.show(ui, |ui| {
            ui.label(stat_label("Click the image to add a heat spot."));
            ui.label(stat_label("Sigma: Gaussian blur radius."));
            ui.label(stat_label("Increment: weight added per click."));
            ui.label(stat_label("Esc closes the window."));
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.separator();
        let color = if self.tasks.is_busy() {
            accent::BLUE
        } else if self.tasks.status_text.starts_with("Error") {
            accent::RED
        } else {
            accent::GREEN
        };
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("●").size(11.0).color(color));
            ui.label(
                egui::RichText::new(&self.tasks.status_text)
                    .size(11.0)
                    .color(palette::TEXT_MUTED),
            );
        });

        if let Some((x, y, w)) = self.cursor_info {
            ui.label(
                egui::RichText::new(format!("Cursor: ({x}, {y}) weight {w:.3}"))
                    .size(11.0)
                    .color(palette::TEXT_DIM),
            );
        } else {
            ui.label(
                egui::RichText::new("Cursor: -")
                    .size(11.0)
                    .color(palette::TEXT_DIM),
            );
        }
    }
}
