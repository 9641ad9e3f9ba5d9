//! Central panel rendering: the composite image with click-to-paint.

use eframe::egui::{self, Margin, Vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

use super::theme::palette;
use crate::app::HeatbrushApp;
use crate::util::f64_to_usize_bounded;

impl HeatbrushApp {
    /// Render the central image view.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette::BG_DARK)
                    .inner_margin(Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                let Some((texture, width, height)) = self
                    .texture
                    .as_ref()
                    .zip(self.session.as_ref())
                    .map(|(tex, s)| (tex.clone(), s.width(), s.height()))
                else {
                    ui.centered_and_justified(|ui| {
                        let text = if self.tasks.is_loading {
                            "Loading..."
                        } else {
                            "No image. Use \"Open image\" to load one."
                        };
                        ui.label(
                            egui::RichText::new(text)
                                .size(14.0)
                                .color(palette::TEXT_DIM),
                        );
                    });
                    return;
                };

                #[allow(clippy::cast_precision_loss)]
                let (w, h) = (width as f64, height as f64);

                let response = Plot::new("paint_view")
                    .data_aspect(1.0)
                    .show_axes([false, false])
                    .show_grid(false)
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .allow_boxed_zoom(false)
                    .show_x(false)
                    .show_y(false)
                    .show(ui, |plot_ui| {
                        #[allow(clippy::cast_possible_truncation)]
                        plot_ui.image(PlotImage::new(
                            &texture,
                            PlotPoint::new(w / 2.0, h / 2.0),
                            Vec2::new(w as f32, h as f32),
                        ));
                        plot_ui.pointer_coordinate()
                    });

                // Plot y grows upward while pixel rows grow downward.
                let pixel = response.inner.and_then(|coord| {
                    let x = f64_to_usize_bounded(coord.x.floor(), width)?;
                    let row = f64_to_usize_bounded(coord.y.floor(), height)?;
                    Some((x, height - 1 - row))
                });

                self.cursor_info = pixel.and_then(|(x, y)| {
                    let session = self.session.as_ref()?;
                    session.field().get(x, y).map(|weight| (x, y, weight))
                });

                if response.response.clicked() {
                    if let Some((x, y)) = pixel {
                        self.paint_at(x, y);
                    }
                }
            });
    }
}
