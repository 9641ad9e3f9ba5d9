//! Main application state and logic.
//!
//! Contains the `HeatbrushApp` struct which owns the paint session and
//! handles messages from background load/save workers. The session is
//! never shared across threads; workers receive cloned frames only.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use eframe::egui;

use heatbrush_algorithms::{Colormap, PaintSession};
use heatbrush_io::SnapshotWriter;

use crate::message::AppMessage;
use crate::state::{TaskState, UiState};
use crate::viewer::frame_to_color_image;
use crate::workers::{load_image_worker, save_snapshot_worker};

/// Main application state.
pub struct HeatbrushApp {
    /// Active paint session, once a base image is loaded.
    pub(crate) session: Option<PaintSession>,
    /// Currently loaded image path.
    pub(crate) selected_file: Option<PathBuf>,

    /// Sigma text field buffer (applied via the Update button).
    pub(crate) sigma_text: String,
    /// Increment text field buffer.
    pub(crate) increment_text: String,

    /// Current colormap selection.
    pub(crate) colormap: Colormap,
    /// Cached composite texture.
    pub(crate) texture: Option<egui::TextureHandle>,
    /// Current cursor info (x, y, weight).
    pub(crate) cursor_info: Option<(usize, usize, f32)>,

    /// Message receiver for background workers.
    pub(crate) rx: Receiver<AppMessage>,
    /// Message sender handed to background workers.
    pub(crate) tx: Sender<AppMessage>,

    /// Load/save progress and status line.
    pub(crate) tasks: TaskState,
    /// Panel visibility state.
    pub(crate) ui_state: UiState,

    /// Numbered snapshot writer targeting the working directory.
    pub(crate) writer: SnapshotWriter,
}

impl Default for HeatbrushApp {
    fn default() -> Self {
        let (tx, rx) = channel();
        let out_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            session: None,
            selected_file: None,
            sigma_text: heatbrush_core::brush::DEFAULT_SIGMA.to_string(),
            increment_text: heatbrush_core::brush::DEFAULT_INCREMENT.to_string(),
            colormap: Colormap::Jet,
            texture: None,
            cursor_info: None,
            rx,
            tx,
            tasks: TaskState::default(),
            ui_state: UiState::default(),
            writer: SnapshotWriter::new(out_dir),
        }
    }
}

impl HeatbrushApp {
    /// Decode a base image asynchronously.
    pub fn load_image(&mut self, path: PathBuf) {
        self.selected_file = Some(path.clone());
        self.tasks.is_loading = true;
        self.tasks.set_status(format!("Loading {}...", path.display()));
        self.session = None;
        self.texture = None;
        self.cursor_info = None;

        let tx = self.tx.clone();
        thread::spawn(move || load_image_worker(path, &tx));
    }

    /// Write the current composite to the next numbered snapshot file.
    pub fn request_save(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let frame = match session.composite(self.colormap) {
            Ok(frame) => frame,
            Err(e) => {
                self.tasks.set_status(format!("Error: {e}"));
                return;
            }
        };

        let path = self.writer.next_path();
        self.tasks.is_saving = true;
        self.tasks.set_status(format!("Saving {}...", path.display()));

        let tx = self.tx.clone();
        thread::spawn(move || save_snapshot_worker(path, &frame, &tx));
    }

    /// Apply one paint click at image pixel `(x, y)`.
    pub fn paint_at(&mut self, x: usize, y: usize) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.click(x, y) {
            Ok(()) => {
                self.texture = None;
                self.tasks
                    .set_status(format!("Painted at ({x}, {y}), {} undo steps", session.undo_depth()));
            }
            Err(e) => self.tasks.set_status(format!("Error: {e}")),
        }
    }

    /// Undo the most recent click.
    pub fn undo(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        if session.undo() {
            self.texture = None;
            self.tasks.set_status("Last action undone.");
        } else {
            self.tasks.set_status("No actions to undo.");
        }
    }

    /// Reset the weight field and the undo history.
    pub fn clear_overlay(&mut self) {
        if let Some(session) = &mut self.session {
            session.clear();
            self.texture = None;
            self.tasks.set_status("Overlay cleared.");
        }
    }

    /// Parse the sigma/increment text fields and apply them.
    ///
    /// Invalid text leaves the current parameters unchanged.
    pub fn apply_parameter_text(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session
            .params()
            .parse_fields(&self.sigma_text, &self.increment_text)
        {
            Ok(params) => {
                // Cannot fail: parse_fields already validated.
                if session.set_params(params).is_ok() {
                    self.tasks.set_status(format!(
                        "Updated sigma: {}, increment: {}",
                        params.sigma, params.increment
                    ));
                }
            }
            Err(e) => {
                log::warn!("parameter update rejected: {e}");
                self.tasks
                    .set_status("Please enter valid numbers for sigma and increment.");
            }
        }
    }

    /// Handle pending messages from background workers.
    pub fn handle_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::LoadComplete(frame, dur) => {
                    self.tasks.is_loading = false;
                    let (w, h) = (frame.width(), frame.height());
                    match PaintSession::new(*frame) {
                        Ok(session) => {
                            let params = session.params();
                            self.sigma_text = params.sigma.to_string();
                            self.increment_text = params.increment.to_string();
                            self.session = Some(session);
                            self.tasks.set_status(format!(
                                "Loaded {w}x{h} in {:.2}s, click the image to paint",
                                dur.as_secs_f64()
                            ));
                            self.ensure_texture(ctx);
                        }
                        Err(e) => self.tasks.set_status(format!("Error: {e}")),
                    }
                }
                AppMessage::LoadError(e) => {
                    self.tasks.is_loading = false;
                    self.tasks.set_status(format!("Error: {e}"));
                }
                AppMessage::SaveComplete(path, dur) => {
                    self.tasks.is_saving = false;
                    self.tasks.set_status(format!(
                        "Image saved as {} ({:.2}s)",
                        path.display(),
                        dur.as_secs_f64()
                    ));
                }
                AppMessage::SaveError(e) => {
                    self.tasks.is_saving = false;
                    self.tasks.set_status(format!("Error: {e}"));
                }
            }
        }
    }

    /// Regenerate the composite texture if it was invalidated.
    pub(crate) fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        let Some(session) = &self.session else {
            return;
        };
        match session.composite(self.colormap) {
            Ok(frame) => {
                let img = frame_to_color_image(&frame);
                self.texture =
                    Some(ctx.load_texture("composite", img, egui::TextureOptions::NEAREST));
            }
            Err(e) => self.tasks.set_status(format!("Error: {e}")),
        }
    }
}

impl eframe::App for HeatbrushApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_messages(ctx);
        self.ensure_texture(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);

        if self.tasks.is_busy() {
            ctx.request_repaint();
        }
    }
}
