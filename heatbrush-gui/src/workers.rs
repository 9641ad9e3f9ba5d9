//! Background workers for image decode and snapshot encode.
//!
//! Each worker runs on a short-lived thread and reports back through an
//! [`AppMessage`]. Channel send failures mean the UI is gone, so they are
//! deliberately ignored.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::Instant;

use heatbrush_core::RgbFrame;
use heatbrush_io::{load_rgb_frame, write_jpeg};

use crate::message::AppMessage;

/// Decodes the base image in a background thread.
pub fn load_image_worker(path: PathBuf, tx: &Sender<AppMessage>) {
    let start = Instant::now();
    match load_rgb_frame(&path) {
        Ok(frame) => {
            log::info!(
                "loaded {} ({}x{})",
                path.display(),
                frame.width(),
                frame.height()
            );
            let _ = tx.send(AppMessage::LoadComplete(Box::new(frame), start.elapsed()));
        }
        Err(e) => {
            log::warn!("load failed for {}: {e}", path.display());
            let _ = tx.send(AppMessage::LoadError(e.to_string()));
        }
    }
}

/// Encodes a composite to its pre-claimed path in a background thread.
pub fn save_snapshot_worker(path: PathBuf, frame: &RgbFrame, tx: &Sender<AppMessage>) {
    let start = Instant::now();
    match write_jpeg(&path, frame) {
        Ok(()) => {
            log::info!("saved {}", path.display());
            let _ = tx.send(AppMessage::SaveComplete(path, start.elapsed()));
        }
        Err(e) => {
            log::warn!("save failed for {}: {e}", path.display());
            let _ = tx.send(AppMessage::SaveError(e.to_string()));
        }
    }
}
