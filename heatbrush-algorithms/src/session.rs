//! The paint session: one owner for base frame, weight field, history,
//! and brush parameters.
//!
//! Exactly one loop owns a `PaintSession` at a time; background work only
//! ever receives cloned frames. This replaces the shared-mutable-globals
//! arrangement a naive port would have with single ownership.

use heatbrush_core::{BrushParams, HistoryStack, Result, RgbFrame, WeightField};

use crate::colormap::Colormap;
use crate::compose::composite;
use crate::splat::apply_click;

/// An interactive painting session over one base image.
#[derive(Debug, Clone)]
pub struct PaintSession {
    base: RgbFrame,
    field: WeightField,
    history: HistoryStack,
    params: BrushParams,
}

impl PaintSession {
    /// Starts a session with an all-zero weight field over `base`.
    ///
    /// # Errors
    /// Propagates the field-construction error for degenerate frames
    /// (unreachable for frames built through [`RgbFrame`] constructors).
    pub fn new(base: RgbFrame) -> Result<Self> {
        let field = WeightField::new(base.width(), base.height())?;
        Ok(Self {
            base,
            field,
            history: HistoryStack::new(),
            params: BrushParams::default(),
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.base.width()
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.base.height()
    }

    /// The base frame.
    #[must_use]
    pub fn base(&self) -> &RgbFrame {
        &self.base
    }

    /// The accumulated weight field.
    #[must_use]
    pub fn field(&self) -> &WeightField {
        &self.field
    }

    /// Current brush parameters.
    #[must_use]
    pub fn params(&self) -> BrushParams {
        self.params
    }

    /// Replaces the brush parameters after validation.
    ///
    /// # Errors
    /// Returns the validation error; current parameters stay in effect.
    pub fn set_params(&mut self, params: BrushParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Number of undoable steps.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Applies one paint click at pixel `(x, y)`.
    ///
    /// A snapshot is pushed onto the history only if the click succeeds.
    ///
    /// # Errors
    /// Returns [`heatbrush_core::Error::OutOfBounds`] for clicks outside
    /// the image; the field and history are untouched on error.
    pub fn click(&mut self, x: usize, y: usize) -> Result<()> {
        let snapshot = self.field.clone();
        apply_click(&mut self.field, x, y, &self.params)?;
        self.history.push(snapshot);
        Ok(())
    }

    /// Restores the field to the state before the last click.
    ///
    /// Returns false (a no-op) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.field = snapshot;
                true
            }
            None => false,
        }
    }

    /// Resets the field to zero and drops the history.
    pub fn clear(&mut self) {
        self.field.fill_zero();
        self.history.clear();
    }

    /// Renders the current composite through the given palette.
    ///
    /// # Errors
    /// Dimension mismatches cannot occur for a session-owned pair; the
    /// `Result` only propagates the shared compositing signature.
    pub fn composite(&self, colormap: Colormap) -> Result<RgbFrame> {
        composite(&self.base, &self.field, colormap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatbrush_core::Error;

    fn session_16x16() -> PaintSession {
        let base = RgbFrame::new(16, 16).unwrap();
        let mut session = PaintSession::new(base).unwrap();
        session
            .set_params(BrushParams {
                sigma: 1.5,
                increment: 0.4,
                radius: 3,
            })
            .unwrap();
        session
    }

    #[test]
    fn test_click_then_undo_restores_zero() {
        let mut session = session_16x16();
        session.click(8, 8).unwrap();
        assert!(session.field().max_value() > 0.0);
        assert_eq!(session.undo_depth(), 1);

        assert!(session.undo());
        assert_eq!(session.field().max_value(), 0.0);
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut session = session_16x16();
        assert!(!session.undo());
        assert_eq!(session.field().max_value(), 0.0);
    }

    #[test]
    fn test_failed_click_pushes_no_history() {
        let mut session = session_16x16();
        let err = session.click(99, 0).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_set_params_rejects_invalid_and_keeps_current() {
        let mut session = session_16x16();
        let before = session.params();
        let result = session.set_params(BrushParams {
            sigma: -1.0,
            increment: 0.1,
            radius: 15,
        });
        assert!(result.is_err());
        assert_eq!(session.params(), before);
    }

    #[test]
    fn test_clear_resets_field_and_history() {
        let mut session = session_16x16();
        session.click(4, 4).unwrap();
        session.click(10, 10).unwrap();
        session.clear();
        assert_eq!(session.field().max_value(), 0.0);
        assert!(!session.undo());
    }

    #[test]
    fn test_composite_has_image_dimensions() {
        let mut session = session_16x16();
        session.click(8, 8).unwrap();
        let frame = session.composite(Colormap::Jet).unwrap();
        assert_eq!(frame.width(), 16);
        assert_eq!(frame.height(), 16);
    }
}
