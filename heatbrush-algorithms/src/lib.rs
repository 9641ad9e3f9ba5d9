//! heatbrush-algorithms: the array operations behind the heat overlay.
//!
//! Disc rasterization, separable Gaussian blur, colormapping, and the
//! 50/50 composite over the base frame, plus [`PaintSession`] which ties
//! them into the click/undo/render loop.

pub mod blur;
pub mod colormap;
pub mod compose;
pub mod session;
pub mod splat;
pub(crate) mod util;

pub use blur::{gaussian_blur, gaussian_kernel};
pub use colormap::Colormap;
pub use compose::composite;
pub use session::PaintSession;
pub use splat::{apply_click, click_contribution, fill_disc};
