//! Drawing surface abstraction.
//!
//! Widgets never rasterise anything themselves: they describe shapes through
//! [`Surface`] and ask the [`Backend`] for offscreen surfaces, decoded images
//! and rendered text. Backends like `glint-gui-skia` implement both traits.

use crate::color::Color;
use crate::error::Result;
use crate::primitives::{Corners, Rect, TextMetrics};
use glam::{IVec2, Vec2};
use std::path::Path;

/// A pixel buffer that can be drawn on and composited
///
/// Offscreen surfaces created by [`Backend::create_surface`] start fully
/// transparent. Every drawing call is clipped to the surface bounds.
pub trait Surface {
    /// Size of the surface in pixels
    fn size(&self) -> IVec2;

    /// Overwrite every pixel with `color`
    fn fill(&mut self, color: Color);

    /// Fill a rectangle, rounding each corner by its radius in `corners`
    fn draw_rect(&mut self, rect: Rect, color: Color, corners: Corners);

    /// Fill a circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroke a straight line of the given width
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Alpha-composite `source` with its top-left corner at `pos`
    fn blit(&mut self, source: &Self, pos: IVec2);

    /// Make every pixel exactly equal to `key` fully transparent
    fn set_color_key(&mut self, key: Color);
}

/// Factory for surfaces, images and text owned by one rendering backend
pub trait Backend {
    type Surface: Surface;

    /// Create a transparent offscreen surface
    fn create_surface(&mut self, size: IVec2) -> Self::Surface;

    /// Decode an image file into a surface at its native size
    ///
    /// Returns [`crate::Error::AssetLoad`] when the file cannot be read or
    /// decoded.
    fn load_image(&mut self, path: &Path) -> Result<Self::Surface>;

    /// Resample `image` to exactly `size`
    fn scale_image(&mut self, image: &Self::Surface, size: IVec2) -> Self::Surface;

    /// Measure a single line of text in the backend's font
    fn measure_text(&mut self, text: &str) -> TextMetrics;

    /// Render a single line of text onto a tightly sized transparent surface
    fn render_text(&mut self, text: &str, color: Color) -> (Self::Surface, TextMetrics);
}
