//! tiny-skia backed drawing surface

use glint_gui::{Color, Corners, Error, IVec2, Rect, Result, Surface, Vec2};
use std::path::Path;
use tiny_skia::{
    FillRule, IntSize, Paint, Path as SkPath, PathBuilder, Pixmap, PixmapPaint,
    PremultipliedColorU8, Stroke, Transform,
};

/// Cubic bezier control distance approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// An RGBA canvas
///
/// A zero-area canvas has no pixmap; drawing on it or blitting it is a no-op.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: IVec2,
    pixmap: Option<Pixmap>,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(size: IVec2) -> Self {
        let pixmap = if size.x > 0 && size.y > 0 {
            Pixmap::new(size.x as u32, size.y as u32)
        } else {
            None
        };
        Self { size, pixmap }
    }

    /// Wrap an existing pixmap
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            size: IVec2::new(pixmap.width() as i32, pixmap.height() as i32),
            pixmap: Some(pixmap),
        }
    }

    /// Build a canvas from straight (non-premultiplied) RGBA8 pixels
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        let mut data = pixels;
        premultiply(&mut data);
        Pixmap::from_vec(data, size).map(Self::from_pixmap)
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Premultiplied RGBA8 pixel data, empty for a zero-area canvas
    pub fn data(&self) -> &[u8] {
        self.pixmap.as_ref().map_or(&[][..], Pixmap::data)
    }

    /// Straight-alpha color of one pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let pixel = self.pixmap.as_ref()?.pixel(x as u32, y as u32)?;
        let c = pixel.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let pixmap = self
            .pixmap
            .as_ref()
            .ok_or_else(|| Error::asset(path, "cannot save an empty canvas"))?;
        pixmap.save_png(path).map_err(|err| Error::asset(path, err))
    }

    pub(crate) fn pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        self.pixmap.as_mut()
    }
}

impl Surface for Canvas {
    fn size(&self) -> IVec2 {
        self.size
    }

    fn fill(&mut self, color: Color) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(skia_color(color));
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, corners: Corners) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(path) = rounded_rect(rect, corners.clamped_to(&rect)) else {
            return;
        };
        pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    fn blit(&mut self, source: &Self, pos: IVec2) {
        let (Some(pixmap), Some(source)) = (self.pixmap.as_mut(), source.pixmap.as_ref()) else {
            return;
        };
        pixmap.draw_pixmap(
            pos.x,
            pos.y,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn set_color_key(&mut self, key: Color) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        for pixel in pixmap.pixels_mut() {
            let c = pixel.demultiply();
            if (c.red(), c.green(), c.blue(), c.alpha()) == (key.r, key.g, key.b, key.a) {
                *pixel = PremultipliedColorU8::TRANSPARENT;
            }
        }
    }
}

pub(crate) fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

/// Convert straight RGBA8 pixels to premultiplied in place
pub(crate) fn premultiply(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        for channel in &mut px[..3] {
            *channel = ((*channel as u16 * a + 127) / 255) as u8;
        }
    }
}

fn rounded_rect(rect: Rect, corners: Corners) -> Option<SkPath> {
    let x = rect.x() as f32;
    let y = rect.y() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;

    if corners.is_sharp() {
        return tiny_skia::Rect::from_xywh(x, y, w, h).map(PathBuilder::from_rect);
    }

    let Corners {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = corners;
    let (r, b) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + tl, y);
    pb.line_to(r - tr, y);
    pb.cubic_to(r - tr + tr * KAPPA, y, r, y + tr - tr * KAPPA, r, y + tr);
    pb.line_to(r, b - br);
    pb.cubic_to(r, b - br + br * KAPPA, r - br + br * KAPPA, b, r - br, b);
    pb.line_to(x + bl, b);
    pb.cubic_to(x + bl - bl * KAPPA, b, x, b - bl + bl * KAPPA, x, b - bl);
    pb.line_to(x, y + tl);
    pb.cubic_to(x, y + tl - tl * KAPPA, x + tl - tl * KAPPA, y, x + tl, y);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(IVec2::new(4, 3));
        assert_eq!(canvas.data().len(), 4 * 3 * 4);
        assert!(canvas.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_area_canvas_ignores_drawing() {
        let mut canvas = Canvas::new(IVec2::new(0, 10));
        canvas.fill(Color::WHITE);
        canvas.draw_rect(Rect::new(0, 0, 5, 5), Color::WHITE, Corners::ZERO);
        assert!(canvas.data().is_empty());
        assert_eq!(canvas.size(), IVec2::new(0, 10));
    }

    #[test]
    fn test_sharp_rect_fills_exact_pixels() {
        let mut canvas = Canvas::new(IVec2::new(10, 10));
        let red = Color::rgb(255, 0, 0);
        canvas.draw_rect(Rect::new(2, 2, 4, 4), red, Corners::ZERO);

        assert_eq!(canvas.pixel(2, 2), Some(red));
        assert_eq!(canvas.pixel(5, 5), Some(red));
        assert_eq!(canvas.pixel(6, 6), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(1, 1), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_rounded_rect_leaves_corners_clear() {
        let mut canvas = Canvas::new(IVec2::new(40, 40));
        canvas.draw_rect(Rect::new(0, 0, 40, 40), Color::WHITE, Corners::all(10.0));

        assert_eq!(canvas.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(20, 20), Some(Color::WHITE));
        assert_eq!(canvas.pixel(20, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_circle_covers_center() {
        let mut canvas = Canvas::new(IVec2::new(20, 20));
        let green = Color::rgb(0, 255, 0);
        canvas.draw_circle(Vec2::new(10.0, 10.0), 5.0, green);

        assert_eq!(canvas.pixel(10, 10), Some(green));
        assert_eq!(canvas.pixel(1, 1), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_blit_composites_at_offset() {
        let mut target = Canvas::new(IVec2::new(10, 10));
        target.fill(Color::BLACK);
        let mut source = Canvas::new(IVec2::new(2, 2));
        source.fill(Color::WHITE);

        target.blit(&source, IVec2::new(3, 4));

        assert_eq!(target.pixel(3, 4), Some(Color::WHITE));
        assert_eq!(target.pixel(4, 5), Some(Color::WHITE));
        assert_eq!(target.pixel(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn test_color_key_clears_matching_pixels() {
        let mut canvas = Canvas::new(IVec2::new(4, 1));
        canvas.fill(Color::WHITE);
        canvas.draw_rect(Rect::new(0, 0, 2, 1), Color::BLACK, Corners::ZERO);

        canvas.set_color_key(Color::WHITE);

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(3, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_from_rgba_premultiplies() {
        let canvas = Canvas::from_rgba(vec![255, 0, 0, 128], 1, 1).unwrap();
        assert_eq!(canvas.data(), &[128, 0, 0, 128]);
        assert!(Canvas::from_rgba(vec![], 0, 0).is_none());
    }
}
