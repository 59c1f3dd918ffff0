//! [`Backend`] implementation on tiny-skia, `image` and `cosmic-text`

use crate::canvas::Canvas;
use crate::config::SkiaConfig;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};
use glint_gui::{Backend, Color, Error, IVec2, Result, Surface, TextMetrics};
use std::path::Path;
use tiny_skia::{FilterQuality, Paint, PixmapPaint, Transform};

/// Software rendering backend
///
/// Owns the font database and glyph cache. Loading system fonts takes a
/// moment, so create one backend and keep it for the lifetime of the UI.
pub struct SkiaBackend {
    config: SkiaConfig,
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl SkiaBackend {
    pub fn new(config: SkiaConfig) -> Self {
        let font_system = FontSystem::new();
        log::debug!(
            "loaded {} font faces, font size {}",
            font_system.db().len(),
            config.font_size
        );

        Self {
            config,
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    pub fn config(&self) -> &SkiaConfig {
        &self.config
    }

    /// Shape a single line of text into a fresh buffer
    fn shape(&mut self, text: &str) -> Buffer {
        let metrics = Metrics::new(self.config.font_size, self.config.line_height_px());
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let attrs = match &self.config.font_family {
            Some(family) => Attrs::new().family(Family::Name(family)),
            None => Attrs::new().family(Family::SansSerif),
        };

        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    fn buffer_metrics(&self, buffer: &Buffer) -> TextMetrics {
        let width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max);
        let lines = buffer.layout_runs().count().max(1);
        let height = lines as f32 * buffer.metrics().line_height;
        TextMetrics::new(width.ceil() as i32, height.ceil() as i32)
    }
}

impl Default for SkiaBackend {
    fn default() -> Self {
        Self::new(SkiaConfig::default())
    }
}

impl Backend for SkiaBackend {
    type Surface = Canvas;

    fn create_surface(&mut self, size: IVec2) -> Canvas {
        Canvas::new(size)
    }

    fn load_image(&mut self, path: &Path) -> Result<Canvas> {
        let image = image::open(path)
            .map_err(|err| Error::asset(path, err))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        log::debug!("decoded {} ({width}x{height})", path.display());

        Canvas::from_rgba(image.into_raw(), width, height)
            .ok_or_else(|| Error::asset(path, "image has no pixels"))
    }

    fn scale_image(&mut self, image: &Canvas, size: IVec2) -> Canvas {
        let mut scaled = Canvas::new(size);
        let source_size = image.size();
        let (Some(source), Some(target)) = (image.pixmap(), scaled.pixmap_mut()) else {
            return scaled;
        };

        let transform = Transform::from_scale(
            size.x as f32 / source_size.x as f32,
            size.y as f32 / source_size.y as f32,
        );
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        target.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
        scaled
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let buffer = self.shape(text);
        self.buffer_metrics(&buffer)
    }

    fn render_text(&mut self, text: &str, color: Color) -> (Canvas, TextMetrics) {
        let buffer = self.shape(text);
        let metrics = self.buffer_metrics(&buffer);
        let mut canvas = Canvas::new(metrics.size());

        if let Some(pixmap) = canvas.pixmap_mut() {
            let text_color = cosmic_text::Color::rgba(color.r, color.g, color.b, color.a);
            let mut paint = Paint::default();
            buffer.draw(
                &mut self.font_system,
                &mut self.swash_cache,
                text_color,
                |x, y, w, h, glyph| {
                    let Some(rect) =
                        tiny_skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32)
                    else {
                        return;
                    };
                    paint.set_color_rgba8(glyph.r(), glyph.g(), glyph.b(), glyph.a());
                    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                },
            );
        }

        log::trace!("rendered {text:?} at {}x{}", metrics.width, metrics.height);
        (canvas, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_png(name: &str, image: &image::RgbaImage) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("glint-gui-skia-{name}.png"));
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_missing_image_is_asset_error() {
        let mut backend = SkiaBackend::default();
        let err = backend
            .load_image(Path::new("definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, Error::AssetLoad { .. }));
    }

    #[test]
    fn test_load_and_scale_image() {
        let red = image::Rgba([255, 0, 0, 255]);
        let path = temp_png("red", &image::RgbaImage::from_pixel(4, 2, red));
        let mut backend = SkiaBackend::default();

        let loaded = backend.load_image(&path).unwrap();
        assert_eq!(loaded.size(), IVec2::new(4, 2));
        assert_eq!(loaded.pixel(3, 1), Some(Color::rgb(255, 0, 0)));

        let scaled = backend.scale_image(&loaded, IVec2::new(8, 4));
        assert_eq!(scaled.size(), IVec2::new(8, 4));
        assert_eq!(scaled.pixel(4, 2), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_text_height_follows_line_height() {
        let config = SkiaConfig::default()
            .with_font_size(10.0)
            .with_line_height(2.0);
        let mut backend = SkiaBackend::new(config);
        let metrics = backend.measure_text("");
        assert_eq!(metrics.height, 20);

        let (canvas, rendered) = backend.render_text("", Color::WHITE);
        assert_eq!(rendered, metrics);
        assert_eq!(canvas.size(), metrics.size());
    }
}
