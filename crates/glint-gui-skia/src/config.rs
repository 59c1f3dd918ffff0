use glint_gui_macros::WithBuilders;

/// Text settings for [`crate::SkiaBackend`]
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct SkiaConfig {
    /// Font size in pixels
    pub font_size: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
    /// Font family name; `None` uses the system sans-serif font
    pub font_family: Option<String>,
}

impl Default for SkiaConfig {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            line_height: 1.2,
            font_family: None,
        }
    }
}

impl SkiaConfig {
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}
