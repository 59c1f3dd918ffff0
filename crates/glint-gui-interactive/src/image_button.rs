//! Image button component
//!
//! A framed button showing a picture scaled to fit inside its border. The
//! picture is tinted by a translucent overlay that depends on the
//! interaction state.

use crate::widget::{framed, Callback, Widget};
use glint_gui::{
    Appearance, AppearanceSet, Backend, Color, Corners, IVec2, Rect, Result, Surface, Theme,
    WidgetBase, WidgetKind,
};
use std::path::{Path, PathBuf};

const THICKNESS: i32 = 3;
/// Gap between the border and the overlay mask
const EXTERN_PADDING: i32 = 2;
/// Gap between the overlay mask and the picture
const INTERN_PADDING: i32 = 2;
const OUTER_RADIUS: f32 = 10.0;
const INNER_RADIUS: f32 = 8.0;
const MASK_RADIUS: f32 = 8.0;

/// Pictures loaded for image buttons treat pure white as transparent
const COLOR_KEY: Color = Color::WHITE;

fn overlay(appearance: Appearance) -> Option<Color> {
    match appearance {
        Appearance::Locked => Some(Color::rgba(10, 14, 17, 120)),
        Appearance::Down => Some(Color::WHITE.with_alpha(40)),
        Appearance::Hovered => Some(Color::WHITE.with_alpha(20)),
        Appearance::Classic => None,
    }
}

/// Largest size with the aspect ratio of `image` that fits in `max`
///
/// The dimension that overflows proportionally more is pinned to the
/// maximum and the other one follows.
pub fn fit_size(image: IVec2, max: IVec2) -> IVec2 {
    let image = image.as_vec2().max(glint_gui::Vec2::ONE);
    let max = max.as_vec2().max(glint_gui::Vec2::ONE);

    let (width, height) = if image.x / max.x > image.y / max.y {
        (max.x, image.y * max.x / image.x)
    } else {
        (image.x * max.y / image.y, max.y)
    };

    IVec2::new((width as i32).max(1), (height as i32).max(1))
}

/// A clickable button displaying an image
pub struct ImageButton<S> {
    base: WidgetBase,
    path: PathBuf,
    image_rect: Rect,
    on_click: Option<Callback>,
    appearances: Option<AppearanceSet<S>>,
}

impl<S> ImageButton<S> {
    pub const DEFAULT_SIZE: IVec2 = IVec2::new(50, 50);

    /// Create an image button showing the picture at `path`
    ///
    /// The picture is loaded when the button is added to a [`crate::Ui`].
    pub fn new(name: impl Into<String>, pos: impl Into<IVec2>, path: impl Into<PathBuf>) -> Self {
        Self {
            base: WidgetBase::new(
                WidgetKind::ImageButton,
                name,
                pos.into(),
                Self::DEFAULT_SIZE,
            ),
            path: path.into(),
            image_rect: Rect::default(),
            on_click: None,
            appearances: None,
        }
    }

    pub fn size(mut self, size: impl Into<IVec2>) -> Self {
        self.base.set_size(size.into());
        self
    }

    /// Set whether hovering highlights the button
    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.base.hoverable = hoverable;
        self
    }

    /// Set whether the button starts locked
    pub fn locked(mut self, locked: bool) -> Self {
        self.base.locked = locked;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the fitted picture sits, relative to the button's top-left
    pub fn image_rect(&self) -> Rect {
        self.image_rect
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }
}

impl<B: Backend> Widget<B> for ImageButton<B::Surface> {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_click_mut(&mut self) -> &mut Option<Callback> {
        &mut self.on_click
    }

    fn rebuild(&mut self, backend: &mut B, theme: &Theme) -> Result<()> {
        let mut source = backend.load_image(&self.path)?;
        source.set_color_key(COLOR_KEY);

        let size = self.base.size();
        let padding = THICKNESS + EXTERN_PADDING + INTERN_PADDING;
        let fitted = fit_size(source.size(), size - IVec2::splat(2 * padding));
        let picture = backend.scale_image(&source, fitted);
        self.image_rect = Rect::from_pos_size(size / 2 - fitted / 2, fitted);

        let mask_inset = THICKNESS + EXTERN_PADDING;
        let mask = Rect::from_size(size).inset(mask_inset);

        log::debug!(
            "{} loaded {} fitted to {}x{}",
            self.base.id(),
            self.path.display(),
            fitted.x,
            fitted.y
        );

        let image_pos = self.image_rect.pos;
        self.appearances = Some(AppearanceSet::build(|appearance| {
            let mut surface = framed(
                backend,
                size,
                theme.colors(appearance),
                THICKNESS,
                OUTER_RADIUS,
                INNER_RADIUS,
            );
            surface.blit(&picture, image_pos);
            if let Some(tint) = overlay(appearance) {
                surface.draw_rect(mask, tint, Corners::all(MASK_RADIUS));
            }
            surface
        }));
        Ok(())
    }

    fn render(&mut self, target: &mut B::Surface, _backend: &mut B, _theme: &Theme) {
        if let Some(appearances) = &self.appearances {
            target.blit(appearances.get(Appearance::of(&self.base)), self.base.pos());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_image_pins_width() {
        // 36x36 drawable area inside a 50x50 button
        assert_eq!(fit_size(IVec2::new(100, 50), IVec2::new(36, 36)), IVec2::new(36, 18));
    }

    #[test]
    fn test_fit_tall_image_pins_height() {
        assert_eq!(fit_size(IVec2::new(20, 80), IVec2::new(36, 36)), IVec2::new(9, 36));
    }

    #[test]
    fn test_fit_upscales_small_image() {
        assert_eq!(fit_size(IVec2::new(6, 6), IVec2::new(36, 36)), IVec2::new(36, 36));
    }
}
