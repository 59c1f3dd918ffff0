//! Static text label

use crate::widget::{Callback, Widget};
use glint_gui::{Backend, Color, IVec2, Rect, Result, Surface, Theme, WidgetBase, WidgetKind};

/// A single line of text, optionally centred on its position
///
/// The size always follows the measured text. Labels never capture focus, so
/// they do not block clicks on widgets underneath.
pub struct Text<S> {
    base: WidgetBase,
    text: String,
    color: Color,
    center_x: bool,
    center_y: bool,
    on_click: Option<Callback>,
    rendered: Option<S>,
}

impl<S> Text<S> {
    pub fn new(name: impl Into<String>, pos: impl Into<IVec2>) -> Self {
        let mut base = WidgetBase::new(WidgetKind::Text, name, pos.into(), IVec2::ZERO);
        base.focusable = false;

        Self {
            base,
            text: "Text".to_string(),
            color: Color::WHITE,
            center_x: false,
            center_y: false,
            on_click: None,
            rendered: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Centre the label on its position along each axis
    pub fn centered(mut self, x: bool, y: bool) -> Self {
        self.center_x = x;
        self.center_y = y;
        self
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_content(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl<B: Backend> Widget<B> for Text<B::Surface> {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_click_mut(&mut self) -> &mut Option<Callback> {
        &mut self.on_click
    }

    fn rebuild(&mut self, backend: &mut B, _theme: &Theme) -> Result<()> {
        let (rendered, metrics) = backend.render_text(&self.text, self.color);
        self.base.set_size(metrics.size());
        self.rendered = Some(rendered);
        Ok(())
    }

    fn bounds(&self) -> Rect {
        let mut rect = self.base.rect();
        if self.center_x {
            rect.pos.x -= rect.size.x / 2;
        }
        if self.center_y {
            rect.pos.y -= rect.size.y / 2;
        }
        rect
    }

    fn render(&mut self, target: &mut B::Surface, _backend: &mut B, _theme: &Theme) {
        let pos = Widget::<B>::bounds(self).pos;
        if let Some(rendered) = &self.rendered {
            target.blit(rendered, pos);
        }
    }
}
