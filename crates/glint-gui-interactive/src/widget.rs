//! The interface every registry-managed widget implements

use glint_gui::{
    Backend, Corners, IVec2, PointerState, Rect, Result, StateColors, Surface, Theme, WidgetBase,
};

/// Callback fired on a confirmed click
pub type Callback = Box<dyn FnMut()>;

/// Per-tick behaviour of a widget kind
///
/// The [`crate::Ui`] drives each widget through, in order: interaction
/// resolution on the [`WidgetBase`], [`Widget::dispatch_click`] when a click
/// completed, [`Widget::tick`], then [`Widget::render`].
///
/// Only [`crate::Ui`] mutates a widget's [`WidgetBase`].
pub(crate) trait Widget<B: Backend> {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    fn on_click_mut(&mut self) -> &mut Option<Callback>;

    /// Regenerate cached bitmaps after a geometry or content change
    fn rebuild(&mut self, backend: &mut B, theme: &Theme) -> Result<()>;

    /// Area touched by [`Widget::render`]
    fn bounds(&self) -> Rect {
        self.base().rect()
    }

    /// React to a completed click on an unlocked widget
    fn dispatch_click(&mut self) {
        if let Some(on_click) = self.on_click_mut().as_mut() {
            on_click();
        }
    }

    /// Per-tick hook, run after click dispatch
    ///
    /// `focused` is whether this widget holds the context focus.
    fn tick(&mut self, _pointer: &PointerState, _focused: bool) {}

    fn render(&mut self, target: &mut B::Surface, backend: &mut B, theme: &Theme);
}

/// Rounded outline filled with `colors.outer` around a body in `colors.inner`
pub(crate) fn framed<B: Backend>(
    backend: &mut B,
    size: IVec2,
    colors: &StateColors,
    thickness: i32,
    outer_radius: f32,
    inner_radius: f32,
) -> B::Surface {
    let outer = Rect::from_size(size);
    let mut surface = backend.create_surface(size);
    surface.draw_rect(outer, colors.outer, Corners::all(outer_radius));
    surface.draw_rect(outer.inset(thickness), colors.inner, Corners::all(inner_radius));
    surface
}
