//! Button component
//!
//! A rounded, labelled rectangle that fires a callback when clicked. With
//! [`Button::confirm`] enabled the first click only arms the button and
//! swaps its label for [`Theme::confirm_text`]; a second click fires.

use crate::widget::{framed, Callback, Widget};
use glint_gui::{
    Appearance, AppearanceSet, Backend, IVec2, PointerState, Result, Surface, Theme, WidgetBase,
    WidgetKind,
};

const THICKNESS: i32 = 3;
const OUTER_RADIUS: f32 = 10.0;
const INNER_RADIUS: f32 = 8.0;

/// A clickable, labelled button
///
/// # Example
///
/// ```ignore
/// ui.add_button(
///     Button::new("ok", (10, 10))
///         .text("OK")
///         .on_click(|| println!("Clicked!")),
/// );
/// ```
pub struct Button<S> {
    base: WidgetBase,
    text: String,
    confirm: bool,
    armed: bool,
    on_click: Option<Callback>,
    appearances: Option<AppearanceSet<S>>,
}

impl<S> Button<S> {
    pub const DEFAULT_SIZE: IVec2 = IVec2::new(300, 40);

    /// Create a button labelled "Button" at `pos`
    pub fn new(name: impl Into<String>, pos: impl Into<IVec2>) -> Self {
        Self {
            base: WidgetBase::new(WidgetKind::Button, name, pos.into(), Self::DEFAULT_SIZE),
            text: "Button".to_string(),
            confirm: false,
            armed: false,
            on_click: None,
            appearances: None,
        }
    }

    pub fn size(mut self, size: impl Into<IVec2>) -> Self {
        self.base.set_size(size.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Require a second click before firing
    pub fn confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
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

    pub fn label(&self) -> &str {
        &self.text
    }

    /// Change the label; takes effect on the next render
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether a confirmation button is waiting for its second click
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn set_confirm(&mut self, confirm: bool) {
        self.confirm = confirm;
        if !confirm {
            self.armed = false;
        }
    }
}

impl<B: Backend> Widget<B> for Button<B::Surface> {
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
        let size = self.base.size();
        self.appearances = Some(AppearanceSet::build(|appearance| {
            framed(
                backend,
                size,
                theme.colors(appearance),
                THICKNESS,
                OUTER_RADIUS,
                INNER_RADIUS,
            )
        }));
        Ok(())
    }

    fn dispatch_click(&mut self) {
        if self.confirm && !self.armed {
            log::debug!("{} armed", self.base.id());
            self.armed = true;
            self.base.interaction.confirmed = false;
            return;
        }

        self.armed = false;
        if let Some(on_click) = self.on_click.as_mut() {
            on_click();
        }
    }

    fn tick(&mut self, pointer: &PointerState, focused: bool) {
        // A press anywhere else abandons a pending confirmation
        if self.armed && pointer.press_edge && !focused {
            log::debug!("{} disarmed", self.base.id());
            self.armed = false;
        }
    }

    fn render(&mut self, target: &mut B::Surface, backend: &mut B, theme: &Theme) {
        let pos = self.base.pos();
        let size = self.base.size();

        if let Some(appearances) = &self.appearances {
            target.blit(appearances.get(Appearance::of(&self.base)), pos);
        }

        let label = if self.armed {
            theme.confirm_text.as_str()
        } else {
            self.text.as_str()
        };
        let color = if self.base.locked {
            theme.locked_text_color
        } else {
            theme.text_color
        };
        let (text, metrics) = backend.render_text(label, color);
        target.blit(&text, pos + size / 2 - metrics.size() / 2);
    }
}
