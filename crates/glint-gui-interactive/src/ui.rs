//! The widget context: registry, focus and the per-tick update

use crate::registry::{Registry, WidgetMut};
use crate::widget::Widget;
use crate::{Button, CheckBox, ImageButton, Slider, Text, View};
use glint_gui::{
    Backend, Color, DirtyRects, Error, IVec2, Interaction, PointerState, Rect, Result, Theme,
    WidgetBase, WidgetId, WidgetKind,
};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Owns every widget and view along with the backend that draws them
///
/// Call [`Ui::update`] once per frame with the current pointer sample. It
/// resolves interaction, fires callbacks and draws everything onto the
/// target surface. Views are drawn first, then widgets kind by kind
/// (buttons, image buttons, sliders, checkboxes, texts), each kind in
/// creation order. Later widgets draw on top of earlier ones and win focus
/// when overlapping.
///
/// # Example
///
/// ```ignore
/// let mut ui = Ui::new(backend);
/// ui.add_button(Button::new("quit", (10, 10)).text("Quit").on_click(|| {}))?;
///
/// loop {
///     let (x, y, pressed) = poll_pointer();
///     ui.update(&mut screen, x, y, pressed);
///     present(&screen, &ui.updated_rects());
/// }
/// ```
pub struct Ui<B: Backend> {
    backend: B,
    theme: Theme,
    pointer: PointerState,
    focus: Option<WidgetId>,
    dirty: DirtyRects,
    views: IndexMap<String, View<B::Surface>>,
    widgets: Registry<B>,
}

macro_rules! typed_accessors {
    ($($kind:ident, $field:ident, $get:ident, $get_mut:ident, $ty:ident;)*) => {
        $(
            pub fn $get(&self, name: &str) -> Result<&$ty<B::Surface>> {
                self.widgets
                    .$field
                    .get(name)
                    .ok_or_else(|| Error::unknown(WidgetKind::$kind.name(), name))
            }

            pub fn $get_mut(&mut self, name: &str) -> Result<&mut $ty<B::Surface>> {
                self.widgets
                    .$field
                    .get_mut(name)
                    .ok_or_else(|| Error::unknown(WidgetKind::$kind.name(), name))
            }
        )*
    };
}

impl<B: Backend> Ui<B> {
    pub fn new(backend: B) -> Self {
        Self::with_theme(backend, Theme::default())
    }

    pub fn with_theme(backend: B, theme: Theme) -> Self {
        Self {
            backend,
            theme,
            pointer: PointerState::new(),
            focus: None,
            dirty: DirtyRects::new(),
            views: IndexMap::new(),
            widgets: Registry::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Pointer sample and edges of the last tick
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// The widget currently holding focus, if any
    pub fn focused(&self) -> Option<&WidgetId> {
        self.focus.as_ref()
    }

    pub fn dirty_rects(&self) -> &DirtyRects {
        &self.dirty
    }

    /// Every rectangle drawn last tick or this tick
    pub fn updated_rects(&self) -> Vec<Rect> {
        self.dirty.updated()
    }

    // ---- Creation ----

    /// Register a button, replacing any button with the same name
    pub fn add_button(&mut self, button: Button<B::Surface>) -> Result<()> {
        insert(
            &mut self.backend,
            &self.theme,
            &mut self.focus,
            &mut self.widgets.buttons,
            button,
        )
    }

    /// Register an image button, loading its picture
    ///
    /// Fails with [`Error::AssetLoad`] when the picture cannot be loaded, in
    /// which case nothing is registered.
    pub fn add_image_button(&mut self, button: ImageButton<B::Surface>) -> Result<()> {
        insert(
            &mut self.backend,
            &self.theme,
            &mut self.focus,
            &mut self.widgets.image_buttons,
            button,
        )
    }

    pub fn add_slider(&mut self, mut slider: Slider<B::Surface>) -> Result<()> {
        slider.normalize();
        insert(
            &mut self.backend,
            &self.theme,
            &mut self.focus,
            &mut self.widgets.sliders,
            slider,
        )
    }

    pub fn add_checkbox(&mut self, checkbox: CheckBox<B::Surface>) -> Result<()> {
        insert(
            &mut self.backend,
            &self.theme,
            &mut self.focus,
            &mut self.widgets.checkboxes,
            checkbox,
        )
    }

    pub fn add_text(&mut self, text: Text<B::Surface>) -> Result<()> {
        insert(
            &mut self.backend,
            &self.theme,
            &mut self.focus,
            &mut self.widgets.texts,
            text,
        )
    }

    /// Register a view, replacing any view with the same name
    pub fn add_view(&mut self, view: View<B::Surface>) {
        let name = view.name().to_string();
        if self.views.insert(name.clone(), view).is_some() {
            log::debug!("View:{name} replaced");
        }
    }

    // ---- Queries ----

    /// Whether a widget of `kind` named `name` exists
    pub fn exists(&self, kind: WidgetKind, name: &str) -> bool {
        self.widgets.contains(kind, name)
    }

    pub fn view_exists(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Number of widgets of one kind
    pub fn count(&self, kind: WidgetKind) -> usize {
        self.widgets.len(kind)
    }

    /// Names of one kind, in update order
    pub fn names(&self, kind: WidgetKind) -> Vec<&str> {
        self.widgets.names(kind)
    }

    pub fn widget(&self, kind: WidgetKind, name: &str) -> Result<&WidgetBase> {
        self.widgets
            .base(kind, name)
            .ok_or_else(|| Error::unknown(kind.name(), name))
    }

    pub fn interaction(&self, kind: WidgetKind, name: &str) -> Result<Interaction> {
        Ok(self.widget(kind, name)?.interaction)
    }

    /// Whether a click completed on the widget during the last tick
    pub fn clicked(&self, kind: WidgetKind, name: &str) -> Result<bool> {
        Ok(self.widget(kind, name)?.clicked_up())
    }

    /// Whether the widget's action completed during the last tick
    ///
    /// Differs from [`Ui::clicked`] only for confirmation buttons.
    pub fn confirmed(&self, kind: WidgetKind, name: &str) -> Result<bool> {
        Ok(self.widget(kind, name)?.confirmed())
    }

    typed_accessors! {
        Button, buttons, button, button_mut, Button;
        ImageButton, image_buttons, image_button, image_button_mut, ImageButton;
        Slider, sliders, slider, slider_mut, Slider;
        CheckBox, checkboxes, checkbox, checkbox_mut, CheckBox;
        Text, texts, text, text_mut, Text;
    }

    pub fn view(&self, name: &str) -> Result<&View<B::Surface>> {
        self.views
            .get(name)
            .ok_or_else(|| Error::unknown("View", name))
    }

    pub fn view_mut(&mut self, name: &str) -> Result<&mut View<B::Surface>> {
        self.views
            .get_mut(name)
            .ok_or_else(|| Error::unknown("View", name))
    }

    // ---- Common setters ----

    pub fn lock(&mut self, kind: WidgetKind, name: &str) -> Result<()> {
        self.set_lock(kind, name, true)
    }

    pub fn unlock(&mut self, kind: WidgetKind, name: &str) -> Result<()> {
        self.set_lock(kind, name, false)
    }

    /// Lock or unlock a widget
    ///
    /// Locking the focused widget releases the focus.
    pub fn set_lock(&mut self, kind: WidgetKind, name: &str, locked: bool) -> Result<()> {
        let mut widget = self.widget_mut(kind, name)?;
        let base = widget.base_mut();
        base.locked = locked;
        let id = base.id();
        if locked {
            self.release_focus(&id);
        }
        Ok(())
    }

    pub fn set_hoverable(&mut self, kind: WidgetKind, name: &str, hoverable: bool) -> Result<()> {
        self.widget_mut(kind, name)?.base_mut().hoverable = hoverable;
        Ok(())
    }

    /// Replace the click handler of any widget kind
    pub fn set_on_click(
        &mut self,
        kind: WidgetKind,
        name: &str,
        on_click: impl FnMut() + 'static,
    ) -> Result<()> {
        self.widget_mut(kind, name)?.set_on_click(Box::new(on_click));
        Ok(())
    }

    pub fn set_pos(&mut self, kind: WidgetKind, name: &str, pos: impl Into<IVec2>) -> Result<()> {
        self.widget_mut(kind, name)?.base_mut().set_pos(pos.into());
        Ok(())
    }

    /// Resize a widget and regenerate its appearances
    ///
    /// Text labels are always sized to their content, so resizing one has no
    /// lasting effect.
    pub fn set_size(&mut self, kind: WidgetKind, name: &str, size: impl Into<IVec2>) -> Result<()> {
        let mut widget = self
            .widgets
            .get_mut(kind, name)
            .ok_or_else(|| Error::unknown(kind.name(), name))?;
        widget.base_mut().set_size(size.into());
        widget.rebuild(&mut self.backend, &self.theme)
    }

    // ---- Content setters ----

    /// Change a label's text and re-render it
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> Result<()> {
        let label = self
            .widgets
            .texts
            .get_mut(name)
            .ok_or_else(|| Error::unknown(WidgetKind::Text.name(), name))?;
        label.set_content(text.into());
        Widget::<B>::rebuild(label, &mut self.backend, &self.theme)
    }

    /// Change a label's color and re-render it
    pub fn set_text_color(&mut self, name: &str, color: impl Into<Color>) -> Result<()> {
        let label = self
            .widgets
            .texts
            .get_mut(name)
            .ok_or_else(|| Error::unknown(WidgetKind::Text.name(), name))?;
        label.set_color(color.into());
        Widget::<B>::rebuild(label, &mut self.backend, &self.theme)
    }

    /// Swap an image button's picture
    ///
    /// On failure the button keeps its previous picture.
    pub fn set_image(&mut self, name: &str, path: impl Into<PathBuf>) -> Result<()> {
        let button = self
            .widgets
            .image_buttons
            .get_mut(name)
            .ok_or_else(|| Error::unknown(WidgetKind::ImageButton.name(), name))?;

        let previous = button.path().to_path_buf();
        button.set_path(path.into());
        let result = Widget::<B>::rebuild(button, &mut self.backend, &self.theme);
        if result.is_err() {
            button.set_path(previous);
        }
        result
    }

    // ---- Deletion ----

    /// Delete the named widgets of one kind
    ///
    /// Fails without deleting anything if any name is unknown.
    pub fn delete(&mut self, kind: WidgetKind, names: &[&str]) -> Result<()> {
        if let Some(missing) = names.iter().find(|name| !self.exists(kind, name)) {
            return Err(Error::unknown(kind.name(), *missing));
        }

        for name in names {
            self.widgets.remove(kind, name);
            self.release_focus(&WidgetId::new(kind, *name));
            log::debug!("{kind}:{name} deleted");
        }
        Ok(())
    }

    /// Delete every widget of one kind
    pub fn delete_all_of(&mut self, kind: WidgetKind) {
        log::debug!("deleted {} {kind} widgets", self.widgets.len(kind));
        self.widgets.clear(kind);
        if self.focus.as_ref().is_some_and(|id| id.kind == kind) {
            self.focus = None;
        }
    }

    /// Delete every widget of every kind; views are kept
    pub fn delete_all(&mut self) {
        let total: usize = WidgetKind::ALL
            .iter()
            .map(|&kind| self.widgets.len(kind))
            .sum();
        log::debug!("deleted all widgets ({total})");
        for kind in WidgetKind::ALL {
            self.widgets.clear(kind);
        }
        self.focus = None;
    }

    pub fn delete_view(&mut self, name: &str) -> Result<()> {
        self.views
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::unknown("View", name))
    }

    pub fn delete_all_views(&mut self) {
        self.views.clear();
    }

    // ---- Tick ----

    /// Run one tick: resolve interaction, fire callbacks and draw
    ///
    /// `x` and `y` are the pointer position in `target` coordinates and
    /// `pressed` whether the primary button is held.
    pub fn update(&mut self, target: &mut B::Surface, x: i32, y: i32, pressed: bool) {
        self.dirty.roll();
        self.pointer.begin_tick(IVec2::new(x, y), pressed);

        let Ui {
            backend,
            theme,
            pointer,
            focus,
            dirty,
            views,
            widgets,
        } = self;

        for view in views.values_mut() {
            dirty.push(view.rect());
            view.render(target, backend);
        }

        for button in widgets.buttons.values_mut() {
            interact::<B, _>(button, pointer, focus);
            draw(button, target, backend, theme, dirty);
        }

        for button in widgets.image_buttons.values_mut() {
            interact::<B, _>(button, pointer, focus);
            draw(button, target, backend, theme, dirty);
        }

        for slider in widgets.sliders.values_mut() {
            interact::<B, _>(slider, pointer, focus);
            draw(slider, target, backend, theme, dirty);
        }

        for index in 0..widgets.checkboxes.len() {
            let Some((_, checkbox)) = widgets.checkboxes.get_index_mut(index) else {
                continue;
            };
            interact::<B, _>(checkbox, pointer, focus);
            if Widget::<B>::base(&*checkbox).clicked_up() {
                toggle_checkbox(&mut widgets.checkboxes, index);
            }
            if let Some((_, checkbox)) = widgets.checkboxes.get_index_mut(index) {
                draw(checkbox, target, backend, theme, dirty);
            }
        }

        for text in widgets.texts.values_mut() {
            interact::<B, _>(text, pointer, focus);
            draw(text, target, backend, theme, dirty);
        }

        if !pointer.pressed && focus.take().is_some() {
            log::trace!("focus released");
        }
    }

    fn widget_mut(&mut self, kind: WidgetKind, name: &str) -> Result<WidgetMut<'_, B>> {
        self.widgets
            .get_mut(kind, name)
            .ok_or_else(|| Error::unknown(kind.name(), name))
    }

    fn release_focus(&mut self, id: &WidgetId) {
        if self.focus.as_ref() == Some(id) {
            log::debug!("{id} lost focus");
            self.focus = None;
        }
    }
}

fn insert<B, W>(
    backend: &mut B,
    theme: &Theme,
    focus: &mut Option<WidgetId>,
    map: &mut IndexMap<String, W>,
    mut widget: W,
) -> Result<()>
where
    B: Backend,
    W: Widget<B>,
{
    widget.rebuild(backend, theme)?;

    let id = widget.base().id();
    if map.insert(id.name.clone(), widget).is_some() {
        log::debug!("{id} replaced");
        if focus.as_ref() == Some(&id) {
            *focus = None;
        }
    } else {
        log::debug!("{id} created");
    }
    Ok(())
}

/// Interaction resolution, click dispatch and the per-kind tick hook
fn interact<B, W>(widget: &mut W, pointer: &PointerState, focus: &mut Option<WidgetId>)
where
    B: Backend,
    W: Widget<B>,
{
    widget.base_mut().resolve(pointer, focus);

    if widget.base().clicked_up() {
        log::debug!("{} clicked", widget.base().id());
        widget.dispatch_click();
    }

    let focused = focus.as_ref().is_some_and(|id| widget.base().is(id));
    widget.tick(pointer, focused);
}

fn draw<B, W>(
    widget: &mut W,
    target: &mut B::Surface,
    backend: &mut B,
    theme: &Theme,
    dirty: &mut DirtyRects,
) where
    B: Backend,
    W: Widget<B>,
{
    dirty.push(widget.bounds());
    widget.render(target, backend, theme);
}

/// Flip a clicked checkbox and resolve its group
///
/// Checking a member unchecks the rest of its group. Unchecking is vetoed
/// when no other member is checked, so a group always keeps one checked
/// member. Handlers fire with the resolved state.
fn toggle_checkbox<S>(checkboxes: &mut IndexMap<String, CheckBox<S>>, index: usize) {
    let Some((name, checkbox)) = checkboxes.get_index_mut(index) else {
        return;
    };
    let name = name.clone();
    let checked = !checkbox.is_checked();
    checkbox.set_checked(checked);
    let group = checkbox.group_members().map(<[String]>::to_vec);

    if let Some(group) = group {
        for member in group.iter().filter(|m| !checkboxes.contains_key(*m)) {
            log::warn!("CheckBox:{name} is grouped with missing checkbox {member:?}");
        }

        if checked {
            for member in &group {
                if let Some(other) = checkboxes.get_mut(member) {
                    other.set_checked(false);
                }
            }
        } else {
            let other_checked = group
                .iter()
                .any(|m| checkboxes.get(m).is_some_and(CheckBox::is_checked));
            if !other_checked {
                log::debug!("CheckBox:{name} is the last checked member, keeping it checked");
                if let Some((_, checkbox)) = checkboxes.get_index_mut(index) {
                    checkbox.set_checked(true);
                }
            }
        }
    }

    if let Some((_, checkbox)) = checkboxes.get_index_mut(index) {
        checkbox.fire_toggle_handlers();
    }
}
