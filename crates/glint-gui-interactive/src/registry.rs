//! Per-kind widget storage

use crate::widget::{Callback, Widget};
use crate::{Button, CheckBox, ImageButton, Slider, Text};
use glint_gui::{Backend, Result, Theme, WidgetBase, WidgetKind};
use indexmap::IndexMap;

/// One insertion-ordered map per widget kind
///
/// Insertion order is the update and draw order within a kind. Replacing a
/// name keeps its slot; removal shifts later entries down.
pub(crate) struct Registry<B: Backend> {
    pub buttons: IndexMap<String, Button<B::Surface>>,
    pub image_buttons: IndexMap<String, ImageButton<B::Surface>>,
    pub sliders: IndexMap<String, Slider<B::Surface>>,
    pub checkboxes: IndexMap<String, CheckBox<B::Surface>>,
    pub texts: IndexMap<String, Text<B::Surface>>,
}

/// Mutable handle on a widget of any kind
pub(crate) enum WidgetMut<'a, B: Backend> {
    Button(&'a mut Button<B::Surface>),
    ImageButton(&'a mut ImageButton<B::Surface>),
    Slider(&'a mut Slider<B::Surface>),
    CheckBox(&'a mut CheckBox<B::Surface>),
    Text(&'a mut Text<B::Surface>),
}

impl<B: Backend> WidgetMut<'_, B> {
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        match self {
            WidgetMut::Button(w) => Widget::<B>::base_mut(&mut **w),
            WidgetMut::ImageButton(w) => Widget::<B>::base_mut(&mut **w),
            WidgetMut::Slider(w) => Widget::<B>::base_mut(&mut **w),
            WidgetMut::CheckBox(w) => Widget::<B>::base_mut(&mut **w),
            WidgetMut::Text(w) => Widget::<B>::base_mut(&mut **w),
        }
    }

    pub fn set_on_click(&mut self, on_click: Callback) {
        let slot = match self {
            WidgetMut::Button(w) => Widget::<B>::on_click_mut(&mut **w),
            WidgetMut::ImageButton(w) => Widget::<B>::on_click_mut(&mut **w),
            WidgetMut::Slider(w) => Widget::<B>::on_click_mut(&mut **w),
            WidgetMut::CheckBox(w) => Widget::<B>::on_click_mut(&mut **w),
            WidgetMut::Text(w) => Widget::<B>::on_click_mut(&mut **w),
        };
        *slot = Some(on_click);
    }

    pub fn rebuild(&mut self, backend: &mut B, theme: &Theme) -> Result<()> {
        match self {
            WidgetMut::Button(w) => Widget::<B>::rebuild(&mut **w, backend, theme),
            WidgetMut::ImageButton(w) => Widget::<B>::rebuild(&mut **w, backend, theme),
            WidgetMut::Slider(w) => Widget::<B>::rebuild(&mut **w, backend, theme),
            WidgetMut::CheckBox(w) => Widget::<B>::rebuild(&mut **w, backend, theme),
            WidgetMut::Text(w) => Widget::<B>::rebuild(&mut **w, backend, theme),
        }
    }
}

impl<B: Backend> Registry<B> {
    pub fn new() -> Self {
        Self {
            buttons: IndexMap::new(),
            image_buttons: IndexMap::new(),
            sliders: IndexMap::new(),
            checkboxes: IndexMap::new(),
            texts: IndexMap::new(),
        }
    }

    pub fn contains(&self, kind: WidgetKind, name: &str) -> bool {
        match kind {
            WidgetKind::Button => self.buttons.contains_key(name),
            WidgetKind::ImageButton => self.image_buttons.contains_key(name),
            WidgetKind::Slider => self.sliders.contains_key(name),
            WidgetKind::CheckBox => self.checkboxes.contains_key(name),
            WidgetKind::Text => self.texts.contains_key(name),
        }
    }

    pub fn base(&self, kind: WidgetKind, name: &str) -> Option<&WidgetBase> {
        match kind {
            WidgetKind::Button => self.buttons.get(name).map(Widget::<B>::base),
            WidgetKind::ImageButton => self.image_buttons.get(name).map(Widget::<B>::base),
            WidgetKind::Slider => self.sliders.get(name).map(Widget::<B>::base),
            WidgetKind::CheckBox => self.checkboxes.get(name).map(Widget::<B>::base),
            WidgetKind::Text => self.texts.get(name).map(Widget::<B>::base),
        }
    }

    pub fn get_mut(&mut self, kind: WidgetKind, name: &str) -> Option<WidgetMut<'_, B>> {
        match kind {
            WidgetKind::Button => self.buttons.get_mut(name).map(WidgetMut::Button),
            WidgetKind::ImageButton => self.image_buttons.get_mut(name).map(WidgetMut::ImageButton),
            WidgetKind::Slider => self.sliders.get_mut(name).map(WidgetMut::Slider),
            WidgetKind::CheckBox => self.checkboxes.get_mut(name).map(WidgetMut::CheckBox),
            WidgetKind::Text => self.texts.get_mut(name).map(WidgetMut::Text),
        }
    }

    pub fn remove(&mut self, kind: WidgetKind, name: &str) -> bool {
        match kind {
            WidgetKind::Button => self.buttons.shift_remove(name).is_some(),
            WidgetKind::ImageButton => self.image_buttons.shift_remove(name).is_some(),
            WidgetKind::Slider => self.sliders.shift_remove(name).is_some(),
            WidgetKind::CheckBox => self.checkboxes.shift_remove(name).is_some(),
            WidgetKind::Text => self.texts.shift_remove(name).is_some(),
        }
    }

    pub fn clear(&mut self, kind: WidgetKind) {
        match kind {
            WidgetKind::Button => self.buttons.clear(),
            WidgetKind::ImageButton => self.image_buttons.clear(),
            WidgetKind::Slider => self.sliders.clear(),
            WidgetKind::CheckBox => self.checkboxes.clear(),
            WidgetKind::Text => self.texts.clear(),
        }
    }

    pub fn len(&self, kind: WidgetKind) -> usize {
        match kind {
            WidgetKind::Button => self.buttons.len(),
            WidgetKind::ImageButton => self.image_buttons.len(),
            WidgetKind::Slider => self.sliders.len(),
            WidgetKind::CheckBox => self.checkboxes.len(),
            WidgetKind::Text => self.texts.len(),
        }
    }

    /// Names of one kind, in update order
    pub fn names(&self, kind: WidgetKind) -> Vec<&str> {
        match kind {
            WidgetKind::Button => self.buttons.keys().map(String::as_str).collect(),
            WidgetKind::ImageButton => self.image_buttons.keys().map(String::as_str).collect(),
            WidgetKind::Slider => self.sliders.keys().map(String::as_str).collect(),
            WidgetKind::CheckBox => self.checkboxes.keys().map(String::as_str).collect(),
            WidgetKind::Text => self.texts.keys().map(String::as_str).collect(),
        }
    }
}
