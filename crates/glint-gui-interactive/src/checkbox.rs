//! Checkbox component
//!
//! A small rounded square that toggles on click and shows a dot while
//! checked. Checkboxes can be linked into a radio-style group where exactly
//! one member stays checked; group resolution lives in [`crate::Ui`] since
//! it needs the other members.

use crate::widget::{framed, Callback, Widget};
use glint_gui::{
    Appearance, AppearanceSet, Backend, IVec2, Result, Surface, Theme, WidgetBase, WidgetKind,
};

const THICKNESS: i32 = 3;
const RADIUS: f32 = 4.0;
/// Gap between the inner body and the dot
const DOT_PADDING: i32 = 4;
const DOT_RIM: f32 = 2.0;

/// A toggleable checkbox
pub struct CheckBox<S> {
    base: WidgetBase,
    checked: bool,
    group: Option<Vec<String>>,
    on_click: Option<Callback>,
    on_check: Option<Callback>,
    on_uncheck: Option<Callback>,
    on_action: Option<Box<dyn FnMut(bool)>>,
    appearances: Option<AppearanceSet<S>>,
}

impl<S> CheckBox<S> {
    pub const DEFAULT_SIZE: i32 = 30;

    /// Create an unchecked checkbox at `pos`
    pub fn new(name: impl Into<String>, pos: impl Into<IVec2>) -> Self {
        Self {
            base: WidgetBase::new(
                WidgetKind::CheckBox,
                name,
                pos.into(),
                IVec2::splat(Self::DEFAULT_SIZE),
            ),
            checked: false,
            group: None,
            on_click: None,
            on_check: None,
            on_uncheck: None,
            on_action: None,
            appearances: None,
        }
    }

    /// Set the side length of the square
    pub fn size(mut self, size: i32) -> Self {
        self.base.set_size(IVec2::splat(size));
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Link this checkbox with the checkboxes named in `members`
    ///
    /// Checking any member unchecks the others, and the last checked member
    /// cannot be unchecked. This checkbox's own name is ignored if listed.
    pub fn group<I, N>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.set_group(members);
        self
    }

    /// Set whether hovering highlights the checkbox
    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.base.hoverable = hoverable;
        self
    }

    /// Set whether the checkbox starts locked
    pub fn locked(mut self, locked: bool) -> Self {
        self.base.locked = locked;
        self
    }

    /// Set the click handler, fired before the checked state toggles
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Set the handler fired when a click leaves the checkbox checked
    pub fn on_check(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_check = Some(Box::new(f));
        self
    }

    /// Set the handler fired when a click leaves the checkbox unchecked
    pub fn on_uncheck(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_uncheck = Some(Box::new(f));
        self
    }

    /// Set the handler fired with the new checked state after every toggle
    pub fn on_action(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_action = Some(Box::new(f));
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state without touching the group or firing handlers
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn check(&mut self) {
        self.checked = true;
    }

    pub fn uncheck(&mut self) {
        self.checked = false;
    }

    pub fn set_on_check(&mut self, f: impl FnMut() + 'static) {
        self.on_check = Some(Box::new(f));
    }

    pub fn set_on_uncheck(&mut self, f: impl FnMut() + 'static) {
        self.on_uncheck = Some(Box::new(f));
    }

    pub fn set_on_action(&mut self, f: impl FnMut(bool) + 'static) {
        self.on_action = Some(Box::new(f));
    }

    /// Names of the other group members
    pub fn group_members(&self) -> Option<&[String]> {
        self.group.as_deref()
    }

    pub fn set_group<I, N>(&mut self, members: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let own = self.base.name().to_string();
        let members: Vec<String> = members
            .into_iter()
            .map(Into::into)
            .filter(|member| *member != own)
            .collect();
        self.group = Some(members);
    }

    pub fn clear_group(&mut self) {
        self.group = None;
    }

    /// Fire the check/uncheck handler matching the current state, then the
    /// action handler
    pub(crate) fn fire_toggle_handlers(&mut self) {
        let handler = if self.checked {
            self.on_check.as_mut()
        } else {
            self.on_uncheck.as_mut()
        };
        if let Some(handler) = handler {
            handler();
        }
        if let Some(on_action) = self.on_action.as_mut() {
            on_action(self.checked);
        }
    }

    fn dot_radius(&self) -> f32 {
        (self.base.size().x - 2 * THICKNESS - DOT_PADDING) as f32 / 2.0
    }
}

impl<B: Backend> Widget<B> for CheckBox<B::Surface> {
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
                RADIUS,
                RADIUS,
            )
        }));
        Ok(())
    }

    fn render(&mut self, target: &mut B::Surface, _backend: &mut B, theme: &Theme) {
        let base = &self.base;
        let appearance = Appearance::resolve(
            base.locked,
            base.down() || self.checked,
            base.hovered(),
            base.hoverable,
        );

        if let Some(appearances) = &self.appearances {
            target.blit(appearances.get(appearance), base.pos());
        }

        if self.checked {
            let center = base.rect().center();
            let radius = self.dot_radius().max(0.0);
            let dot = if base.locked {
                theme.locked.outer
            } else {
                theme.down.outer
            };
            target.draw_circle(center, radius, theme.knob_rim_color);
            target.draw_circle(center, (radius - DOT_RIM).max(0.0), dot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_drops_own_name() {
        let cb = CheckBox::<()>::new("a", (0, 0)).group(["a", "b", "c"]);
        assert_eq!(
            cb.group_members(),
            Some(&["b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_dot_radius_follows_size() {
        let cb = CheckBox::<()>::new("a", (0, 0));
        assert_eq!(cb.dot_radius(), 10.0);
        assert_eq!(cb.size(40).dot_radius(), 15.0);
    }
}
