//! Slider component
//!
//! A horizontal track with a round knob. Dragging the knob maps the pointer
//! x position onto `[min, max]`, optionally snapped to `ticks` equal steps.

use crate::widget::{framed, Callback, Widget};
use glint_gui::{
    Appearance, AppearanceSet, Backend, Corners, IVec2, PointerState, Rect, Result, Surface,
    Theme, Vec2, WidgetBase, WidgetKind,
};

const THICKNESS: i32 = 3;
const TICK_WIDTH: f32 = 1.0;
/// Knob fill is inset from its rim by this many pixels
const KNOB_RIM: f32 = 2.0;

/// A draggable value slider
pub struct Slider<S> {
    base: WidgetBase,
    value: f32,
    min: f32,
    max: f32,
    ticks: u32,
    /// Knob radius, half the inner track height
    radius: f32,
    /// Horizontal travel of the knob centre
    travel: f32,
    on_click: Option<Callback>,
    on_value_changed: Option<Box<dyn FnMut(f32)>>,
    appearances: Option<AppearanceSet<S>>,
}

impl<S> Slider<S> {
    /// Create a slider over `0..=10` starting at 7
    pub fn new(name: impl Into<String>, pos: impl Into<IVec2>, size: impl Into<IVec2>) -> Self {
        let mut slider = Self {
            base: WidgetBase::new(WidgetKind::Slider, name, pos.into(), size.into()),
            value: 7.0,
            min: 0.0,
            max: 10.0,
            ticks: 0,
            radius: 0.0,
            travel: 0.0,
            on_click: None,
            on_value_changed: None,
            appearances: None,
        };
        slider.update_geometry();
        slider
    }

    /// Set the initial value; values outside the range start at `max`
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Snap to `ticks` equal steps; 0 makes the slider continuous
    pub fn ticks(mut self, ticks: u32) -> Self {
        self.ticks = ticks;
        self
    }

    /// Set whether hovering highlights the slider
    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.base.hoverable = hoverable;
        self
    }

    /// Set whether the slider starts locked
    pub fn locked(mut self, locked: bool) -> Self {
        self.base.locked = locked;
        self
    }

    /// Set the click handler, fired when a drag is released over the slider
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Set the handler fired with the new value whenever it changes
    pub fn on_value_changed(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_value_changed = Some(Box::new(f));
        self
    }

    pub fn get_value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn tick_count(&self) -> u32 {
        self.ticks
    }

    /// Distance between snap points, `None` when continuous
    pub fn step(&self) -> Option<f32> {
        (self.ticks > 0).then(|| (self.max - self.min) / self.ticks as f32)
    }

    pub fn set_on_value_changed(&mut self, f: impl FnMut(f32) + 'static) {
        self.on_value_changed = Some(Box::new(f));
    }

    /// Set the value, clamped to the range
    ///
    /// Fires the value-changed handler only when the stored value actually
    /// changes.
    pub fn set_value(&mut self, value: f32) {
        let value = self.clamp(value);
        if value == self.value {
            return;
        }

        self.value = value;
        log::trace!("{} value {}", self.base.id(), value);
        if let Some(on_value_changed) = self.on_value_changed.as_mut() {
            on_value_changed(value);
        }
    }

    pub fn set_min(&mut self, min: f32) {
        self.min = min;
        self.normalize_range();
        self.set_value(self.value);
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max;
        self.normalize_range();
        self.set_value(self.value);
    }

    pub fn set_ticks(&mut self, ticks: u32) {
        self.ticks = ticks;
    }

    /// Value the pointer at screen x would select, snapped and clamped
    pub fn value_at(&self, x: i32) -> f32 {
        let span = self.max - self.min;
        let offset = (x - self.base.pos().x) as f32 - self.radius - THICKNESS as f32;
        let raw = if self.travel > 0.0 {
            self.min + offset * span / self.travel
        } else {
            self.min
        };

        let snapped = match self.step() {
            Some(step) if step > 0.0 => self.min + ((raw - self.min) / step).round() * step,
            _ => raw,
        };

        self.clamp(snapped)
    }

    /// Screen x of the knob centre
    pub fn knob_x(&self) -> f32 {
        self.base.pos().x as f32 + THICKNESS as f32 + self.radius + self.value_offset(self.value)
    }

    /// Check the range and initial value once, when the slider is registered
    pub(crate) fn normalize(&mut self) {
        self.normalize_range();
        if !(self.min..=self.max).contains(&self.value) {
            log::warn!(
                "{} initial value {} outside {}..={}, starting at max",
                self.base.id(),
                self.value,
                self.min,
                self.max
            );
            self.value = self.max;
        }
        self.update_geometry();
    }

    fn normalize_range(&mut self) {
        if self.min > self.max {
            log::warn!(
                "{} range {}..={} is reversed, swapping",
                self.base.id(),
                self.min,
                self.max
            );
            std::mem::swap(&mut self.min, &mut self.max);
        }
    }

    fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Knob offset along the track for `value`
    fn value_offset(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span > 0.0 {
            (value - self.min) * self.travel / span
        } else {
            0.0
        }
    }

    fn update_geometry(&mut self) {
        let size = self.base.size();
        self.radius = ((size.y - 2 * THICKNESS) as f32 / 2.0).max(0.0);
        self.travel = (size.x as f32 - 2.0 * self.radius - 2.0 * THICKNESS as f32).max(0.0);
    }
}

impl<B: Backend> Widget<B> for Slider<B::Surface> {
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
        self.update_geometry();

        let size = self.base.size();
        let radius = self.radius.floor();
        self.appearances = Some(AppearanceSet::build(|appearance| {
            framed(
                backend,
                size,
                theme.colors(appearance),
                THICKNESS,
                radius,
                radius,
            )
        }));
        Ok(())
    }

    fn tick(&mut self, pointer: &PointerState, focused: bool) {
        if focused && !self.base.locked {
            self.set_value(self.value_at(pointer.x()));
        }
    }

    fn render(&mut self, target: &mut B::Surface, _backend: &mut B, theme: &Theme) {
        let pos = self.base.pos();
        let size = self.base.size();
        let appearance = Appearance::of(&self.base);
        let colors = theme.colors(appearance);
        let knob_x = self.knob_x();

        if let Some(appearances) = &self.appearances {
            target.blit(appearances.get(appearance), pos);
        }

        if self.value != self.min {
            let progress = Rect::new(
                pos.x + THICKNESS,
                pos.y + THICKNESS,
                (knob_x - (pos.x + THICKNESS) as f32) as i32,
                size.y - 2 * THICKNESS,
            );
            target.draw_rect(progress, colors.accent, Corners::left(self.radius.floor()));
        }

        if let Some(step) = self.step() {
            let left = pos.x as f32 + THICKNESS as f32 + self.radius;
            let top = (pos.y + THICKNESS) as f32;
            let bottom = (pos.y + size.y - THICKNESS - 1) as f32;
            for tick in 1..self.ticks {
                let tick_value = self.min + tick as f32 * step;
                let x = left + self.value_offset(tick_value);
                let color = if tick_value > self.value {
                    if self.base.locked {
                        theme.locked_tick_color
                    } else {
                        theme.tick_color
                    }
                } else {
                    colors.inner
                };
                target.draw_line(Vec2::new(x, top), Vec2::new(x, bottom), TICK_WIDTH, color);
            }
        }

        let center = Vec2::new(knob_x, pos.y as f32 + size.y as f32 / 2.0);
        target.draw_circle(center, self.radius, theme.knob_rim_color);
        target.draw_circle(center, (self.radius - KNOB_RIM).max(0.0), colors.outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestSlider = Slider<()>;

    fn slider() -> TestSlider {
        // radius 7, travel 200 - 14 - 6 = 180
        let mut s = TestSlider::new("volume", (0, 0), (200, 20)).range(0.0, 10.0).ticks(10);
        s.normalize();
        s
    }

    #[test]
    fn test_value_at_snaps_to_nearest_step() {
        let s = slider();
        // 4.6 of the way along the track
        let x = (10.0 + 4.6 * 18.0) as i32;
        assert_eq!(s.value_at(x), 5.0);
    }

    #[test]
    fn test_value_at_clamps_past_ends() {
        let s = slider();
        assert_eq!(s.value_at(-100), 0.0);
        assert_eq!(s.value_at(1000), 10.0);
    }

    #[test]
    fn test_continuous_slider_does_not_snap() {
        let mut s = slider();
        assert_eq!((s.tick_count(), s.step()), (10, Some(1.0)));
        s.set_ticks(0);
        assert_eq!((s.tick_count(), s.step()), (0, None));
        assert_eq!(s.value_at(10 + 45), 2.5);
    }

    #[test]
    fn test_set_value_fires_only_on_change() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut s = slider();
        s.set_on_value_changed(move |_| seen.set(seen.get() + 1));

        s.set_value(3.0);
        s.set_value(3.0);
        assert_eq!(calls.get(), 1);

        s.set_value(42.0);
        assert_eq!(s.get_value(), 10.0);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_out_of_range_initial_value_starts_at_max() {
        let mut s = TestSlider::new("s", (0, 0), (200, 20)).value(-3.0);
        s.normalize();
        assert_eq!(s.get_value(), 10.0);
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let mut s = TestSlider::new("s", (0, 0), (200, 20)).range(10.0, 2.0).value(4.0);
        s.normalize();
        assert_eq!((s.min(), s.max()), (2.0, 10.0));
        assert_eq!(s.get_value(), 4.0);
    }

    #[test]
    fn test_set_max_clamps_value() {
        let mut s = slider();
        s.set_value(8.0);
        s.set_max(5.0);
        assert_eq!(s.get_value(), 5.0);
        assert_eq!(s.step(), Some(0.5));
    }

    #[test]
    fn test_knob_tracks_value() {
        let mut s = slider();
        s.set_value(0.0);
        assert_eq!(s.knob_x(), 10.0);
        s.set_value(10.0);
        assert_eq!(s.knob_x(), 190.0);
    }
}
