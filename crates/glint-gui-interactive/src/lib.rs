//! Interactive widgets for glint-gui
//!
//! This crate provides the retained widget set and the [`Ui`] context that
//! owns it:
//! - Button, with an optional click-twice confirmation mode
//! - ImageButton
//! - Slider, continuous or snapped to ticks
//! - CheckBox, optionally grouped for radio-style selection
//! - Text labels
//! - Views the host draws into every tick
//!
//! Widgets are addressed by kind and name. The host calls [`Ui::update`] once
//! per frame with the pointer position and button state; callbacks fire from
//! inside that call.

mod button;
mod checkbox;
mod image_button;
mod registry;
mod slider;
mod text;
mod ui;
mod view;
mod widget;

#[cfg(test)]
mod test_support;

pub use button::*;
pub use checkbox::*;
pub use image_button::*;
pub use slider::*;
pub use text::*;
pub use ui::*;
pub use view::*;
pub use widget::Callback;

pub use glint_gui::WidgetKind;
