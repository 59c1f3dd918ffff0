//! Fixed color theme shared by every widget of a `Ui`

use crate::color::{Color, StateColors};
use crate::widget::Appearance;
use glint_gui_macros::WithBuilders;

/// Colors and labels used when generating widget appearances
///
/// Four interaction states each get a [`StateColors`] triple; the remaining
/// fields cover text, slider ticks and knob rims.
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct Theme {
    pub locked: StateColors,
    pub down: StateColors,
    pub hovered: StateColors,
    pub classic: StateColors,

    /// Button label color
    pub text_color: Color,
    /// Button label color while locked
    pub locked_text_color: Color,

    /// Slider tick past the current value
    pub tick_color: Color,
    /// Slider tick past the current value while locked
    pub locked_tick_color: Color,
    /// Dark rim around slider knobs and checkbox dots
    pub knob_rim_color: Color,

    /// Label shown by an armed confirmation button
    #[with_builders(into)]
    pub confirm_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            locked: StateColors::new(
                Color::rgb(60, 60, 60),
                Color::rgb(10, 14, 17),
                Color::rgb(0, 0, 0),
            ),
            down: StateColors::new(
                Color::rgb(0, 93, 67),
                Color::rgb(0, 66, 47),
                Color::rgb(0, 50, 27),
            ),
            hovered: StateColors::new(
                Color::rgb(93, 67, 0),
                Color::rgb(66, 47, 0),
                Color::rgb(50, 27, 0),
            ),
            classic: StateColors::new(
                Color::rgb(90, 90, 90),
                Color::rgb(60, 60, 60),
                Color::rgb(30, 30, 30),
            ),
            text_color: Color::WHITE,
            locked_text_color: Color::rgb(70, 70, 70),
            tick_color: Color::rgb(200, 200, 200),
            locked_tick_color: Color::rgb(20, 28, 36),
            knob_rim_color: Color::rgb(10, 14, 18),
            confirm_text: "Confirm ?".to_string(),
        }
    }
}

impl Theme {
    /// Color triple for an appearance state
    pub fn colors(&self, appearance: Appearance) -> &StateColors {
        match appearance {
            Appearance::Locked => &self.locked,
            Appearance::Down => &self.down,
            Appearance::Hovered => &self.hovered,
            Appearance::Classic => &self.classic,
        }
    }
}
