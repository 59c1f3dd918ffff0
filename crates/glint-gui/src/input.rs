//! Backend-agnostic pointer state tracking
//!
//! The host samples the pointer once per tick (position plus a single
//! "primary button held" flag) and feeds it to [`PointerState::begin_tick`],
//! which derives the press-down and release edges for that tick.

use glam::IVec2;

/// Pointer position and button edges for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// Pointer position in surface coordinates
    pub position: IVec2,

    /// Whether the primary button is held this tick
    pub pressed: bool,

    /// Button went from released to held this tick
    pub press_edge: bool,

    /// Button went from held to released this tick
    pub release_edge: bool,

    previous_pressed: bool,
}

impl PointerState {
    /// Create a pointer state for the first tick
    ///
    /// The previous-pressed flag starts `true`, so a button that is already
    /// held when the first tick runs does not produce a press-down edge.
    pub fn new() -> Self {
        Self {
            position: IVec2::ZERO,
            pressed: false,
            press_edge: false,
            release_edge: false,
            previous_pressed: true,
        }
    }

    /// Record this tick's sample and compute the edges
    pub fn begin_tick(&mut self, position: IVec2, pressed: bool) {
        self.position = position;
        self.press_edge = pressed && !self.previous_pressed;
        self.release_edge = !pressed && self.previous_pressed;
        self.pressed = pressed;
        self.previous_pressed = pressed;
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
