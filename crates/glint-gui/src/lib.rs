//! # glint-gui
//!
//! Graphics backend agnostic widget toolkit core.
//!
//! This crate holds everything the widgets share without depending on a
//! particular rasteriser. Backends like `glint-gui-skia` implement the
//! drawing traits, and `glint-gui-interactive` builds the widgets on top.
//!
//! ## Drawing
//!
//! - [`Surface`] - Pixel buffer with rectangle/circle/line/blit primitives
//! - [`Backend`] - Creates surfaces, loads images, renders text
//!
//! ## Widget State
//!
//! - [`WidgetBase`] - Geometry plus hover/press/focus resolution
//! - [`Appearance`] / [`AppearanceSet`] - Visual state selection and caches
//! - [`PointerState`] - Per-tick press and release edges
//! - [`DirtyRects`] - Rectangles drawn this tick and last tick
//!
//! ## Styling
//!
//! - [`Color`] / [`StateColors`] - 8-bit colors and per-state triples
//! - [`Theme`] - The palette every widget draws with

mod color;
mod dirty;
mod error;
mod input;
mod primitives;
mod surface;
mod theme;
mod widget;

pub use glam::{IVec2, Vec2};

pub use color::*;
pub use dirty::*;
pub use error::*;
pub use input::*;
pub use primitives::*;
pub use surface::*;
pub use theme::*;
pub use widget::*;
