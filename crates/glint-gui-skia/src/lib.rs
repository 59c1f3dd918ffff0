//! tiny-skia software backend for glint-gui
//!
//! - [`Canvas`] - A [`glint_gui::Surface`] backed by a premultiplied RGBA pixmap
//! - [`SkiaBackend`] - Creates canvases, decodes images with `image` and
//!   renders labels with `cosmic-text`
//! - [`SkiaConfig`] - Font settings
//!
//! Everything renders on the CPU, so the backend works headless. Hosts
//! present a [`Canvas`] however they like, for example by copying
//! [`Canvas::data`] into a window buffer or saving it with
//! [`Canvas::save_png`].

mod backend;
mod canvas;
mod config;

pub use backend::*;
pub use canvas::*;
pub use config::*;
