//! Host-drawn view regions

use glint_gui::{Backend, IVec2, Rect, Surface};

/// A rectangular region whose content the host draws every tick
///
/// Views are not widgets: they have no interaction state and are drawn before
/// every widget. Each tick the callback receives a fresh transparent surface
/// of the view's size, which is then composited at the view's position.
pub struct View<S> {
    name: String,
    rect: Rect,
    on_screen_update: Option<Box<dyn FnMut(&mut S)>>,
}

impl<S: Surface> View<S> {
    pub const DEFAULT_SIZE: IVec2 = IVec2::new(100, 100);

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rect: Rect::from_size(Self::DEFAULT_SIZE),
            on_screen_update: None,
        }
    }

    pub fn pos(mut self, pos: impl Into<IVec2>) -> Self {
        self.rect.pos = pos.into();
        self
    }

    pub fn size(mut self, size: impl Into<IVec2>) -> Self {
        self.rect.size = size.into();
        self
    }

    /// Set the drawing callback
    pub fn on_screen_update(mut self, f: impl FnMut(&mut S) + 'static) -> Self {
        self.on_screen_update = Some(Box::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_pos(&mut self, pos: impl Into<IVec2>) {
        self.rect.pos = pos.into();
    }

    pub fn set_size(&mut self, size: impl Into<IVec2>) {
        self.rect.size = size.into();
    }

    pub fn set_on_screen_update(&mut self, f: impl FnMut(&mut S) + 'static) {
        self.on_screen_update = Some(Box::new(f));
    }

    pub(crate) fn render<B>(&mut self, target: &mut S, backend: &mut B)
    where
        B: Backend<Surface = S>,
    {
        let mut surface = backend.create_surface(self.rect.size);
        if let Some(on_screen_update) = self.on_screen_update.as_mut() {
            on_screen_update(&mut surface);
        }
        target.blit(&surface, self.rect.pos);
    }
}
