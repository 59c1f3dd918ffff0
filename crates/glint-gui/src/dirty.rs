//! Dirty-rectangle bookkeeping for hosts doing partial redraws

use crate::primitives::Rect;

/// Bounding boxes drawn this tick and the tick before
///
/// The toolkit only records rectangles; whether the host presents the whole
/// frame or just these regions is up to the host.
#[derive(Debug, Clone, Default)]
pub struct DirtyRects {
    last: Vec<Rect>,
    current: Vec<Rect>,
}

impl DirtyRects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tick: this tick's rects become last tick's
    pub fn roll(&mut self) {
        self.last = std::mem::take(&mut self.current);
    }

    pub fn push(&mut self, rect: Rect) {
        self.current.push(rect);
    }

    pub fn current(&self) -> &[Rect] {
        &self.current
    }

    pub fn last(&self) -> &[Rect] {
        &self.last
    }

    /// Last tick's rects followed by this tick's
    ///
    /// Regions that were drawn last tick but not this one still need
    /// repainting, so both lists are returned.
    pub fn updated(&self) -> Vec<Rect> {
        self.last.iter().chain(self.current.iter()).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_moves_current_to_last() {
        let mut dirty = DirtyRects::new();
        dirty.push(Rect::new(0, 0, 10, 10));
        dirty.push(Rect::new(5, 5, 10, 10));

        dirty.roll();
        assert_eq!(dirty.last().len(), 2);
        assert!(dirty.current().is_empty());

        dirty.push(Rect::new(1, 1, 1, 1));
        assert_eq!(
            dirty.updated(),
            vec![
                Rect::new(0, 0, 10, 10),
                Rect::new(5, 5, 10, 10),
                Rect::new(1, 1, 1, 1)
            ]
        );

        dirty.roll();
        assert_eq!(dirty.updated(), vec![Rect::new(1, 1, 1, 1)]);
    }
}
