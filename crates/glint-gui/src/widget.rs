//! Shared widget state: identity, geometry and hover/press/focus resolution
//!
//! Every widget kind embeds a [`WidgetBase`]. Once per tick the owning
//! context calls [`WidgetBase::resolve`], which runs the capture-then-confirm
//! protocol:
//!
//! 1. A press-down edge over the widget captures the single global focus.
//! 2. The widget is `down` while the pointer is held over it, or while it
//!    holds focus.
//! 3. A release edge while focused *and* hovered is a click (`clicked_up`).
//! 4. While another widget holds focus this one reports neither hover nor
//!    press.
//!
//! Locked widgets skip all of this and report no interaction at all.

use crate::input::PointerState;
use crate::primitives::Rect;
use glam::IVec2;
use std::fmt;

/// The closed set of registry-managed widget kinds
///
/// The declaration order is the per-tick update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKind {
    Button,
    ImageButton,
    Slider,
    CheckBox,
    Text,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Button,
        WidgetKind::ImageButton,
        WidgetKind::Slider,
        WidgetKind::CheckBox,
        WidgetKind::Text,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            WidgetKind::Button => "Button",
            WidgetKind::ImageButton => "ImageButton",
            WidgetKind::Slider => "Slider",
            WidgetKind::CheckBox => "CheckBox",
            WidgetKind::Text => "Text",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry key of a widget: names are unique within a kind only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId {
    pub kind: WidgetKind,
    pub name: String,
}

impl WidgetId {
    pub fn new(kind: WidgetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// Transient interaction flags, recomputed every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Pointer is over the widget (and no other widget holds focus)
    pub hovered: bool,
    /// Widget is being pressed
    pub down: bool,
    /// A click completed on this widget this tick
    pub clicked_up: bool,
    /// The widget's action completed this tick
    ///
    /// Same as `clicked_up` except for confirmation buttons, where only the
    /// second click confirms.
    pub confirmed: bool,
}

/// Identity, geometry and interaction state common to every widget kind
#[derive(Debug, Clone)]
pub struct WidgetBase {
    kind: WidgetKind,
    name: String,
    rect: Rect,
    /// Whether hovering changes the widget's appearance
    pub hoverable: bool,
    /// Locked widgets render muted and ignore the pointer
    pub locked: bool,
    /// Whether a press-down edge over the widget captures focus
    pub focusable: bool,
    pub interaction: Interaction,
}

impl WidgetBase {
    pub fn new(kind: WidgetKind, name: impl Into<String>, pos: IVec2, size: IVec2) -> Self {
        Self {
            kind,
            name: name.into(),
            rect: Rect::from_pos_size(pos, size),
            hoverable: true,
            locked: false,
            focusable: true,
            interaction: Interaction::default(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> WidgetId {
        WidgetId::new(self.kind, self.name.clone())
    }

    /// Whether `id` refers to this widget
    pub fn is(&self, id: &WidgetId) -> bool {
        id.kind == self.kind && id.name == self.name
    }

    pub fn pos(&self) -> IVec2 {
        self.rect.pos
    }

    pub fn size(&self) -> IVec2 {
        self.rect.size
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_pos(&mut self, pos: IVec2) {
        self.rect.pos = pos;
    }

    pub fn set_size(&mut self, size: IVec2) {
        self.rect.size = size;
    }

    pub fn hovered(&self) -> bool {
        self.interaction.hovered
    }

    pub fn down(&self) -> bool {
        self.interaction.down
    }

    pub fn clicked_up(&self) -> bool {
        self.interaction.clicked_up
    }

    pub fn confirmed(&self) -> bool {
        self.interaction.confirmed
    }

    /// Resolve hover, press, focus and click state for this tick
    ///
    /// `focus` is the context-wide focused widget. A press-down edge over
    /// this widget overwrites it, so among overlapping widgets the last one
    /// resolved in a tick keeps the focus.
    pub fn resolve(&mut self, pointer: &PointerState, focus: &mut Option<WidgetId>) {
        self.interaction = Interaction::default();

        if self.locked {
            return;
        }

        let inside = self.rect.contains(pointer.position);

        if pointer.press_edge && inside && self.focusable {
            if !focus.as_ref().is_some_and(|f| self.is(f)) {
                log::debug!("{}:{} captured focus", self.kind, self.name);
            }
            *focus = Some(self.id());
        }

        let focused = focus.as_ref().is_some_and(|f| self.is(f));

        let interaction = &mut self.interaction;
        interaction.hovered = inside;
        interaction.down = (pointer.pressed && inside) || focused;
        interaction.clicked_up = pointer.release_edge && focused && inside;
        interaction.confirmed = interaction.clicked_up;

        if focus.is_some() && !focused {
            interaction.hovered = false;
            interaction.down = false;
        }
    }
}

/// The four visual states a widget can be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Locked,
    Down,
    Hovered,
    Classic,
}

impl Appearance {
    pub const ALL: [Appearance; 4] = [
        Appearance::Locked,
        Appearance::Down,
        Appearance::Hovered,
        Appearance::Classic,
    ];

    /// Priority: locked > down > hovered (if hoverable) > classic
    pub fn resolve(locked: bool, down: bool, hovered: bool, hoverable: bool) -> Self {
        if locked {
            Appearance::Locked
        } else if down {
            Appearance::Down
        } else if hovered && hoverable {
            Appearance::Hovered
        } else {
            Appearance::Classic
        }
    }

    /// Appearance of a widget from its current state
    pub fn of(base: &WidgetBase) -> Self {
        Self::resolve(
            base.locked,
            base.interaction.down,
            base.interaction.hovered,
            base.hoverable,
        )
    }
}

/// One cached value per [`Appearance`], typically a pre-rendered bitmap
#[derive(Debug, Clone)]
pub struct AppearanceSet<T> {
    pub locked: T,
    pub down: T,
    pub hovered: T,
    pub classic: T,
}

impl<T> AppearanceSet<T> {
    /// Build every entry with `f`, in [`Appearance::ALL`] order
    pub fn build(mut f: impl FnMut(Appearance) -> T) -> Self {
        Self {
            locked: f(Appearance::Locked),
            down: f(Appearance::Down),
            hovered: f(Appearance::Hovered),
            classic: f(Appearance::Classic),
        }
    }

    /// Fallible variant of [`AppearanceSet::build`]
    pub fn try_build<E>(mut f: impl FnMut(Appearance) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            locked: f(Appearance::Locked)?,
            down: f(Appearance::Down)?,
            hovered: f(Appearance::Hovered)?,
            classic: f(Appearance::Classic)?,
        })
    }

    pub fn get(&self, appearance: Appearance) -> &T {
        match appearance {
            Appearance::Locked => &self.locked,
            Appearance::Down => &self.down,
            Appearance::Hovered => &self.hovered,
            Appearance::Classic => &self.classic,
        }
    }
}
