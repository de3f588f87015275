//! Core widget types and the update/render contract.

use crate::input::PointerState;
use crate::layout::Rect;
use crate::render::RenderCommand;
use crate::widget::TabBarState;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget is off screen (entrance/exit completed downward).
    pub const HIDDEN: u32 = 1 << 1;
    /// An animation is in flight.
    pub const ANIMATING: u32 = 1 << 2;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 3;

    /// Default flags for a new widget: hidden until shown.
    pub const DEFAULT: Self = Self(Self::HIDDEN | Self::DIRTY_RENDER);

    /// Creates flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle.
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true while the widget is off screen.
    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.flags.has(WidgetFlags::HIDDEN)
    }

    /// Returns true while an animation is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flags.has(WidgetFlags::ANIMATING)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }
}

/// What happened during a widget update.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetResponse {
    /// Index of the icon that was tapped this frame, if any.
    pub selected: Option<usize>,
    /// The layout state committed a change this frame.
    pub state_changed: Option<TabBarState>,
    /// An entrance or exit animation finished this frame.
    pub visibility_changed: bool,
}

/// The frame-driven widget contract.
pub trait Widget {
    /// Returns the widget's common state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's common state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Consumes this frame's pointer input and advances animations.
    ///
    /// Called every frame, even without input events. `dt` is the delta
    /// time in seconds.
    fn update(&mut self, input: &PointerState, dt: f32) -> WidgetResponse;

    /// Emits render commands for the current frame.
    fn render(&self, commands: &mut Vec<RenderCommand>);
}
