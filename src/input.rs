//! Per-frame pointer state.
//!
//! The bar is tap-driven: a single pointer (finger or mouse) with
//! press/release edges cleared at the start of every frame. Hosts feed
//! events in between frames and the widget samples them during update.

/// Pointer state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    x: f32,
    y: f32,
    pressed: bool,
    released: bool,
    down: bool,
}

impl PointerState {
    /// Creates an idle pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing the press/release edges.
    pub fn begin_frame(&mut self) {
        self.pressed = false;
        self.released = false;
    }

    /// Updates the pointer position.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Records a press at the given position.
    pub fn press(&mut self, x: f32, y: f32) {
        self.set_position(x, y);
        self.pressed = true;
        self.down = true;
    }

    /// Records a release.
    pub fn release(&mut self) {
        self.released = true;
        self.down = false;
    }

    /// Returns the current pointer position.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Returns true while the pointer is held down.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Returns the tap position if the pointer went down this frame.
    #[must_use]
    pub fn tapped(&self) -> Option<(f32, f32)> {
        self.pressed.then_some((self.x, self.y))
    }

    /// Returns true if the pointer was released this frame.
    #[must_use]
    pub fn was_released(&self) -> bool {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_edge_clears_next_frame() {
        let mut pointer = PointerState::new();

        pointer.press(30.0, 40.0);
        assert_eq!(pointer.tapped(), Some((30.0, 40.0)));
        assert!(pointer.is_down());

        pointer.begin_frame();
        assert_eq!(pointer.tapped(), None);
        assert!(pointer.is_down());

        pointer.release();
        assert!(pointer.was_released());
        assert!(!pointer.is_down());
    }
}
