//! Button press latch
//!
//! Edge handlers (interrupts or GPIO wait tasks) set a flag per button;
//! the main loop consumes flags one at a time. Each flag is cleared with
//! an atomic swap, so a press is seen exactly once and a press landing
//! between read and clear cannot be lost.

use portable_atomic::{AtomicBool, Ordering};

use crate::state::{Button, InputEvent};

/// One latched flag per button
pub struct ButtonLatch {
    flags: [AtomicBool; 6],
}

impl ButtonLatch {
    /// All flags clear
    pub const fn new() -> Self {
        Self {
            flags: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
        }
    }

    /// Record a rising edge. Safe to call from any context.
    pub fn press(&self, button: Button) {
        self.flags[button.index()].store(true, Ordering::Release);
    }

    /// Consume one button's flag
    pub fn take(&self, button: Button) -> bool {
        self.flags[button.index()].swap(false, Ordering::AcqRel)
    }

    /// Consume the highest-priority pending press
    ///
    /// Lower-priority presses stay latched for later cycles.
    pub fn take_next(&self) -> Option<InputEvent> {
        Button::PRIORITY
            .into_iter()
            .find(|&button| self.take(button))
            .map(InputEvent::ButtonPress)
    }

    /// Check a flag without consuming it
    pub fn is_pending(&self, button: Button) -> bool {
        self.flags[button.index()].load(Ordering::Acquire)
    }

    /// Check if any press is waiting
    pub fn any_pending(&self) -> bool {
        Button::PRIORITY.into_iter().any(|b| self.is_pending(b))
    }

    /// Drop every pending press
    pub fn clear_all(&self) {
        for flag in &self.flags {
            flag.store(false, Ordering::Release);
        }
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_flag() {
        let latch = ButtonLatch::new();
        latch.press(Button::A);

        assert!(latch.is_pending(Button::A));
        assert!(latch.take(Button::A));
        assert!(!latch.take(Button::A));
        assert!(!latch.is_pending(Button::A));
    }

    #[test]
    fn test_l_is_cleared_like_any_other() {
        let latch = ButtonLatch::new();
        latch.press(Button::L);

        assert_eq!(latch.take_next(), Some(InputEvent::ButtonPress(Button::L)));
        assert_eq!(latch.take_next(), None);
    }

    #[test]
    fn test_priority_order() {
        let latch = ButtonLatch::new();
        latch.press(Button::R);
        latch.press(Button::B);
        latch.press(Button::L);
        latch.press(Button::A);

        let order: [Option<InputEvent>; 5] = core::array::from_fn(|_| latch.take_next());
        assert_eq!(
            order,
            [
                Some(InputEvent::ButtonPress(Button::L)),
                Some(InputEvent::ButtonPress(Button::A)),
                Some(InputEvent::ButtonPress(Button::B)),
                Some(InputEvent::ButtonPress(Button::R)),
                None,
            ]
        );
    }

    #[test]
    fn test_repeated_press_collapses() {
        let latch = ButtonLatch::new();
        latch.press(Button::X);
        latch.press(Button::X);

        assert!(latch.take(Button::X));
        assert!(!latch.any_pending());
    }

    #[test]
    fn test_clear_all() {
        let latch = ButtonLatch::default();
        latch.press(Button::Y);
        latch.press(Button::R);
        latch.clear_all();
        assert!(!latch.any_pending());
    }
}
