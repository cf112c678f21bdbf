//! Navigation state machine: a bounded stack of [`Screen`]s.
//!
//! The stack is capped at 8 entries (embedded-safe, no heap). Opening a
//! screen on a full stack is a silent no-op.
//!
//! The navigator also owns the pending full-repaint hint. Screens hand their
//! hints over through [`Navigator::sync`]; the display task takes the hint
//! once per frame.

use heapless::Vec;

use crate::screen::{RefreshDirection, Screen, ScreenTask};

/// Navigation stack bounded at 8 entries.
pub struct Navigator {
    stack: Vec<Screen, 8>,
    full_refresh: Option<RefreshDirection>,
}

impl Navigator {
    /// Create a new navigator with the watch face as the root screen.
    pub fn new() -> Self {
        let mut stack = Vec::new();
        // This push always succeeds: the stack starts empty and cap is 8.
        stack.push(Screen::Clock).ok();
        Navigator {
            stack,
            full_refresh: None,
        }
    }

    /// Return the screen currently at the top of the stack.
    #[must_use]
    pub fn current(&self) -> Screen {
        match self.stack.last() {
            Some(s) => *s,
            None => Screen::Clock, // unreachable by construction
        }
    }

    /// Push `screen`, sliding it in from `direction`.
    pub fn open(&mut self, screen: Screen, direction: RefreshDirection) {
        if self.stack.push(screen).is_ok() {
            self.full_refresh = Some(direction);
        }
    }

    /// Pop the top screen, scheduling its return animation. Does nothing if
    /// only the root screen remains.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            if let Some(closed) = self.stack.pop() {
                self.full_refresh = Some(closed.return_direction());
            }
        }
    }

    /// Return the number of entries currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Take the pending full-repaint hint.
    pub fn take_full_refresh(&mut self) -> Option<RefreshDirection> {
        self.full_refresh.take()
    }

    /// Collect the hint of the task driving the top screen and pop the
    /// screen once the task stopped. Returns whether the task still runs.
    pub fn sync(&mut self, task: &mut dyn ScreenTask) -> bool {
        if let Some(direction) = task.take_full_refresh() {
            self.full_refresh = Some(direction);
        }
        if task.is_running() {
            return true;
        }
        self.back();
        false
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
