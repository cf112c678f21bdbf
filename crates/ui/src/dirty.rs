//! Change-tracked values for widgets that only redraw on change.

/// A value that remembers whether it changed since it was last read.
///
/// Starts out dirty so the first read always paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyValue<T> {
    value: T,
    updated: bool,
}

impl<T: Copy + PartialEq> DirtyValue<T> {
    /// Wrap `value`, marked as updated.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            updated: true,
        }
    }

    /// Store `value`; marks the value updated only if it differs.
    pub fn set(&mut self, value: T) {
        if self.value != value {
            self.value = value;
            self.updated = true;
        }
    }

    /// Whether the value changed since the last [`get`](Self::get).
    #[must_use]
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Read the value and clear the updated mark.
    pub fn get(&mut self) -> T {
        self.updated = false;
        self.value
    }

    /// Read the value without touching the updated mark.
    #[must_use]
    pub fn peek(&self) -> T {
        self.value
    }
}

impl<T: Copy + PartialEq + Default> Default for DirtyValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
