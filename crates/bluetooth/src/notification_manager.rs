//! Notification ring buffer fed by the Alert Notification client.
//!
//! Holds at most [`MAX_NOTIFICATIONS`] entries, newest at index 0. When a
//! notification arrives on a full buffer the oldest one is evicted. Ids
//! start at 1 and only ever grow.

use heapless::Vec;
use platform::{Category, Notification, NotificationId, NotificationStore, MAX_NOTIFICATIONS};

/// Bounded notification store, newest first.
pub struct NotificationManager {
    notifications: Vec<Notification, MAX_NOTIFICATIONS>,
    last_id: u32,
    new_notification: bool,
}

impl NotificationManager {
    /// Create an empty store.
    pub const fn new() -> Self {
        NotificationManager {
            notifications: Vec::new(),
            last_id: 0,
            new_notification: false,
        }
    }

    /// Store an incoming notification and return its id.
    ///
    /// Evicts the oldest entry when the buffer is full and raises the
    /// "new notification" flag. Once every id has been handed out the
    /// notification is dropped and `None` is returned, so ids are never
    /// reused.
    pub fn push(
        &mut self,
        category: Category,
        title: &str,
        message: &str,
        arrived_at: u64,
    ) -> Option<NotificationId> {
        let Some(raw) = self.last_id.checked_add(1) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("notification ids exhausted, dropping notification");
            return None;
        };
        self.last_id = raw;
        let id = NotificationId::new(raw);

        if self.notifications.is_full() {
            self.notifications.pop();
        }
        // Cannot fail: a slot was freed above when the buffer was full.
        self.notifications
            .insert(0, Notification::new(id, category, arrived_at, title, message))
            .ok();
        self.new_notification = true;
        Some(id)
    }

    /// Whether a notification arrived since the flag was last cleared.
    #[must_use]
    pub fn has_new_notification(&self) -> bool {
        self.new_notification
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.notifications.iter().position(|n| n.id == id)
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore for NotificationManager {
    fn last(&self) -> Option<Notification> {
        self.notifications.first().cloned()
    }

    fn get(&self, id: NotificationId) -> Option<Notification> {
        self.notifications.iter().find(|n| n.id == id).cloned()
    }

    fn previous(&self, id: NotificationId) -> Option<Notification> {
        let idx = self.position(id)?;
        self.notifications.get(idx.checked_add(1)?).cloned()
    }

    fn next(&self, id: NotificationId) -> Option<Notification> {
        let idx = self.position(id)?;
        self.notifications.get(idx.checked_sub(1)?).cloned()
    }

    fn index_of(&self, id: NotificationId) -> Option<usize> {
        self.position(id)
    }

    fn count(&self) -> usize {
        self.notifications.len()
    }

    fn dismiss(&mut self, id: NotificationId) {
        if let Some(idx) = self.position(id) {
            self.notifications.remove(idx);
        }
    }

    fn clear_new_flag(&mut self) {
        self.new_notification = false;
    }

    fn category_at(&self, index: usize) -> Option<Category> {
        self.notifications.get(index).map(|n| n.category)
    }
}
