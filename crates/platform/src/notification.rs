//! Notification store abstraction
//!
//! The store is owned by the BLE layer; screens only query it through
//! [`NotificationStore`]. Index `0` is always the most recent notification.
//! "Previous" walks toward older notifications, "next" toward newer ones.

use core::fmt;

/// Maximum number of bytes kept for a title or a message body.
pub const MESSAGE_SIZE: usize = 100;

/// Number of notifications the watch keeps at most.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Stable handle of a notification.
///
/// Ids are handed out in increasing order and never reused, so a handle
/// held by a screen may go stale but can never point at another
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationId(u32);

impl NotificationId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification category, as announced by the phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// Category not announced or not recognised
    #[default]
    Unknown,
    /// Generic alert
    SimpleAlert,
    /// E-mail
    Email,
    /// News item
    News,
    /// Phone is ringing
    IncomingCall,
    /// Call that was not answered
    MissedCall,
    /// SMS / MMS
    Sms,
    /// Voice mail
    VoiceMail,
    /// Calendar entry
    Schedule,
    /// High priority alert
    HighPriorityAlert,
    /// Chat message
    InstantMessage,
}

impl Category {
    /// Map an Alert Notification category id (0..=9) to a category.
    #[must_use]
    pub const fn from_ans_id(id: u8) -> Self {
        match id {
            0 => Self::SimpleAlert,
            1 => Self::Email,
            2 => Self::News,
            3 => Self::IncomingCall,
            4 => Self::MissedCall,
            5 => Self::Sms,
            6 => Self::VoiceMail,
            7 => Self::Schedule,
            8 => Self::HighPriorityAlert,
            9 => Self::InstantMessage,
            _ => Self::Unknown,
        }
    }

    /// Short ASCII glyph used in the notification stack indicator.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Unknown | Self::SimpleAlert => "!",
            Self::Email => "@",
            Self::News => "N",
            Self::IncomingCall | Self::MissedCall => "T",
            Self::Sms | Self::InstantMessage => "M",
            Self::VoiceMail => "V",
            Self::Schedule => "S",
            Self::HighPriorityAlert => "*",
        }
    }
}

/// A notification as stored on the watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Stable id.
    pub id: NotificationId,
    /// Category announced by the phone.
    pub category: Category,
    /// Arrival time (Unix seconds).
    pub arrived_at: u64,
    /// Title line (sender, app name, caller...).
    pub title: heapless::String<MESSAGE_SIZE>,
    /// Message body.
    pub message: heapless::String<MESSAGE_SIZE>,
}

impl Notification {
    /// Build a notification, truncating `title` and `message` to
    /// [`MESSAGE_SIZE`] bytes on a char boundary.
    #[must_use]
    pub fn new(
        id: NotificationId,
        category: Category,
        arrived_at: u64,
        title: &str,
        message: &str,
    ) -> Self {
        Self {
            id,
            category,
            arrived_at,
            title: truncated(title),
            message: truncated(message),
        }
    }
}

/// Copy as much of `text` as fits into a bounded string.
#[must_use]
pub fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Ordered notification collection, newest first.
///
/// Lookups never fail: a missing notification is `None`. All operations are
/// synchronous.
pub trait NotificationStore {
    /// Most recent notification.
    fn last(&self) -> Option<Notification>;

    /// Notification with exactly this id.
    fn get(&self, id: NotificationId) -> Option<Notification>;

    /// The notification that arrived just before `id`.
    fn previous(&self, id: NotificationId) -> Option<Notification>;

    /// The notification that arrived just after `id`.
    fn next(&self, id: NotificationId) -> Option<Notification>;

    /// Position of `id`, `0` being the newest.
    fn index_of(&self, id: NotificationId) -> Option<usize>;

    /// Number of stored notifications.
    fn count(&self) -> usize;

    /// Remove `id`. Removing an unknown id does nothing; removing a stored
    /// id reduces [`count`](Self::count) by exactly one.
    fn dismiss(&mut self, id: NotificationId);

    /// Acknowledge that the user has seen the pending notifications.
    fn clear_new_flag(&mut self);

    /// Category of the notification at `index`.
    fn category_at(&self, index: usize) -> Option<Category>;
}
