//! Presentation object for one displayed notification.
//!
//! A [`NotificationView`] is built from a store snapshot and never updated
//! from the store afterwards. When the selection changes the presenter drops
//! it and builds a new one.

use core::fmt::Write as _;

use embedded_graphics::geometry::Point;
use embedded_graphics::prelude::*;
use heapless::{String, Vec};
use platform::{Category, Notification, NotificationStore, MAX_NOTIFICATIONS, MESSAGE_SIZE};

use crate::layout;

/// Title shown when the notification has none, and on the placeholder.
pub const DEFAULT_TITLE: &str = "Notification";

/// Body of the placeholder shown when there is nothing to display.
pub const PLACEHOLDER_MESSAGE: &str = "No notification to display";

/// Line shown above the caller's name for incoming calls.
pub const CALL_SUBJECT: &str = "Incoming call from";

/// Label of the bulk dismiss button.
pub const DISMISS_ALL_LABEL: &str = "Dismiss\n  All";

/// Tappable controls of a notification view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemButton {
    /// "Dismiss All" (only while revealed by a left swipe).
    DismissAll,
    /// Answer the incoming call.
    AcceptCall,
    /// Hang up the incoming call.
    RejectCall,
    /// Silence the ringer.
    MuteCall,
}

/// Everything the renderer needs to draw one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    title: String<MESSAGE_SIZE>,
    message: String<MESSAGE_SIZE>,
    category: Category,
    position: usize,
    count: usize,
    age: Option<String<12>>,
    stack: Vec<Category, MAX_NOTIFICATIONS>,
    clear_button_visible: bool,
    running: bool,
}

impl NotificationView {
    /// Build the view of `notification` as currently stored in `store`.
    ///
    /// `now_unix` is the wall time used for the age label; `0` (clock not
    /// set) omits the label.
    pub fn new(notification: &Notification, store: &dyn NotificationStore, now_unix: u64) -> Self {
        let count = store.count();
        let position = store
            .index_of(notification.id)
            .map_or(0, |idx| idx.saturating_add(1));

        let mut stack = Vec::new();
        if notification.category != Category::IncomingCall {
            for idx in 0..count.min(MAX_NOTIFICATIONS) {
                stack
                    .push(store.category_at(idx).unwrap_or_default())
                    .ok();
            }
        }

        Self {
            title: display_title(&notification.title),
            message: notification.message.clone(),
            category: notification.category,
            position,
            count,
            age: format_age(notification.arrived_at, now_unix),
            stack,
            clear_button_visible: false,
            running: true,
        }
    }

    /// The "nothing to display" view.
    pub fn placeholder() -> Self {
        Self {
            title: platform::notification::truncated(DEFAULT_TITLE),
            message: platform::notification::truncated(PLACEHOLDER_MESSAGE),
            category: Category::Unknown,
            position: 0,
            count: 0,
            age: None,
            stack: Vec::new(),
            clear_button_visible: false,
            running: true,
        }
    }

    /// Title with line breaks flattened.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Message body (the caller for incoming calls).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Category of the displayed notification.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the answer / hang-up / mute controls are shown.
    pub fn is_call(&self) -> bool {
        self.category == Category::IncomingCall
    }

    /// 1-based position in the stack (0 for the placeholder).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of stored notifications when the view was built.
    pub fn count(&self) -> usize {
        self.count
    }

    /// `"n/N"` counter text.
    pub fn counter(&self) -> String<8> {
        let mut s = String::new();
        // Cannot overflow: two numbers of at most 3 digits plus '/'.
        write!(s, "{}/{}", self.position, self.count).ok();
        s
    }

    /// Age label such as `"5m ago"`.
    pub fn age(&self) -> Option<&str> {
        self.age.as_deref()
    }

    /// Category of every stored notification, newest first (empty for calls).
    pub fn stack(&self) -> &[Category] {
        &self.stack
    }

    /// Whether the stack slot at `index` is the displayed one.
    pub fn is_selected(&self, index: usize) -> bool {
        index.checked_add(1) == Some(self.position)
    }

    /// Whether "Dismiss All" is revealed.
    pub fn clear_button_visible(&self) -> bool {
        self.clear_button_visible
    }

    /// Reveal "Dismiss All" and slide the content out of its way.
    pub fn show_clear_button(&mut self) {
        self.clear_button_visible = true;
    }

    /// Hide "Dismiss All" and slide the content back.
    pub fn hide_clear_button(&mut self) {
        self.clear_button_visible = false;
    }

    /// Horizontal offset applied to the whole content container.
    pub fn content_offset(&self) -> i32 {
        if self.clear_button_visible {
            layout::CLEAR_BUTTON_SHIFT
        } else {
            0
        }
    }

    /// Control under `point`, if any.
    pub fn button_at(&self, point: Point) -> Option<ItemButton> {
        if self.clear_button_visible && layout::clear_button().contains(point) {
            return Some(ItemButton::DismissAll);
        }
        if !self.is_call() {
            return None;
        }
        let shift = Point::new(self.content_offset(), 0);
        [
            (layout::accept_button(), ItemButton::AcceptCall),
            (layout::reject_button(), ItemButton::RejectCall),
            (layout::mute_button(), ItemButton::MuteCall),
        ]
        .into_iter()
        .find(|(rect, _)| rect.translate(shift).contains(point))
        .map(|(_, button)| button)
    }

    /// `false` once a call control closed the screen.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
    }
}

/// Title with newlines replaced by spaces, or [`DEFAULT_TITLE`] when empty.
fn display_title(title: &str) -> String<MESSAGE_SIZE> {
    if title.is_empty() {
        return platform::notification::truncated(DEFAULT_TITLE);
    }
    let mut out = String::new();
    for c in title.chars() {
        let c = if c == '\n' { ' ' } else { c };
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Human age of a notification: minutes, then hours from 60 min, then days
/// from 24 h. `None` when the clock is not set.
#[must_use]
pub fn format_age(arrived_at: u64, now_unix: u64) -> Option<String<12>> {
    if now_unix == 0 {
        return None;
    }
    let minutes = now_unix.saturating_sub(arrived_at) / 60;
    let (value, unit) = if minutes >= 60 * 24 {
        (minutes / (60 * 24), 'd')
    } else if minutes >= 60 {
        (minutes / 60, 'h')
    } else {
        (minutes, 'm')
    };
    let mut s = String::new();
    write!(s, "{value}{unit} ago").ok()?;
    Some(s)
}
