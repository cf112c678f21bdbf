//! Notification screens: the carousel and the arrival preview.
//!
//! [`Notifications`] owns at most one [`NotificationView`] at a time. Every
//! transition drops the current view and builds a fresh one from the store;
//! nothing else is remembered between transitions except the cursor id,
//! which is re-resolved against the store whenever it may have gone stale.
//!
//! Collaborators are borrowed for the lifetime of the screen through
//! [`Controllers`]. Dropping the screen always stops the motor and then
//! re-allows sleep, whatever state it was in.

use embassy_time::Instant;
use embedded_graphics::geometry::Point;
use platform::{
    CallControl, Category, Haptics, Notification, NotificationId, NotificationStore,
    SleepInhibitor, TouchEvent, WallClock,
};

use crate::config::NotificationsConfig;
use crate::countdown::Countdown;
use crate::log::{debug, info};
use crate::notification_item::{ItemButton, NotificationView};
use crate::screen::{RefreshDirection, ScreenTask};

/// Services the notification screens talk to.
pub struct Controllers<'a> {
    /// Notification storage, owned by the BLE layer.
    pub store: &'a mut dyn NotificationStore,
    /// Vibration motor.
    pub motor: &'a mut dyn Haptics,
    /// System task sleep gate.
    pub system: &'a mut dyn SleepInhibitor,
    /// Call responses sent back to the phone.
    pub calls: &'a mut dyn CallControl,
    /// Wall clock for the age label.
    pub clock: &'a dyn WallClock,
}

/// How the screen was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Browsing, opened by the user.
    Normal,
    /// Arrival alert with auto-close countdown.
    Preview,
}

/// Observable state of the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresenterState {
    /// Placeholder shown, nothing to browse.
    Empty,
    /// A notification is on screen.
    Showing(NotificationId),
    /// "Dismiss All" revealed next to the notification.
    DismissMenuOpen(NotificationId),
    /// Black dismiss transition running; the id the next refresh will show,
    /// `None` when the screen closes instead.
    Dismissing(Option<NotificationId>),
}

/// What the renderer should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'v> {
    /// A notification (or the placeholder).
    Item(&'v NotificationView),
    /// Full-screen black box of the dismiss transition.
    Black,
}

/// Notification carousel / preview screen.
pub struct Notifications<'a> {
    ctl: Controllers<'a>,
    mode: Mode,
    current_id: Option<NotificationId>,
    valid_display: bool,
    item: Option<NotificationView>,
    dismissing: bool,
    dismiss_menu_open: bool,
    after_dismiss_from_above: bool,
    interacted: bool,
    countdown: Option<Countdown>,
    running: bool,
    generation: u32,
    full_refresh: Option<RefreshDirection>,
}

impl<'a> Notifications<'a> {
    /// Open the screen on the most recent notification.
    ///
    /// In [`Mode::Preview`] this also starts the motor (ringing for incoming
    /// calls, a short buzz otherwise), keeps the watch awake and starts the
    /// auto-close countdown at `now`.
    pub fn new(
        ctl: Controllers<'a>,
        mode: Mode,
        config: &NotificationsConfig,
        now: Instant,
    ) -> Self {
        ctl.store.clear_new_flag();
        let last = ctl.store.last();

        let mut this = Self {
            ctl,
            mode,
            current_id: None,
            valid_display: false,
            item: None,
            dismissing: false,
            dismiss_menu_open: false,
            after_dismiss_from_above: false,
            interacted: false,
            countdown: None,
            running: true,
            generation: 0,
            full_refresh: None,
        };

        match &last {
            Some(notification) => {
                this.current_id = Some(notification.id);
                this.valid_display = true;
                this.rebuild(notification);
            }
            None => this.rebuild_placeholder(),
        }
        info!(
            "notifications opened, {} stored",
            this.ctl.store.count()
        );

        if mode == Mode::Preview {
            this.ctl.system.disable_sleeping();
            let category = last.as_ref().map_or(Category::Unknown, |n| n.category);
            if category == Category::IncomingCall {
                this.ctl.motor.start_ringing();
            } else {
                this.ctl.motor.run_for_duration(config.buzz_ms());
            }
            this.countdown = Some(Countdown::start(
                now,
                config.preview_timeout(),
                config.countdown_width(),
            ));
        }
        this
    }

    /// Mode the screen was opened in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current state of the carousel.
    #[must_use]
    pub fn state(&self) -> PresenterState {
        if self.dismissing {
            // A preview closes on the next refresh instead of showing another id.
            let next = match self.mode {
                Mode::Preview => None,
                Mode::Normal => self.resolve().map(|n| n.id),
            };
            return PresenterState::Dismissing(next);
        }
        match (self.valid_display, self.current_id) {
            (true, Some(id)) if self.dismiss_menu_open => PresenterState::DismissMenuOpen(id),
            (true, Some(id)) => PresenterState::Showing(id),
            _ => PresenterState::Empty,
        }
    }

    /// What to draw.
    #[must_use]
    pub fn content(&self) -> Content<'_> {
        match &self.item {
            Some(view) => Content::Item(view),
            None => Content::Black,
        }
    }

    /// The displayed view, `None` during the dismiss transition.
    #[must_use]
    pub fn view(&self) -> Option<&NotificationView> {
        self.item.as_ref()
    }

    /// Length of the preview countdown line at `now`, while it is shown.
    #[must_use]
    pub fn countdown_extent(&self, now: Instant) -> Option<i64> {
        self.countdown.as_ref().map(|c| c.remaining(now).max(0))
    }

    /// Number of views built since the screen opened.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the first preview tap was already handled.
    #[must_use]
    pub fn interacted(&self) -> bool {
        self.interacted
    }

    /// Handle a tap at `point`: a visible button if one is hit, otherwise a
    /// plain [`TouchEvent::Tap`].
    pub fn on_tap(&mut self, point: Point) -> bool {
        match self.item.as_ref().and_then(|view| view.button_at(point)) {
            Some(button) => self.on_button_press(button),
            None => self.on_touch_event(TouchEvent::Tap),
        }
    }

    /// Handle a press on one of the view's buttons.
    pub fn on_button_press(&mut self, button: ItemButton) -> bool {
        match button {
            ItemButton::DismissAll => self.dismiss_all(),
            ItemButton::AcceptCall | ItemButton::RejectCall | ItemButton::MuteCall => {
                self.on_call_button(button)
            }
        }
    }

    /// Handle a gesture. Returns `false` when the gesture was not consumed.
    pub fn on_touch_event(&mut self, event: TouchEvent) -> bool {
        if self.dismissing {
            // Nothing is on screen until the next refresh resolves the cursor.
            return true;
        }
        match self.mode {
            Mode::Preview => self.on_preview_touch(event),
            Mode::Normal => self.on_normal_touch(event),
        }
    }

    /// Periodic tick.
    pub fn refresh(&mut self, now: Instant) {
        match self.mode {
            Mode::Preview => {
                if let Some(countdown) = &self.countdown {
                    if countdown.expired(now) {
                        info!("preview timed out");
                        self.running = false;
                    }
                } else if self.dismissing {
                    self.running = false;
                }
            }
            Mode::Normal if self.dismissing => self.finish_dismiss(),
            Mode::Normal => {}
        }

        if let Some(view) = &self.item {
            self.running = self.running && view.is_running();
        }
    }

    /// Whether the screen wants to stay open.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Take the pending full-repaint hint.
    pub fn take_full_refresh(&mut self) -> Option<RefreshDirection> {
        self.full_refresh.take()
    }

    fn on_preview_touch(&mut self, event: TouchEvent) -> bool {
        match event {
            TouchEvent::Tap if !self.interacted => {
                self.interacted = true;
                self.ctl.motor.stop_ringing();
                self.ctl.system.enable_sleeping();
                self.countdown = None;
                true
            }
            TouchEvent::SwipeRight => {
                if let (true, Some(id)) = (self.valid_display, self.current_id) {
                    self.ctl.store.dismiss(id);
                }
                self.countdown = None;
                self.dismiss_to_black();
                true
            }
            _ => false,
        }
    }

    fn on_normal_touch(&mut self, event: TouchEvent) -> bool {
        match event {
            TouchEvent::SwipeRight => {
                if self.dismiss_menu_open {
                    // Closing the menu consumes the swipe.
                    if let Some(view) = self.item.as_mut() {
                        view.hide_clear_button();
                    }
                    self.dismiss_menu_open = false;
                    self.full_refresh = Some(RefreshDirection::Left);
                    true
                } else if let (true, Some(id)) = (self.valid_display, self.current_id) {
                    self.dismiss_with_neighbour(id);
                    self.dismiss_to_black();
                    true
                } else {
                    false
                }
            }
            TouchEvent::SwipeLeft => {
                if self.ctl.store.count() == 0 {
                    return false;
                }
                if !self.dismiss_menu_open {
                    if let Some(view) = self.item.as_mut() {
                        view.show_clear_button();
                    }
                    self.dismiss_menu_open = true;
                    self.full_refresh = Some(RefreshDirection::Right);
                }
                true
            }
            TouchEvent::SwipeDown => {
                let older = match (self.valid_display, self.current_id) {
                    (true, Some(id)) => self.ctl.store.previous(id),
                    _ => self.ctl.store.last(),
                };
                if let Some(notification) = older {
                    self.show(&notification, RefreshDirection::Down);
                }
                true
            }
            TouchEvent::SwipeUp => {
                let newer = match (self.valid_display, self.current_id) {
                    (true, Some(id)) => self.ctl.store.next(id),
                    _ => self.ctl.store.last(),
                };
                match newer {
                    Some(notification) => {
                        self.show(&notification, RefreshDirection::Up);
                        true
                    }
                    None => {
                        if self.valid_display {
                            self.running = false;
                        }
                        false
                    }
                }
            }
            _ => false,
        }
    }

    fn on_call_button(&mut self, button: ItemButton) -> bool {
        let Some(view) = self.item.as_mut() else {
            return false;
        };
        if !view.is_call() {
            return false;
        }
        self.ctl.motor.stop_ringing();
        match button {
            ItemButton::AcceptCall => self.ctl.calls.accept_incoming_call(),
            ItemButton::RejectCall => self.ctl.calls.reject_incoming_call(),
            ItemButton::MuteCall => self.ctl.calls.mute_incoming_call(),
            ItemButton::DismissAll => {}
        }
        view.stop();
        self.running = false;
        true
    }

    /// Remove `id`, moving the cursor to the older neighbour, else the newer
    /// one. With neither the cursor is left stale for the next refresh.
    fn dismiss_with_neighbour(&mut self, id: NotificationId) {
        let older = self.ctl.store.previous(id);
        let newer = self.ctl.store.next(id);
        self.after_dismiss_from_above = older.is_some();
        self.ctl.store.dismiss(id);
        if let Some(n) = older.or(newer) {
            self.current_id = Some(n.id);
        }
    }

    fn dismiss_all(&mut self) -> bool {
        if !self.dismiss_menu_open || self.ctl.store.count() == 0 {
            return false;
        }
        debug!("dismissing all {} notifications", self.ctl.store.count());
        while self.ctl.store.count() != 0 {
            let Some(target) = self.resolve() else {
                break;
            };
            self.dismiss_with_neighbour(target.id);
        }
        self.dismiss_to_black();
        true
    }

    fn dismiss_to_black(&mut self) {
        self.item = None;
        self.dismissing = true;
        self.dismiss_menu_open = false;
        self.full_refresh = Some(RefreshDirection::RightAnim);
    }

    fn finish_dismiss(&mut self) {
        self.dismissing = false;
        let resolved = self.resolve();
        self.full_refresh = Some(if self.after_dismiss_from_above {
            RefreshDirection::Down
        } else {
            RefreshDirection::Up
        });
        match resolved {
            Some(notification) => {
                self.current_id = Some(notification.id);
                self.valid_display = true;
                self.rebuild(&notification);
            }
            None => {
                debug!("store empty after dismiss, closing");
                self.valid_display = false;
                self.rebuild_placeholder();
                self.running = false;
            }
        }
    }

    /// The cursor notification if it still exists, else the most recent one.
    fn resolve(&self) -> Option<Notification> {
        self.current_id
            .and_then(|id| self.ctl.store.get(id))
            .or_else(|| self.ctl.store.last())
    }

    fn show(&mut self, notification: &Notification, direction: RefreshDirection) {
        self.current_id = Some(notification.id);
        self.valid_display = true;
        self.dismiss_menu_open = false;
        self.full_refresh = Some(direction);
        self.rebuild(notification);
    }

    fn rebuild(&mut self, notification: &Notification) {
        // Old generation is gone before the new one is built.
        self.item = None;
        self.item = Some(NotificationView::new(
            notification,
            &*self.ctl.store,
            self.ctl.clock.now_unix(),
        ));
        self.generation = self.generation.saturating_add(1);
    }

    fn rebuild_placeholder(&mut self) {
        self.item = None;
        self.item = Some(NotificationView::placeholder());
        self.generation = self.generation.saturating_add(1);
    }
}

impl Drop for Notifications<'_> {
    fn drop(&mut self) {
        self.ctl.motor.stop_ringing();
        self.ctl.system.enable_sleeping();
    }
}

impl ScreenTask for Notifications<'_> {
    fn on_touch_event(&mut self, event: TouchEvent) -> bool {
        Notifications::on_touch_event(self, event)
    }

    fn refresh(&mut self, now: Instant) {
        Notifications::refresh(self, now);
    }

    fn is_running(&self) -> bool {
        Notifications::is_running(self)
    }

    fn take_full_refresh(&mut self) -> Option<RefreshDirection> {
        Notifications::take_full_refresh(self)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use bluetooth::NotificationManager;
    use embassy_time::Duration;
    use platform::mocks::{Command, CommandLog, MockCalls, MockClock, MockHaptics, MockSleep};

    struct Rig {
        log: CommandLog,
        clock: MockClock,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                log: CommandLog::new(),
                clock: MockClock::new(10_000),
            }
        }
    }

    fn store_abc() -> NotificationManager {
        let mut store = NotificationManager::new();
        store.push(Category::Sms, "A", "oldest", 9_000);
        store.push(Category::Email, "B", "middle", 9_500);
        store.push(Category::News, "C", "newest", 9_900);
        store
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    macro_rules! open {
        ($rig:expr, $store:expr, $motor:ident, $sleep:ident, $calls:ident, $mode:expr) => {{
            Notifications::new(
                Controllers {
                    store: &mut $store,
                    motor: &mut $motor,
                    system: &mut $sleep,
                    calls: &mut $calls,
                    clock: &$rig.clock,
                },
                $mode,
                &NotificationsConfig::default(),
                at(0),
            )
        }};
    }

    #[test]
    fn test_open_normal_shows_last_and_clears_flag() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(3)));
        let view = screen.view().expect("view");
        assert_eq!(view.title(), "C");
        assert_eq!(view.counter().as_str(), "1/3");
        assert_eq!(screen.generation(), 1);
        drop(screen);
        assert!(!store.has_new_notification());
    }

    #[test]
    fn test_open_normal_empty_shows_placeholder() {
        let rig = Rig::new();
        let mut store = NotificationManager::new();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert_eq!(screen.state(), PresenterState::Empty);
        assert_eq!(
            screen.view().map(NotificationView::title),
            Some("Notification")
        );
        assert!(screen.is_running());
    }

    #[test]
    fn test_swipe_down_walks_to_oldest_then_stops() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(screen.on_touch_event(TouchEvent::SwipeDown));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(2)));
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::Down));
        assert!(screen.on_touch_event(TouchEvent::SwipeDown));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(1)));
        let generation = screen.generation();
        assert!(screen.on_touch_event(TouchEvent::SwipeDown));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(1)));
        assert_eq!(screen.generation(), generation);
        assert!(screen.is_running());
    }

    #[test]
    fn test_swipe_up_past_newest_closes() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(screen.on_touch_event(TouchEvent::SwipeDown));
        assert!(screen.on_touch_event(TouchEvent::SwipeUp));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(3)));
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::Up));
        assert!(!screen.on_touch_event(TouchEvent::SwipeUp));
        assert!(!screen.is_running());
    }

    #[test]
    fn test_swipe_up_on_empty_not_handled_and_unchanged() {
        let rig = Rig::new();
        let mut store = NotificationManager::new();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        let generation = screen.generation();
        assert!(!screen.on_touch_event(TouchEvent::SwipeUp));
        assert_eq!(screen.state(), PresenterState::Empty);
        assert!(screen.is_running());
        assert_eq!(screen.generation(), generation);
        assert_eq!(screen.take_full_refresh(), None);
    }

    #[test]
    fn test_swipe_down_on_empty_is_handled_noop() {
        let rig = Rig::new();
        let mut store = NotificationManager::new();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(screen.on_touch_event(TouchEvent::SwipeDown));
        assert_eq!(screen.state(), PresenterState::Empty);
    }

    #[test]
    fn test_dismiss_prefers_older_neighbour() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        screen.on_touch_event(TouchEvent::SwipeDown); // on B
        assert!(screen.on_touch_event(TouchEvent::SwipeRight));
        assert_eq!(screen.content(), Content::Black);
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::RightAnim));
        assert_eq!(
            screen.state(),
            PresenterState::Dismissing(Some(NotificationId::new(1)))
        );
        screen.refresh(at(20));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(1)));
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::Down));
        assert_eq!(screen.view().map(NotificationView::count), Some(2));
    }

    #[test]
    fn test_dismiss_oldest_moves_to_newer() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        screen.on_touch_event(TouchEvent::SwipeDown);
        screen.on_touch_event(TouchEvent::SwipeDown); // on A
        screen.on_touch_event(TouchEvent::SwipeRight);
        screen.refresh(at(20));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(2)));
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::Up));
    }

    #[test]
    fn test_dismiss_only_notification_closes_on_refresh() {
        let rig = Rig::new();
        let mut store = NotificationManager::new();
        store.push(Category::Sms, "only", "one", 9_000);
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(screen.on_touch_event(TouchEvent::SwipeRight));
        assert!(screen.is_running(), "dismiss itself does not close");
        assert_eq!(screen.state(), PresenterState::Dismissing(None));
        screen.refresh(at(20));
        assert_eq!(screen.state(), PresenterState::Empty);
        assert!(!screen.is_running());
    }

    #[test]
    fn test_dismiss_menu_open_and_close() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(screen.on_touch_event(TouchEvent::SwipeLeft));
        assert_eq!(
            screen.state(),
            PresenterState::DismissMenuOpen(NotificationId::new(3))
        );
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::Right));
        assert!(screen.view().is_some_and(NotificationView::clear_button_visible));

        assert!(screen.on_touch_event(TouchEvent::SwipeLeft));
        assert_eq!(screen.take_full_refresh(), None);

        assert!(screen.on_touch_event(TouchEvent::SwipeRight));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(3)));
        assert_eq!(screen.take_full_refresh(), Some(RefreshDirection::Left));
        drop(screen);
        assert_eq!(store.count(), 3, "closing the menu dismisses nothing");
    }

    #[test]
    fn test_swipe_left_on_empty_not_handled() {
        let rig = Rig::new();
        let mut store = NotificationManager::new();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(!screen.on_touch_event(TouchEvent::SwipeLeft));
        assert_eq!(screen.state(), PresenterState::Empty);
    }

    #[test]
    fn test_dismiss_all_empties_store() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(!screen.on_button_press(ItemButton::DismissAll), "menu closed");
        screen.on_touch_event(TouchEvent::SwipeLeft);
        let button = crate::layout::clear_button().center();
        assert!(screen.on_tap(button));
        assert_eq!(screen.state(), PresenterState::Dismissing(None));
        screen.refresh(at(20));
        assert!(!screen.is_running());
        drop(screen);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_stale_cursor_falls_back_to_last() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        screen.on_touch_event(TouchEvent::SwipeDown);
        screen.on_touch_event(TouchEvent::SwipeDown); // on A
        // Dismiss A; cursor moves to B. Remove B behind the screen's back.
        screen.on_touch_event(TouchEvent::SwipeRight);
        screen.ctl.store.dismiss(NotificationId::new(2));
        screen.refresh(at(20));
        assert_eq!(screen.state(), PresenterState::Showing(NotificationId::new(3)));
    }

    #[test]
    fn test_preview_buzzes_and_inhibits_sleep() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        assert_eq!(rig.log.count(Command::RunForDuration(35)), 1);
        assert_eq!(rig.log.count(Command::StartRinging), 0);
        assert_eq!(rig.log.count(Command::DisableSleeping), 1);
        assert_eq!(screen.countdown_extent(at(0)), Some(240));
    }

    #[test]
    fn test_preview_countdown_expiry_closes_without_dismiss() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        screen.refresh(at(3_000));
        assert!(screen.is_running());
        screen.refresh(at(7_000));
        assert!(!screen.is_running());
        assert_eq!(screen.countdown_extent(at(7_000)), Some(0));
        drop(screen);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_preview_first_tap_stops_motor_then_allows_sleep() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        rig.log.clear();
        assert!(screen.on_touch_event(TouchEvent::Tap));
        assert!(screen.interacted());
        assert_eq!(
            rig.log.entries().as_slice(),
            &[Command::StopRinging, Command::EnableSleeping]
        );
        assert_eq!(screen.countdown_extent(at(0)), None);
        screen.refresh(at(60_000));
        assert!(screen.is_running(), "no timeout after interaction");
        assert!(!screen.on_touch_event(TouchEvent::Tap), "second tap ignored");
    }

    #[test]
    fn test_preview_swipe_right_dismisses_and_closes() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        assert!(screen.on_touch_event(TouchEvent::SwipeRight));
        assert_eq!(screen.content(), Content::Black);
        assert_eq!(
            screen.state(),
            PresenterState::Dismissing(None),
            "the preview never shows the next notification"
        );
        assert!(screen.is_running());
        screen.refresh(at(20));
        assert!(!screen.is_running());
        drop(screen);
        assert_eq!(store.count(), 2);
        assert!(store.get(NotificationId::new(3)).is_none());
    }

    #[test]
    fn test_preview_other_gestures_not_handled() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        assert!(!screen.on_touch_event(TouchEvent::SwipeUp));
        assert!(!screen.on_touch_event(TouchEvent::SwipeLeft));
        assert!(screen.is_running());
    }

    #[test]
    fn test_incoming_call_rings_and_reject_stops() {
        let rig = Rig::new();
        let mut store = store_abc();
        store.push(Category::IncomingCall, "Mom", "+123", 9_990);
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        assert_eq!(rig.log.count(Command::StartRinging), 1);
        assert_eq!(rig.log.count(Command::RunForDuration(35)), 0);
        assert!(screen.on_button_press(ItemButton::RejectCall));
        assert!(!screen.is_running());
        let stop = rig.log.position(Command::StopRinging).expect("stop");
        let reject = rig.log.position(Command::RejectCall).expect("reject");
        assert!(stop < reject);
    }

    fn answer_call(button: ItemButton, expected: Command) {
        let rig = Rig::new();
        let mut store = store_abc();
        store.push(Category::IncomingCall, "Mom", "+123", 9_990);
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        assert!(screen.on_button_press(button));
        assert!(!screen.is_running());
        let stop = rig.log.position(Command::StopRinging).expect("stop");
        let sent = rig.log.position(expected).expect("call command");
        assert!(stop < sent);
        let call_commands = [Command::AcceptCall, Command::RejectCall, Command::MuteCall];
        for other in call_commands.into_iter().filter(|c| *c != expected) {
            assert_eq!(rig.log.count(other), 0);
        }
    }

    #[test]
    fn test_accept_stops_ringing_then_answers() {
        answer_call(ItemButton::AcceptCall, Command::AcceptCall);
    }

    #[test]
    fn test_mute_stops_ringing_then_mutes() {
        answer_call(ItemButton::MuteCall, Command::MuteCall);
    }

    #[test]
    fn test_call_buttons_ignored_for_other_categories() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        assert!(!screen.on_button_press(ItemButton::AcceptCall));
        assert!(screen.is_running());
        assert_eq!(rig.log.count(Command::AcceptCall), 0);
    }

    #[test]
    fn test_drop_stops_motor_before_allowing_sleep() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let screen = open!(rig, store, motor, sleep, calls, Mode::Preview);
        rig.log.clear();
        drop(screen);
        assert_eq!(
            rig.log.entries().as_slice(),
            &[Command::StopRinging, Command::EnableSleeping]
        );
        assert!(sleep.sleep_allowed());
    }

    #[test]
    fn test_gestures_swallowed_during_dismiss() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let mut screen = open!(rig, store, motor, sleep, calls, Mode::Normal);
        screen.on_touch_event(TouchEvent::SwipeRight);
        assert!(screen.on_touch_event(TouchEvent::SwipeRight));
        screen.refresh(at(20));
        drop(screen);
        assert_eq!(store.count(), 2, "second swipe must not dismiss again");
    }

    #[test]
    fn test_countdown_uses_configured_timeout() {
        let rig = Rig::new();
        let mut store = store_abc();
        let (mut motor, mut sleep, mut calls) = (
            MockHaptics::new(&rig.log),
            MockSleep::new(&rig.log),
            MockCalls::new(&rig.log),
        );
        let config =
            NotificationsConfig::new(Duration::from_millis(2_400), 240).expect("valid config");
        let mut screen = Notifications::new(
            Controllers {
                store: &mut store,
                motor: &mut motor,
                system: &mut sleep,
                calls: &mut calls,
                clock: &rig.clock,
            },
            Mode::Preview,
            &config,
            at(0),
        );
        assert_eq!(screen.countdown_extent(at(1_200)), Some(120));
        screen.refresh(at(2_400));
        assert!(!screen.is_running());
    }
}
