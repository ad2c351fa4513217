//! Application state machine.
//!
//! This module defines the [`App`] state machine, which composes the phone
//! controllers and applies the navigation rules between them, completely
//! decoupled from I/O and the host transport.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute. The
//! public API methods (`unlock`, `open_app`, `answer_call`, ...) return actions
//! the same way, so keyboard handling and tests drive identical code paths.
//!
//! # Responsibilities
//!
//! - Keeps the active screen reachable for the current lock and app state.
//! - Announces user actions to the host.
//! - Arms and cancels timers so the call counter runs only while a call is
//!   active.

use phonebox_core::{
    AppSession, AuthController, CallController, CallError, CallSession, CallState, DigitOutcome,
    Notification, NotificationQueue, PhoneState, Router, ScreenId, StatusBar, TimerConfig,
    TimerHandle, TimerKind, TimerTable, UnlockOutcome, Verification, WallTime,
    apps::{self, AppInfo},
};
use phonebox_proto::{CallerData, HostRequest, NotificationPayload, Setting};

use crate::{AppAction, AppEvent, Panel, Pulses};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    router: Router,
    auth: AuthController,
    calls: CallController,
    notifications: NotificationQueue,
    apps: AppSession,
    phone: PhoneState,
    timers: TimerTable,
    /// Latest wall time seen on an event.
    now: WallTime,
    /// Overlay visibility as last set by the host.
    visible: bool,
    panel: Option<Panel>,
    pulses: Pulses,
    /// Home-screen search query.
    search: String,
    /// Cursor into the home grid or the recents list.
    selected: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a locked phone showing the lock screen.
    pub fn new(timers: TimerConfig, now: WallTime) -> Self {
        Self {
            router: Router::new(),
            auth: AuthController::new(),
            calls: CallController::new(),
            notifications: NotificationQueue::new(),
            apps: AppSession::new(),
            phone: PhoneState::default(),
            timers: TimerTable::new(timers),
            now,
            visible: false,
            panel: None,
            pulses: Pulses::default(),
            search: String::new(),
            selected: 0,
            terminal_size: (80, 24),
        }
    }

    /// Startup actions: request phone data, start the clock, render.
    pub fn start(&mut self) -> Vec<AppAction> {
        let mut actions = vec![AppAction::Host(HostRequest::RequestData)];
        actions.extend(self.arm(TimerKind::Clock));
        actions.push(AppAction::Render);
        actions
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Shown => {
                self.visible = true;
                vec![AppAction::Render]
            },
            AppEvent::Hidden => {
                self.visible = false;
                vec![AppAction::Render]
            },
            AppEvent::PhoneDataUpdated(patch) => {
                self.phone.merge(patch);
                vec![AppAction::Render]
            },
            AppEvent::CallReceived { caller, at } => self.receive_call(caller, at),
            AppEvent::CallEnded => self.finish_call(false),
            AppEvent::NotificationAdded { notification, at } => {
                self.add_notification(notification, at)
            },
            AppEvent::AppContentLoaded { app, content } => {
                if self.apps.load_content(&app, content) {
                    vec![AppAction::Render]
                } else {
                    tracing::debug!(%app, "dropping content for app that is not open");
                    vec![]
                }
            },
            AppEvent::BatteryUpdated(battery) => {
                self.phone.set_battery(battery);
                vec![AppAction::Render]
            },
            AppEvent::TimerFired { timer, now } => self.timer_fired(timer, now),
        }
    }

    /// Leave the lock screen, via the keypad if a PIN is configured.
    pub fn unlock(&mut self) -> Vec<AppAction> {
        if !self.auth.is_locked() {
            return vec![];
        }

        match self.auth.unlock(self.phone.pin_code()) {
            UnlockOutcome::Unlocked => {
                tracing::info!("phone unlocked");
                self.show_home();
            },
            UnlockOutcome::PinRequired => {
                self.router.show(ScreenId::Pin);
            },
        }
        vec![AppAction::Render]
    }

    /// Lock the phone and show the lock screen. Lock always wins over an open
    /// app; a call in progress stays reachable through [`App::resume_call`].
    pub fn lock(&mut self) -> Vec<AppAction> {
        self.auth.lock();
        self.apps.close();
        self.panel = None;
        self.search.clear();
        self.router.show(ScreenId::Lock);

        tracing::info!("phone locked");
        vec![AppAction::Host(HostRequest::Lock), AppAction::Render]
    }

    /// Keypad digit. The fourth digit verifies the PIN.
    pub fn enter_digit(&mut self, digit: char) -> Vec<AppAction> {
        if !self.router.is(ScreenId::Pin) {
            return vec![];
        }

        match self.auth.enter_digit(digit, self.phone.pin_code()) {
            DigitOutcome::Ignored => vec![],
            DigitOutcome::Buffered => vec![AppAction::Render],
            DigitOutcome::Verified(Verification::Accepted) => {
                tracing::info!("PIN accepted");
                self.pulses.pin_error = false;
                let mut actions = self.disarm(TimerKind::PinError);
                self.show_home();
                actions.push(AppAction::Render);
                actions
            },
            DigitOutcome::Verified(Verification::Rejected) => {
                tracing::debug!("PIN rejected");
                self.pulses.pin_error = true;
                let mut actions = self.arm(TimerKind::PinError);
                actions.push(AppAction::Render);
                actions
            },
        }
    }

    /// Keypad backspace.
    pub fn remove_digit(&mut self) -> Vec<AppAction> {
        if self.router.is(ScreenId::Pin) && self.auth.remove_digit() {
            vec![AppAction::Render]
        } else {
            vec![]
        }
    }

    /// Leave the keypad for the lock screen, discarding partial entry.
    pub fn cancel_pin(&mut self) -> Vec<AppAction> {
        if !self.router.is(ScreenId::Pin) {
            return vec![];
        }
        self.auth.lock();
        self.router.show(ScreenId::Lock);
        vec![AppAction::Render]
    }

    /// Ask the host to reset the PIN. The local PIN is untouched until the
    /// host pushes a new one.
    pub fn reset_pin(&self) -> Vec<AppAction> {
        vec![AppAction::Host(HostRequest::ResetPin)]
    }

    /// Close the foreground app, otherwise return home when unlocked.
    pub fn go_back(&mut self) -> Vec<AppAction> {
        if self.apps.current().is_some() {
            return self.close_app();
        }
        if !self.router.is(ScreenId::Home) && !self.auth.is_locked() {
            self.panel = None;
            self.router.show(ScreenId::Home);
            return vec![AppAction::Render];
        }
        vec![]
    }

    /// Clear the app session and show home. No-op while locked.
    pub fn go_home(&mut self) -> Vec<AppAction> {
        if self.auth.is_locked() {
            return vec![];
        }
        self.show_home();
        vec![AppAction::Render]
    }

    /// Show recently opened apps. No-op while locked.
    pub fn show_recents(&mut self) -> Vec<AppAction> {
        if self.auth.is_locked() {
            return vec![];
        }
        self.panel = None;
        self.selected = 0;
        self.router.show(ScreenId::Recents);
        vec![AppAction::Render]
    }

    /// Foreground an app and request its content from the host.
    ///
    /// While locked only lock-bypass apps (camera, dialer) open.
    pub fn open_app(&mut self, app: &str) -> Vec<AppAction> {
        if self.auth.is_locked() && !apps::bypasses_lock(app) {
            tracing::debug!(%app, "app not available while locked");
            return vec![];
        }

        self.apps.open(app);
        self.panel = None;
        self.router.show(ScreenId::AppContainer);
        vec![
            AppAction::Host(HostRequest::LoadApp { app: app.to_owned() }),
            AppAction::Host(HostRequest::OpenApp { app: app.to_owned() }),
            AppAction::Render,
        ]
    }

    /// Close the foreground app. Shows lock if locked now, home otherwise.
    pub fn close_app(&mut self) -> Vec<AppAction> {
        if self.apps.close().is_none() {
            return vec![];
        }
        let screen = self.rest_screen();
        self.router.show(screen);
        vec![AppAction::Render]
    }

    /// Answer the ringing call and start the duration counter.
    pub fn answer_call(&mut self) -> Vec<AppAction> {
        match self.calls.answer() {
            Ok(call_id) => {
                tracing::info!(call = %call_id, "call answered");
                self.router.show(ScreenId::CallActive);
                let mut actions = vec![AppAction::Host(HostRequest::AnswerCall { call_id })];
                actions.extend(self.arm(TimerKind::CallDuration));
                actions.push(AppAction::Render);
                actions
            },
            Err(e) => {
                tracing::debug!(%e, "ignoring answer");
                vec![]
            },
        }
    }

    /// Decline the ringing call.
    pub fn decline_call(&mut self) -> Vec<AppAction> {
        match self.calls.decline() {
            Ok(session) => {
                tracing::info!(call = %session.id, "call declined");
                self.leave_call();
                vec![
                    AppAction::Host(HostRequest::DeclineCall { call_id: session.id }),
                    AppAction::Render,
                ]
            },
            Err(e) => {
                tracing::debug!(%e, "ignoring decline");
                vec![]
            },
        }
    }

    /// Hang up the current call.
    pub fn end_call(&mut self) -> Vec<AppAction> {
        self.finish_call(true)
    }

    /// Return to the screen of the current call, if any.
    pub fn resume_call(&mut self) -> Vec<AppAction> {
        let screen = match self.calls.state() {
            CallState::Idle => return vec![],
            CallState::Incoming => ScreenId::CallIncoming,
            CallState::Active => ScreenId::CallActive,
        };
        self.panel = None;
        self.leave_keypad();
        self.router.show(screen);
        vec![AppAction::Render]
    }

    /// Flip a quick setting and report the new value to the host.
    pub fn toggle_setting(&mut self, setting: Setting) -> Vec<AppAction> {
        let value = self.phone.toggle(setting);
        vec![AppAction::Host(HostRequest::ToggleSetting { setting, value }), AppAction::Render]
    }

    /// Open `panel`, or close it if it is already open.
    pub fn toggle_panel(&mut self, panel: Panel) -> Vec<AppAction> {
        self.panel = if self.panel == Some(panel) { None } else { Some(panel) };
        vec![AppAction::Render]
    }

    /// Drop every notification.
    pub fn clear_notifications(&mut self) -> Vec<AppAction> {
        let dropped = self.notifications.clear();
        tracing::debug!(dropped, "notifications cleared");

        self.pulses.popup = None;
        let mut actions = self.disarm(TimerKind::Popup);
        actions.push(AppAction::Host(HostRequest::ClearNotifications));
        actions.push(AppAction::Render);
        actions
    }

    /// Replace the home-screen search query.
    pub fn set_search(&mut self, query: impl Into<String>) -> Vec<AppAction> {
        self.search = query.into();
        self.selected = 0;
        vec![AppAction::Render]
    }

    /// Move the cursor to the next item, wrapping around.
    pub fn select_next(&mut self) -> Vec<AppAction> {
        let len = self.selectable_len();
        if len == 0 {
            return vec![];
        }
        self.selected = (self.selected + 1) % len;
        vec![AppAction::Render]
    }

    /// Move the cursor to the previous item, wrapping around.
    pub fn select_prev(&mut self) -> Vec<AppAction> {
        let len = self.selectable_len();
        if len == 0 {
            return vec![];
        }
        self.selected = (self.selected + len - 1) % len;
        vec![AppAction::Render]
    }

    /// Open the app under the cursor on the home grid or recents list.
    pub fn open_selected(&mut self) -> Vec<AppAction> {
        let app = match self.router.active() {
            ScreenId::Home => self.visible_apps().get(self.selected).map(|app| app.id.to_owned()),
            ScreenId::Recents => self.apps.recents().nth(self.selected).map(str::to_owned),
            _ => None,
        };
        app.map_or_else(Vec::new, |app| self.open_app(&app))
    }

    /// Dismiss an open panel, else close the app, else go home.
    pub fn escape(&mut self) -> Vec<AppAction> {
        if self.panel.take().is_some() {
            return vec![AppAction::Render];
        }
        if self.apps.current().is_some() {
            return self.close_app();
        }
        self.go_home()
    }

    /// Ask the host to dismiss the overlay. The host answers with `hide`.
    pub fn close(&self) -> Vec<AppAction> {
        vec![AppAction::Host(HostRequest::Close)]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    fn receive_call(&mut self, caller: CallerData, at: WallTime) -> Vec<AppAction> {
        self.advance(at);
        match self.calls.receive(caller, self.now) {
            Ok(()) => {
                tracing::info!("incoming call");
                self.panel = None;
                self.leave_keypad();
                self.router.show(ScreenId::CallIncoming);
                vec![AppAction::Render]
            },
            Err(CallError::Busy { current, incoming }) => {
                tracing::debug!(%current, %incoming, "declining call while busy");
                vec![AppAction::Host(HostRequest::DeclineCall { call_id: incoming })]
            },
            Err(e) => {
                tracing::debug!(%e, "ignoring incoming call");
                vec![]
            },
        }
    }

    /// End the call. Only a user hang-up is reported back to the host.
    fn finish_call(&mut self, notify_host: bool) -> Vec<AppAction> {
        match self.calls.end() {
            Ok(session) => {
                tracing::info!(call = %session.id, duration = %session.duration_label(), "call ended");
                let mut actions = self.disarm(TimerKind::CallDuration);
                self.leave_call();
                if notify_host {
                    actions.push(AppAction::Host(HostRequest::EndCall));
                }
                actions.push(AppAction::Render);
                actions
            },
            Err(e) => {
                tracing::debug!(%e, "ignoring end call");
                vec![]
            },
        }
    }

    fn add_notification(
        &mut self,
        notification: NotificationPayload,
        at: WallTime,
    ) -> Vec<AppAction> {
        self.advance(at);
        let seq = self.notifications.add(notification, self.now).seq;
        self.pulses.popup = Some(seq);

        let mut actions = self.arm(TimerKind::Popup);
        actions.push(AppAction::Render);
        actions
    }

    fn timer_fired(&mut self, timer: TimerHandle, now: WallTime) -> Vec<AppAction> {
        self.advance(now);
        if !self.timers.accept(timer) {
            return vec![];
        }

        match timer.kind {
            TimerKind::Clock => vec![AppAction::Render],
            TimerKind::CallDuration => match self.calls.tick() {
                Ok(_) => vec![AppAction::Render],
                Err(e) => {
                    tracing::debug!(%e, "call timer fired without an active call");
                    vec![]
                },
            },
            TimerKind::PinError => {
                self.pulses.pin_error = false;
                vec![AppAction::Render]
            },
            TimerKind::Popup => {
                self.pulses.popup = None;
                vec![AppAction::Render]
            },
        }
    }

    fn leave_call(&mut self) {
        self.apps.close();
        let screen = self.rest_screen();
        self.router.show(screen);
    }

    /// A partial PIN never outlives the keypad screen.
    fn leave_keypad(&mut self) {
        if self.router.is(ScreenId::Pin) {
            self.auth.clear_entry();
        }
    }

    fn show_home(&mut self) {
        self.apps.close();
        self.panel = None;
        self.search.clear();
        self.selected = 0;
        self.router.show(ScreenId::Home);
    }

    fn rest_screen(&self) -> ScreenId {
        if self.auth.is_locked() { ScreenId::Lock } else { ScreenId::Home }
    }

    fn arm(&mut self, kind: TimerKind) -> Vec<AppAction> {
        self.timers.arm(kind).into_iter().map(AppAction::Timer).collect()
    }

    fn disarm(&mut self, kind: TimerKind) -> Vec<AppAction> {
        self.timers.disarm(kind).map(AppAction::Timer).into_iter().collect()
    }

    fn advance(&mut self, now: WallTime) {
        self.now = self.now.max(now);
    }

    fn selectable_len(&self) -> usize {
        match self.router.active() {
            ScreenId::Home => self.visible_apps().len(),
            ScreenId::Recents => self.apps.recents().count(),
            _ => 0,
        }
    }

    /// Active screen.
    pub fn screen(&self) -> ScreenId {
        self.router.active()
    }

    /// Whether the phone is locked.
    pub fn is_locked(&self) -> bool {
        self.auth.is_locked()
    }

    /// Lock state and PIN buffer.
    pub fn auth(&self) -> &AuthController {
        &self.auth
    }

    /// Call state machine.
    pub fn calls(&self) -> &CallController {
        &self.calls
    }

    /// Current call, if any.
    pub fn call(&self) -> Option<&CallSession> {
        self.calls.session()
    }

    /// Notification queue.
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Notification shown as a popup, if any.
    pub fn popup(&self) -> Option<&Notification> {
        let seq = self.pulses.popup?;
        self.notifications.iter().find(|n| n.seq == seq)
    }

    /// Foreground app, content and recents.
    pub fn app_session(&self) -> &AppSession {
        &self.apps
    }

    /// Header title for the foreground app.
    pub fn app_title(&self) -> Option<&'static str> {
        self.apps.current().map(apps::title_for)
    }

    /// Device data.
    pub fn phone(&self) -> &PhoneState {
        &self.phone
    }

    /// Timer bookkeeping.
    pub fn timers(&self) -> &TimerTable {
        &self.timers
    }

    /// Latest wall time seen.
    pub fn now(&self) -> WallTime {
        self.now
    }

    /// Status bar contents at the latest wall time.
    pub fn status_bar(&self) -> StatusBar {
        StatusBar::derive(&self.phone, self.now)
    }

    /// Whether the host has the overlay shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open panel, if any.
    pub fn panel(&self) -> Option<Panel> {
        self.panel
    }

    /// Transient visual feedback.
    pub fn pulses(&self) -> Pulses {
        self.pulses
    }

    /// Home-screen search query.
    pub fn search_query(&self) -> &str {
        &self.search
    }

    /// Registry entries matching the search query.
    pub fn visible_apps(&self) -> Vec<&'static AppInfo> {
        apps::search(&self.search).collect()
    }

    /// Cursor position on the home grid or recents list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use phonebox_core::TimerCommand;
    use phonebox_proto::PhoneDataPatch;

    use super::*;

    fn now() -> WallTime {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    fn app_with_pin(pin: Option<&str>) -> App {
        let mut app = App::new(TimerConfig::default(), now());
        let _ = app.handle(AppEvent::PhoneDataUpdated(PhoneDataPatch {
            pin_code: pin.map(str::to_owned),
            ..Default::default()
        }));
        app
    }

    fn unlocked_app() -> App {
        let mut app = app_with_pin(None);
        let _ = app.unlock();
        app
    }

    fn hosts(actions: &[AppAction]) -> Vec<&HostRequest> {
        actions
            .iter()
            .filter_map(|a| match a {
                AppAction::Host(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn api_start() {
        let mut app = App::new(TimerConfig::default(), now());
        let actions = app.start();

        assert!(matches!(actions.as_slice(), [
            AppAction::Host(HostRequest::RequestData),
            AppAction::Timer(TimerCommand::Start { repeat: true, .. }),
            AppAction::Render
        ]));
        assert_eq!(app.screen(), ScreenId::Lock);
        assert!(app.timers().is_armed(TimerKind::Clock));
    }

    #[test]
    fn api_unlock_without_pin() {
        let mut app = app_with_pin(None);
        let actions = app.unlock();

        assert_eq!(actions, [AppAction::Render]);
        assert!(!app.is_locked());
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn api_unlock_with_pin_shows_keypad() {
        let mut app = app_with_pin(Some("1234"));
        let _ = app.unlock();

        assert!(app.is_locked());
        assert_eq!(app.screen(), ScreenId::Pin);
    }

    #[test]
    fn api_lock() {
        let mut app = unlocked_app();
        let _ = app.open_app("maps");
        let actions = app.lock();

        assert_eq!(hosts(&actions), [&HostRequest::Lock]);
        assert_eq!(app.screen(), ScreenId::Lock);
        assert_eq!(app.app_session().current(), None);
    }

    #[test]
    fn api_open_app() {
        let mut app = unlocked_app();
        let actions = app.open_app("banking");

        assert_eq!(hosts(&actions), [
            &HostRequest::LoadApp { app: "banking".into() },
            &HostRequest::OpenApp { app: "banking".into() },
        ]);
        assert_eq!(app.screen(), ScreenId::AppContainer);
        assert_eq!(app.app_title(), Some("Bank"));
    }

    #[test]
    fn api_close_app_without_app_is_noop() {
        let mut app = unlocked_app();
        assert!(app.close_app().is_empty());
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn api_toggle_setting() {
        let mut app = unlocked_app();
        let actions = app.toggle_setting(Setting::Wifi);

        assert_eq!(hosts(&actions), [&HostRequest::ToggleSetting {
            setting: Setting::Wifi,
            value: false
        }]);
        assert!(!app.phone().get(Setting::Wifi));
    }

    #[test]
    fn api_reset_pin_keeps_local_pin() {
        let app = app_with_pin(Some("1234"));
        assert_eq!(app.reset_pin(), [AppAction::Host(HostRequest::ResetPin)]);
        assert_eq!(app.phone().pin_code(), Some("1234"));
    }

    #[test]
    fn go_back_while_locked_is_noop() {
        let mut app = app_with_pin(Some("1234"));
        let _ = app.unlock();
        assert!(app.go_back().is_empty());
        assert_eq!(app.screen(), ScreenId::Pin);
    }

    #[test]
    fn go_back_from_recents_goes_home() {
        let mut app = unlocked_app();
        let _ = app.show_recents();
        let _ = app.go_back();
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn stale_content_is_ignored() {
        let mut app = unlocked_app();
        let _ = app.open_app("mail");

        let actions = app.handle(AppEvent::AppContentLoaded {
            app: "maps".into(),
            content: "<map/>".into(),
        });
        assert!(actions.is_empty());
        assert_eq!(app.app_session().content(), None);

        let _ = app.handle(AppEvent::AppContentLoaded {
            app: "mail".into(),
            content: "<inbox/>".into(),
        });
        assert_eq!(app.app_session().content(), Some("<inbox/>"));
    }

    #[test]
    fn popup_clears_on_timer() {
        let mut app = unlocked_app();
        let actions = app.handle(AppEvent::NotificationAdded {
            notification: NotificationPayload { title: "Hi".into(), ..Default::default() },
            at: now(),
        });
        assert_eq!(app.popup().map(|n| n.title.as_str()), Some("Hi"));

        let Some(AppAction::Timer(TimerCommand::Start { timer, .. })) = actions.first() else {
            panic!("expected popup timer, got {actions:?}");
        };
        let _ = app.handle(AppEvent::TimerFired { timer: *timer, now: now() });
        assert!(app.popup().is_none());
    }

    #[test]
    fn search_filters_and_opens_selection() {
        let mut app = unlocked_app();
        let _ = app.set_search("cas");
        assert_eq!(app.visible_apps().iter().map(|a| a.id).collect::<Vec<_>>(), ["casino"]);

        let actions = app.open_selected();
        assert!(hosts(&actions).contains(&&HostRequest::OpenApp { app: "casino".into() }));
    }

    #[test]
    fn escape_closes_panel_first() {
        let mut app = unlocked_app();
        let _ = app.open_app("notepad");
        let _ = app.toggle_panel(Panel::QuickSettings);

        let _ = app.escape();
        assert_eq!(app.panel(), None);
        assert_eq!(app.screen(), ScreenId::AppContainer);

        let _ = app.escape();
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn wall_time_never_goes_backwards() {
        let mut app = unlocked_app();
        let earlier = now() - chrono::TimeDelta::hours(1);
        let _ = app.handle(AppEvent::NotificationAdded {
            notification: NotificationPayload::default(),
            at: earlier,
        });
        assert_eq!(app.now(), now());
    }
}
