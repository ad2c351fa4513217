//! Screen routing.
//!
//! Exactly one [`ScreenId`] is active at any time. The [`Router`] only
//! records which one; deciding whether a screen may be shown given the lock
//! and app state is the caller's job (see [`ScreenId::reachable`]).

use std::{fmt, str::FromStr};

use crate::error::UnknownScreen;

/// Full-overlay views, one visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Clock, date, notification preview, unlock button.
    Lock,
    /// PIN keypad.
    Pin,
    /// App grid.
    Home,
    /// Foreground app.
    AppContainer,
    /// Ringing call.
    CallIncoming,
    /// Call in progress.
    CallActive,
    /// Recently opened apps.
    Recents,
}

impl ScreenId {
    /// Every screen.
    pub const ALL: [Self; 7] = [
        Self::Lock,
        Self::Pin,
        Self::Home,
        Self::AppContainer,
        Self::CallIncoming,
        Self::CallActive,
        Self::Recents,
    ];

    /// Stable name of the screen.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::Pin => "pin",
            Self::Home => "home",
            Self::AppContainer => "app-container",
            Self::CallIncoming => "call-incoming",
            Self::CallActive => "call-active",
            Self::Recents => "recents",
        }
    }

    /// Whether the screen may be shown in the given lock/app state.
    ///
    /// While locked only the lock, PIN and call screens are reachable, plus
    /// the app container when the foreground app bypasses the lock.
    #[must_use]
    pub fn reachable(self, locked: bool, current_app: Option<&str>) -> bool {
        if !locked {
            return true;
        }
        match self {
            Self::Lock | Self::Pin | Self::CallIncoming | Self::CallActive => true,
            Self::AppContainer => current_app.is_some_and(crate::apps::bypasses_lock),
            Self::Home | Self::Recents => false,
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_owned()))
    }
}

/// Tracks the active screen.
#[derive(Debug, Clone)]
pub struct Router {
    active: ScreenId,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router showing the lock screen.
    pub fn new() -> Self {
        Self { active: ScreenId::Lock }
    }

    /// Currently active screen.
    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Activate `screen`. Returns `true` if the active screen changed.
    pub fn show(&mut self, screen: ScreenId) -> bool {
        let changed = self.active != screen;
        self.active = screen;
        changed
    }

    /// Activate a screen by name. Unknown names leave the router unchanged.
    pub fn show_named(&mut self, name: &str) -> bool {
        match name.parse::<ScreenId>() {
            Ok(screen) => self.show(screen),
            Err(e) => {
                tracing::debug!(%e, "ignoring request for unknown screen");
                false
            },
        }
    }

    /// Whether `screen` is the active one.
    pub fn is(&self, screen: ScreenId) -> bool {
        self.active == screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_lock() {
        assert_eq!(Router::new().active(), ScreenId::Lock);
    }

    #[test]
    fn show_is_idempotent() {
        let mut router = Router::new();
        assert!(router.show(ScreenId::Home));
        assert!(!router.show(ScreenId::Home));
        assert!(router.is(ScreenId::Home));
    }

    #[test]
    fn unknown_name_is_noop() {
        let mut router = Router::new();
        router.show(ScreenId::Pin);

        assert!(!router.show_named("settings-screen"));
        assert_eq!(router.active(), ScreenId::Pin);

        assert!(router.show_named("call-active"));
        assert_eq!(router.active(), ScreenId::CallActive);
    }

    #[test]
    fn names_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(screen.as_str().parse::<ScreenId>(), Ok(screen));
        }
    }

    #[test]
    fn locked_reachability() {
        let locked = true;
        assert!(ScreenId::Lock.reachable(locked, None));
        assert!(ScreenId::Pin.reachable(locked, None));
        assert!(ScreenId::CallIncoming.reachable(locked, None));
        assert!(ScreenId::CallActive.reachable(locked, None));
        assert!(!ScreenId::Home.reachable(locked, None));
        assert!(!ScreenId::Recents.reachable(locked, None));
        assert!(ScreenId::AppContainer.reachable(locked, Some("camera")));
        assert!(ScreenId::AppContainer.reachable(locked, Some("dialer")));
        assert!(!ScreenId::AppContainer.reachable(locked, Some("messages")));
        assert!(!ScreenId::AppContainer.reachable(locked, None));
    }

    #[test]
    fn everything_reachable_when_unlocked() {
        for screen in ScreenId::ALL {
            assert!(screen.reachable(false, None));
        }
    }
}
