//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use phonebox_core::{ScreenId, auth::PIN_LENGTH, notifications::PREVIEW_LEN};

use super::{Invariant, InvariantResult, PhoneSnapshot, Violation};

/// The active screen must be reachable in the current lock state.
///
/// While locked only lock, PIN, call screens and lock-bypass apps may show.
pub struct ScreenReachable;

impl Invariant for ScreenReachable {
    fn name(&self) -> &'static str {
        "screen_reachable"
    }

    fn check(&self, state: &PhoneSnapshot) -> InvariantResult {
        let Some(screen) = state.screen_id() else {
            return Err(Violation {
                invariant: self.name(),
                message: format!("unknown screen {}", state.screen),
            });
        };

        if screen.reachable(state.locked, state.current_app.as_deref()) {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!(
                    "{} shown while locked={} with app {:?}",
                    state.screen, state.locked, state.current_app
                ),
            })
        }
    }
}

/// The PIN buffer holds at most four ASCII digits, and is empty off the
/// keypad screen.
pub struct PinBufferBounded;

impl Invariant for PinBufferBounded {
    fn name(&self) -> &'static str {
        "pin_buffer_bounded"
    }

    fn check(&self, state: &PhoneSnapshot) -> InvariantResult {
        let entered = &state.pin_entered;
        if entered.len() > PIN_LENGTH || !entered.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Violation {
                invariant: self.name(),
                message: format!("PIN buffer {entered:?}"),
            });
        }
        if !entered.is_empty() && state.screen_id() != Some(ScreenId::Pin) {
            return Err(Violation {
                invariant: self.name(),
                message: format!("PIN buffer {entered:?} left behind on {}", state.screen),
            });
        }
        Ok(())
    }
}

/// The call duration timer runs exactly while a call is active.
pub struct CallTimerArmedIffActive;

impl Invariant for CallTimerArmedIffActive {
    fn name(&self) -> &'static str {
        "call_timer_armed_iff_active"
    }

    fn check(&self, state: &PhoneSnapshot) -> InvariantResult {
        let active = state.call_state == "active";
        if active == state.call_timer_armed {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!(
                    "call {} but duration timer armed={}",
                    state.call_state, state.call_timer_armed
                ),
            })
        }
    }
}

/// The lock screen preview is the newest notifications, in order.
pub struct PreviewIsPrefix;

impl Invariant for PreviewIsPrefix {
    fn name(&self) -> &'static str {
        "preview_is_prefix"
    }

    fn check(&self, state: &PhoneSnapshot) -> InvariantResult {
        let expected = &state.notifications[..state.notifications.len().min(PREVIEW_LEN)];
        if state.preview == expected {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("preview {:?}, newest {:?}", state.preview, expected),
            })
        }
    }
}

/// The app container only shows with a foreground app, and content only
/// exists for the foreground app.
pub struct AppContainerHasApp;

impl Invariant for AppContainerHasApp {
    fn name(&self) -> &'static str {
        "app_container_has_app"
    }

    fn check(&self, state: &PhoneSnapshot) -> InvariantResult {
        let on_container = state.screen == ScreenId::AppContainer.as_str();
        if on_container && state.current_app.is_none() {
            return Err(Violation {
                invariant: self.name(),
                message: "app container shown without an app".into(),
            });
        }
        if state.has_content && state.current_app.is_none() {
            return Err(Violation {
                invariant: self.name(),
                message: "content loaded without an app".into(),
            });
        }
        Ok(())
    }
}

/// Call screens only show for a call in the matching state.
pub struct CallScreenMatchesCall;

impl Invariant for CallScreenMatchesCall {
    fn name(&self) -> &'static str {
        "call_screen_matches_call"
    }

    fn check(&self, state: &PhoneSnapshot) -> InvariantResult {
        let expected = match state.screen_id() {
            Some(ScreenId::CallIncoming) => "incoming",
            Some(ScreenId::CallActive) => "active",
            _ => return Ok(()),
        };
        if state.call_state == expected {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("{} shown with call {}", state.screen, state.call_state),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PhoneSnapshot {
        PhoneSnapshot {
            screen: "lock",
            locked: true,
            current_app: None,
            has_content: false,
            pin_entered: String::new(),
            call_state: "idle",
            call_timer_armed: false,
            notifications: vec![],
            preview: vec![],
            recents: vec![],
        }
    }

    #[test]
    fn home_while_locked_violates() {
        let state = PhoneSnapshot { screen: "home", ..snapshot() };
        assert!(ScreenReachable.check(&state).is_err());
        assert!(ScreenReachable.check(&PhoneSnapshot { locked: false, ..state }).is_ok());
    }

    #[test]
    fn bypass_app_reachable_while_locked() {
        let state = PhoneSnapshot {
            screen: "app-container",
            current_app: Some("dialer".into()),
            ..snapshot()
        };
        assert!(ScreenReachable.check(&state).is_ok());
        assert!(AppContainerHasApp.check(&state).is_ok());
    }

    #[test]
    fn long_pin_buffer_violates() {
        let state = PhoneSnapshot { pin_entered: "12345".into(), ..snapshot() };
        assert!(PinBufferBounded.check(&state).is_err());
    }

    #[test]
    fn partial_pin_only_on_keypad() {
        let on_keypad = PhoneSnapshot { screen: "pin", pin_entered: "12".into(), ..snapshot() };
        assert!(PinBufferBounded.check(&on_keypad).is_ok());

        let on_call = PhoneSnapshot { screen: "call-incoming", ..on_keypad };
        assert!(PinBufferBounded.check(&on_call).is_err());
    }

    #[test]
    fn stray_call_timer_violates() {
        let state = PhoneSnapshot { call_timer_armed: true, ..snapshot() };
        assert!(CallTimerArmedIffActive.check(&state).is_err());
    }

    #[test]
    fn preview_must_be_newest_three() {
        let state = PhoneSnapshot {
            notifications: vec![5, 4, 3, 2],
            preview: vec![5, 4, 3],
            ..snapshot()
        };
        assert!(PreviewIsPrefix.check(&state).is_ok());
        assert!(PreviewIsPrefix.check(&PhoneSnapshot { preview: vec![4, 3, 2], ..state }).is_err());
    }

    #[test]
    fn call_screen_without_call_violates() {
        let state = PhoneSnapshot { screen: "call-active", ..snapshot() };
        assert!(CallScreenMatchesCall.check(&state).is_err());
    }
}
