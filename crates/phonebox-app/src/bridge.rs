//! Host-to-Application translation layer.
//!
//! The [`Bridge`] sits between the host protocol and the [`crate::App`]
//! lifecycle.
//!
//! # Responsibilities
//!
//! - Decodes inbound host messages and converts them into [`crate::AppEvent`]s,
//!   stamping wall time from the [`Environment`].
//! - Accumulates outgoing [`HostRequest`]s and [`TimerCommand`]s to be
//!   executed by the driver in the next I/O cycle.
//! - Drops malformed or unknown messages with a log line; the host is never
//!   told about them.

use phonebox_core::{Environment, TimerCommand, TimerHandle};
use phonebox_proto::{HostMessage, HostRequest, decode};

use crate::{AppAction, AppEvent};

/// Bridge between the App and the host protocol.
///
/// Generic over Environment to support both production and simulation.
pub struct Bridge<E: Environment> {
    env: E,
    outgoing: Vec<HostRequest>,
    timers: Vec<TimerCommand>,
}

impl<E: Environment> Bridge<E> {
    /// Create a new Bridge with the given environment.
    pub fn new(env: E) -> Self {
        Self { env, outgoing: Vec::new(), timers: Vec::new() }
    }

    /// Environment used for time stamps.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Queue the I/O side of an App action.
    ///
    /// Render and Quit are handled by the runtime and ignored here.
    pub fn process_app_action(&mut self, action: AppAction) {
        match action {
            AppAction::Host(request) => {
                tracing::debug!(action = request.action(), "queueing host request");
                self.outgoing.push(request);
            },
            AppAction::Timer(command) => self.timers.push(command),
            AppAction::Render | AppAction::Quit => {},
        }
    }

    /// Handle a raw inbound message.
    pub fn handle_raw(&mut self, bytes: &[u8]) -> Vec<AppEvent> {
        match decode(bytes) {
            Ok(Some(message)) => self.handle_message(message),
            Ok(None) => {
                tracing::debug!("ignoring host message with unknown action");
                vec![]
            },
            Err(e) => {
                tracing::warn!(%e, "dropping malformed host message");
                vec![]
            },
        }
    }

    /// Handle a decoded inbound message.
    pub fn handle_message(&mut self, message: HostMessage) -> Vec<AppEvent> {
        tracing::trace!(action = message.tag(), "host message");

        let event = match message {
            HostMessage::Show => AppEvent::Shown,
            HostMessage::Hide => AppEvent::Hidden,
            HostMessage::UpdatePhoneData { phone_data } => AppEvent::PhoneDataUpdated(phone_data),
            HostMessage::ReceiveCall { call_data } => {
                AppEvent::CallReceived { caller: call_data, at: self.env.now() }
            },
            HostMessage::EndCall => AppEvent::CallEnded,
            HostMessage::AddNotification { notification } => {
                AppEvent::NotificationAdded { notification, at: self.env.now() }
            },
            HostMessage::LoadAppContent { app_name, content } => {
                AppEvent::AppContentLoaded { app: app_name, content }
            },
            HostMessage::UpdateBattery { battery } => AppEvent::BatteryUpdated(battery),
        };
        vec![event]
    }

    /// Handle a timer fire reported by the driver.
    pub fn handle_timer(&mut self, timer: TimerHandle) -> Vec<AppEvent> {
        vec![AppEvent::TimerFired { timer, now: self.env.now() }]
    }

    /// Take pending host requests.
    pub fn take_outgoing(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.outgoing)
    }

    /// Take pending timer commands.
    pub fn take_timer_commands(&mut self) -> Vec<TimerCommand> {
        std::mem::take(&mut self.timers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use phonebox_core::{TimerKind, WallTime};

    use super::*;

    #[derive(Clone)]
    struct TestEnv;

    impl Environment for TestEnv {
        fn now(&self) -> WallTime {
            FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
        }
    }

    #[test]
    fn receive_call_is_stamped() {
        let mut bridge = Bridge::new(TestEnv);
        let events = bridge.handle_raw(br#"{"action":"receiveCall","callData":{"id":7}}"#);

        assert!(matches!(
            events.as_slice(),
            [AppEvent::CallReceived { caller, at }] if caller.id == 7u64.into() && *at == TestEnv.now()
        ));
    }

    #[test]
    fn unknown_and_malformed_messages_are_dropped() {
        let mut bridge = Bridge::new(TestEnv);
        assert!(bridge.handle_raw(br#"{"action":"vibrate"}"#).is_empty());
        assert!(bridge.handle_raw(b"{").is_empty());
        assert!(bridge.handle_raw(br#"{"action":"updateBattery"}"#).is_empty());
    }

    #[test]
    fn actions_are_queued_until_taken() {
        let mut bridge = Bridge::new(TestEnv);
        bridge.process_app_action(AppAction::Render);
        bridge.process_app_action(AppAction::Host(HostRequest::Lock));
        bridge.process_app_action(AppAction::Host(HostRequest::RequestData));

        assert_eq!(bridge.take_outgoing(), [HostRequest::Lock, HostRequest::RequestData]);
        assert!(bridge.take_outgoing().is_empty());
        assert!(bridge.take_timer_commands().is_empty());
    }

    #[test]
    fn timer_fire_is_stamped() {
        let mut bridge = Bridge::new(TestEnv);
        let timer = TimerHandle { kind: TimerKind::Clock, generation: 3 };

        let events = bridge.handle_timer(timer);
        assert_eq!(events, [AppEvent::TimerFired { timer, now: TestEnv.now() }]);
    }
}
