//! In-memory [`Driver`] for scenario tests.
//!
//! Tests push keys and host messages in, read captured host requests out, and
//! step a [`phonebox_app::Runtime`] exactly as the terminal binary would.
//!
//! Timers are virtual: a started timer is due one period after the
//! [`SimEnv`] clock reading at the time it was scheduled, and fires only when
//! the test calls [`SimDriver::advance`].

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use chrono::TimeDelta;
use phonebox_app::{App, AppEvent, Driver, DriverEvent, KeyInput};
use phonebox_core::{Environment, TimerCommand, TimerHandle, WallTime};
use phonebox_proto::HostRequest;

use crate::{
    SimEnv,
    invariants::{InvariantRegistry, PhoneSnapshot},
};

/// The simulated phone was used after `stop` or given a bad timer.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sim driver: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

#[derive(Debug, Clone, Copy)]
struct VirtualTimer {
    handle: TimerHandle,
    due: WallTime,
    period: TimeDelta,
    repeat: bool,
}

/// Queues shared between the driver and the test holding a clone.
#[derive(Default)]
struct SharedState {
    pending: VecDeque<DriverEvent>,
    sent: Vec<HostRequest>,
    timers: Vec<VirtualTimer>,
    renders: usize,
    stopped: bool,
}

/// Deterministic phone driver: injected input, captured requests, virtual
/// timers on a [`SimEnv`] clock.
pub struct SimDriver {
    env: SimEnv,
    state: Arc<Mutex<SharedState>>,
    invariants: Option<InvariantRegistry>,
}

impl SimDriver {
    /// Create a new simulation driver reading time from `env`.
    pub fn new(env: SimEnv) -> Self {
        Self { env, state: Arc::new(Mutex::new(SharedState::default())), invariants: None }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    fn state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.state().pending.push_back(DriverEvent::Input(event));
    }

    /// Inject a sequence of key presses.
    pub fn inject_keys(&self, keys: impl IntoIterator<Item = KeyInput>) {
        let mut state = self.state();
        state.pending.extend(keys.into_iter().map(|key| DriverEvent::Input(AppEvent::Key(key))));
    }

    /// Inject a raw host message.
    pub fn inject_host(&self, message: &str) {
        self.state().pending.push_back(DriverEvent::Host(message.as_bytes().to_vec()));
    }

    /// Take all captured host requests.
    pub fn take_sent(&self) -> Vec<HostRequest> {
        std::mem::take(&mut self.state().sent)
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.state().pending.is_empty()
    }

    /// Number of renders requested so far.
    pub fn render_count(&self) -> usize {
        self.state().renders
    }

    /// Handles of timers currently scheduled, in schedule order.
    pub fn scheduled(&self) -> Vec<TimerHandle> {
        self.state().timers.iter().map(|t| t.handle).collect()
    }

    /// Whether [`Driver::stop`] has been called.
    pub fn is_stopped(&self) -> bool {
        self.state().stopped
    }

    /// Advance the clock and queue a fire for every timer that came due.
    ///
    /// Fires are queued in due order. A repeating timer fires once per
    /// elapsed period.
    pub fn advance(&self, by: Duration) {
        let now = self.env.advance(by);
        let mut state = self.state();

        let mut fired: Vec<(WallTime, TimerHandle)> = Vec::new();
        state.timers.retain_mut(|timer| {
            while timer.due <= now {
                fired.push((timer.due, timer.handle));
                if !timer.repeat {
                    return false;
                }
                timer.due += timer.period;
            }
            true
        });

        fired.sort_by_key(|(due, handle)| (*due, handle.generation));
        state.pending.extend(fired.into_iter().map(|(_, handle)| DriverEvent::Timer(handle)));
    }

    /// Create a snapshot from App state for invariant checking.
    pub fn snapshot_from_app(&self, app: &App) -> PhoneSnapshot {
        PhoneSnapshot::from_app(app)
    }

    /// Check invariants against App state.
    pub fn check_invariants(&self, app: &App, context: &str) {
        if let Some(ref registry) = self.invariants {
            registry.assert_all(&self.snapshot_from_app(app), context);
        }
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<DriverEvent>, Self::Error> {
        Ok(self.state().pending.pop_front())
    }

    fn send_request(&mut self, request: HostRequest) -> Result<(), Self::Error> {
        tracing::trace!(action = request.action(), "captured host request");
        self.state().sent.push(request);
        Ok(())
    }

    fn schedule(&mut self, command: TimerCommand) -> Result<(), Self::Error> {
        let now = self.env.now();
        let mut state = self.state();
        if state.stopped {
            return Err(SimDriverError("schedule after stop".into()));
        }

        match command {
            TimerCommand::Start { timer, period, repeat } => {
                let period = TimeDelta::from_std(period)
                    .map_err(|e| SimDriverError(format!("timer period: {e}")))?;
                if period <= TimeDelta::zero() {
                    return Err(SimDriverError("zero timer period".into()));
                }
                state.timers.push(VirtualTimer { handle: timer, due: now + period, period, repeat });
            },
            TimerCommand::Cancel(timer) => state.timers.retain(|t| t.handle != timer),
        }
        Ok(())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.state().renders += 1;
        self.check_invariants(app, "after render");
        Ok(())
    }

    fn stop(&mut self) {
        let mut state = self.state();
        state.timers.clear();
        state.stopped = true;
    }
}
