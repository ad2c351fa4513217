//! Generation-tagged timers.
//!
//! The phone never sleeps or spawns anything itself. Arming a timer produces
//! a [`TimerCommand`] for the driver, which later reports a fire carrying the
//! [`TimerHandle`] it was given. Each arm bumps the generation for that kind,
//! so a fire from a cancelled or replaced instance no longer matches and is
//! dropped by [`TimerTable::accept`].

use std::time::Duration;

/// Timers the phone uses. At most one instance of each kind runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Wall clock refresh. Periodic for the life of the process.
    Clock,
    /// Call duration counter. Periodic while a call is active.
    CallDuration,
    /// Clears the wrong-PIN error pulse. One-shot.
    PinError,
    /// Dismisses the notification popup. One-shot.
    Popup,
}

impl TimerKind {
    /// Every timer kind.
    pub const ALL: [Self; 4] = [Self::Clock, Self::CallDuration, Self::PinError, Self::Popup];

    const fn index(self) -> usize {
        match self {
            Self::Clock => 0,
            Self::CallDuration => 1,
            Self::PinError => 2,
            Self::Popup => 3,
        }
    }

    /// Whether the timer re-fires until cancelled.
    pub const fn repeats(self) -> bool {
        matches!(self, Self::Clock | Self::CallDuration)
    }
}

/// Identifies one armed instance of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    /// Timer kind.
    pub kind: TimerKind,
    /// Instance generation. Only the latest generation is live.
    pub generation: u64,
}

/// Instruction for the driver's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Schedule a timer. Report each fire with `timer`.
    Start {
        /// Handle to report on fire.
        timer: TimerHandle,
        /// Delay before the first fire, and between fires if repeating.
        period: Duration,
        /// Keep firing until cancelled.
        repeat: bool,
    },
    /// Stop a scheduled timer.
    Cancel(TimerHandle),
}

/// Timer periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Clock refresh period.
    pub clock: Duration,
    /// Call duration tick.
    pub call_tick: Duration,
    /// How long the wrong-PIN error stays visible.
    pub pin_error: Duration,
    /// How long a notification popup stays visible.
    pub popup: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            clock: Duration::from_secs(1),
            call_tick: Duration::from_secs(1),
            pin_error: Duration::from_millis(500),
            popup: Duration::from_secs(3),
        }
    }
}

impl TimerConfig {
    /// Period for `kind`.
    pub const fn period(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::Clock => self.clock,
            TimerKind::CallDuration => self.call_tick,
            TimerKind::PinError => self.pin_error,
            TimerKind::Popup => self.popup,
        }
    }
}

/// Tracks the live instance of each timer kind.
#[derive(Debug, Clone, Default)]
pub struct TimerTable {
    config: TimerConfig,
    armed: [Option<u64>; 4],
    next_generation: u64,
}

impl TimerTable {
    /// Create a table with nothing armed.
    pub fn new(config: TimerConfig) -> Self {
        Self { config, armed: [None; 4], next_generation: 0 }
    }

    /// Configured periods.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Whether an instance of `kind` is live.
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed[kind.index()].is_some()
    }

    /// Live handle for `kind`.
    pub fn handle(&self, kind: TimerKind) -> Option<TimerHandle> {
        self.armed[kind.index()].map(|generation| TimerHandle { kind, generation })
    }

    /// Arm `kind`, cancelling any live instance first.
    pub fn arm(&mut self, kind: TimerKind) -> Vec<TimerCommand> {
        let mut commands = Vec::with_capacity(2);
        commands.extend(self.disarm(kind));

        let generation = self.next_generation;
        self.next_generation += 1;
        self.armed[kind.index()] = Some(generation);

        commands.push(TimerCommand::Start {
            timer: TimerHandle { kind, generation },
            period: self.config.period(kind),
            repeat: kind.repeats(),
        });
        commands
    }

    /// Cancel the live instance of `kind`, if any.
    pub fn disarm(&mut self, kind: TimerKind) -> Option<TimerCommand> {
        self.armed[kind.index()]
            .take()
            .map(|generation| TimerCommand::Cancel(TimerHandle { kind, generation }))
    }

    /// Check a fire against the live instance.
    ///
    /// Returns `false` for stale handles. A fire of a one-shot timer disarms
    /// it.
    pub fn accept(&mut self, timer: TimerHandle) -> bool {
        let slot = &mut self.armed[timer.kind.index()];
        if *slot != Some(timer.generation) {
            tracing::trace!(?timer, "dropping stale timer fire");
            return false;
        }
        if !timer.kind.repeats() {
            *slot = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(commands: &[TimerCommand]) -> TimerHandle {
        match commands.last() {
            Some(TimerCommand::Start { timer, .. }) => *timer,
            other => panic!("expected start, got {other:?}"),
        }
    }

    #[test]
    fn arm_then_fire() {
        let mut timers = TimerTable::new(TimerConfig::default());
        let commands = timers.arm(TimerKind::Clock);

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            TimerCommand::Start { period, repeat: true, .. } if period == Duration::from_secs(1)
        ));

        let handle = started(&commands);
        assert!(timers.accept(handle));
        assert!(timers.accept(handle));
        assert!(timers.is_armed(TimerKind::Clock));
    }

    #[test]
    fn rearm_cancels_previous_instance() {
        let mut timers = TimerTable::new(TimerConfig::default());
        let first = started(&timers.arm(TimerKind::CallDuration));

        let commands = timers.arm(TimerKind::CallDuration);
        assert_eq!(commands[0], TimerCommand::Cancel(first));
        let second = started(&commands);

        assert!(!timers.accept(first));
        assert!(timers.accept(second));
    }

    #[test]
    fn disarmed_fires_are_stale() {
        let mut timers = TimerTable::new(TimerConfig::default());
        let handle = started(&timers.arm(TimerKind::CallDuration));

        assert_eq!(timers.disarm(TimerKind::CallDuration), Some(TimerCommand::Cancel(handle)));
        assert_eq!(timers.disarm(TimerKind::CallDuration), None);
        assert!(!timers.accept(handle));
    }

    #[test]
    fn one_shot_disarms_on_fire() {
        let mut timers = TimerTable::new(TimerConfig::default());
        let commands = timers.arm(TimerKind::PinError);
        assert!(matches!(
            commands[0],
            TimerCommand::Start { period, repeat: false, .. } if period == Duration::from_millis(500)
        ));

        let handle = started(&commands);
        assert!(timers.accept(handle));
        assert!(!timers.is_armed(TimerKind::PinError));
        assert!(!timers.accept(handle));
    }

    #[test]
    fn kinds_are_independent() {
        let mut timers = TimerTable::new(TimerConfig::default());
        let clock = started(&timers.arm(TimerKind::Clock));
        timers.arm(TimerKind::Popup);
        timers.disarm(TimerKind::Popup);

        assert!(timers.accept(clock));
        assert_eq!(timers.handle(TimerKind::Clock), Some(clock));
        assert_eq!(timers.handle(TimerKind::Popup), None);
    }
}
