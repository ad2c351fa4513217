//! Phone invariants checked after every simulated step.
//!
//! Scenario tests pin down particular sequences; the checks here state what
//! must be true of the phone no matter how it got there. Each check reads a
//! [`PhoneSnapshot`], so the rules never reach into `App` internals.
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! registry.check_all(&PhoneSnapshot::from_app(&app))?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    AppContainerHasApp, CallScreenMatchesCall, CallTimerArmedIffActive, PinBufferBounded,
    PreviewIsPrefix, ScreenReachable,
};
pub use snapshot::PhoneSnapshot;

/// Outcome of a single check.
pub type InvariantResult = Result<(), Violation>;

/// A rule that did not hold.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Rule name.
    pub invariant: &'static str,
    /// What the snapshot looked like.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A rule over [`PhoneSnapshot`].
pub trait Invariant: Send + Sync {
    /// Short identifier used in violation reports.
    fn name(&self) -> &'static str;

    /// Evaluate the rule.
    fn check(&self, state: &PhoneSnapshot) -> InvariantResult;
}

/// Ordered set of rules run together.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// No rules.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Every phone rule.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(ScreenReachable);
        registry.add(PinBufferBounded);
        registry.add(CallTimerArmedIffActive);
        registry.add(PreviewIsPrefix);
        registry.add(AppContainerHasApp);
        registry.add(CallScreenMatchesCall);
        registry
    }

    /// Append a rule.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Run every rule, collecting all failures rather than stopping at the
    /// first.
    pub fn check_all(&self, snapshot: &PhoneSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|rule| rule.check(snapshot).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Panic listing every failed rule. `context` says where in the run the
    /// snapshot was taken.
    #[allow(clippy::panic, reason = "test assertion helper")]
    pub fn assert_all(&self, snapshot: &PhoneSnapshot, context: &str) {
        if let Err(violations) = self.check_all(snapshot) {
            let report: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("phone invariants broken {context}:\n  {}", report.join("\n  "));
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
