//! Lock and PIN authentication.
//!
//! # State Machine
//!
//! ```text
//!            unlock() [no PIN]
//! ┌────────┐ ───────────────────────────────> ┌──────────┐
//! │ Locked │  enter_digit() x4 [PIN matches]  │ Unlocked │
//! │        │ ───────────────────────────────> │          │
//! └────────┘ <─────────────────────────────── └──────────┘
//!     ↑ │               lock()
//!     └─┘ enter_digit() x4 [mismatch]
//! ```
//!
//! The configured PIN is owned by the host and passed in on every call, so a
//! host push that changes or removes it takes effect on the next attempt.

/// Number of digits in a PIN.
pub const PIN_LENGTH: usize = 4;

/// Result of asking to unlock from the lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// No PIN is configured; the phone is now unlocked.
    Unlocked,
    /// A PIN is configured; the caller should show the keypad.
    PinRequired,
}

/// Result of a verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// PIN matched; the phone is now unlocked.
    Accepted,
    /// PIN did not match; the phone stays locked.
    Rejected,
}

/// Result of a keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOutcome {
    /// Not a digit, or the buffer was already full.
    Ignored,
    /// Digit appended; buffer not yet complete.
    Buffered,
    /// Digit completed the PIN and verification ran.
    Verified(Verification),
}

/// Lock state and PIN entry buffer.
#[derive(Debug, Clone)]
pub struct AuthController {
    locked: bool,
    entered: String,
    verifications: u64,
}

impl Default for AuthController {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthController {
    /// Create a locked controller with an empty buffer.
    pub fn new() -> Self {
        Self { locked: true, entered: String::with_capacity(PIN_LENGTH), verifications: 0 }
    }

    /// Whether the phone is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Digits entered so far.
    pub fn entered(&self) -> &str {
        &self.entered
    }

    /// Number of digits entered so far.
    pub fn entered_len(&self) -> usize {
        self.entered.len()
    }

    /// Total verification attempts since creation.
    pub fn verifications(&self) -> u64 {
        self.verifications
    }

    /// Unlock without a PIN if none is configured.
    pub fn unlock(&mut self, pin: Option<&str>) -> UnlockOutcome {
        if configured(pin).is_some() {
            UnlockOutcome::PinRequired
        } else {
            self.locked = false;
            self.entered.clear();
            UnlockOutcome::Unlocked
        }
    }

    /// Append a digit. The fourth digit triggers verification.
    pub fn enter_digit(&mut self, digit: char, pin: Option<&str>) -> DigitOutcome {
        if !digit.is_ascii_digit() || self.entered.len() >= PIN_LENGTH {
            return DigitOutcome::Ignored;
        }

        self.entered.push(digit);
        if self.entered.len() == PIN_LENGTH {
            DigitOutcome::Verified(self.verify(pin))
        } else {
            DigitOutcome::Buffered
        }
    }

    /// Remove the last digit. Returns `false` if the buffer was empty.
    pub fn remove_digit(&mut self) -> bool {
        self.entered.pop().is_some()
    }

    /// Compare the buffer against the configured PIN and clear it.
    ///
    /// The buffer is empty afterwards regardless of the outcome.
    pub fn verify(&mut self, pin: Option<&str>) -> Verification {
        self.verifications += 1;
        let accepted = configured(pin).is_some_and(|pin| pin == self.entered);
        self.entered.clear();

        if accepted {
            self.locked = false;
            Verification::Accepted
        } else {
            Verification::Rejected
        }
    }

    /// Discard any partial entry without changing the lock state.
    pub fn clear_entry(&mut self) {
        self.entered.clear();
    }

    /// Force the locked state and discard any partial entry.
    pub fn lock(&mut self) {
        self.locked = true;
        self.entered.clear();
    }
}

/// A PIN counts as configured only when non-empty.
fn configured(pin: Option<&str>) -> Option<&str> {
    pin.filter(|p| !p.is_empty())
}
