//! Pilot access gate
//!
//! A client-side convenience barrier in front of the LOI signing embed:
//! one shared passphrase from the invitation letter, compared after
//! trimming and lowercasing. The code and the comparison ship in the
//! bundle, so this is explicitly not an authentication mechanism — it
//! only keeps the signing widget out of casual view.

use crate::config;

/// Fixed message for a wrong code.
pub const GATE_ERROR: &str = "Invalid code. Please check your invitation letter.";

/// Result of an unlock attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockAttempt {
    Unlocked,
    BadCode,
    /// Still inside the cooldown from a previous wrong code.
    CoolingDown,
    /// Nothing entered; not counted as an attempt.
    Empty,
}

/// Gate state. Reset whenever the gate is closed; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessGate {
    pub entry: String,
    pub unlocked: bool,
    pub error: Option<String>,
    cooldown_until_ms: Option<f64>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the entered code. Clears the error as soon as the user
    /// starts typing again.
    pub fn set_entry(&mut self, value: String) {
        self.entry = value;
        if self.error.is_some() {
            self.error = None;
        }
    }

    /// Whether the unlock control should be disabled right now.
    pub fn is_cooling(&self, now_ms: f64) -> bool {
        self.cooldown_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Compare the trimmed, lowercased entry against the configured code.
    /// A wrong code sets the fixed error and starts a short cooldown to
    /// blunt rapid guessing.
    pub fn attempt_unlock(&mut self, now_ms: f64) -> UnlockAttempt {
        if self.entry.trim().is_empty() {
            return UnlockAttempt::Empty;
        }
        if self.is_cooling(now_ms) {
            return UnlockAttempt::CoolingDown;
        }
        if self.entry.trim().to_lowercase() == config::PILOT_ACCESS_CODE {
            self.unlocked = true;
            self.error = None;
            self.cooldown_until_ms = None;
            UnlockAttempt::Unlocked
        } else {
            self.error = Some(GATE_ERROR.to_string());
            self.cooldown_until_ms = Some(now_ms + config::GATE_COOLDOWN_MS);
            UnlockAttempt::BadCode
        }
    }

    /// Close the gate: everything resets, including a granted unlock.
    pub fn close(&mut self) {
        *self = AccessGate::default();
    }
}
