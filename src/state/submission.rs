//! Submission guard and the contact-form controller
//!
//! The controller owns the form record, the error map, the guard, and the
//! phase machine. The submit operation is split in two synchronous halves
//! around the one asynchronous transport call: `precheck` runs the guard
//! and validators and decides whether a network call happens at all, and
//! `finish` folds the transport result back into the state. The view layer
//! calls exactly these; the tests drive the same pair around a mock
//! transport.

use crate::config;
use crate::net::{SubmissionPayload, SubmitError};
use crate::state::{ContactForm, Field, FieldErrors};

/// Transient notice shown when submissions come too close together.
pub const RATE_LIMIT_NOTICE: &str = "Please wait a moment before submitting again.";

/// Fixed non-technical failure message. Raw error internals never reach
/// the user.
pub fn failure_notice() -> String {
    format!(
        "Sorry — something went wrong. Please email {}.",
        config::CONTACT_EMAIL
    )
}

/// Where the form sits in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Submission guard state. Owned by the page-level controller: created on
/// mount, cleared only by a full page reload. The acceptance timestamp
/// deliberately survives form resets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubmissionGuard {
    pub last_accepted_ms: Option<f64>,
    pub in_flight: bool,
}

impl SubmissionGuard {
    fn rate_limited(&self, now_ms: f64) -> bool {
        self.last_accepted_ms
            .is_some_and(|last| now_ms - last < config::RATE_LIMIT_MS)
    }
}

/// Outcome of the synchronous precondition pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Precheck {
    /// All preconditions passed; POST this payload.
    Proceed(SubmissionPayload),
    /// A submission is already in flight; ignore the trigger.
    AlreadySubmitting,
    /// Too soon after the last accepted submission; notice set.
    RateLimited,
    /// Honeypot tripped. No network call, no error, no signal to the bot.
    Dropped,
    /// Validation failed; focus this field.
    Invalid(Field),
}

/// Contact form controller: form record, error map, guard, phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactController {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    /// Rate-limit notice or fixed failure message, shown above the form.
    pub form_error: Option<String>,
    guard: SubmissionGuard,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one validatable field. Clears only that field's error entry
    /// (no re-validation until the next submit) and returns a failed form
    /// to the editable state.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear_field(field);
        if self.phase == SubmitPhase::Failed {
            self.phase = SubmitPhase::Editing;
        }
    }

    /// Run the submit preconditions in order, each short-circuiting. On
    /// `Proceed` the controller is already in the submitting phase with
    /// the in-flight flag set; every other outcome leaves it editable
    /// with the flag clear.
    pub fn precheck(&mut self, now_ms: f64) -> Precheck {
        if self.guard.in_flight {
            return Precheck::AlreadySubmitting;
        }

        if self.guard.rate_limited(now_ms) {
            self.form_error = Some(RATE_LIMIT_NOTICE.to_string());
            return Precheck::RateLimited;
        }

        self.form_error = None;
        self.errors.clear();

        if !self.form.website.trim().is_empty() {
            // Treated as a bot; do not tip it off.
            self.guard.in_flight = false;
            return Precheck::Dropped;
        }

        self.errors = self.form.validate();
        if let Some(first) = self.errors.first_invalid() {
            return Precheck::Invalid(first);
        }

        self.guard.in_flight = true;
        self.phase = SubmitPhase::Submitting;
        Precheck::Proceed(self.form.to_payload())
    }

    /// Fold the transport result back into the state. The in-flight flag
    /// is cleared on every path. `now_ms` is the instant the attempt was
    /// accepted for sending, recorded as the rate-limit anchor on success.
    pub fn finish(&mut self, result: Result<(), SubmitError>, now_ms: f64) {
        self.guard.in_flight = false;
        match result {
            Ok(()) => {
                self.guard.last_accepted_ms = Some(now_ms);
                self.form = ContactForm::default();
                self.errors.clear();
                self.form_error = None;
                self.phase = SubmitPhase::Succeeded;
            }
            Err(err) => {
                tracing::warn!(%err, "contact form submission failed");
                self.form_error = Some(failure_notice());
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    /// Explicit user action from the success card: back to an empty,
    /// editable form. The guard's acceptance timestamp is untouched.
    pub fn reset(&mut self) {
        self.form = ContactForm::default();
        self.errors.clear();
        self.form_error = None;
        self.phase = SubmitPhase::Editing;
    }

    /// Hash navigation left the contact section: a submitted form resets
    /// so a later visit starts fresh.
    pub fn reset_if_departed(&mut self, hash: &str) {
        if hash != "#contact" && self.phase == SubmitPhase::Succeeded {
            self.reset();
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    #[cfg(test)]
    pub(crate) fn guard(&self) -> SubmissionGuard {
        self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{run_submission, MockSubmitTransport, SubmitTransport, TransportError};

    fn refill(controller: &mut ContactController) {
        controller.edit(Field::Name, "Jane Doe".to_string());
        controller.edit(Field::Email, "jane@clinic.example".to_string());
        controller.edit(Field::Inquiry, "clinic".to_string());
        controller.edit(
            Field::Message,
            "We would like to join the pilot programme.".to_string(),
        );
    }

    fn filled_controller() -> ContactController {
        let mut controller = ContactController::new();
        refill(&mut controller);
        controller
    }

    /// Drive a full attempt the way the view layer does: precheck, then
    /// the transport call only when precheck says to proceed, then finish.
    fn drive(
        controller: &mut ContactController,
        transport: &dyn SubmitTransport,
        now_ms: f64,
    ) -> Precheck {
        let decision = controller.precheck(now_ms);
        if let Precheck::Proceed(ref payload) = decision {
            let result = tokio_test::block_on(run_submission(payload, transport));
            controller.finish(result, now_ms);
        }
        decision
    }

    mod preconditions {
        use super::*;

        #[test]
        fn test_in_flight_attempt_is_a_noop() {
            let mut controller = filled_controller();
            assert!(matches!(controller.precheck(0.0), Precheck::Proceed(_)));
            // Still submitting: a second trigger must not restart anything
            assert_eq!(controller.precheck(1.0), Precheck::AlreadySubmitting);
            assert_eq!(controller.phase, SubmitPhase::Submitting);
        }

        #[test]
        fn test_rate_limit_rejects_within_window() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().times(1).returning(|_| Ok(200));

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 1_000.0);
            assert_eq!(controller.phase, SubmitPhase::Succeeded);

            // Refill and retry 14.999s after acceptance: rejected with the
            // notice and no transport call (the mock allows exactly one)
            controller.reset();
            refill(&mut controller);
            let decision = drive(&mut controller, &transport, 15_999.0);
            assert_eq!(decision, Precheck::RateLimited);
            assert_eq!(controller.form_error.as_deref(), Some(RATE_LIMIT_NOTICE));
            // Form content untouched by the rejection
            assert_eq!(controller.form.name, "Jane Doe");
        }

        #[test]
        fn test_rate_limit_window_expires() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().times(2).returning(|_| Ok(200));

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 1_000.0);

            // Exactly 15s later the window has elapsed
            controller.reset();
            refill(&mut controller);
            let decision = drive(&mut controller, &transport, 16_000.0);
            assert!(matches!(decision, Precheck::Proceed(_)));
            assert_eq!(controller.phase, SubmitPhase::Succeeded);
        }

        #[test]
        fn test_honeypot_aborts_silently() {
            // Mock with zero expectations: any call panics
            let transport = MockSubmitTransport::new();
            let mut controller = filled_controller();
            controller.form.set_website("http://spam.example".to_string());

            let decision = drive(&mut controller, &transport, 0.0);
            assert_eq!(decision, Precheck::Dropped);
            // No visible signal of any kind
            assert_eq!(controller.form_error, None);
            assert!(controller.errors.is_empty());
            assert_eq!(controller.phase, SubmitPhase::Editing);
            assert!(!controller.guard().in_flight);
        }

        #[test]
        fn test_validation_failure_stops_before_network() {
            let transport = MockSubmitTransport::new();
            let mut controller = filled_controller();
            controller.edit(Field::Email, "not-an-email".to_string());

            let decision = drive(&mut controller, &transport, 0.0);
            assert_eq!(decision, Precheck::Invalid(Field::Email));
            assert!(controller.errors.get(Field::Email).is_some());
            assert_eq!(controller.phase, SubmitPhase::Editing);
        }

        #[test]
        fn test_invalid_reports_first_field_in_canonical_order() {
            let transport = MockSubmitTransport::new();
            let mut controller = filled_controller();
            controller.edit(Field::Name, "J".to_string());
            controller.edit(Field::Message, "short".to_string());

            let decision = drive(&mut controller, &transport, 0.0);
            assert_eq!(decision, Precheck::Invalid(Field::Name));
            // Both failures collected, not just the first
            assert!(controller.errors.get(Field::Name).is_some());
            assert!(controller.errors.get(Field::Message).is_some());
        }
    }

    mod outcomes {
        use super::*;

        #[test]
        fn test_success_clears_form_and_records_timestamp() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(200));

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 5_000.0);

            assert_eq!(controller.phase, SubmitPhase::Succeeded);
            assert_eq!(controller.form, ContactForm::default());
            assert_eq!(controller.guard().last_accepted_ms, Some(5_000.0));
            assert!(!controller.guard().in_flight);
        }

        #[test]
        fn test_rejected_status_fails_with_fixed_notice() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(404));

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 0.0);

            assert_eq!(controller.phase, SubmitPhase::Failed);
            assert_eq!(controller.form_error, Some(failure_notice()));
            // The form keeps its content for a retry
            assert_eq!(controller.form.name, "Jane Doe");
            assert!(!controller.guard().in_flight);
        }

        #[test]
        fn test_network_error_fails_without_leaking_internals() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| {
                Err(TransportError::Network("DNS lookup failed".to_string()))
            });

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 0.0);

            assert_eq!(controller.phase, SubmitPhase::Failed);
            let notice = controller.form_error.unwrap();
            assert!(!notice.contains("DNS"));
            assert!(notice.contains(crate::config::CONTACT_EMAIL));
        }

        #[test]
        fn test_editing_after_failure_returns_to_editing() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(500));

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 0.0);
            assert_eq!(controller.phase, SubmitPhase::Failed);

            controller.edit(Field::Message, "A new, longer message for retry.".to_string());
            assert_eq!(controller.phase, SubmitPhase::Editing);
        }
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn test_reset_preserves_guard_timestamp() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(200));

            let mut controller = filled_controller();
            drive(&mut controller, &transport, 3_000.0);
            controller.reset();

            assert_eq!(controller.phase, SubmitPhase::Editing);
            assert_eq!(controller.form, ContactForm::default());
            // Rate limiting still anchors on the accepted submission
            assert_eq!(controller.guard().last_accepted_ms, Some(3_000.0));
        }

        #[test]
        fn test_hash_departure_resets_only_after_success() {
            let mut controller = filled_controller();
            controller.reset_if_departed("#about");
            // Not submitted yet: typing survives hash navigation
            assert_eq!(controller.form.name, "Jane Doe");

            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(200));
            drive(&mut controller, &transport, 0.0);

            controller.reset_if_departed("#contact");
            assert_eq!(controller.phase, SubmitPhase::Succeeded);
            controller.reset_if_departed("#hero");
            assert_eq!(controller.phase, SubmitPhase::Editing);
        }

        #[test]
        fn test_edit_clears_only_that_fields_error() {
            let transport = MockSubmitTransport::new();
            let mut controller = ContactController::new();
            drive(&mut controller, &transport, 0.0);
            assert!(controller.errors.get(Field::Name).is_some());
            assert!(controller.errors.get(Field::Email).is_some());

            controller.edit(Field::Name, "Jo".to_string());
            assert!(controller.errors.get(Field::Name).is_none());
            assert!(controller.errors.get(Field::Email).is_some());
        }
    }
}
