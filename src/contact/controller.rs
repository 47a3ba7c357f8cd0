use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use super::form::{self, Field, FormFields, SubmissionState, ValidationErrors};

/// Failure reported by a delivery backend. The form does not observe these
/// yet; `submit` logs them and carries on (see [`ContactFormController::submit`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("message delivery failed: {0}")]
    Failed(String),
}

/// Receives a validated message on successful submission.
///
/// The controller never inspects the implementation: console logging, a
/// network client, or a queue are all valid hosts.
pub trait DeliverMessage {
    fn deliver(&self, fields: FormFields) -> Result<(), DeliveryError>;
}

impl<F: Fn(FormFields)> DeliverMessage for F {
    fn deliver(&self, fields: FormFields) -> Result<(), DeliveryError> {
        self(fields);
        Ok(())
    }
}

/// Default delivery for the site: logs the message. Real sending is a host
/// concern and can be swapped in without touching validation.
pub struct LogDelivery;

impl DeliverMessage for LogDelivery {
    fn deliver(&self, fields: FormFields) -> Result<(), DeliveryError> {
        let body = serde_json::to_string(&fields)
            .map_err(|err| DeliveryError::Failed(err.to_string()))?;
        log::info!("contact form submitted: {body}");
        Ok(())
    }
}

/// One-shot timer used to schedule the post-submission reset.
///
/// `arm` hands back a guard owning the pending timer; dropping the guard
/// before the timer fires must cancel it.
pub trait ResetTimer {
    type Guard;

    fn arm(&mut self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> Self::Guard;
}

#[derive(Debug, Default)]
struct FormState {
    fields: FormFields,
    errors: ValidationErrors,
    state: SubmissionState,
}

impl FormState {
    fn reset(&mut self) {
        self.fields.clear();
        self.errors.clear();
        self.state = SubmissionState::Editing;
    }
}

/// Owns the contact form state and drives its submission cycle:
/// `Editing -> Submitted -> Editing`.
///
/// Single-threaded by construction. The reset closure only holds a weak
/// reference to the form state, so a controller dropped mid-delay is never
/// mutated even if its host leaks the timer.
pub struct ContactFormController<D, T: ResetTimer> {
    inner: Rc<RefCell<FormState>>,
    delivery: D,
    timer: T,
    reset_delay: Duration,
    reset_guard: Option<T::Guard>,
}

impl<D: DeliverMessage, T: ResetTimer> ContactFormController<D, T> {
    pub fn new(delivery: D, timer: T, reset_delay: Duration) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FormState::default())),
            delivery,
            timer,
            reset_delay,
            reset_guard: None,
        }
    }

    pub fn fields(&self) -> FormFields {
        self.inner.borrow().fields.clone()
    }

    pub fn field(&self, field: Field) -> String {
        self.inner.borrow().fields.get(field).to_string()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.inner.borrow().errors.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.borrow().state
    }

    /// Overwrite one field, leaving the other three untouched. Any error
    /// currently shown for that field is dismissed immediately, without
    /// re-validating the rest of the form.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let mut inner = self.inner.borrow_mut();
        inner.fields.set(field, value);
        inner.errors.dismiss(field);
    }

    /// Run a validation pass over the current fields. Does not store the
    /// result; `submit` does that on rejection.
    pub fn validate(&self) -> ValidationErrors {
        form::validate(&self.inner.borrow().fields)
    }

    /// Validate and, if the form is clean, hand the message to the delivery
    /// backend and arm the auto-reset timer.
    ///
    /// Delivery is fire-and-forget: a backend failure is logged but not
    /// surfaced to the form, so the submission still counts as `Submitted`.
    pub fn submit(&mut self) -> SubmissionState {
        let errors = self.validate();
        let message = {
            let mut inner = self.inner.borrow_mut();
            if !errors.is_empty() {
                inner.errors = errors;
                return SubmissionState::Editing;
            }
            inner.errors.clear();
            inner.state = SubmissionState::Submitted;
            inner.fields.clone()
        };

        if let Err(err) = self.delivery.deliver(message) {
            log::warn!("contact delivery failed (not surfaced to the form): {err}");
        }

        // Disarm any previous timer before arming the new one.
        self.reset_guard = None;
        let state = Rc::downgrade(&self.inner);
        let guard = self.timer.arm(
            self.reset_delay,
            Box::new(move || {
                if let Some(state) = state.upgrade() {
                    state.borrow_mut().reset();
                }
            }),
        );
        self.reset_guard = Some(guard);

        SubmissionState::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(3);

    type FnSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Timer double: holds the armed callback until the test fires it.
    #[derive(Clone, Default)]
    struct ManualTimer {
        slot: FnSlot,
    }

    impl ManualTimer {
        fn fire(&self) {
            if let Some(on_fire) = self.slot.borrow_mut().take() {
                on_fire();
            }
        }

        fn is_armed(&self) -> bool {
            self.slot.borrow().is_some()
        }
    }

    struct ManualGuard {
        slot: FnSlot,
    }

    impl Drop for ManualGuard {
        fn drop(&mut self) {
            self.slot.borrow_mut().take();
        }
    }

    impl ResetTimer for ManualTimer {
        type Guard = ManualGuard;

        fn arm(&mut self, _delay: Duration, on_fire: Box<dyn FnOnce()>) -> Self::Guard {
            *self.slot.borrow_mut() = Some(on_fire);
            ManualGuard {
                slot: Rc::clone(&self.slot),
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDelivery {
        sent: Rc<RefCell<Vec<FormFields>>>,
    }

    impl DeliverMessage for RecordingDelivery {
        fn deliver(&self, fields: FormFields) -> Result<(), DeliveryError> {
            self.sent.borrow_mut().push(fields);
            Ok(())
        }
    }

    fn controller() -> (
        ContactFormController<RecordingDelivery, ManualTimer>,
        RecordingDelivery,
        ManualTimer,
    ) {
        let delivery = RecordingDelivery::default();
        let timer = ManualTimer::default();
        let controller = ContactFormController::new(delivery.clone(), timer.clone(), DELAY);
        (controller, delivery, timer)
    }

    fn fill<D: DeliverMessage>(controller: &mut ContactFormController<D, ManualTimer>) {
        controller.update_field(Field::Name, "Ann");
        controller.update_field(Field::Email, "a@b.co");
        controller.update_field(Field::Subject, "Hi");
        controller.update_field(Field::Message, "Hello there");
    }

    #[test]
    fn empty_submit_is_rejected_with_all_four_errors() {
        let (mut controller, delivery, timer) = controller();

        assert_eq!(controller.submit(), SubmissionState::Editing);
        assert_eq!(controller.state(), SubmissionState::Editing);

        let errors = controller.errors();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Subject), Some("Subject is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));

        assert!(delivery.sent.borrow().is_empty());
        assert!(!timer.is_armed());
    }

    #[test]
    fn invalid_email_is_the_only_rejection() {
        let (mut controller, delivery, _timer) = controller();
        fill(&mut controller);
        controller.update_field(Field::Email, "not-an-email");

        assert_eq!(controller.submit(), SubmissionState::Editing);
        let errors = controller.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
        assert!(delivery.sent.borrow().is_empty());
    }

    #[test]
    fn valid_submit_delivers_once_and_enters_submitted() {
        let (mut controller, delivery, timer) = controller();
        fill(&mut controller);

        assert_eq!(controller.submit(), SubmissionState::Submitted);
        assert_eq!(controller.state(), SubmissionState::Submitted);
        assert!(controller.errors().is_empty());
        assert!(timer.is_armed());

        let sent = delivery.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            FormFields {
                name: "Ann".to_string(),
                email: "a@b.co".to_string(),
                subject: "Hi".to_string(),
                message: "Hello there".to_string(),
            }
        );
    }

    #[test]
    fn reset_fires_after_the_delay_and_clears_the_form() {
        let (mut controller, _delivery, timer) = controller();
        fill(&mut controller);
        controller.submit();

        timer.fire();

        assert_eq!(controller.state(), SubmissionState::Editing);
        assert_eq!(controller.fields(), FormFields::default());
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn dropping_the_controller_cancels_the_pending_reset() {
        let (mut controller, delivery, timer) = controller();
        fill(&mut controller);
        controller.submit();
        assert!(timer.is_armed());

        drop(controller);
        assert!(!timer.is_armed());

        // firing after disposal is a no-op
        timer.fire();
        assert_eq!(delivery.sent.borrow().len(), 1);
    }

    #[test]
    fn editing_a_field_dismisses_only_its_own_error() {
        let (mut controller, _delivery, _timer) = controller();
        controller.submit();
        assert_eq!(controller.errors().len(), 4);

        // still invalid, but the error goes away as soon as the user types
        controller.update_field(Field::Email, "still not valid");
        let errors = controller.errors();
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn update_field_never_changes_state_or_other_fields() {
        let (mut controller, _delivery, _timer) = controller();
        fill(&mut controller);
        controller.update_field(Field::Subject, "Changed");

        let fields = controller.fields();
        assert_eq!(fields.subject, "Changed");
        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.email, "a@b.co");
        assert_eq!(fields.message, "Hello there");
        assert_eq!(controller.state(), SubmissionState::Editing);
    }

    #[test]
    fn a_second_cycle_works_after_the_reset() {
        let (mut controller, delivery, timer) = controller();
        fill(&mut controller);
        controller.submit();
        timer.fire();

        fill(&mut controller);
        assert_eq!(controller.submit(), SubmissionState::Submitted);
        assert_eq!(delivery.sent.borrow().len(), 2);

        timer.fire();
        assert_eq!(controller.state(), SubmissionState::Editing);
    }

    #[test]
    fn closure_delivery_is_fire_and_forget() {
        let seen = Rc::new(RefCell::new(0));
        let seen_in_closure = Rc::clone(&seen);
        let delivery = move |_fields: FormFields| {
            *seen_in_closure.borrow_mut() += 1;
        };
        let mut controller = ContactFormController::new(delivery, ManualTimer::default(), DELAY);
        fill(&mut controller);

        assert_eq!(controller.submit(), SubmissionState::Submitted);
        assert_eq!(*seen.borrow(), 1);
    }
}
