//! Asynchronous submission around [`ContactForm`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{Either, LocalBoxFuture, select};
use tracing::{info, warn};

use super::{ContactFields, ContactForm, Field, FieldErrors, SubmitRejection};
use crate::error::SubmitError;
use crate::timers::Timers;

/// Where a validated message goes. The landing page has no backend, so the
/// shipped implementation is [`SimulatedSubmitter`].
pub trait Submitter {
    fn submit(&self, fields: ContactFields) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Waits for a fixed delay, then reports success.
pub struct SimulatedSubmitter {
    timers: Rc<dyn Timers>,
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(timers: Rc<dyn Timers>, delay: Duration) -> Self {
        Self { timers, delay }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, _fields: ContactFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let wait = self.timers.sleep(self.delay);
        Box::pin(async move {
            wait.await;
            Ok(())
        })
    }
}

/// Result of one [`ContactController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not in Editing (a submission is in flight or already done); nothing happened.
    Ignored,
    /// Validation failed; the form now shows these errors.
    Invalid(FieldErrors),
    Sent,
    /// The submitter failed or timed out; the form is editable again.
    Failed(SubmitError),
}

type Observer = Rc<dyn Fn(&ContactForm)>;

struct Inner {
    form: RefCell<ContactForm>,
    submitter: Rc<dyn Submitter>,
    timers: Rc<dyn Timers>,
    timeout: Option<Duration>,
    observer: RefCell<Option<Observer>>,
}

/// Contact form plus its submission side effect. Clones share state.
#[derive(Clone)]
pub struct ContactController {
    inner: Rc<Inner>,
}

impl ContactController {
    /// `timeout` bounds every submission; `None` waits for the submitter forever.
    pub fn new(
        submitter: Rc<dyn Submitter>,
        timers: Rc<dyn Timers>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                form: RefCell::new(ContactForm::new()),
                submitter,
                timers,
                timeout,
                observer: RefCell::new(None),
            }),
        }
    }

    /// Register the callback invoked after every form change.
    pub fn on_change(&self, observer: impl Fn(&ContactForm) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Snapshot of the current form.
    pub fn form(&self) -> ContactForm {
        self.inner.form.borrow().clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let applied = self.inner.form.borrow_mut().set_field(field, value);
        if applied {
            self.notify();
        }
    }

    /// "Send another message".
    pub fn reset(&self) {
        let applied = self.inner.form.borrow_mut().reset();
        if applied {
            self.notify();
        }
    }

    /// Validate, send, and settle.
    ///
    /// Calling this while a submission is in flight returns
    /// [`SubmitOutcome::Ignored`] without touching the form.
    pub async fn submit(&self) -> SubmitOutcome {
        let begun = self.inner.form.borrow_mut().begin_submit();
        let fields = match begun {
            Ok(fields) => fields,
            Err(SubmitRejection::NotEditing) => return SubmitOutcome::Ignored,
            Err(SubmitRejection::Invalid(errors)) => {
                self.notify();
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.notify();
        let in_flight = InFlight {
            controller: self,
            armed: true,
        };

        let pending = self.inner.submitter.submit(fields);
        let result = match self.inner.timeout {
            Some(limit) => match select(pending, self.inner.timers.sleep(limit)).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(SubmitError::TimedOut(limit)),
            },
            None => pending.await,
        };

        match &result {
            Ok(()) => info!("contact: message sent"),
            Err(err) => warn!(error = %err, "contact: submission failed"),
        }

        in_flight.settle(result.clone());

        match result {
            Ok(()) => SubmitOutcome::Sent,
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    fn notify(&self) {
        let observer = self.inner.observer.borrow().clone();
        if let Some(observer) = observer {
            let form = self.form();
            observer(&form);
        }
    }
}

/// Settles the form if a [`ContactController::submit`] future is dropped
/// while the submission is still pending.
struct InFlight<'a> {
    controller: &'a ContactController,
    armed: bool,
}

impl InFlight<'_> {
    fn settle(mut self, result: Result<(), SubmitError>) {
        self.armed = false;
        self.controller.inner.form.borrow_mut().finish_submit(result);
        self.controller.notify();
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Ok(mut form) = self.controller.inner.form.try_borrow_mut() else {
            return;
        };
        form.finish_submit(Err(SubmitError::Cancelled));
        drop(form);
        warn!("contact: submission dropped before it settled");
        self.controller.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Phase;
    use crate::timers::manual::ManualTimers;
    use futures::FutureExt;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    const DELAY: Duration = Duration::from_millis(2_000);
    const TIMEOUT: Duration = Duration::from_millis(10_000);

    struct FailingSubmitter;

    impl Submitter for FailingSubmitter {
        fn submit(&self, _: ContactFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            Box::pin(async { Err(SubmitError::Rejected("spam filter".into())) })
        }
    }

    struct HangingSubmitter;

    impl Submitter for HangingSubmitter {
        fn submit(&self, _: ContactFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            Box::pin(futures::future::pending())
        }
    }

    fn simulated(timers: &ManualTimers) -> ContactController {
        let timers: Rc<dyn Timers> = Rc::new(timers.clone());
        let submitter = Rc::new(SimulatedSubmitter::new(timers.clone(), DELAY));
        ContactController::new(submitter, timers, Some(TIMEOUT))
    }

    fn fill(controller: &ContactController) {
        controller.set_field(Field::Name, "John Doe");
        controller.set_field(Field::Email, "john@example.com");
        controller.set_field(Field::Message, "This is a long enough message");
    }

    fn spawn_submit(
        pool: &LocalPool,
        controller: &ContactController,
    ) -> Rc<RefCell<Option<SubmitOutcome>>> {
        let slot = Rc::new(RefCell::new(None));
        let out = slot.clone();
        let controller = controller.clone();
        pool.spawner()
            .spawn_local(async move {
                let outcome = controller.submit().await;
                *out.borrow_mut() = Some(outcome);
            })
            .expect("spawn submit");
        slot
    }

    #[test]
    fn valid_submit_walks_through_every_phase() {
        let clock = ManualTimers::new();
        let controller = simulated(&clock);
        fill(&controller);

        let phases = Rc::new(RefCell::new(Vec::new()));
        let sink = phases.clone();
        controller.on_change(move |form| sink.borrow_mut().push(form.phase()));

        let mut pool = LocalPool::new();
        let outcome = spawn_submit(&pool, &controller);
        pool.run_until_stalled();
        assert!(controller.form().is_submitting());
        assert!(outcome.borrow().is_none());

        clock.advance(DELAY);
        pool.run_until_stalled();

        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Sent));
        assert_eq!(*phases.borrow(), vec![Phase::Submitting, Phase::Submitted]);
        let form = controller.form();
        assert!(form.is_submitted());
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn invalid_submit_never_reaches_submitter() {
        let clock = ManualTimers::new();
        let controller = simulated(&clock);
        controller.set_field(Field::Name, "A");

        let outcome = futures::executor::block_on(controller.submit());
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure");
        };
        assert!(errors.contains_key(&Field::Name));
        assert_eq!(controller.form().phase(), Phase::Editing);
    }

    #[test]
    fn double_submit_is_ignored() {
        let clock = ManualTimers::new();
        let controller = simulated(&clock);
        fill(&controller);

        let mut pool = LocalPool::new();
        let first = spawn_submit(&pool, &controller);
        let second = spawn_submit(&pool, &controller);
        pool.run_until_stalled();

        assert_eq!(*second.borrow(), Some(SubmitOutcome::Ignored));
        assert!(controller.form().is_submitting());

        clock.advance(DELAY);
        pool.run_until_stalled();
        assert_eq!(*first.borrow(), Some(SubmitOutcome::Sent));
    }

    #[test]
    fn failure_returns_to_editing_with_fields() {
        let clock = ManualTimers::new();
        let controller =
            ContactController::new(Rc::new(FailingSubmitter), Rc::new(clock.clone()), Some(TIMEOUT));
        fill(&controller);

        let outcome = futures::executor::block_on(controller.submit());
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Rejected("spam filter".into()))
        );
        let form = controller.form();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields().name, "John Doe");
        assert!(form.last_failure().is_some());
    }

    #[test]
    fn hanging_submitter_times_out() {
        let clock = ManualTimers::new();
        let controller =
            ContactController::new(Rc::new(HangingSubmitter), Rc::new(clock.clone()), Some(TIMEOUT));
        fill(&controller);

        let mut pool = LocalPool::new();
        let outcome = spawn_submit(&pool, &controller);
        pool.run_until_stalled();
        clock.advance(TIMEOUT - Duration::from_millis(1));
        pool.run_until_stalled();
        assert!(controller.form().is_submitting());

        clock.advance(Duration::from_millis(1));
        pool.run_until_stalled();
        assert_eq!(
            *outcome.borrow(),
            Some(SubmitOutcome::Failed(SubmitError::TimedOut(TIMEOUT)))
        );
        assert_eq!(controller.form().fields().email, "john@example.com");
    }

    #[test]
    fn dropped_submission_returns_to_editing() {
        let clock = ManualTimers::new();
        let controller = simulated(&clock);
        fill(&controller);

        assert_eq!(controller.submit().now_or_never(), None);
        let form = controller.form();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields().name, "John Doe");
        assert_eq!(form.last_failure(), Some(&SubmitError::Cancelled));

        let mut pool = LocalPool::new();
        let outcome = spawn_submit(&pool, &controller);
        pool.run_until_stalled();
        clock.advance(DELAY);
        pool.run_until_stalled();
        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Sent));
    }

    #[test]
    fn reset_after_success_gives_fresh_form() {
        let clock = ManualTimers::new();
        let controller = simulated(&clock);
        fill(&controller);

        let mut pool = LocalPool::new();
        let _ = spawn_submit(&pool, &controller);
        pool.run_until_stalled();
        clock.advance(DELAY);
        pool.run_until_stalled();

        controller.reset();
        assert_eq!(controller.form(), ContactForm::new());
    }
}
