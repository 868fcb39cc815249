//! Timer-bound carousel controller.
//!
//! Owns a [`CarouselState`] and at most one auto-advance timer. The timer is
//! held as a [`TimerGuard`] and exists exactly while auto-play is on (and
//! there is more than one item). Manual navigation turns auto-play off, which
//! drops the guard; turning auto-play back on arms a fresh timer, so the next
//! tick is a full period away.
//!
//! Each armed timer belongs to a numbered session. A tick carrying an older
//! session number is ignored, so a tick that was already queued by the host
//! when the timer was cancelled cannot move the index.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use super::{CarouselState, Swipe};
use crate::error::CarouselError;
use crate::timers::{TimerGuard, Timers};

type Observer = Rc<dyn Fn(&CarouselState)>;

struct Inner {
    state: RefCell<CarouselState>,
    timers: Rc<dyn Timers>,
    period: Duration,
    timer: RefCell<Option<TimerGuard>>,
    session: Cell<u64>,
    torn_down: Cell<bool>,
    observer: RefCell<Option<Observer>>,
}

/// Carousel state plus its auto-advance timer.
///
/// Cheap to clone; clones share the same state. The timer is cancelled when
/// the last clone is dropped or when [`CarouselController::stop`] is called.
#[derive(Clone)]
pub struct CarouselController {
    inner: Rc<Inner>,
}

impl CarouselController {
    /// Build a controller over `len` items. Auto-play starts immediately.
    pub fn new(len: usize, period: Duration, timers: Rc<dyn Timers>) -> Result<Self, CarouselError> {
        let state = CarouselState::new(len)?;
        let controller = Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                timers,
                period,
                timer: RefCell::new(None),
                session: Cell::new(0),
                torn_down: Cell::new(false),
                observer: RefCell::new(None),
            }),
        };
        controller.sync_timer();
        Ok(controller)
    }

    /// Register the callback invoked after every state change, timer ticks
    /// included. Replaces any previous observer.
    pub fn on_change(&self, observer: impl Fn(&CarouselState) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn state(&self) -> CarouselState {
        *self.inner.state.borrow()
    }

    pub fn has_live_timer(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }

    pub fn next(&self) {
        self.update(CarouselState::next);
        debug!(index = self.state().current_index(), "carousel: next");
    }

    pub fn previous(&self) {
        self.update(CarouselState::previous);
        debug!(index = self.state().current_index(), "carousel: previous");
    }

    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        let mut result = Ok(());
        self.update(|state| result = state.go_to(index));
        if result.is_ok() {
            debug!(index, "carousel: go to");
        }
        result
    }

    pub fn toggle_auto_play(&self) {
        self.update(CarouselState::toggle_auto_play);
    }

    pub fn set_auto_play(&self, on: bool) {
        self.update(|state| state.set_auto_play(on));
    }

    /// Apply a finished drag gesture.
    pub fn swipe(&self, swipe: Swipe) {
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Previous => self.previous(),
        }
    }

    /// Release the timer for good. Used on component teardown; later calls
    /// still update the state but never arm a timer again.
    pub fn stop(&self) {
        self.inner.torn_down.set(true);
        self.sync_timer();
    }

    fn update(&self, apply: impl FnOnce(&mut CarouselState)) {
        apply(&mut *self.inner.state.borrow_mut());
        self.sync_timer();
        Inner::notify(&self.inner);
    }

    fn sync_timer(&self) {
        let inner = &self.inner;
        let wanted = {
            let state = inner.state.borrow();
            state.is_auto_playing() && state.can_advance() && !inner.torn_down.get()
        };
        let armed = inner.timer.borrow().is_some();

        if wanted && !armed {
            let session = inner.session.get() + 1;
            inner.session.set(session);
            let weak: Weak<Inner> = Rc::downgrade(inner);
            let guard = inner.timers.interval(
                inner.period,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        Inner::tick(&inner, session);
                    }
                }),
            );
            *inner.timer.borrow_mut() = Some(guard);
            debug!(session, period_ms = inner.period.as_millis() as u64, "carousel: auto-play armed");
        } else if !wanted && armed {
            inner.session.set(inner.session.get() + 1);
            let guard = inner.timer.borrow_mut().take();
            drop(guard);
            debug!("carousel: auto-play released");
        }
    }
}

impl Inner {
    fn tick(inner: &Rc<Inner>, session: u64) {
        if inner.session.get() != session {
            return;
        }
        {
            let mut state = inner.state.borrow_mut();
            if !state.is_auto_playing() {
                return;
            }
            state.auto_advance();
        }
        Inner::notify(inner);
    }

    fn notify(inner: &Rc<Inner>) {
        let observer = inner.observer.borrow().clone();
        if let Some(observer) = observer {
            let state = *inner.state.borrow();
            observer(&state);
        }
    }
}
