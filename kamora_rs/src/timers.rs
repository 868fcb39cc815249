//! Timer capability.
//!
//! The controllers need two things from a clock: a recurring tick for the
//! carousel and a one-shot delay for the simulated submission (and its
//! timeout). Both come from a [`Timers`] implementation handed in by the
//! host, so the same controller runs on tokio, in the browser, or on a
//! hand-driven test clock.
//!
//! Recurring timers are returned as a [`TimerGuard`]. The timer lives exactly
//! as long as the guard: dropping it cancels the timer.

use std::fmt;
use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Host clock used by the controllers.
pub trait Timers {
    /// Call `tick` every `period`, first after one full period.
    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> TimerGuard;

    /// Resolve once `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Handle to a live recurring timer. Cancels the timer on drop.
#[must_use = "dropping the guard cancels the timer"]
pub struct TimerGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A guard with nothing to cancel, for hosts that failed to arm a timer.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Tokio-backed timers for native builds.
///
/// Interval callbacks are not `Send`, so ticks run on the current
/// [`tokio::task::LocalSet`]; calling [`Timers::interval`] outside one panics.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimers;

#[cfg(not(target_arch = "wasm32"))]
impl Timers for TokioTimers {
    fn interval(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> TimerGuard {
        use tokio::time::{Instant, MissedTickBehavior, interval_at};

        let period = period.max(Duration::from_millis(1));
        let task = tokio::task::spawn_local(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick();
            }
        });
        TimerGuard::new(move || task.abort())
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}
