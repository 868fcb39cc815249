//! Browser timers for the controllers.

use std::cell::RefCell;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use kamora::{TimerGuard, Timers};
use leptos::prelude::*;

/// `setInterval` / `setTimeout` on the page's window.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosTimers;

impl Timers for LeptosTimers {
    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> TimerGuard {
        let tick = RefCell::new(tick);
        match set_interval_with_handle(
            move || {
                if let Ok(mut tick) = tick.try_borrow_mut() {
                    tick();
                }
            },
            period,
        ) {
            Ok(handle) => TimerGuard::new(move || handle.clear()),
            Err(err) => {
                web_sys::console::warn_2(&"kamora: setInterval failed".into(), &err);
                TimerGuard::inert()
            }
        }
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        Box::pin(async move {
            let _ = rx.await;
        })
    }
}
