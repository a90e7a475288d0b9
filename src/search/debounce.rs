//! Cancel-and-replace debounce timer.
//!
//! A [`Debouncer`] holds at most one armed timer. Every [`Debouncer::trigger`]
//! call drops whatever was armed and re-arms with the new arguments, so after a
//! burst of calls only the arguments of the last one are ever delivered, once,
//! after `delay` of quiet. Intermediate arguments are discarded, not queued.
//!
//! Delivery happens by awaiting [`Debouncer::elapsed`], normally as one branch
//! of the owner's `tokio::select!` loop. That keeps the firing on the same
//! event queue as every other input instead of on a detached task.

use std::future;
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

#[derive(Debug)]
struct Armed<T> {
    deadline: Instant,
    args: T,
}

/// Single-slot debounce timer.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    armed: Option<Armed<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    /// Cancel any armed timer and arm a new one carrying `args`.
    pub fn trigger(&mut self, args: T) {
        self.armed = Some(Armed {
            deadline: Instant::now() + self.delay,
            args,
        });
    }

    /// Disarm the timer, returning the arguments that will now never fire.
    pub fn cancel(&mut self) -> Option<T> {
        self.armed.take().map(|armed| armed.args)
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Resolve with the armed arguments once the quiet period has passed.
    ///
    /// Never resolves while nothing is armed. Cancel-safe: dropping the future
    /// before the deadline leaves the timer armed.
    pub async fn elapsed(&mut self) -> T {
        let Some(deadline) = self.armed.as_ref().map(|armed| armed.deadline) else {
            return future::pending().await;
        };

        sleep_until(deadline).await;

        match self.armed.take() {
            Some(armed) => armed.args,
            None => future::pending().await,
        }
    }
}
