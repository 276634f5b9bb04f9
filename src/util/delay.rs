//! Timer seam for the gate's single deferred recheck.
//!
//! In the browser the wait is a `setTimeout`-backed future, so other work on
//! the event loop keeps running while a recheck is pending.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::time::Duration;

/// Something that can suspend the current task for a fixed duration.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// Event-loop timer. Resolves immediately outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
        }
    }
}
