//! Browser [`Timer`] backed by `setTimeout`.

use std::future::Future;
use std::time::Duration;

use lamphub_app::ports::Timer;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
