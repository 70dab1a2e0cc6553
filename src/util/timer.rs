//! One-shot delayed callbacks.
//!
//! Browser builds schedule through `gloo-timers`; native builds drop the
//! callback, since nothing is mounted there.

use std::time::Duration;

/// Run `f` once after `delay`.
pub fn run_after<F>(delay: Duration, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay, f);
    }
}
