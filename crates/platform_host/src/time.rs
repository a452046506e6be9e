//! Millisecond clock for the runtime's debounce and throttle deadlines.
//!
//! Native builds read a process-wide [`Instant`] anchor. `wasm32` has no usable `Instant`, so it
//! reads `Date.now()` and clamps the result so it never moves backwards.

#[cfg(not(target_arch = "wasm32"))]
use std::{sync::OnceLock, time::Instant};

#[cfg(not(target_arch = "wasm32"))]
static CLOCK_ANCHOR: OnceLock<Instant> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
thread_local! {
    static LAST_READING_MS: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

/// Returns a non-decreasing millisecond reading.
///
/// Only differences between readings are meaningful; the origin is unspecified.
pub fn monotonic_ms_now() -> u64 {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let elapsed = CLOCK_ANCHOR.get_or_init(Instant::now).elapsed();
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now().max(0.0) as u64;
        LAST_READING_MS.with(|last| {
            let next = now.max(last.get());
            last.set(next);
            next
        })
    }
}
