/// Millisecond clock: `Date.now()` in the browser, process-relative natively.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}

/// Run `f`, timing it only when `enabled` (0.0 otherwise).
#[inline]
pub(crate) fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let timer = PerfTimer::start();
    let out = f();
    (out, timer.elapsed_ms())
}
