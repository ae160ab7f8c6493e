/// Current host time in milliseconds, on the same scale as the timestamps the
/// page passes in (`performance.now()`, counted from page load).
///
/// Natively the origin is the first call in the process. Scenes only ever
/// compare these values with each other, never with wall-clock dates.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window().and_then(|w| w.performance()) {
            Some(performance) => performance.now(),
            // No window (worker or test runner): hosts there stamp with Date as well.
            None => js_sys::Date::now(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn now_is_monotonic() {
        let a = super::now_ms();
        let b = super::now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn now_counts_from_process_start() {
        // A wall-clock epoch value would be around 1.7e12.
        assert!(super::now_ms() < 86_400_000.0);
    }
}
