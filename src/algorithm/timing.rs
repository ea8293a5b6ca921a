use std::time::{Duration, Instant};

/// Runs `f` and returns its value together with the wall-clock time it took
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Like [`timed`] for fallible work: the duration is only reported on success
pub fn try_timed<T, E, F>(f: F) -> Result<(T, Duration), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let (value, elapsed) = timed(f);
    value.map(|v| (v, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        let (value, elapsed) = timed(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_try_timed_propagates_error() {
        let result: Result<((), Duration), &str> = try_timed(|| Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
    }
}
