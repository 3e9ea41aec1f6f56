//! One-shot completion timer.
//!
//! The callback fires at most once. Cancelling or dropping the timer disarms
//! it, so a torn-down host never receives a late completion.

use std::fmt;
use std::time::Duration;

type Callback = Box<dyn FnOnce() + 'static>;

/// Fires a callback once a fixed amount of frame time has elapsed.
pub struct CompletionTimer {
    duration: f64,
    elapsed: f64,
    callback: Option<Callback>,
    fired: bool,
}

impl CompletionTimer {
    /// Arm a timer.
    pub fn new(duration: Duration, callback: impl FnOnce() + 'static) -> Self {
        Self {
            duration: duration.as_secs_f64(),
            elapsed: 0.0,
            callback: Some(Box::new(callback)),
            fired: false,
        }
    }

    /// Advance by `dt` seconds. Returns `true` on the call that fires the
    /// callback. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        if self.fired || self.elapsed < self.duration {
            return false;
        }
        self.fired = true;
        match self.callback.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Disarm without firing. Idempotent.
    pub fn cancel(&mut self) {
        if self.callback.take().is_some() {
            tracing::debug!(
                "Completion timer cancelled after {:.3}s of {:.3}s",
                self.elapsed,
                self.duration
            );
        }
    }

    /// Seconds elapsed since arming, capped at the duration.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Whether the callback is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.callback.is_some()
    }

    /// Whether the duration elapsed while armed.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl Drop for CompletionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for CompletionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionTimer")
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("pending", &self.is_pending())
            .field("fired", &self.fired)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_fires_once_at_duration() {
        let (count, callback) = counter();
        let mut timer = CompletionTimer::new(Duration::from_millis(100), callback);

        assert!(!timer.advance(0.05));
        assert_eq!(count.get(), 0);
        assert!(timer.advance(0.05));
        assert_eq!(count.get(), 1);
        assert!(!timer.advance(1.0));
        assert_eq!(count.get(), 1);
        assert!(timer.has_fired());
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_large_step_fires_once() {
        let (count, callback) = counter();
        let mut timer = CompletionTimer::new(Duration::from_secs(1), callback);
        assert!(timer.advance(30.0));
        assert_eq!(count.get(), 1);
        assert_eq!(timer.elapsed(), 1.0);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let (count, callback) = counter();
        let mut timer = CompletionTimer::new(Duration::from_millis(10), callback);
        timer.cancel();
        timer.cancel();
        assert!(!timer.advance(1.0));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_drop_before_deadline_never_fires() {
        let (count, callback) = counter();
        {
            let mut timer = CompletionTimer::new(Duration::from_secs(5), callback);
            timer.advance(4.9);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_zero_duration_fires_on_first_advance() {
        let (count, callback) = counter();
        let mut timer = CompletionTimer::new(Duration::ZERO, callback);
        assert!(timer.advance(0.0));
        assert_eq!(count.get(), 1);
    }
}
