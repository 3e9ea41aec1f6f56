//! Splash lifecycle: hold the effect, fade it out, then signal completion.
//!
//! ```text
//! Idle --start()--> Animating --hold--> Fading --fade--> Finished (callback)
//! ```
//!
//! The whole lifecycle is measured by a single [`CompletionTimer`] armed on
//! start, so the phase, the fade opacity and the callback can never disagree.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::easing::Easing;
use crate::timer::CompletionTimer;

/// Lifecycle phase of a splash sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplashPhase {
    /// Created, not started.
    #[default]
    Idle,
    /// Effect running at full opacity.
    Animating,
    /// Global opacity ramping to zero.
    Fading,
    /// Completion signalled.
    Finished,
}

/// Durations of the splash lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashTiming {
    /// Time spent animating at full opacity.
    pub hold: Duration,
    /// Length of the fade to transparent.
    pub fade: Duration,
    /// Curve of the fade.
    pub fade_easing: Easing,
}

impl Default for SplashTiming {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(4500),
            fade: Duration::from_millis(1500),
            fade_easing: Easing::EaseOut,
        }
    }
}

impl SplashTiming {
    /// Hold plus fade.
    pub fn total(&self) -> Duration {
        self.hold + self.fade
    }
}

type Callback = Box<dyn FnOnce() + 'static>;

/// Host-level orchestration around a decorative effect.
pub struct SplashSequence {
    timing: SplashTiming,
    phase: SplashPhase,
    on_finished: Option<Callback>,
    timer: Option<CompletionTimer>,
}

impl SplashSequence {
    /// Create an idle sequence with no completion callback.
    pub fn new(timing: SplashTiming) -> Self {
        Self {
            timing,
            phase: SplashPhase::Idle,
            on_finished: None,
            timer: None,
        }
    }

    /// Create an idle sequence that calls `on_finished` exactly once when it
    /// reaches [`SplashPhase::Finished`].
    pub fn with_callback(timing: SplashTiming, on_finished: impl FnOnce() + 'static) -> Self {
        Self {
            on_finished: Some(Box::new(on_finished)),
            ..Self::new(timing)
        }
    }

    /// Begin animating and arm the completion timer.
    pub fn start(&mut self) {
        if self.phase != SplashPhase::Idle {
            warn!("Splash sequence already started (phase {:?})", self.phase);
            return;
        }
        let callback = self.on_finished.take();
        self.timer = Some(CompletionTimer::new(self.timing.total(), move || {
            if let Some(callback) = callback {
                callback();
            }
        }));
        self.phase = SplashPhase::Animating;
        info!(
            "Splash started: hold {:?}, fade {:?}",
            self.timing.hold, self.timing.fade
        );
        // A zero-length lifecycle completes immediately.
        self.advance(0.0);
    }

    /// Advance by `dt` seconds. No-op while idle or finished.
    pub fn advance(&mut self, dt: f64) {
        let Some(timer) = self.timer.as_mut() else {
            return;
        };
        if self.phase == SplashPhase::Finished {
            return;
        }

        let fired = timer.advance(dt);
        let elapsed = timer.elapsed();

        if self.phase == SplashPhase::Animating && elapsed >= self.timing.hold.as_secs_f64() {
            self.phase = SplashPhase::Fading;
            info!("Splash fading out");
        }
        if fired {
            self.phase = SplashPhase::Finished;
            info!("Splash finished");
        }
    }

    /// Tear the sequence down. The completion callback will never fire.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        self.on_finished = None;
    }

    /// Current phase.
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Lifecycle durations.
    pub fn timing(&self) -> &SplashTiming {
        &self.timing
    }

    /// Seconds since [`start`](Self::start).
    pub fn elapsed(&self) -> f64 {
        self.timer.as_ref().map_or(0.0, CompletionTimer::elapsed)
    }

    /// Fade progress in `[0, 1]`; 0 before fading, 1 when finished.
    pub fn fade_progress(&self) -> f32 {
        match self.phase {
            SplashPhase::Idle | SplashPhase::Animating => 0.0,
            SplashPhase::Finished => 1.0,
            SplashPhase::Fading => {
                let fade = self.timing.fade.as_secs_f64();
                if fade <= 0.0 {
                    return 1.0;
                }
                let into_fade = self.elapsed() - self.timing.hold.as_secs_f64();
                (into_fade / fade).clamp(0.0, 1.0) as f32
            }
        }
    }

    /// Scene-wide opacity multiplier.
    pub fn global_opacity(&self) -> f32 {
        1.0 - self.timing.fade_easing.apply(self.fade_progress())
    }
}

impl fmt::Debug for SplashSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplashSequence")
            .field("timing", &self.timing)
            .field("phase", &self.phase)
            .field("timer", &self.timer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn timing() -> SplashTiming {
        SplashTiming {
            hold: Duration::from_secs(4),
            fade: Duration::from_secs(2),
            fade_easing: Easing::Linear,
        }
    }

    fn counted(timing: SplashTiming) -> (Rc<Cell<u32>>, SplashSequence) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        let seq = SplashSequence::with_callback(timing, move || handle.set(handle.get() + 1));
        (count, seq)
    }

    #[test]
    fn test_idle_until_started() {
        let (count, mut seq) = counted(timing());
        seq.advance(100.0);
        assert_eq!(seq.phase(), SplashPhase::Idle);
        assert_eq!(seq.global_opacity(), 1.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_full_lifecycle() {
        let (count, mut seq) = counted(timing());
        seq.start();
        assert_eq!(seq.phase(), SplashPhase::Animating);

        seq.advance(3.0);
        assert_eq!(seq.phase(), SplashPhase::Animating);
        assert_eq!(seq.global_opacity(), 1.0);

        seq.advance(2.0);
        assert_eq!(seq.phase(), SplashPhase::Fading);
        assert!((seq.global_opacity() - 0.5).abs() < 1e-5);
        assert_eq!(count.get(), 0);

        seq.advance(1.0);
        assert_eq!(seq.phase(), SplashPhase::Finished);
        assert_eq!(seq.global_opacity(), 0.0);
        assert_eq!(count.get(), 1);

        seq.advance(10.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_single_large_step_finishes() {
        let (count, mut seq) = counted(timing());
        seq.start();
        seq.advance(60.0);
        assert_eq!(seq.phase(), SplashPhase::Finished);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_before_completion_never_fires() {
        let (count, mut seq) = counted(timing());
        seq.start();
        seq.advance(5.9);
        assert_eq!(seq.phase(), SplashPhase::Fading);
        drop(seq);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_cancel_before_completion_never_fires() {
        let (count, mut seq) = counted(timing());
        seq.start();
        seq.advance(1.0);
        seq.cancel();
        seq.advance(100.0);
        assert_eq!(count.get(), 0);
        assert_ne!(seq.phase(), SplashPhase::Finished);
    }

    #[test]
    fn test_cancel_before_start_drops_callback() {
        let (count, mut seq) = counted(timing());
        seq.cancel();
        seq.start();
        seq.advance(100.0);
        assert_eq!(seq.phase(), SplashPhase::Finished);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_restart_is_ignored() {
        let (count, mut seq) = counted(timing());
        seq.start();
        seq.advance(3.0);
        seq.start();
        assert!((seq.elapsed() - 3.0).abs() < 1e-9);
        seq.advance(3.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_zero_length_completes_on_start() {
        let (count, mut seq) = counted(SplashTiming {
            hold: Duration::ZERO,
            fade: Duration::ZERO,
            fade_easing: Easing::Linear,
        });
        seq.start();
        assert_eq!(seq.phase(), SplashPhase::Finished);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_without_callback() {
        let mut seq = SplashSequence::new(timing());
        seq.start();
        seq.advance(6.0);
        assert_eq!(seq.phase(), SplashPhase::Finished);
    }

    #[test]
    fn test_fade_opacity_follows_easing() {
        let mut seq = SplashSequence::new(SplashTiming {
            fade_easing: Easing::EaseOut,
            ..timing()
        });
        seq.start();
        seq.advance(4.5);
        // EaseOut at 0.25 = 1 - 0.75^2 = 0.4375.
        assert!((seq.global_opacity() - 0.5625).abs() < 1e-5);
    }
}
