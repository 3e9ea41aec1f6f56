//! Wall-clock frame driver.
//!
//! Measures real frame time and hands a clamped delta to the per-frame
//! callback. Long stalls (debugger, app backgrounded) are clamped so the
//! animation resumes where it paused instead of jumping ahead.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time in seconds handed to a frame callback.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Frame driver state.
///
/// Call [`tick`](Self::tick) once per rendered frame.
pub struct FrameLoop {
    previous_time: Instant,
    total_time: f64,
    frame_count: u64,
    clamped_frames: u64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            total_time: 0.0,
            frame_count: 0,
            clamped_frames: 0,
        }
    }

    /// Measure the time since the previous tick and run one frame with it.
    pub fn tick(&mut self, frame_fn: impl FnOnce(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.tick_with(frame_time, frame_fn);
    }

    /// Run one frame with an explicit frame time in seconds. Used for
    /// headless playback and tests.
    pub fn tick_with(&mut self, frame_time: f64, frame_fn: impl FnOnce(f64)) {
        let mut dt = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };

        if dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            dt = MAX_FRAME_TIME;
            self.clamped_frames += 1;
        }

        frame_fn(dt);
        self.total_time += dt;
        self.frame_count += 1;
    }

    /// Returns the total number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns how many frames had their time clamped.
    pub fn clamped_frames(&self) -> u64 {
        self.clamped_frames
    }

    /// Returns the sum of all (clamped) frame times in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_frame_time_through() {
        let mut frames = FrameLoop::new();
        let mut received = 0.0;
        frames.tick_with(1.0 / 60.0, |dt| received = dt);
        assert!((received - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(frames.frame_count(), 1);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut frames = FrameLoop::new();
        let mut received = 0.0;
        frames.tick_with(3.0, |dt| received = dt);
        assert_eq!(received, MAX_FRAME_TIME);
        assert_eq!(frames.clamped_frames(), 1);
    }

    #[test]
    fn test_negative_and_nan_frame_times_are_zero() {
        let mut frames = FrameLoop::new();
        let mut received = Vec::new();
        frames.tick_with(-0.5, |dt| received.push(dt));
        frames.tick_with(f64::NAN, |dt| received.push(dt));
        assert_eq!(received, vec![0.0, 0.0]);
        assert_eq!(frames.total_time(), 0.0);
    }

    #[test]
    fn test_total_time_accumulates() {
        let mut frames = FrameLoop::new();
        let frame_times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];
        for &ft in &frame_times {
            frames.tick_with(ft, |_| {});
        }
        let expected: f64 = frame_times.iter().sum();
        assert!((frames.total_time() - expected).abs() < 1e-12);
        assert_eq!(frames.frame_count(), frame_times.len() as u64);
    }

    #[test]
    fn test_wall_clock_tick_runs_once() {
        let mut frames = FrameLoop::default();
        let mut calls = 0;
        frames.tick(|dt| {
            assert!((0.0..=MAX_FRAME_TIME).contains(&dt));
            calls += 1;
        });
        assert_eq!(calls, 1);
    }
}
