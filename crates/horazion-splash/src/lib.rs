//! Host-side orchestration for splash screens.
//!
//! Drives the starfield with a monotonic clock, runs the hold/fade/finish
//! lifecycle with a cancellable completion signal, and animates the horizon
//! glow and loading indicator. Everything is pull-based: advance by a frame
//! delta, then read the state to draw.

pub mod clock;
pub mod easing;
pub mod frame_loop;
pub mod horizon;
pub mod loading_star;
pub mod scene;
pub mod sequence;
pub mod timer;

pub use clock::{AnimationClock, DEFAULT_TIME_RATE};
pub use easing::{Easing, Repeat, Tween};
pub use frame_loop::{FrameLoop, MAX_FRAME_TIME};
pub use horizon::{HorizonFrame, HorizonGlow, Rect};
pub use loading_star::{LoadingStar, LoadingStarPose};
pub use scene::{SceneConfig, SplashFrame, SplashScene};
pub use sequence::{SplashPhase, SplashSequence, SplashTiming};
pub use timer::CompletionTimer;
