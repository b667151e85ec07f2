//! Animated counter engine
//!
//! A display value that sweeps linearly toward each new target over a fixed
//! duration, re-rendering once per frame:
//! - [`AnimatedCounter`] — the state machine: target pair, run supersession,
//!   locale-formatted text output
//! - [`FrameScheduler`] — injectable frame-callback facility;
//!   [`ManualScheduler`] drives simulated time, [`FrameClock`] wall-clock time
//! - [`Tween`] — the pure interpolation underneath

pub mod clock;
pub mod counter;
pub mod scheduler;
pub mod tween;

pub use clock::FrameClock;
pub use counter::AnimatedCounter;
pub use scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualScheduler};
pub use tween::Tween;
