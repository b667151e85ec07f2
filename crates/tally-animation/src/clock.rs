//! Wall-clock frame driver for hosts without a display loop

use crate::scheduler::{FrameCallback, FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::thread;
use std::time::{Duration, Instant};

/// Real-time scheduler that dispatches pending frames at a fixed interval.
///
/// Timestamps are milliseconds since construction. The clock never spawns a
/// thread: [`tick`](FrameClock::tick) sleeps one frame interval on the
/// calling thread and then dispatches the pending batch, which is the
/// cooperative single-threaded model the counter expects.
pub struct FrameClock {
    interval: Duration,
    origin: Instant,
    queue: RefCell<Pending>,
}

#[derive(Default)]
struct Pending {
    next_handle: u64,
    frames: Vec<(FrameHandle, FrameCallback)>,
}

impl FrameClock {
    /// 60 Hz clock.
    pub fn new() -> Self {
        Self::with_fps(60.0)
    }

    /// Clock with a custom frame rate, clamped to at least 1 Hz.
    pub fn with_fps(fps: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1.0)),
            origin: Instant::now(),
            queue: RefCell::default(),
        }
    }

    /// Milliseconds elapsed since this clock was created.
    pub fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// True when no frame callbacks are pending.
    pub fn idle(&self) -> bool {
        self.queue.borrow().frames.is_empty()
    }

    /// Sleep one frame interval, then dispatch the pending batch.
    pub fn tick(&self) {
        thread::sleep(self.interval);
        let batch = std::mem::take(&mut self.queue.borrow_mut().frames);
        let now = self.elapsed_ms();
        for (_, callback) in batch {
            callback(now);
        }
    }

    /// Dispatch frames until no callbacks remain.
    pub fn run_until_idle(&self) {
        while !self.idle() {
            self.tick();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameClock {
    fn schedule_frame(&self, callback: FrameCallback) -> FrameHandle {
        let mut queue = self.queue.borrow_mut();
        let handle = FrameHandle(queue.next_handle);
        queue.next_handle += 1;
        queue.frames.push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.queue.borrow_mut().frames.retain(|(h, _)| *h != handle);
    }
}
