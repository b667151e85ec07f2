//! Frame scheduling — the seam between counter logic and display timing

use std::cell::RefCell;

/// A callback invoked once with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Identifies one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub(crate) u64);

/// A facility that invokes callbacks approximately once per display frame.
///
/// Methods take `&self`: schedulers are shared, single-threaded handles, and
/// a callback must be able to schedule its successor from inside a dispatch.
pub trait FrameScheduler {
    /// Register `callback` to run at the next frame.
    fn schedule_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Deregister a pending callback. Unknown or already-fired handles are
    /// ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Deterministic scheduler driven by a simulated clock.
///
/// Hosts that own their frame loop (and tests) move time forward explicitly
/// with [`advance`](ManualScheduler::advance); pending callbacks then fire
/// with the new timestamp. Callbacks scheduled during a dispatch land in the
/// next batch, never the current one.
#[derive(Default)]
pub struct ManualScheduler {
    inner: RefCell<Queue>,
}

#[derive(Default)]
struct Queue {
    now_ms: f64,
    next_handle: u64,
    pending: Vec<(FrameHandle, FrameCallback)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending_frames(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Move the clock forward by `dt_ms` and fire the pending batch.
    pub fn advance(&self, dt_ms: f64) {
        let (now, batch) = {
            let mut queue = self.inner.borrow_mut();
            queue.now_ms += dt_ms;
            (queue.now_ms, std::mem::take(&mut queue.pending))
        };
        for (_, callback) in batch {
            callback(now);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(&self, callback: FrameCallback) -> FrameHandle {
        let mut queue = self.inner.borrow_mut();
        let handle = FrameHandle(queue.next_handle);
        queue.next_handle += 1;
        queue.pending.push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.inner.borrow_mut().pending.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn advance_fires_pending_in_order() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        for label in ["a", "b"] {
            let fired = Rc::clone(&fired);
            scheduler.schedule_frame(Box::new(move |_| fired.borrow_mut().push(label)));
        }
        scheduler.advance(16.0);

        assert_eq!(*fired.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn callback_receives_new_timestamp() {
        let scheduler = ManualScheduler::new();
        scheduler.advance(100.0);

        let seen = Rc::new(RefCell::new(0.0));
        let seen_by_cb = Rc::clone(&seen);
        scheduler.schedule_frame(Box::new(move |now| *seen_by_cb.borrow_mut() = now));
        scheduler.advance(50.0);

        assert_eq!(*seen.borrow(), 150.0);
        assert_eq!(scheduler.now_ms(), 150.0);
    }

    #[test]
    fn cancel_removes_callback() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));

        let fired_by_cb = Rc::clone(&fired);
        let handle = scheduler.schedule_frame(Box::new(move |_| *fired_by_cb.borrow_mut() = true));
        scheduler.cancel_frame(handle);
        scheduler.advance(16.0);

        assert!(!*fired.borrow());
    }

    #[test]
    fn cancel_after_fire_is_ignored() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_frame(Box::new(|_| {}));
        scheduler.advance(16.0);
        scheduler.cancel_frame(handle);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn reschedule_during_dispatch_waits_for_next_batch() {
        let scheduler = Rc::new(ManualScheduler::new());
        let times = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = Rc::clone(&scheduler);
        let inner_times = Rc::clone(&times);
        scheduler.schedule_frame(Box::new(move |now| {
            inner_times.borrow_mut().push(now);
            let times = Rc::clone(&inner_times);
            inner_scheduler.schedule_frame(Box::new(move |now| times.borrow_mut().push(now)));
        }));

        scheduler.advance(10.0);
        // The rescheduled callback must not fire in the same batch
        assert_eq!(*times.borrow(), vec![10.0]);
        assert_eq!(scheduler.pending_frames(), 1);

        scheduler.advance(10.0);
        assert_eq!(*times.borrow(), vec![10.0, 20.0]);
    }
}
