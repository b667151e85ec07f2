//! Animated numeric counter — a display value that sweeps toward its target

use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::tween::Tween;
use log::debug;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tally_core::{format_value, Locale};

const DEFAULT_DURATION_MS: f64 = 200.0;

/// Mutable counter state, shared with in-flight frame callbacks.
struct CounterState {
    displayed: f64,
    previous_target: f64,
    current_target: f64,
    /// Run generation; frames tagged with an older generation no-op.
    run: u64,
    tween: Option<Tween>,
    pending: Option<FrameHandle>,
}

/// A display value that sweeps toward its target whenever the target changes.
///
/// Each target change records the old target as the sweep origin and
/// schedules a chain of frame callbacks on the injected [`FrameScheduler`];
/// between frames the state is stable for any observer. A change arriving
/// mid-sweep supersedes the running sweep: its pending frame is cancelled and
/// its generation is retired, so stale callbacks never mutate state. Dropping
/// the counter cancels outstanding work.
pub struct AnimatedCounter {
    state: Rc<RefCell<CounterState>>,
    scheduler: Rc<dyn FrameScheduler>,
    duration_ms: f64,
    locale: Option<Locale>,
}

impl AnimatedCounter {
    /// Create a settled counter showing `start`. No frame is scheduled.
    pub fn new(scheduler: Rc<dyn FrameScheduler>, start: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(CounterState {
                displayed: start,
                previous_target: start,
                current_target: start,
                run: 0,
                tween: None,
                pending: None,
            })),
            scheduler,
            duration_ms: DEFAULT_DURATION_MS,
            locale: None,
        }
    }

    /// Set the sweep duration in milliseconds (default 200). A non-positive
    /// duration settles on the first frame of each run.
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Format output with the given locale's digit grouping.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Supply a new target value.
    ///
    /// A target equal to the current one is a no-op: no state change, no
    /// frame scheduled. A differing target starts a new run from the old
    /// target, superseding any run still in flight.
    pub fn set_value(&self, value: f64) {
        let run = {
            let mut state = self.state.borrow_mut();
            if value == state.current_target {
                return;
            }
            state.previous_target = state.current_target;
            state.current_target = value;
            state.run += 1;
            state.tween = Some(Tween::new(
                state.previous_target,
                state.current_target,
                self.duration_ms,
            ));
            if let Some(handle) = state.pending.take() {
                self.scheduler.cancel_frame(handle);
            }
            debug!(
                "run {}: {} -> {}",
                state.run, state.previous_target, state.current_target
            );
            state.run
        };
        let handle = schedule_step(&self.scheduler, &self.state, run);
        self.state.borrow_mut().pending = Some(handle);
    }

    /// The value currently shown. An integer (via floor) mid-sweep.
    pub fn value(&self) -> f64 {
        self.state.borrow().displayed
    }

    /// The target the counter is converging to.
    pub fn target(&self) -> f64 {
        self.state.borrow().current_target
    }

    /// The target in effect before the most recent change.
    pub fn previous_target(&self) -> f64 {
        self.state.borrow().previous_target
    }

    /// Whether a frame is scheduled (a run is in flight).
    pub fn animating(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// The displayed value formatted for this counter's locale.
    pub fn text(&self) -> String {
        format_value(self.value(), self.locale.as_ref())
    }
}

impl fmt::Display for AnimatedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl Drop for AnimatedCounter {
    fn drop(&mut self) {
        if let Some(handle) = self.state.borrow_mut().pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

/// Schedule the next frame of run `run`, returning its handle.
fn schedule_step(
    scheduler: &Rc<dyn FrameScheduler>,
    state: &Rc<RefCell<CounterState>>,
    run: u64,
) -> FrameHandle {
    let weak = Rc::downgrade(state);
    let chained = Rc::clone(scheduler);
    scheduler.schedule_frame(Box::new(move |now_ms| step(weak, chained, run, now_ms)))
}

/// One frame of a run. Torn-down counters and superseded runs no-op.
fn step(
    state: Weak<RefCell<CounterState>>,
    scheduler: Rc<dyn FrameScheduler>,
    run: u64,
    now_ms: f64,
) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let finished = {
        let mut s = state.borrow_mut();
        if s.run != run {
            debug!("run {run}: superseded, dropping frame");
            return;
        }
        s.pending = None;
        let (value, finished) = match s.tween.as_mut() {
            Some(tween) => (tween.sample(now_ms), tween.finished()),
            None => return,
        };
        s.displayed = value;
        if finished {
            s.tween = None;
        }
        finished
    };
    if !finished {
        let handle = schedule_step(&scheduler, &state, run);
        state.borrow_mut().pending = Some(handle);
    }
}
