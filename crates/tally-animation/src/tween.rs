//! Pure linear interpolation over a fixed duration

/// A linear sweep from one value to another over `duration_ms`.
///
/// The start timestamp is captured on the first sample, so the sweep is
/// anchored to whenever its first frame actually fires. Sampled values are
/// floored (mathematical floor, so decreasing sweeps floor toward negative
/// infinity) and always lie in the closed interval between `from` and `to`;
/// the final sample equals `floor(to)`.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    t0: Option<f64>,
    finished: bool,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            t0: None,
            finished: false,
        }
    }

    /// Sample the sweep at `now_ms`.
    ///
    /// A non-positive duration is complete at its first sample — progress
    /// jumps straight to 1 and no division happens.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let t0 = *self.t0.get_or_insert(now_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - t0) / self.duration_ms).clamp(0.0, 1.0)
        };
        if progress >= 1.0 {
            self.finished = true;
        }
        (self.from + progress * (self.to - self.from)).floor()
    }

    /// True once a sample has reached the end of the sweep.
    pub fn finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_to_first_sample() {
        let mut tween = Tween::new(100000.0, 150000.0, 200.0);
        assert_eq!(tween.sample(1000.0), 100000.0);
        assert_eq!(tween.sample(1100.0), 125000.0);
        assert_eq!(tween.sample(1200.0), 150000.0);
        assert!(tween.finished());
    }

    #[test]
    fn first_frame_at_timestamp_zero() {
        let mut tween = Tween::new(0.0, 100.0, 200.0);
        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(100.0), 50.0);
    }

    #[test]
    fn overshoot_clamps_to_target() {
        let mut tween = Tween::new(0.0, 100.0, 200.0);
        tween.sample(0.0);
        assert_eq!(tween.sample(5000.0), 100.0);
        assert!(tween.finished());
    }

    #[test]
    fn intermediate_values_floor() {
        let mut tween = Tween::new(0.0, 10.0, 200.0);
        tween.sample(0.0);
        // progress 0.75 → 7.5
        assert_eq!(tween.sample(150.0), 7.0);
    }

    #[test]
    fn decreasing_sweep_floors_toward_negative_infinity() {
        let mut tween = Tween::new(0.0, -1.0, 200.0);
        tween.sample(0.0);
        // progress 0.5 → -0.5 → floor gives -1, not 0
        assert_eq!(tween.sample(100.0), -1.0);
    }

    #[test]
    fn zero_duration_settles_immediately() {
        let mut tween = Tween::new(5.0, 42.0, 0.0);
        assert_eq!(tween.sample(17.0), 42.0);
        assert!(tween.finished());
    }

    #[test]
    fn negative_duration_settles_immediately() {
        let mut tween = Tween::new(5.0, 42.0, -100.0);
        assert_eq!(tween.sample(0.0), 42.0);
        assert!(tween.finished());
    }

    #[test]
    fn final_sample_is_floored_target() {
        let mut tween = Tween::new(0.0, 99.9, 100.0);
        tween.sample(0.0);
        assert_eq!(tween.sample(100.0), 99.0);
    }
}
