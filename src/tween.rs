//! Time-parameterized interpolation between two endpoints.
//! The sequencer chains these the way scripted timelines chain completion
//! callbacks, but each tween is advanced explicitly with a delta so the
//! whole chain is testable with a fake clock.

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// Symmetric cubic ease-in-out ("power2.inOut")
    Power2InOut,
}

impl Ease {
    /// Map linear progress t in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A single value interpolation with optional start delay.
/// During the delay the value holds at `from`; after `delay + duration`
/// it holds at exactly `to`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    delay: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    /// Hold at `from` for `delay` seconds before interpolating
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Advance by `dt` seconds, returns true once the tween has completed
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Current interpolated value; exact endpoints outside the active window
    pub fn value(&self) -> f32 {
        if self.elapsed <= self.delay {
            return self.from;
        }
        if self.finished() {
            return self.to;
        }
        let t = (self.elapsed - self.delay) / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Linear progress through the active window, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_hits_endpoints() {
        let mut tween = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
        assert_eq!(tween.value(), 0.0);

        tween.tick(0.5);
        assert!((tween.value() - 5.0).abs() < 1e-5);

        tween.tick(0.5);
        assert!(tween.finished());
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn value_clamps_after_completion() {
        let mut tween = Tween::new(1.6, 0.0, 0.5, Ease::Power2InOut);
        tween.tick(100.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn delay_holds_start_value() {
        let mut tween = Tween::new(0.0, 1.0, 1.0, Ease::Linear).with_delay(0.5);

        tween.tick(0.25);
        assert_eq!(tween.value(), 0.0);

        tween.tick(0.25);
        assert_eq!(tween.value(), 0.0);

        // Halfway through the active window
        tween.tick(0.5);
        assert!((tween.value() - 0.5).abs() < 1e-5);

        assert!(tween.tick(0.5));
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn power2_in_out_is_symmetric() {
        let ease = Ease::Power2InOut;
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);

        for i in 1..10 {
            let t = i as f32 / 10.0;
            let a = ease.apply(t);
            let b = 1.0 - ease.apply(1.0 - t);
            assert!((a - b).abs() < 1e-5, "asymmetric at t={}", t);
        }
    }

    #[test]
    fn power2_slower_at_ends_than_linear() {
        let ease = Ease::Power2InOut;
        assert!(ease.apply(0.1) < 0.1);
        assert!(ease.apply(0.9) > 0.9);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = Tween::new(0.0, 1.0, 0.0, Ease::Linear);
        assert!(tween.tick(0.001));
        assert_eq!(tween.value(), 1.0);
        assert_eq!(tween.progress(), 1.0);
    }
}
