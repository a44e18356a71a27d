//! Easing curves and fixed-duration tweens.

use std::time::{Duration, Instant};

/// Easing curve mapping linear progress in [0.0, 1.0] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// The CSS `ease` curve, cubic Bézier (0.25, 0.1, 0.25, 1.0).
    #[default]
    Ease,
    /// Cubic ease-in-out.
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress to eased progress. Input is clamped to [0, 1].
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Evaluates a CSS-style cubic Bézier timing function with endpoints fixed at
/// (0, 0) and (1, 1).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let sample = |a1: f32, a2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    };
    let slope = |a1: f32, a2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    };

    // Newton first, bisection when the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let err = sample(x1, x2, t) - x;
        if err.abs() < 1e-6 {
            return sample(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = sample(x1, x2, t);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    sample(y1, y2, t)
}

/// A fixed-duration transition between two values.
///
/// Time is supplied by the caller, so a tween can be sampled at any instant
/// without touching a clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Creates a tween from `from` to `to` starting at `start`.
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Target value.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in [0, 1] at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Returns `true` once the full duration has elapsed.
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Eased value at `now`. Exactly the target once done.
    pub fn sample(&self, now: Instant) -> f32 {
        if self.is_done(now) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}

/// Clamped piecewise-linear mapping through three control points.
///
/// `input` must be ascending. Values outside the input range map to the
/// nearest output endpoint.
///
/// ```
/// use carousel_ui::animation::interpolate;
///
/// let scale = |x| interpolate(x, [-150.0, 0.0, 150.0], [0.7, 1.0, 0.7]);
/// assert_eq!(scale(0.0), 1.0);
/// assert!((scale(-75.0) - 0.85).abs() < 1e-6);
/// assert_eq!(scale(900.0), 0.7);
/// ```
pub fn interpolate(value: f32, input: [f32; 3], output: [f32; 3]) -> f32 {
    if value <= input[0] {
        return output[0];
    }
    if value >= input[2] {
        return output[2];
    }
    if value == input[1] {
        return output[1];
    }
    let (i0, i1, o0, o1) = if value <= input[1] {
        (input[0], input[1], output[0], output[1])
    } else {
        (input[1], input[2], output[1], output[2])
    };
    let span = i1 - i0;
    if span.abs() <= f32::EPSILON {
        return o1;
    }
    o0 + (o1 - o0) * (value - i0) / span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_pin_endpoints() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(4.0), 1.0);
        }
    }

    #[test]
    fn ease_is_monotonic_and_front_loaded() {
        let mut last = 0.0;
        for step in 1..=20 {
            let value = Easing::Ease.apply(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
        // CSS ease is about 0.8 at the halfway point.
        let mid = Easing::Ease.apply(0.5);
        assert!((mid - 0.802).abs() < 0.01, "mid = {mid}");
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let start = Instant::now();
        let tween = Tween::new(
            -225.0,
            -375.0,
            start,
            Duration::from_millis(100),
            Easing::Ease,
        );
        assert_eq!(tween.sample(start), -225.0);
        let mid = tween.sample(start + Duration::from_millis(50));
        assert!(mid < -225.0 && mid > -375.0);
        assert!(!tween.is_done(start + Duration::from_millis(99)));
        assert!(tween.is_done(start + Duration::from_millis(100)));
        assert_eq!(tween.sample(start + Duration::from_millis(250)), -375.0);
    }

    #[test]
    fn zero_duration_tween_is_done_immediately() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 10.0, start, Duration::ZERO, Easing::Linear);
        assert!(tween.is_done(start));
        assert_eq!(tween.sample(start), 10.0);
    }

    #[test]
    fn interpolate_clamps_outside_range() {
        let input = [-300.0, -150.0, 0.0];
        let output = [0.7, 1.0, 0.7];
        assert_eq!(interpolate(-1000.0, input, output), 0.7);
        assert_eq!(interpolate(-150.0, input, output), 1.0);
        assert_eq!(interpolate(1000.0, input, output), 0.7);
        assert!((interpolate(-75.0, input, output) - 0.85).abs() < 1e-6);
    }
}
