//! Timing curves and tween descriptions.

/// Cubic Bézier timing curve anchored at `(0, 0)` and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Curve height at horizontal position `x`.
    pub fn solve(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        let t = self.parameter_for(x);
        axis(self.y1, self.y2, t)
    }

    fn parameter_for(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = axis(self.x1, self.x2, t) - x;
            if error.abs() < 1e-5 {
                return t;
            }
            let slope = axis_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // Newton stalled on a flat stretch; bisect instead.
        let (mut low, mut high) = (0.0f32, 1.0f32);
        for _ in 0..32 {
            t = (low + high) / 2.0;
            let at = axis(self.x1, self.x2, t);
            if (at - x).abs() < 1e-5 {
                break;
            }
            if at < x {
                low = t;
            } else {
                high = t;
            }
        }
        t
    }
}

fn axis(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn axis_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Named timing curves used by card transitions and indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Decelerating curve used for card scrolling.
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
    Custom(CubicBezier),
}

impl Easing {
    fn curve(&self) -> Option<CubicBezier> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some(CubicBezier::new(0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some(CubicBezier::new(0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some(CubicBezier::new(0.42, 0.0, 0.58, 1.0)),
            Easing::FastOutSlowIn => Some(CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
            Easing::LinearOutSlowIn => Some(CubicBezier::new(0.0, 0.0, 0.2, 1.0)),
            Easing::FastOutLinearIn => Some(CubicBezier::new(0.4, 0.0, 1.0, 1.0)),
            Easing::Custom(curve) => Some(*curve),
        }
    }

    /// Maps linear progress in `0.0..=1.0` onto this curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self.curve() {
            Some(curve) => curve.solve(fraction),
            None => fraction.clamp(0.0, 1.0),
        }
    }
}

/// How long a tween runs and how its progress is shaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Eased progress after `elapsed_nanos` and whether the tween is over.
    ///
    /// A zero-length tween is over immediately.
    pub fn progress_at(&self, elapsed_nanos: u64) -> (f32, bool) {
        let duration_nanos = self.duration_millis.saturating_mul(1_000_000);
        if elapsed_nanos >= duration_nanos {
            return (1.0, true);
        }
        let linear = elapsed_nanos as f64 / duration_nanos as f64;
        (self.easing.transform(linear as f32), false)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}
