//! Progress smoothing — damp raw scroll progress into a jitter-free follower.
//!
//! The damping model is injectable through [`Damping`]; the smoother itself
//! only owns the current value, the target, and the "still animating" flag.
//! Once the value is within `epsilon` of the target it snaps and stops, so a
//! frame loop can skip idle smoothers entirely.

/// Frame duration the per-frame factors are tuned for.
const REFERENCE_DT: f64 = 1.0 / 60.0;

/// Largest integration step for the spring; longer frames are subdivided.
const MAX_SPRING_STEP: f64 = 1.0 / 120.0;

// ───────────────────────────────────────── strategy ──────────

/// A damping strategy: advance `current` toward `target` over `dt` seconds.
pub trait Damping {
    fn advance(&mut self, current: f64, target: f64, dt: f64) -> f64;

    /// Whether the model has come to rest at `current`.
    fn settled(&self, current: f64, target: f64, epsilon: f64) -> bool {
        (target - current).abs() <= epsilon
    }

    /// Drop any internal motion state (velocity etc).
    fn reset(&mut self) {}
}

/// `next = cur + (target - cur) * k` per reference frame.  Never overshoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    k: f64,
}

impl ExponentialDecay {
    pub fn new(k: f64) -> Self {
        let k = if k.is_finite() { k.clamp(0.01, 1.0) } else { 0.12 };
        Self { k }
    }

}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self::new(0.12)
    }
}

impl Damping for ExponentialDecay {
    fn advance(&mut self, current: f64, target: f64, dt: f64) -> f64 {
        // Frame-rate independent: at 60 fps the factor is exactly `k`.
        let frames = (dt / REFERENCE_DT).max(0.0);
        let factor = 1.0 - (1.0 - self.k).powf(frames);
        current + (target - current) * factor.clamp(0.0, 1.0)
    }
}

/// Mass-spring-damper follower.  May overshoot briefly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness: stiffness.max(0.0),
            damping: damping.max(0.0),
            mass: mass.max(1e-3),
            velocity: 0.0,
        }
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(120.0, 24.0, 0.6)
    }
}

impl Damping for Spring {
    fn advance(&mut self, current: f64, target: f64, dt: f64) -> f64 {
        if dt <= 0.0 || !dt.is_finite() {
            return current;
        }
        let steps = (dt / MAX_SPRING_STEP).ceil().max(1.0) as usize;
        let h = dt / steps as f64;
        let mut x = current;
        for _ in 0..steps {
            // Semi-implicit Euler: velocity first, then position.
            let force = self.stiffness * (target - x) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            x += self.velocity * h;
        }
        x
    }

    fn settled(&self, current: f64, target: f64, epsilon: f64) -> bool {
        (target - current).abs() <= epsilon && self.velocity.abs() <= epsilon
    }

    fn reset(&mut self) {
        self.velocity = 0.0;
    }
}

// ───────────────────────────────────────── runtime choice ────

/// Which damping model a track uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingMode {
    #[default]
    Exponential,
    Spring,
}

impl SmoothingMode {
    pub fn label(self) -> &'static str {
        match self {
            SmoothingMode::Exponential => "Exponential",
            SmoothingMode::Spring => "Spring",
        }
    }

    pub fn config_value(self) -> &'static str {
        match self {
            SmoothingMode::Exponential => "exponential",
            SmoothingMode::Spring => "spring",
        }
    }

    pub fn from_config_value(s: &str) -> Option<Self> {
        match s {
            "exponential" | "exp" => Some(SmoothingMode::Exponential),
            "spring" => Some(SmoothingMode::Spring),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SmoothingMode::Exponential => SmoothingMode::Spring,
            SmoothingMode::Spring => SmoothingMode::Exponential,
        }
    }
}

/// Either damping model, picked at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyDamping {
    Exponential(ExponentialDecay),
    Spring(Spring),
}

impl AnyDamping {
    pub fn mode(&self) -> SmoothingMode {
        match self {
            AnyDamping::Exponential(_) => SmoothingMode::Exponential,
            AnyDamping::Spring(_) => SmoothingMode::Spring,
        }
    }
}

impl Damping for AnyDamping {
    fn advance(&mut self, current: f64, target: f64, dt: f64) -> f64 {
        match self {
            AnyDamping::Exponential(d) => d.advance(current, target, dt),
            AnyDamping::Spring(d) => d.advance(current, target, dt),
        }
    }

    fn settled(&self, current: f64, target: f64, epsilon: f64) -> bool {
        match self {
            AnyDamping::Exponential(d) => d.settled(current, target, epsilon),
            AnyDamping::Spring(d) => d.settled(current, target, epsilon),
        }
    }

    fn reset(&mut self) {
        match self {
            AnyDamping::Exponential(d) => d.reset(),
            AnyDamping::Spring(d) => d.reset(),
        }
    }
}

// ───────────────────────────────────────── smoother ──────────

/// Smoothed follower of a progress target.
#[derive(Debug, Clone)]
pub struct ProgressSmoother<D: Damping> {
    value: f64,
    target: f64,
    epsilon: f64,
    damping: D,
    animating: bool,
}

impl<D: Damping> ProgressSmoother<D> {
    pub fn new(damping: D, epsilon: f64) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            epsilon: epsilon.abs().max(1e-9),
            damping,
            animating: false,
        }
    }

    /// Set a new target; resumes ticking if it moved.
    pub fn set_target(&mut self, target: f64) {
        if target == self.target && !self.animating {
            return;
        }
        self.target = target;
        self.animating = !self.damping.settled(self.value, target, self.epsilon);
    }

    /// Snap straight to `value`, dropping any motion.
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.damping.reset();
        self.animating = false;
    }

    /// Advance one frame.  Returns `true` while still animating.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.animating {
            return false;
        }
        self.value = self.damping.advance(self.value, self.target, dt);
        if self.damping.settled(self.value, self.target, self.epsilon) {
            self.value = self.target;
            self.damping.reset();
            self.animating = false;
            tracing::trace!(value = self.value, "smoother converged");
        }
        self.animating
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn damping(&self) -> &D {
        &self.damping
    }

    /// Swap the damping model, keeping the current value.
    pub fn replace_damping(&mut self, damping: D) {
        self.damping = damping;
        self.animating = !self.damping.settled(self.value, self.target, self.epsilon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn exponential_step_matches_factor_at_reference_rate() {
        let mut d = ExponentialDecay::new(0.12);
        let next = d.advance(0.0, 1.0, DT);
        assert!((next - 0.12).abs() < 1e-9);
    }

    #[test]
    fn exponential_converges_and_stops() {
        let mut s = ProgressSmoother::new(ExponentialDecay::default(), 0.001);
        s.set_target(1.0);
        let mut frames = 0;
        while s.tick(DT) {
            frames += 1;
            assert!(frames < 1000, "smoother never converged");
        }
        assert_eq!(s.value(), 1.0);
        assert!(!s.is_animating());
        // Idle: further ticks do nothing.
        assert!(!s.tick(DT));
    }

    #[test]
    fn new_target_resumes_iteration() {
        let mut s = ProgressSmoother::new(ExponentialDecay::default(), 0.001);
        s.set_target(0.5);
        while s.tick(DT) {}
        s.set_target(0.2);
        assert!(s.is_animating());
        assert!(s.tick(DT));
        assert!(s.value() < 0.5 && s.value() > 0.2);
    }

    #[test]
    fn spring_settles_at_target() {
        let mut s = ProgressSmoother::new(Spring::default(), 0.001);
        s.set_target(1.0);
        let mut frames = 0;
        while s.tick(DT) {
            frames += 1;
            assert!(frames < 5000, "spring never settled");
        }
        assert_eq!(s.value(), 1.0);
        assert_eq!(s.damping().velocity(), 0.0);
    }

    #[test]
    fn spring_survives_long_frames() {
        let mut s = ProgressSmoother::new(Spring::default(), 0.001);
        s.set_target(1.0);
        for _ in 0..200 {
            s.tick(0.1);
        }
        assert!((s.value() - 1.0).abs() <= 0.001);
    }

    #[test]
    fn jump_to_snaps_without_motion() {
        let mut s = ProgressSmoother::new(Spring::default(), 0.001);
        s.set_target(1.0);
        s.tick(DT);
        s.jump_to(0.3);
        assert_eq!(s.value(), 0.3);
        assert!(!s.is_animating());
        assert_eq!(s.damping().velocity(), 0.0);
    }

    #[test]
    fn mode_round_trips_through_config_value() {
        for m in [SmoothingMode::Exponential, SmoothingMode::Spring] {
            assert_eq!(SmoothingMode::from_config_value(m.config_value()), Some(m));
        }
        assert_eq!(SmoothingMode::Exponential.next(), SmoothingMode::Spring);
    }

    proptest! {
        #[test]
        fn exponential_distance_strictly_shrinks(
            start in 0.0f64..=1.0,
            target in 0.0f64..=1.0,
        ) {
            let mut s = ProgressSmoother::new(ExponentialDecay::default(), 0.001);
            s.jump_to(start);
            s.set_target(target);
            let mut dist = (target - s.value()).abs();
            while s.tick(DT) {
                let next = (target - s.value()).abs();
                prop_assert!(next < dist);
                dist = next;
            }
            prop_assert!((target - s.value()).abs() <= 0.001);
        }

        #[test]
        fn exponential_never_overshoots(
            start in 0.0f64..=1.0,
            target in 0.0f64..=1.0,
            dt in 0.0f64..0.5,
        ) {
            let mut d = ExponentialDecay::default();
            let next = d.advance(start, target, dt);
            let (lo, hi) = if start < target { (start, target) } else { (target, start) };
            prop_assert!(next >= lo - 1e-12 && next <= hi + 1e-12);
        }
    }
}
