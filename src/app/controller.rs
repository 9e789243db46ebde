//! Per-track animation controllers.
//!
//! A [`TrackController`] owns the stateful half of one scroll-driven
//! section: the sampler with its force flag, the smoother, and whether the
//! track is currently suspended off-screen.  Invalidations mark it dirty;
//! the frame loop samples dirty controllers and ticks the smoothers.

use crate::config::MotionConfig;
use crate::core::sampler::{ProgressSampler, RegionGeometry, SampleOutcome};
use crate::core::smoother::{AnyDamping, ExponentialDecay, ProgressSmoother, SmoothingMode, Spring};

/// Why a controller must re-read its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidate {
    Scroll,
    Resize,
    /// The terminal regained focus.
    Visibility,
    /// A section jump finished (a route change on a real page).
    Transition,
    Mount,
}

impl Invalidate {
    /// Reasons that bypass the visibility gate and snap the smoother.
    pub fn forces_resync(self) -> bool {
        matches!(self, Invalidate::Visibility | Invalidate::Transition | Invalidate::Mount)
    }
}

/// Build the damping model for `mode` from the motion config's tuning.
pub fn damping_for(motion: &MotionConfig, mode: SmoothingMode) -> AnyDamping {
    match mode {
        SmoothingMode::Exponential => AnyDamping::Exponential(ExponentialDecay::new(motion.smoothing_k)),
        SmoothingMode::Spring => AnyDamping::Spring(Spring::new(
            motion.spring_stiffness,
            motion.spring_damping,
            motion.spring_mass,
        )),
    }
}

#[derive(Debug, Clone)]
pub struct TrackController {
    name: &'static str,
    sampler: ProgressSampler,
    smoother: ProgressSmoother<AnyDamping>,
    /// Damping model that ignores the configured smoothing mode.
    fixed_mode: Option<SmoothingMode>,
    epsilon: f64,
    suspended: bool,
    dirty: bool,
    /// Value last handed to the renderer.
    published: Option<f64>,
}

impl TrackController {
    pub fn new(name: &'static str, motion: &MotionConfig) -> Self {
        Self {
            name,
            sampler: ProgressSampler::new(motion.margins()),
            smoother: ProgressSmoother::new(damping_for(motion, motion.smoothing), motion.epsilon),
            fixed_mode: None,
            epsilon: motion.epsilon,
            suspended: false,
            dirty: true,
            published: None,
        }
    }

    /// Always use `mode`, whatever the configured smoothing.
    pub fn with_fixed_mode(mut self, motion: &MotionConfig, mode: SmoothingMode) -> Self {
        self.fixed_mode = Some(mode);
        self.smoother.replace_damping(damping_for(motion, mode));
        self
    }

    pub fn invalidate(&mut self, reason: Invalidate) {
        if reason.forces_resync() {
            tracing::debug!(track = self.name, ?reason, "forced resync");
            self.sampler.force();
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the next frame has sampling or smoothing to do.
    pub fn needs_frame(&self) -> bool {
        self.is_dirty() || self.is_animating()
    }

    /// Sample the region if dirty.  A forced or re-entry sample snaps the
    /// smoother so it never animates out of a stale value.
    pub fn sample(&mut self, geom: Option<&RegionGeometry>) -> SampleOutcome {
        if !self.dirty {
            return SampleOutcome::Skipped;
        }
        let forced = self.sampler.force_pending();
        let outcome = self.sampler.sample(geom);
        match outcome {
            // Stay dirty until geometry shows up.
            SampleOutcome::Skipped => {}
            SampleOutcome::Suspended => {
                self.dirty = false;
                if !self.suspended {
                    tracing::debug!(track = self.name, "suspended off-screen");
                    self.suspended = true;
                }
            }
            SampleOutcome::Sampled(raw) => {
                self.dirty = false;
                if forced || self.suspended {
                    if self.suspended {
                        tracing::debug!(track = self.name, raw, "resumed");
                    }
                    self.suspended = false;
                    self.smoother.jump_to(raw);
                } else {
                    self.smoother.set_target(raw);
                }
            }
        }
        outcome
    }

    /// Advance the smoother.  Suspended tracks do no work.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.suspended {
            return false;
        }
        self.smoother.tick(dt)
    }

    pub fn progress(&self) -> f64 {
        self.smoother.value()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn is_animating(&self) -> bool {
        !self.suspended && self.smoother.is_animating()
    }

    /// Returns the progress if it moved more than epsilon since the last
    /// publish, recording it as published.  The settled value is always
    /// published so the final frame is exact.
    pub fn publish(&mut self) -> Option<f64> {
        let value = self.smoother.value();
        let changed = match self.published {
            None => true,
            Some(last) => {
                (value - last).abs() > self.epsilon
                    || (value != last && !self.smoother.is_animating())
            }
        };
        if !changed {
            return None;
        }
        self.published = Some(value);
        Some(value)
    }

    /// Apply new motion tuning, keeping the current progress.
    pub fn reconfigure(&mut self, motion: &MotionConfig) {
        self.sampler.set_margins(motion.margins());
        let mode = self.fixed_mode.unwrap_or(motion.smoothing);
        self.smoother.replace_damping(damping_for(motion, mode));
        self.epsilon = motion.epsilon;
        self.dirty = true;
    }

    pub fn smoothing(&self) -> SmoothingMode {
        self.smoother.damping().mode()
    }
}

/// Smoothed pointer follower for the testimonial rows.
#[derive(Debug, Clone)]
pub struct PointerFollower {
    smoother: ProgressSmoother<ExponentialDecay>,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self {
            smoother: ProgressSmoother::new(ExponentialDecay::default(), 0.001),
        }
    }
}

impl PointerFollower {
    /// Target a normalised pointer offset in `[-1, 1]`.
    pub fn point_at(&mut self, nx: f64) {
        self.smoother.set_target(nx.clamp(-1.0, 1.0));
    }

    /// Pointer left the section: drift back to centre.
    pub fn release(&mut self) {
        self.smoother.set_target(0.0);
    }

    pub fn tick(&mut self, dt: f64) -> bool {
        self.smoother.tick(dt)
    }

    pub fn value(&self) -> f64 {
        self.smoother.value()
    }

    pub fn is_animating(&self) -> bool {
        self.smoother.is_animating()
    }
}
