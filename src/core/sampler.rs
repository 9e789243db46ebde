//! Progress sampling — reduce a tracked region's geometry to a scalar in `[0, 1]`.
//!
//! A region is "pinned" for the duration of its animation: progress is 0
//! while its top edge sits at or below the viewport top and reaches 1 once
//! the region has scrolled `height - viewport_height` rows past it.

// ───────────────────────────────────────── geometry ──────────

/// Layout geometry of a tracked region, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGeometry {
    /// Distance from the viewport top to the region top (negative once
    /// the region has scrolled past the top edge).
    pub top: f64,
    /// Full height of the region.
    pub height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

impl RegionGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// How far outside the viewport a region may be and still be sampled,
/// as fractions of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearMargins {
    /// Region top must be above `viewport_height * below`.
    pub below: f64,
    /// Region bottom must be below `-viewport_height * above`.
    pub above: f64,
}

impl Default for NearMargins {
    fn default() -> Self {
        Self {
            below: 1.2,
            above: 0.2,
        }
    }
}

// ───────────────────────────────────────── pure helpers ──────

/// Map region geometry to raw scroll progress.
///
/// `total = max(1, height - viewport)`, `raw = clamp(-top / total, 0, 1)`.
/// Non-finite geometry yields 0.
pub fn sample_progress(geom: &RegionGeometry) -> f64 {
    let total = (geom.height - geom.viewport_height).max(1.0);
    let raw = -geom.top / total;
    // A top of exactly 0 gives -0.0.
    if raw.is_nan() || raw <= 0.0 {
        return 0.0;
    }
    raw.min(1.0)
}

/// Whether the region is close enough to the viewport to be worth sampling.
pub fn is_near_viewport(geom: &RegionGeometry, margins: &NearMargins) -> bool {
    let vh = geom.viewport_height;
    geom.top < vh * margins.below && geom.bottom() > -vh * margins.above
}

// ───────────────────────────────────────── sampler ───────────

/// Result of one sampling attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome {
    /// No geometry yet (region not laid out); try again next event.
    Skipped,
    /// Region is far off-screen; nothing was computed.
    Suspended,
    /// Fresh raw progress.
    Sampled(f64),
}

/// Stateful sampler: remembers the last raw value and carries the
/// one-shot "force recompute" flag that bypasses the visibility gate.
#[derive(Debug, Clone)]
pub struct ProgressSampler {
    margins: NearMargins,
    last: f64,
    force_pending: bool,
}

impl ProgressSampler {
    /// New samplers start with a pending force so the first frame after
    /// mount always computes, wherever the region is.
    pub fn new(margins: NearMargins) -> Self {
        Self {
            margins,
            last: 0.0,
            force_pending: true,
        }
    }

    /// Request that the next sample ignore the visibility gate.
    pub fn force(&mut self) {
        self.force_pending = true;
    }

    pub fn force_pending(&self) -> bool {
        self.force_pending
    }

    pub fn set_margins(&mut self, margins: NearMargins) {
        self.margins = margins;
    }

    /// Last successfully sampled raw progress.
    #[cfg(test)]
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Sample the region.  The force flag survives `Skipped` outcomes so a
    /// region that is not laid out yet still gets its forced compute later.
    pub fn sample(&mut self, geom: Option<&RegionGeometry>) -> SampleOutcome {
        let Some(geom) = geom else {
            return SampleOutcome::Skipped;
        };
        if !self.force_pending && !is_near_viewport(geom, &self.margins) {
            return SampleOutcome::Suspended;
        }
        self.force_pending = false;
        self.last = sample_progress(geom);
        SampleOutcome::Sampled(self.last)
    }
}

// ───────────────────────────────────────── scroll watch ──────

/// Per-frame poll of a scroll offset.  Reports only real changes, so a
/// frame loop can run continuously without resampling every tick.
#[derive(Debug, Clone, Default)]
pub struct ScrollWatch {
    last: Option<f64>,
}

impl ScrollWatch {
    /// Returns `true` when `offset` differs from the last polled value.
    pub fn poll(&mut self, offset: f64) -> bool {
        if self.last == Some(offset) {
            return false;
        }
        self.last = Some(offset);
        true
    }

    /// Whether the next [`poll`](Self::poll) of `offset` would report a change.
    pub fn is_stale(&self, offset: f64) -> bool {
        self.last != Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn progress_is_zero_before_region_reaches_top() {
        let g = RegionGeometry::new(50.0, 400.0, 100.0);
        assert_eq!(sample_progress(&g), 0.0);
    }

    #[test]
    fn progress_is_linear_while_pinned() {
        // 400 tall, 100 viewport → 300 rows of travel.
        let g = RegionGeometry::new(-150.0, 400.0, 100.0);
        assert!((sample_progress(&g) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_saturates_after_region_passes() {
        let g = RegionGeometry::new(-1000.0, 400.0, 100.0);
        assert_eq!(sample_progress(&g), 1.0);
    }

    #[test]
    fn short_region_floors_total_at_one() {
        // height <= viewport: total floors to 1, no division by zero.
        let g = RegionGeometry::new(-0.5, 80.0, 100.0);
        assert!((sample_progress(&g) - 0.5).abs() < 1e-12);
        let g = RegionGeometry::new(-3.0, 80.0, 100.0);
        assert_eq!(sample_progress(&g), 1.0);
    }

    #[test]
    fn region_at_the_top_samples_positive_zero() {
        let p = sample_progress(&RegionGeometry::new(0.0, 400.0, 100.0));
        assert_eq!(p, 0.0);
        assert!(p.is_sign_positive());
    }

    #[test]
    fn nan_geometry_samples_zero() {
        let g = RegionGeometry::new(f64::NAN, 400.0, 100.0);
        assert_eq!(sample_progress(&g), 0.0);
    }

    #[test]
    fn near_viewport_uses_both_margins() {
        let m = NearMargins::default();
        assert!(is_near_viewport(&RegionGeometry::new(110.0, 50.0, 100.0), &m));
        assert!(!is_near_viewport(&RegionGeometry::new(130.0, 50.0, 100.0), &m));
        // bottom at -10 is within 20% above.
        assert!(is_near_viewport(&RegionGeometry::new(-60.0, 50.0, 100.0), &m));
        assert!(!is_near_viewport(&RegionGeometry::new(-90.0, 50.0, 100.0), &m));
    }

    #[test]
    fn sampler_skips_without_geometry_and_keeps_force() {
        let mut s = ProgressSampler::new(NearMargins::default());
        assert_eq!(s.sample(None), SampleOutcome::Skipped);
        assert!(s.force_pending());
    }

    #[test]
    fn forced_sample_bypasses_gate_once() {
        let mut s = ProgressSampler::new(NearMargins::default());
        let far = RegionGeometry::new(-5000.0, 400.0, 100.0);
        assert_eq!(s.sample(Some(&far)), SampleOutcome::Sampled(1.0));
        assert_eq!(s.sample(Some(&far)), SampleOutcome::Suspended);
        s.force();
        assert_eq!(s.sample(Some(&far)), SampleOutcome::Sampled(1.0));
        assert_eq!(s.last(), 1.0);
    }

    #[test]
    fn scroll_watch_reports_changes_only() {
        let mut w = ScrollWatch::default();
        assert!(w.poll(0.0));
        assert!(!w.poll(0.0));
        assert!(w.poll(3.0));
        assert!(!w.poll(3.0));
    }

    proptest! {
        #[test]
        fn progress_always_in_unit_interval(
            top in -1.0e6f64..1.0e6,
            height in 0.0f64..1.0e5,
            vh in 0.0f64..1.0e4,
        ) {
            let p = sample_progress(&RegionGeometry::new(top, height, vh));
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
