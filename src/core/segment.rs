//! Segment mapping — split overall progress into stages and named windows.
//!
//! A track of `n` stages partitions `[0, 1]` into equal bands.  Within the
//! active band, decorative elements move through enter / hold / exit
//! windows, and the whole track is bracketed by guard windows that pin the
//! overall fade to 0 or 1 near the pin boundaries.

// ───────────────────────────────────────── stages ────────────

/// Active stage and the progress inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagePosition {
    pub index: usize,
    /// Position within the stage, in `[0, 1]`.  Reaches 1 only at the very
    /// end of the last stage.
    pub local: f64,
}

/// Equal-width stage partition of `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageMap {
    count: usize,
}

impl StageMap {
    /// A map with `count` stages; zero is treated as one.
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `index = min(n-1, floor(p*n))`, `local = p*n - index`.
    /// Boundary ties resolve to the later stage.
    pub fn locate(&self, progress: f64) -> StagePosition {
        let p = clamp_unit(progress);
        let scaled = p * self.count as f64;
        let index = (scaled.floor() as usize).min(self.count - 1);
        let local = (scaled - index as f64).clamp(0.0, 1.0);
        StagePosition { index, local }
    }
}

// ───────────────────────────────────────── guard window ──────

/// Dead zones at the start and end of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardWindow {
    pub start_guard: f64,
    pub end_fade_start: f64,
}

impl Default for GuardWindow {
    fn default() -> Self {
        Self {
            start_guard: 0.1,
            end_fade_start: 0.98,
        }
    }
}

impl GuardWindow {
    /// Overall fade factor: 0 up to `start_guard`, 1 from `end_fade_start`,
    /// linear in between.
    pub fn fade(&self, progress: f64) -> f64 {
        let p = clamp_unit(progress);
        if p <= self.start_guard {
            return 0.0;
        }
        if p >= self.end_fade_start {
            return 1.0;
        }
        let span = self.end_fade_start - self.start_guard;
        if span <= 0.0 {
            return 1.0;
        }
        ((p - self.start_guard) / span).clamp(0.0, 1.0)
    }

    /// Opacity of the pinned track body: ramps in across the start guard
    /// and out across the end band, full in between.
    pub fn body_opacity(&self, progress: f64) -> f64 {
        let p = clamp_unit(progress);
        if p < self.start_guard {
            return ratio(p, self.start_guard);
        }
        if p > self.end_fade_start {
            return 1.0 - ratio(p - self.end_fade_start, 1.0 - self.end_fade_start);
        }
        1.0
    }
}

// ───────────────────────────────────────── motion windows ────

/// Enter / exit bands inside a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionWindows {
    pub enter_end: f64,
    pub exit_start: f64,
}

impl Default for MotionWindows {
    fn default() -> Self {
        Self {
            enter_end: 0.15,
            exit_start: 0.92,
        }
    }
}

/// Where a decoration owned by one stage currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecorationPhase {
    /// Active stage is before the owner.
    NotReached,
    /// Owner active, `t` in `[0, 1]` across the enter window.
    Entering(f64),
    /// Owner active, between enter and exit; carries the stage local.
    Holding(f64),
    /// Owner active, `t` in `[0, 1]` across the exit window.
    Exiting(f64),
    /// Active stage is past the owner.
    Passed,
}

impl MotionWindows {
    /// Classify a decoration owned by stage `own`.  Exactly one phase
    /// applies; `local == enter_end` is still entering and
    /// `local == exit_start` is already exiting.
    pub fn phase(&self, own: usize, position: StagePosition) -> DecorationPhase {
        use std::cmp::Ordering;
        match position.index.cmp(&own) {
            Ordering::Less => DecorationPhase::NotReached,
            Ordering::Greater => DecorationPhase::Passed,
            Ordering::Equal => {
                let local = clamp_unit(position.local);
                if local <= self.enter_end {
                    DecorationPhase::Entering(ratio(local, self.enter_end))
                } else if local >= self.exit_start {
                    DecorationPhase::Exiting(ratio(local - self.exit_start, 1.0 - self.exit_start))
                } else {
                    DecorationPhase::Holding(local)
                }
            }
        }
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Clamp into `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// `num / den` clamped into `[0, 1]`; a non-positive denominator steps.
fn ratio(num: f64, den: f64) -> f64 {
    if den <= 0.0 {
        return if num >= 0.0 { 1.0 } else { 0.0 };
    }
    clamp_unit(num / den)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stage_boundaries_resolve_to_later_stage() {
        let map = StageMap::new(6);
        let pos = map.locate(0.5);
        assert_eq!(pos.index, 3);
        assert!(pos.local.abs() < 1e-12);
        assert_eq!(StageMap::new(4).locate(0.25).index, 1);
    }

    #[test]
    fn end_of_track_stays_on_last_stage() {
        let map = StageMap::new(6);
        let pos = map.locate(1.0);
        assert_eq!(pos.index, 5);
        assert_eq!(pos.local, 1.0);
    }

    #[test]
    fn out_of_range_progress_clamps() {
        let map = StageMap::new(6);
        assert_eq!(map.locate(-0.3).index, 0);
        assert_eq!(map.locate(7.0).index, 5);
        assert_eq!(map.locate(f64::NAN).index, 0);
    }

    #[test]
    fn zero_stage_map_behaves_as_single_stage() {
        let map = StageMap::new(0);
        assert_eq!(map.count(), 1);
        let pos = map.locate(0.4);
        assert_eq!(pos.index, 0);
        assert!((pos.local - 0.4).abs() < 1e-12);
    }

    #[test]
    fn guarded_fade_scenario() {
        let g = GuardWindow::default();
        assert_eq!(g.fade(0.05), 0.0);
        assert_eq!(g.fade(0.1), 0.0);
        assert!((g.fade(0.54) - 0.5).abs() < 1e-9);
        assert_eq!(g.fade(0.99), 1.0);
        assert_eq!(g.fade(1.0), 1.0);
    }

    #[test]
    fn body_opacity_brackets_the_track() {
        let g = GuardWindow::default();
        assert_eq!(g.body_opacity(0.0), 0.0);
        assert!((g.body_opacity(0.05) - 0.5).abs() < 1e-9);
        assert_eq!(g.body_opacity(0.5), 1.0);
        assert!((g.body_opacity(0.99) - 0.5).abs() < 1e-9);
        assert!(g.body_opacity(1.0).abs() < 1e-9);
    }

    #[test]
    fn phases_cover_every_case() {
        let w = MotionWindows::default();
        let at = |index, local| StagePosition { index, local };
        assert_eq!(w.phase(2, at(1, 0.5)), DecorationPhase::NotReached);
        assert_eq!(w.phase(2, at(3, 0.0)), DecorationPhase::Passed);
        assert_eq!(w.phase(2, at(2, 0.0)), DecorationPhase::Entering(0.0));
        assert_eq!(w.phase(2, at(2, 0.15)), DecorationPhase::Entering(1.0));
        assert_eq!(w.phase(2, at(2, 0.5)), DecorationPhase::Holding(0.5));
        assert_eq!(w.phase(2, at(2, 0.92)), DecorationPhase::Exiting(0.0));
        match w.phase(2, at(2, 1.0)) {
            DecorationPhase::Exiting(t) => assert!((t - 1.0).abs() < 1e-9),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn stage_index_is_in_range_and_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let map = StageMap::new(6);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = map.locate(lo);
            let p_hi = map.locate(hi);
            prop_assert!(p_lo.index <= 5 && p_hi.index <= 5);
            prop_assert!(p_lo.index <= p_hi.index);
            prop_assert!((0.0..1.0).contains(&p_lo.local));
        }

        #[test]
        fn guard_fade_in_unit_interval(p in -2.0f64..3.0) {
            let f = GuardWindow::default().fade(p);
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}
