//! Parameter derivers — pure functions from progress to render parameters.
//!
//! Every deriver clamps its ratio terms before use and is total: NaN or
//! out-of-range input never produces an opacity outside `[0, 1]` or a
//! negative scale.

use super::segment::{clamp_unit, DecorationPhase, MotionWindows, StagePosition};

// ───────────────────────────────────────── ramps ─────────────

/// Linear ramp from 0 at `start` to 1 at `end`, clamped outside.
/// A degenerate window (`end <= start`) steps at `start`.
pub fn ramp(v: f64, start: f64, end: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    if end <= start {
        return if v >= start { 1.0 } else { 0.0 };
    }
    clamp_unit((v - start) / (end - start))
}

/// Simple opacity fade over `[start, end]` of overall progress.
pub fn opacity_fade(v: f64, start: f64, end: f64) -> f64 {
    ramp(v, start, end)
}

// ───────────────────────────────────────── frame shape ───────

/// Window over which the framed video shrinks and rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkWindow {
    pub start: f64,
    pub end: f64,
    /// Scale lost at the end of the window.
    pub scale_loss: f64,
    /// Corner radius reached at the end of the window, in px.
    pub max_radius_px: f64,
    pub max_shadow_opacity: f64,
}

impl Default for ShrinkWindow {
    fn default() -> Self {
        Self {
            start: 0.45,
            end: 0.9,
            scale_loss: 0.12,
            max_radius_px: 24.0,
            max_shadow_opacity: 0.25,
        }
    }
}

/// Scale, corner radius and shadow of the framed video.  All three share
/// one ramp fraction so they move together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameShape {
    pub ratio: f64,
    pub scale: f64,
    pub border_radius_px: u32,
    pub shadow_opacity: f64,
}

pub fn frame_shape(v: f64, window: &ShrinkWindow) -> FrameShape {
    let r = ramp(v, window.start, window.end);
    FrameShape {
        ratio: r,
        scale: (1.0 - r * window.scale_loss).max(0.0),
        border_radius_px: (r * window.max_radius_px).round().max(0.0) as u32,
        shadow_opacity: clamp_unit(window.max_shadow_opacity * r),
    }
}

// ───────────────────────────────────────── timeline ──────────

/// Fill percentage of each timeline segment for `steps` dots.
///
/// Segment `i` (between dot `i` and `i + 1`; the last one is the tail) is
/// 100 before the active stage, `local * 100` at it, and 0 after.
pub fn timeline_fill(progress: f64, steps: usize) -> Vec<f64> {
    let steps = steps.max(1);
    let p = clamp_unit(progress);
    let raw_index = ((p * steps as f64).floor() as usize).min(steps - 1);
    let segment = clamp_unit(p * steps as f64 - raw_index as f64);
    (0..steps)
        .map(|i| {
            if i < raw_index {
                100.0
            } else if i == raw_index {
                segment * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

// ───────────────────────────────────────── side decorations ──

/// Offset and opacity of a side decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

/// Pixels a decoration rises from while entering.
const ENTER_RISE: f64 = 60.0;
/// Pixels a decoration drifts up while exiting.
const EXIT_DISTANCE: f64 = 140.0;
/// Parking offset for hidden decorations.
const PARKED_Y: f64 = 200.0;

/// Motion of a decoration owned by stage `own`.
///
/// `parallax` is the horizontal drift magnitude; `base_opacity` carries
/// any overall-track fade so decorations never show before the track does.
/// Entering rises 60 → 0 and fades in, holding drifts slowly at full
/// opacity, exiting rises 0 → -140 and fades out.  Height and opacity are
/// continuous across the window boundaries; horizontal drift is not.
pub fn compute_motion(
    own: usize,
    position: StagePosition,
    parallax: f64,
    base_opacity: f64,
    windows: &MotionWindows,
) -> Motion {
    let base = clamp_unit(base_opacity);
    match windows.phase(own, position) {
        DecorationPhase::NotReached => Motion {
            x: 0.0,
            y: PARKED_Y,
            opacity: 0.0,
        },
        DecorationPhase::Entering(t) => Motion {
            x: (t - 0.5) * 2.0 * parallax,
            y: ENTER_RISE - ENTER_RISE * t,
            opacity: clamp_unit(t) * base,
        },
        DecorationPhase::Holding(local) => Motion {
            x: (local - 0.5) * 2.0 * parallax,
            y: 0.0,
            opacity: base,
        },
        DecorationPhase::Exiting(t) => Motion {
            x: (0.5 + t * 0.5) * parallax,
            y: -EXIT_DISTANCE * t,
            opacity: (1.0 - t).max(0.0) * base,
        },
        DecorationPhase::Passed => Motion {
            x: parallax,
            y: -PARKED_Y,
            opacity: 0.0,
        },
    }
}

// ───────────────────────────────────────── colour ────────────

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`; anything else is `None`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = clamp_unit(t);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Fade toward `background` as opacity drops.
    pub fn with_opacity(self, opacity: f64, background: Rgb) -> Rgb {
        background.lerp(self, opacity)
    }
}

/// Two stacked glows cross-fading from the active stage's colour to the
/// next stage's colour across the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowBlend {
    pub current: Rgb,
    pub next: Rgb,
    pub current_opacity: f64,
    pub next_opacity: f64,
}

impl GlowBlend {
    /// Single colour seen through both layers.
    pub fn mixed(&self) -> Rgb {
        let total = self.current_opacity + self.next_opacity;
        if total <= 0.0 {
            return self.current;
        }
        self.current.lerp(self.next, self.next_opacity / total)
    }

    pub fn intensity(&self) -> f64 {
        clamp_unit(self.current_opacity + self.next_opacity)
    }
}

/// Glow for `position`.  `palette[0]` is replaced by `intro` so the first
/// screen starts from a lighter tone.
pub fn glow_blend(position: StagePosition, palette: &[Rgb], intro: Rgb, opacity: f64) -> GlowBlend {
    let colour = |idx: usize| {
        if idx == 0 || palette.is_empty() {
            intro
        } else {
            palette[idx.min(palette.len() - 1)]
        }
    };
    let next_index = if palette.is_empty() {
        position.index
    } else {
        (position.index + 1).min(palette.len() - 1)
    };
    let local = clamp_unit(position.local);
    let base = clamp_unit(opacity);
    GlowBlend {
        current: colour(position.index),
        next: colour(next_index),
        current_opacity: base * (1.0 - local),
        next_opacity: base * local,
    }
}

// ───────────────────────────────────────── marquee ───────────

/// Horizontal offsets of the three testimonial rows, in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarqueeShift {
    pub top: i32,
    pub middle: i32,
    pub bottom: i32,
}

/// Pointer column normalised to `[-1, 1]` across a section.
pub fn pointer_nx(x: f64, left: f64, width: f64) -> f64 {
    let nx = (x - left) / width.max(1.0) * 2.0 - 1.0;
    if nx.is_nan() {
        return 0.0;
    }
    nx.clamp(-1.0, 1.0)
}

/// Rows drift in opposite directions; the middle row moves at 60%.
pub fn marquee_shift(nx: f64, max_shift: f64) -> MarqueeShift {
    let nx = if nx.is_nan() { 0.0 } else { nx.clamp(-1.0, 1.0) };
    MarqueeShift {
        top: (nx * -max_shift).round() as i32,
        middle: (nx * -max_shift * 0.6).round() as i32,
        bottom: (nx * max_shift).round() as i32,
    }
}

// ───────────────────────────────────────── sizing ────────────

/// Phone mockup width for a viewport width: 16% of it, kept in 180..=340.
pub fn phone_width(viewport_width: f64) -> u32 {
    let w = if viewport_width.is_finite() && viewport_width > 0.0 {
        viewport_width
    } else {
        1200.0
    };
    (w * 0.16).clamp(180.0, 340.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(index: usize, local: f64) -> StagePosition {
        StagePosition { index, local }
    }

    #[test]
    fn ramp_clamps_outside_window() {
        assert_eq!(ramp(-1.0, 0.0, 0.35), 0.0);
        assert_eq!(ramp(0.7, 0.0, 0.35), 1.0);
        assert!((ramp(0.175, 0.0, 0.35) - 0.5).abs() < 1e-12);
        assert_eq!(ramp(0.5, 0.5, 0.5), 1.0);
        assert_eq!(ramp(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn frame_shape_baseline_and_extremes_are_synchronised() {
        let w = ShrinkWindow::default();
        for v in [-0.5, 0.0, 0.2, 0.45] {
            let s = frame_shape(v, &w);
            assert_eq!(s.scale, 1.0);
            assert_eq!(s.border_radius_px, 0);
            assert_eq!(s.shadow_opacity, 0.0);
        }
        for v in [0.9, 0.95, 1.0, 3.0] {
            let s = frame_shape(v, &w);
            assert!((s.scale - 0.88).abs() < 1e-12);
            assert_eq!(s.border_radius_px, 24);
            assert!((s.shadow_opacity - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn frame_shape_midpoint() {
        let s = frame_shape(0.675, &ShrinkWindow::default());
        assert!((s.ratio - 0.5).abs() < 1e-9);
        assert!((s.scale - 0.94).abs() < 1e-9);
        assert_eq!(s.border_radius_px, 12);
    }

    #[test]
    fn timeline_fill_at_half() {
        let fill = timeline_fill(0.5, 6);
        assert_eq!(fill.len(), 6);
        assert_eq!(&fill[..3], &[100.0, 100.0, 100.0]);
        assert!(fill[3].abs() < 1e-9);
        assert_eq!(&fill[4..], &[0.0, 0.0]);
    }

    #[test]
    fn timeline_fill_mid_stage() {
        let fill = timeline_fill(3.5 / 6.0, 6);
        assert_eq!(&fill[..3], &[100.0, 100.0, 100.0]);
        assert!((fill[3] - 50.0).abs() < 1e-6);
        assert_eq!(&fill[4..], &[0.0, 0.0]);
    }

    #[test]
    fn timeline_tail_fills_at_end() {
        let fill = timeline_fill(1.0, 6);
        assert!(fill.iter().all(|&f| (f - 100.0).abs() < 1e-9));
    }

    #[test]
    fn motion_outside_own_stage_is_hidden() {
        let w = MotionWindows::default();
        assert_eq!(
            compute_motion(2, at(1, 0.9), 10.0, 1.0, &w),
            Motion { x: 0.0, y: 200.0, opacity: 0.0 }
        );
        assert_eq!(
            compute_motion(2, at(3, 0.1), 10.0, 1.0, &w),
            Motion { x: 10.0, y: -200.0, opacity: 0.0 }
        );
    }

    #[test]
    fn motion_entering_rises_and_fades_in() {
        let w = MotionWindows::default();
        let start = compute_motion(0, at(0, 0.0), 10.0, 1.0, &w);
        assert_eq!(start.y, 60.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.x, -10.0);
        let mid = compute_motion(0, at(0, 0.075), 10.0, 0.8, &w);
        assert!((mid.y - 30.0).abs() < 1e-9);
        assert!((mid.opacity - 0.4).abs() < 1e-9);
        assert!(mid.x.abs() < 1e-9);
    }

    #[test]
    fn motion_drift_at_window_edges() {
        let w = MotionWindows::default();
        let entered = compute_motion(0, at(0, 0.15), 10.0, 1.0, &w);
        assert!((entered.x - 10.0).abs() < 1e-9);
        assert!(entered.y.abs() < 1e-9);
        let exiting = compute_motion(0, at(0, 0.92), 10.0, 1.0, &w);
        assert!((exiting.x - 5.0).abs() < 1e-9);
        assert!(exiting.y.abs() < 1e-9);
        assert!((exiting.opacity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn motion_holding_drifts_at_full_base_opacity() {
        let w = MotionWindows::default();
        let m = compute_motion(1, at(1, 0.5), 12.0, 0.7, &w);
        assert_eq!(m, Motion { x: 0.0, y: 0.0, opacity: 0.7 });
    }

    #[test]
    fn motion_exit_ends_where_passed_begins() {
        let w = MotionWindows::default();
        let end = compute_motion(1, at(1, 1.0), 12.0, 1.0, &w);
        assert!((end.x - 12.0).abs() < 1e-9);
        assert!((end.y + 140.0).abs() < 1e-9);
        assert!(end.opacity.abs() < 1e-9);
    }

    #[test]
    fn base_opacity_is_clamped() {
        let w = MotionWindows::default();
        let m = compute_motion(0, at(0, 0.5), 5.0, 3.0, &w);
        assert_eq!(m.opacity, 1.0);
        let m = compute_motion(0, at(0, 0.5), 5.0, -1.0, &w);
        assert_eq!(m.opacity, 0.0);
    }

    #[test]
    fn rgb_parses_and_blends() {
        let a = Rgb::from_hex("#4DA6FF").unwrap();
        assert_eq!(a, Rgb(0x4d, 0xa6, 0xff));
        assert_eq!(Rgb::from_hex("4DA6FF"), None);
        assert_eq!(Rgb::from_hex("#4DA6F"), None);
        assert_eq!(Rgb(0, 0, 0).lerp(Rgb(200, 100, 50), 0.5), Rgb(100, 50, 25));
    }

    #[test]
    fn glow_cross_fades_to_next_stage() {
        let palette = [Rgb(1, 1, 1), Rgb(2, 2, 2), Rgb(3, 3, 3)];
        let intro = Rgb(9, 9, 9);
        let g = glow_blend(at(0, 0.25), &palette, intro, 1.0);
        assert_eq!(g.current, intro);
        assert_eq!(g.next, Rgb(2, 2, 2));
        assert!((g.current_opacity - 0.75).abs() < 1e-12);
        assert!((g.next_opacity - 0.25).abs() < 1e-12);
        let last = glow_blend(at(2, 0.5), &palette, intro, 1.0);
        assert_eq!(last.current, Rgb(3, 3, 3));
        assert_eq!(last.next, Rgb(3, 3, 3));
    }

    #[test]
    fn marquee_rows_move_in_opposite_directions() {
        let s = marquee_shift(0.5, 80.0);
        assert_eq!(s, MarqueeShift { top: -40, middle: -24, bottom: 40 });
        assert_eq!(marquee_shift(5.0, 80.0).bottom, 80);
        assert_eq!(pointer_nx(0.0, 0.0, 100.0), -1.0);
        assert_eq!(pointer_nx(50.0, 0.0, 100.0), 0.0);
        assert_eq!(pointer_nx(500.0, 0.0, 100.0), 1.0);
    }

    #[test]
    fn phone_width_is_bounded() {
        assert_eq!(phone_width(400.0), 180);
        assert_eq!(phone_width(1500.0), 240);
        assert_eq!(phone_width(4000.0), 340);
        assert_eq!(phone_width(0.0), 192);
    }

    proptest! {
        #[test]
        fn motion_is_continuous_at_window_boundaries(
            parallax in -20.0f64..20.0,
            base in 0.0f64..=1.0,
        ) {
            let w = MotionWindows::default();
            let eps = 1e-7;
            for edge in [w.enter_end, w.exit_start] {
                let a = compute_motion(0, at(0, edge - eps), parallax, base, &w);
                let b = compute_motion(0, at(0, edge + eps), parallax, base, &w);
                prop_assert!((a.y - b.y).abs() < 1e-3);
                prop_assert!((a.opacity - b.opacity).abs() < 1e-3);
            }
        }

        #[test]
        fn motion_opacity_stays_in_unit_interval(
            own in 0usize..6,
            index in 0usize..6,
            local in -1.0f64..2.0,
            base in -1.0f64..2.0,
        ) {
            let m = compute_motion(own, at(index, local), 10.0, base, &MotionWindows::default());
            prop_assert!((0.0..=1.0).contains(&m.opacity));
        }

        #[test]
        fn frame_scale_never_negative(v in -10.0f64..10.0) {
            let s = frame_shape(v, &ShrinkWindow::default());
            prop_assert!(s.scale > 0.0 && s.scale <= 1.0);
            prop_assert!((0.0..=1.0).contains(&s.shadow_opacity));
        }
    }
}
