//! Track definitions — the static content of each scroll-driven section and
//! the bundle of derived parameters it hands to the renderer per frame.
//!
//! Nothing here keeps state between frames: a bundle is a pure function of
//! the smoothed progress (or pointer position) and the track's tuning.

use super::derive::{
    compute_motion, frame_shape, glow_blend, marquee_shift, opacity_fade, ramp, timeline_fill,
    FrameShape, GlowBlend, MarqueeShift, Motion, Rgb, ShrinkWindow,
};
use super::segment::{GuardWindow, MotionWindows, StageMap, StagePosition};

// ───────────────────────────────────────── phone track ───────

/// Copy block shown beside the phone for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneScreen {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PHONE_SCREENS: &[PhoneScreen] = &[
    PhoneScreen {
        label: "Two-Week MVPs",
        title: "Your MVP, built in 2 weeks.",
        description: "In just 14 days you are testing a working version of your idea.",
    },
    PhoneScreen {
        label: "AI-Driven Contracts",
        title: "Cheaper than hiring devs.",
        description: "Token-estimated contracts: no inflated hourly rates, just clear math.",
    },
    PhoneScreen {
        label: "Notion Checklists",
        title: "Track progress in real-time.",
        description: "Every step is shared in Notion, so you always know what is happening.",
    },
    PhoneScreen {
        label: "GitHub Updates",
        title: "Every commit in your inbox.",
        description: "An email for every push: full visibility as features come to life.",
    },
    PhoneScreen {
        label: "Built in Public",
        title: "Transparency is trust.",
        description: "Watch progress unfold in public. Trust is proven, not promised.",
    },
    PhoneScreen {
        label: "Milestone Meetings",
        title: "You test as we build.",
        description: "At each milestone you click, test and approve before we move on.",
    },
];

/// Glow colour per stage; stage 0 uses [`GLOW_INTRO`] instead.
pub const GLOW_PALETTE: &[&str] = &["#4DA6FF", "#6C63FF", "#1E2A38", "#FF9800", "#00BFA6", "#3ED598"];
pub const GLOW_INTRO: &str = "#8EC6FF";

/// Which side of the phone a decoration sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A side image owned by one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub own: usize,
    pub side: Side,
    /// Horizontal drift magnitude in px.
    pub parallax: f64,
}

pub const PHONE_DECORATIONS: &[Decoration] = &[
    Decoration { own: 0, side: Side::Right, parallax: 10.0 },
    Decoration { own: 0, side: Side::Left, parallax: -12.0 },
    Decoration { own: 1, side: Side::Right, parallax: 14.0 },
    Decoration { own: 1, side: Side::Left, parallax: -10.0 },
    Decoration { own: 2, side: Side::Right, parallax: 12.0 },
    Decoration { own: 2, side: Side::Left, parallax: -8.0 },
    Decoration { own: 3, side: Side::Right, parallax: -11.0 },
    Decoration { own: 3, side: Side::Left, parallax: 9.0 },
    Decoration { own: 4, side: Side::Right, parallax: 10.0 },
    Decoration { own: 4, side: Side::Left, parallax: -9.0 },
    Decoration { own: 5, side: Side::Right, parallax: -10.0 },
    Decoration { own: 5, side: Side::Left, parallax: 8.0 },
];

/// Tuning of the phone track.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneTrack {
    pub stages: StageMap,
    pub guard: GuardWindow,
    pub windows: MotionWindows,
    /// Progress span over which the timeline fades in after the guard.
    pub timeline_fade_len: f64,
    palette: Vec<Rgb>,
    intro: Rgb,
}

impl PhoneTrack {
    pub fn new(guard: GuardWindow, windows: MotionWindows, timeline_fade_len: f64) -> Self {
        Self {
            stages: StageMap::new(PHONE_SCREENS.len()),
            guard,
            windows,
            timeline_fade_len,
            palette: GLOW_PALETTE.iter().filter_map(|h| Rgb::from_hex(h)).collect(),
            intro: Rgb::from_hex(GLOW_INTRO).unwrap_or(Rgb(0x8e, 0xc6, 0xff)),
        }
    }

    /// Derive the full bundle for smoothed raw progress `smoothed`.
    pub fn frame(&self, smoothed: f64) -> PhoneFrame {
        // Stages run over the guarded range so the first and last screens
        // get their full share of travel.
        let progress = self.guard.fade(smoothed);
        let position = self.stages.locate(progress);
        let body_opacity = self.guard.body_opacity(smoothed);
        let timeline_opacity = ramp(
            smoothed,
            self.guard.start_guard,
            self.guard.start_guard + self.timeline_fade_len,
        );

        let decorations = PHONE_DECORATIONS
            .iter()
            .map(|d| {
                let lead = if d.own == 0 { timeline_opacity } else { 1.0 };
                let base = lead * body_opacity;
                (*d, compute_motion(d.own, position, d.parallax, base, &self.windows))
            })
            .collect();

        PhoneFrame {
            progress,
            position,
            body_opacity,
            timeline_opacity,
            timeline: timeline_fill(progress, self.stages.count()),
            decorations,
            glow: glow_blend(
                position,
                &self.palette,
                self.intro,
                timeline_opacity * body_opacity,
            ),
        }
    }
}

impl Default for PhoneTrack {
    fn default() -> Self {
        Self::new(GuardWindow::default(), MotionWindows::default(), 0.08)
    }
}

/// Everything the renderer needs for one phone-track frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneFrame {
    /// Guarded progress driving the stages.
    pub progress: f64,
    pub position: StagePosition,
    pub body_opacity: f64,
    pub timeline_opacity: f64,
    /// Fill percentage per timeline segment.
    pub timeline: Vec<f64>,
    pub decorations: Vec<(Decoration, Motion)>,
    pub glow: GlowBlend,
}

impl PhoneFrame {
    pub fn screen(&self) -> &'static PhoneScreen {
        &PHONE_SCREENS[self.position.index.min(PHONE_SCREENS.len() - 1)]
    }
}

// ───────────────────────────────────────── coming soon ───────

/// The pinned "coming soon" video frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTrack {
    /// Title fades in over `[0, title_fade_end]`.
    pub title_fade_end: f64,
    pub shrink: ShrinkWindow,
}

impl Default for FrameTrack {
    fn default() -> Self {
        Self {
            title_fade_end: 0.35,
            shrink: ShrinkWindow::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComingSoonFrame {
    pub title_opacity: f64,
    pub shape: FrameShape,
}

impl FrameTrack {
    pub fn frame(&self, smoothed: f64) -> ComingSoonFrame {
        ComingSoonFrame {
            title_opacity: opacity_fade(smoothed, 0.0, self.title_fade_end),
            shape: frame_shape(smoothed, &self.shrink),
        }
    }
}

// ───────────────────────────────────────── testimonials ──────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { name: "Sarah Chen", title: "Product Manager", quote: "The attention to detail transformed our workflow." },
    Testimonial { name: "Michael Patel", title: "Founder", quote: "Fast delivery and clean architecture." },
    Testimonial { name: "Lena Ortiz", title: "CTO", quote: "Like adding a senior team overnight." },
    Testimonial { name: "Devon Brooks", title: "Head of Ops", quote: "We shipped faster than planned." },
    Testimonial { name: "Amira Khan", title: "Design Lead", quote: "Truly a partner, not a vendor." },
    Testimonial { name: "Kyle Nguyen", title: "Engineering Manager", quote: "Handover was effortless for our team." },
    Testimonial { name: "Sofia Martinez", title: "Founder", quote: "We felt in the loop the whole time." },
];

/// Pointer-driven testimonial rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeTrack {
    pub max_shift_px: f64,
}

impl Default for MarqueeTrack {
    fn default() -> Self {
        Self { max_shift_px: 80.0 }
    }
}

impl MarqueeTrack {
    pub fn frame(&self, smoothed_nx: f64) -> MarqueeShift {
        marquee_shift(smoothed_nx, self.max_shift_px)
    }
}
