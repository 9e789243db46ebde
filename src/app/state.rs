//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! [`AppState::advance`] is the per-frame pipeline: poll, sample, smooth,
//! derive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::cluster::{place_markers, PlacedMarker};
use crate::core::derive::{pointer_nx, MarqueeShift};
use crate::core::markers::Marker;
use crate::core::sampler::{is_near_viewport, NearMargins, ScrollWatch};
use crate::core::smoother::SmoothingMode;
use crate::core::track::{ComingSoonFrame, FrameTrack, MarqueeTrack, PhoneFrame, PhoneTrack};

use super::controller::{Invalidate, PointerFollower, TrackController};
use super::event::FrameInterval;
use super::page::{Page, SectionKind};

/// Globe spin while the hero is on screen, in radians per second.
const GLOBE_SPIN: f64 = 0.25;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    SettingsMenu,
    ControlsSubmenu,
}

/// Top-level application state.
pub struct AppState {
    /// The virtual document being scrolled.
    pub page: Page,
    /// Screen area the page was last drawn into.
    pub page_area: Rect,
    pub phone: TrackController,
    pub coming_soon: TrackController,
    pub pointer: PointerFollower,
    scroll_watch: ScrollWatch,

    pub phone_track: PhoneTrack,
    pub frame_track: FrameTrack,
    pub marquee_track: MarqueeTrack,

    // ── derived bundles, read by the renderer ──────────────────
    pub phone_frame: PhoneFrame,
    pub coming_soon_frame: ComingSoonFrame,
    pub marquee: MarqueeShift,
    pub globe_angle: f64,

    pub markers: Vec<Marker>,
    pub placed: Vec<PlacedMarker>,

    /// Whether the terminal has focus.
    pub focused: bool,
    /// Set whenever something visible changed since the last draw.
    pub needs_redraw: bool,
    /// Frame interval shared with the event reader.
    pub frame_interval: FrameInterval,

    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// User configuration.
    pub config: AppConfig,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Currently highlighted item in the controls submenu.
    pub controls_selected: usize,
    /// When `true`, the controls submenu is waiting for the user to press
    /// a key to rebind the action at `controls_selected`.
    pub awaiting_rebind: bool,
}

impl AppState {
    pub fn new(config: AppConfig, markers: Vec<Marker>) -> Self {
        let phone_track = PhoneTrack::new(
            config.motion.guard(),
            config.motion.windows(),
            config.motion.timeline_fade_len,
        );
        let frame_track = FrameTrack::default();
        let marquee_track = MarqueeTrack::default();
        let points: Vec<_> = markers.iter().map(|m| m.point).collect();
        let placed = place_markers(&points, &config.cluster);

        let mut state = Self {
            page: Page::default(),
            page_area: Rect::default(),
            phone: TrackController::new("phone", &config.motion),
            coming_soon: TrackController::new("coming-soon", &config.motion)
                .with_fixed_mode(&config.motion, SmoothingMode::Spring),
            pointer: PointerFollower::default(),
            scroll_watch: ScrollWatch::default(),
            phone_frame: phone_track.frame(0.0),
            coming_soon_frame: frame_track.frame(0.0),
            marquee: marquee_track.frame(0.0),
            phone_track,
            frame_track,
            marquee_track,
            globe_angle: 0.0,
            markers,
            placed,
            focused: true,
            needs_redraw: true,
            frame_interval: Arc::new(AtomicU64::new(config.frame_ms)),
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            settings_selected: 0,
            controls_selected: 0,
            awaiting_rebind: false,
        };
        state.invalidate_tracks(Invalidate::Mount);
        state
    }

    pub fn invalidate_tracks(&mut self, reason: Invalidate) {
        self.phone.invalidate(reason);
        self.coming_soon.invalidate(reason);
        self.needs_redraw = true;
    }

    /// Record where the page is drawn.  A size change relays out the page.
    pub fn set_page_area(&mut self, area: Rect) {
        self.page_area = area;
        if self
            .page
            .set_viewport(f64::from(area.width), f64::from(area.height))
        {
            tracing::debug!(width = area.width, height = area.height, "page relayout");
            self.invalidate_tracks(Invalidate::Resize);
        }
    }

    // ── scrolling ───────────────────────────────────────────────

    pub fn scroll_by(&mut self, rows: f64) {
        self.page.scroll_by(rows);
        if !self.config.continuous_poll {
            self.invalidate_tracks(Invalidate::Scroll);
        }
        self.needs_redraw = true;
    }

    /// Jump to a section; treated as a transition so tracks resync.
    pub fn jump_to_section(&mut self, index: usize) {
        self.page.scroll_to_section(index);
        self.invalidate_tracks(Invalidate::Transition);
        let label = self
            .page
            .sections
            .get(self.page.current_section())
            .map(|s| s.kind.label())
            .unwrap_or_default();
        self.status_message = Some(format!("Section: {label}"));
    }

    pub fn next_section(&mut self) {
        let next = self.page.current_section() + 1;
        if next < self.page.sections.len() {
            self.jump_to_section(next);
        }
    }

    pub fn prev_section(&mut self) {
        let current = self.page.current_section();
        // Mid-section: go back to its start first.
        let at_start = self.page.scroll_y() <= self.page.section_offset(current);
        let target = if at_start { current.saturating_sub(1) } else { current };
        self.jump_to_section(target);
    }

    // ── focus ───────────────────────────────────────────────────

    pub fn set_focused(&mut self, focused: bool) {
        if focused && !self.focused {
            self.invalidate_tracks(Invalidate::Visibility);
        }
        self.focused = focused;
    }

    // ── pointer ─────────────────────────────────────────────────

    /// Feed a pointer position; only the testimonial rows react to it.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        match self.section_rect(SectionKind::Testimonials) {
            Some(rect) if rect.contains((column, row).into()) => {
                let nx = pointer_nx(
                    f64::from(column),
                    f64::from(rect.x),
                    f64::from(rect.width),
                );
                self.pointer.point_at(nx);
            }
            _ => self.pointer.release(),
        }
    }

    /// Visible screen rect of a section's content, if any part is on screen.
    pub fn section_rect(&self, kind: SectionKind) -> Option<Rect> {
        let placement = self.page.placements().into_iter().find(|p| p.kind == kind)?;
        let area = self.page_area;
        let top = placement.top.max(0);
        let bottom = (placement.top + placement.height).min(i32::from(area.height));
        if bottom <= top {
            return None;
        }
        Some(Rect::new(
            area.x,
            area.y + top as u16,
            area.width,
            (bottom - top) as u16,
        ))
    }

    // ── configuration ───────────────────────────────────────────

    pub fn set_smoothing(&mut self, mode: SmoothingMode) {
        self.config.motion.smoothing = mode;
        self.phone.reconfigure(&self.config.motion);
        self.coming_soon.reconfigure(&self.config.motion);
        self.persist_config();
        self.status_message = Some(format!("Smoothing: {}", mode.label()));
    }

    pub fn set_frame_ms(&mut self, ms: u64) {
        self.config.frame_ms = ms;
        self.frame_interval.store(ms, Ordering::Relaxed);
        self.persist_config();
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_interval.load(Ordering::Relaxed)
    }

    /// Re-run marker placement after the cluster tuning changed.
    pub fn replace_markers(&mut self) {
        let points: Vec<_> = self.markers.iter().map(|m| m.point).collect();
        self.placed = place_markers(&points, &self.config.cluster);
        self.needs_redraw = true;
    }

    pub fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }
    }

    // ── frame pipeline ──────────────────────────────────────────

    /// Run one animation frame of `dt` seconds.  Returns `true` if any
    /// rendered value changed.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.config.continuous_poll && self.scroll_watch.poll(self.page.scroll_y()) {
            self.phone.invalidate(Invalidate::Scroll);
            self.coming_soon.invalidate(Invalidate::Scroll);
        }

        let phone_geom = self.page.geometry(SectionKind::PhoneTrack);
        self.phone.sample(phone_geom.as_ref());
        self.phone.tick(dt);

        let coming_geom = self.page.geometry(SectionKind::ComingSoon);
        self.coming_soon.sample(coming_geom.as_ref());
        self.coming_soon.tick(dt);

        let mut changed = false;
        if let Some(p) = self.phone.publish() {
            self.phone_frame = self.phone_track.frame(p);
            changed = true;
        }
        if let Some(p) = self.coming_soon.publish() {
            self.coming_soon_frame = self.frame_track.frame(p);
            changed = true;
        }
        let nx = self.pointer.value();
        self.pointer.tick(dt);
        if self.pointer.value() != nx {
            self.marquee = self.marquee_track.frame(self.pointer.value());
            changed = true;
        }

        if self.globe_spinning() {
            self.globe_angle = (self.globe_angle + GLOBE_SPIN * dt) % std::f64::consts::TAU;
            changed = true;
        }

        self.needs_redraw |= changed;
        changed
    }

    /// The globe turns only while the hero is on screen and the terminal
    /// has focus.
    fn globe_spinning(&self) -> bool {
        self.focused
            && self
                .page
                .geometry(SectionKind::Hero)
                .is_some_and(|g| is_near_viewport(&g, &NearMargins { below: 1.0, above: 0.0 }))
    }

    /// Whether another frame would change anything.  When false the frame
    /// loop sleeps until the next input event.
    pub fn is_animating(&self) -> bool {
        self.phone.needs_frame()
            || self.coming_soon.needs_frame()
            || self.pointer.is_animating()
            || (self.config.continuous_poll && self.scroll_watch.is_stale(self.page.scroll_y()))
            || self.globe_spinning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::markers::builtin_markers;

    const DT: f64 = 1.0 / 60.0;

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default(), builtin_markers());
        s.set_page_area(Rect::new(0, 0, 80, 20));
        s
    }

    fn settle(s: &mut AppState) {
        for _ in 0..2000 {
            s.advance(DT);
        }
    }

    #[test]
    fn mount_publishes_initial_frames() {
        let mut s = state();
        assert!(s.advance(DT));
        assert_eq!(s.phone.progress(), 0.0);
        assert_eq!(s.phone_frame.body_opacity, 0.0);
    }

    #[test]
    fn scrolling_into_phone_track_eases_progress() {
        let mut s = state();
        s.advance(DT);
        // Phone section starts at row 20 and travels 120 rows.
        s.scroll_by(80.0);
        s.advance(DT);
        let first = s.phone.progress();
        assert!(first > 0.0 && first < 0.5);
        settle(&mut s);
        assert!((s.phone.progress() - 0.5).abs() < 1e-12);
        assert_eq!(s.phone_frame.body_opacity, 1.0);
    }

    #[test]
    fn section_jump_snaps_without_easing() {
        let mut s = state();
        s.advance(DT);
        s.jump_to_section(2);
        s.advance(DT);
        assert_eq!(s.phone.progress(), 1.0);
        assert_eq!(s.coming_soon.progress(), 0.0);
        assert_eq!(s.status_message.as_deref(), Some("Section: Coming Soon"));
    }

    #[test]
    fn far_tracks_suspend() {
        let mut s = state();
        s.advance(DT);
        s.page.scroll_to(s.page.max_scroll());
        s.advance(DT);
        assert!(s.phone.is_suspended());
    }

    #[test]
    fn without_polling_scroll_input_invalidates_directly() {
        let config = AppConfig {
            continuous_poll: false,
            ..AppConfig::default()
        };
        let mut s = AppState::new(config, builtin_markers());
        s.set_page_area(Rect::new(0, 0, 80, 20));
        s.advance(DT);
        s.scroll_by(80.0);
        settle(&mut s);
        assert!((s.phone.progress() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pointer_only_counts_over_testimonials() {
        let mut s = state();
        s.jump_to_section(3);
        let rect = s.section_rect(SectionKind::Testimonials).unwrap();
        s.pointer_moved(rect.x, rect.y);
        settle(&mut s);
        assert!((s.pointer.value() + 1.0).abs() < 1e-9);
        assert_eq!(s.marquee.top, 80);

        s.jump_to_section(0);
        s.pointer_moved(0, 0);
        settle(&mut s);
        assert_eq!(s.pointer.value(), 0.0);
    }

    #[test]
    fn prev_section_returns_to_section_start_first() {
        let mut s = state();
        s.page.scroll_to(50.0);
        s.prev_section();
        assert_eq!(s.page.scroll_y(), 20.0);
        s.prev_section();
        assert_eq!(s.page.scroll_y(), 0.0);
    }

    #[test]
    fn globe_spins_only_while_hero_visible() {
        let mut s = state();
        s.advance(DT);
        assert!(s.globe_angle > 0.0);
        s.jump_to_section(2);
        let angle = s.globe_angle;
        s.advance(DT);
        assert_eq!(s.globe_angle, angle);
    }

    #[test]
    fn settled_page_stops_animating() {
        let mut s = state();
        s.jump_to_section(2);
        assert!(s.is_animating());
        settle(&mut s);
        assert!(!s.is_animating());
        assert!(!s.advance(DT));

        s.scroll_by(1.0);
        assert!(s.is_animating());
        settle(&mut s);
        assert!(!s.is_animating());
    }

    #[test]
    fn unfocused_hero_does_not_keep_frames_coming() {
        let mut s = state();
        settle(&mut s);
        assert!(s.is_animating());
        s.set_focused(false);
        assert!(!s.is_animating());
        s.set_focused(true);
        assert!(s.is_animating());
    }
}
