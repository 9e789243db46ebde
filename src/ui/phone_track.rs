//! Pinned phone walkthrough: stage timeline, copy, glowing phone mockup and
//! the drifting side decorations.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::derive::{phone_width, Rgb};
use crate::core::track::{PhoneFrame, Side, PHONE_SCREENS};

use super::paint::{draw_box, fill, put_str, truncate, wrap, Corners};
use super::theme::Theme;

/// Approximate cell size used to turn px offsets into cells.
pub const CELL_W_PX: f64 = 8.0;
pub const CELL_H_PX: f64 = 16.0;

const PHONE_FRAME: Rgb = Rgb(200, 204, 214);
const DECORATION_W: i32 = 14;

pub struct PhoneTrackWidget<'a> {
    pub frame: &'a PhoneFrame,
}

/// Phone mockup rectangle inside `area`, sized like a page at this width.
pub fn phone_rect(area: Rect) -> Rect {
    let px = phone_width(f64::from(area.width) * CELL_W_PX);
    let width = ((f64::from(px) / CELL_W_PX).round() as u16).min(area.width.saturating_sub(4));
    let height = area.height.saturating_sub(4).min(width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + 2 + (area.height.saturating_sub(2 + height)) / 2;
    Rect::new(x, y, width, height)
}

/// Timeline text for `steps`: a dot per stage followed by its fill bar.
pub fn timeline_cells(fill: &[f64], active: usize, step_width: usize) -> Vec<(String, bool)> {
    let bar = step_width.saturating_sub(2);
    fill.iter()
        .enumerate()
        .map(|(i, pct)| {
            let filled = ((pct / 100.0) * bar as f64).round() as usize;
            let dot = if i <= active { '●' } else { '○' };
            let mut s = String::with_capacity(step_width * 3);
            s.push(dot);
            s.push(' ');
            s.extend(std::iter::repeat('━').take(filled.min(bar)));
            s.extend(std::iter::repeat('─').take(bar - filled.min(bar)));
            (s, i <= active)
        })
        .collect()
}

impl<'a> Widget for PhoneTrackWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let f = self.frame;
        let body = f.body_opacity;

        // ── timeline ───────────────────────────────────────────
        let timeline_opacity = f.timeline_opacity * body;
        if timeline_opacity > 0.0 && !f.timeline.is_empty() {
            let step = (area.width as usize).saturating_sub(4) / f.timeline.len();
            let mut x = i32::from(area.x) + 2;
            for (text, reached) in timeline_cells(&f.timeline, f.position.index, step) {
                let colour = if reached { Theme::ACCENT } else { Theme::MUTED };
                let style = Style::default().fg(Theme::fade(colour, timeline_opacity));
                put_str(buf, area, x, i32::from(area.y), &text, style);
                x += step as i32;
            }
        }

        let phone = phone_rect(area);
        let (px, py, pw, ph) = (
            i32::from(phone.x),
            i32::from(phone.y),
            i32::from(phone.width),
            i32::from(phone.height),
        );

        // ── glow halo behind the phone ─────────────────────────
        let glow = f.glow.intensity() * body;
        if glow > 0.0 {
            let halo = Style::default().bg(Theme::fade(f.glow.mixed(), glow * 0.45));
            fill(buf, area, (px - 3, py - 1, pw + 6, ph + 2), halo);
            let core = Style::default().bg(Theme::fade(f.glow.mixed(), glow * 0.7));
            fill(buf, area, (px - 1, py, pw + 2, ph), core);
        }

        // ── phone body ─────────────────────────────────────────
        if body > 0.0 {
            let screen_bg = Style::default().bg(Theme::color(Theme::BACKGROUND));
            fill(buf, area, (px + 1, py + 1, pw - 2, ph - 2), screen_bg);
            let frame_style = Style::default().fg(Theme::fade(PHONE_FRAME, body));
            draw_box(buf, area, (px, py, pw, ph), Corners::Rounded, frame_style);

            let screen = f.screen();
            let inner_w = (pw - 4).max(1) as usize;
            let mid = py + ph / 2;
            let counter = format!("{}/{}", f.position.index + 1, PHONE_SCREENS.len());
            put_str(buf, area, px + 2, py + 1, &counter, Theme::body_style(body * 0.8));
            let label = truncate(screen.label, inner_w);
            let lx = px + (pw - label.chars().count() as i32) / 2;
            put_str(buf, area, lx, mid, &label, Theme::heading_style(body));
            // Stage-local progress along the bottom of the screen.
            let bar = ((pw - 4).max(0) as f64 * f.position.local).round() as i32;
            let bar_style = Style::default().fg(Theme::fade(f.glow.current, body));
            put_str(buf, area, px + 2, py + ph - 2, &"▁".repeat(bar.max(0) as usize), bar_style);
        }

        // ── copy block, left of the phone ──────────────────────
        let copy_w = px - i32::from(area.x) - DECORATION_W - 4;
        if body > 0.0 && copy_w >= 16 {
            let screen = f.screen();
            let cx = i32::from(area.x) + 2;
            let mut y = py + 1;
            put_str(buf, area, cx, y, &truncate(screen.label, copy_w as usize), Theme::label_style(body));
            y += 2;
            for line in wrap(screen.title, copy_w as usize) {
                put_str(buf, area, cx, y, &line, Theme::heading_style(body));
                y += 1;
            }
            y += 1;
            for line in wrap(screen.description, copy_w as usize) {
                put_str(buf, area, cx, y, &line, Theme::body_style(body));
                y += 1;
            }
        }

        // ── decorations ────────────────────────────────────────
        for (d, m) in &f.decorations {
            if m.opacity <= 0.01 {
                continue;
            }
            let (anchor_x, anchor_y) = match d.side {
                Side::Left => (px - DECORATION_W - 2, py + ph / 3),
                Side::Right => (px + pw + 2, py + (2 * ph) / 3),
            };
            let x = anchor_x + (m.x / CELL_W_PX).round() as i32;
            let y = anchor_y + (m.y / CELL_H_PX).round() as i32;
            let tint = f.glow.current.lerp(Theme::INK, 0.3);
            let style = Style::default().fg(Theme::fade(tint, m.opacity));
            draw_box(buf, area, (x, y, DECORATION_W, 3), Corners::Square, style);
            let label = truncate(PHONE_SCREENS[d.own.min(PHONE_SCREENS.len() - 1)].label, (DECORATION_W - 2) as usize);
            put_str(buf, area, x + 1, y + 1, &label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::track::PhoneTrack;

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn phone_rect_is_centred_and_bounded() {
        let area = Rect::new(0, 0, 120, 30);
        let r = phone_rect(area);
        // 120 cols ≈ 960px → 180px minimum → 23 cols (22.5 rounded).
        assert_eq!(r.width, 23);
        assert!(r.height <= 26);
        assert_eq!(r.x, (120 - 23) / 2);
    }

    #[test]
    fn timeline_cells_fill_proportionally() {
        let cells = timeline_cells(&[100.0, 50.0, 0.0], 1, 6);
        assert_eq!(cells[0], ("● ━━━━".to_string(), true));
        assert_eq!(cells[1], ("● ━━──".to_string(), true));
        assert_eq!(cells[2], ("○ ────".to_string(), false));
    }

    #[test]
    fn hidden_before_guard() {
        let frame = PhoneTrack::default().frame(0.0);
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        PhoneTrackWidget { frame: &frame }.render(area, &mut buf);
        assert!(text(&buf).trim().is_empty());
    }

    #[test]
    fn mid_track_shows_stage_copy() {
        let frame = PhoneTrack::default().frame(0.584);
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        PhoneTrackWidget { frame: &frame }.render(area, &mut buf);
        let t = text(&buf);
        assert!(t.contains("GitHub Updates"));
        assert!(t.contains("4/6"));
    }
}
