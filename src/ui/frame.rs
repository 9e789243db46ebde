//! Pinned "coming soon" section: a full-bleed video frame that shrinks into
//! a rounded card as the section scrolls past.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::derive::Rgb;
use crate::core::track::ComingSoonFrame;

use super::paint::{draw_box, fill, put_str, Corners};
use super::theme::Theme;

const TITLE: &str = "Something new is on the way.";
const SUBTITLE: &str = "A marketplace for the things we build in public.";
const BADGE: &str = " COMING SOON ";
const VIDEO_BG: Rgb = Rgb(24, 30, 44);
const SHADOW: Rgb = Rgb(0, 0, 0);

/// Radius (px) from which corners are drawn rounded.
const ROUNDED_FROM_PX: u32 = 8;

pub struct FrameWidget<'a> {
    pub frame: &'a ComingSoonFrame,
}

/// Rectangle of the video frame scaled within `stage`, centred.
pub fn scaled_rect(stage: Rect, scale: f64) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let w = (f64::from(stage.width) * scale).round() as u16;
    let h = (f64::from(stage.height) * scale).round() as u16;
    Rect::new(
        stage.x + (stage.width - w) / 2,
        stage.y + (stage.height - h) / 2,
        w,
        h,
    )
}

impl<'a> Widget for FrameWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let f = self.frame;
        let title_rows = 4u16.min(area.height);
        let stage = Rect::new(
            area.x,
            area.y + title_rows,
            area.width,
            area.height - title_rows,
        );
        let video = scaled_rect(stage, f.shape.scale);
        let (vx, vy, vw, vh) = (
            i32::from(video.x),
            i32::from(video.y),
            i32::from(video.width),
            i32::from(video.height),
        );

        if f.shape.shadow_opacity > 0.0 {
            let shadow = Style::default().bg(Theme::fade(SHADOW.lerp(Theme::MUTED, 0.15), f.shape.shadow_opacity * 2.0));
            fill(buf, area, (vx + 2, vy + 1, vw, vh), shadow);
        }

        fill(buf, area, (vx, vy, vw, vh), Style::default().bg(Theme::color(VIDEO_BG)));
        // Diagonal scan lines stand in for the video.
        let stripe = Style::default().fg(Theme::fade(Theme::MUTED, 0.2)).bg(Theme::color(VIDEO_BG));
        for row in vy + 1..vy + vh - 1 {
            for col in vx + 1..vx + vw - 1 {
                if (col + row) % 6 == 0 {
                    put_str(buf, area, col, row, "╱", stripe);
                }
            }
        }

        let corners = if f.shape.border_radius_px >= ROUNDED_FROM_PX {
            Corners::Rounded
        } else {
            Corners::Square
        };
        let edge = Style::default()
            .fg(Theme::fade(Theme::INK, 0.35 + f.shape.shadow_opacity * 2.0))
            .bg(Theme::color(VIDEO_BG));
        draw_box(buf, area, (vx, vy, vw, vh), corners, edge);

        let badge_style = Style::default()
            .fg(Theme::color(Theme::BACKGROUND))
            .bg(Theme::fade(Theme::ACCENT, 0.9));
        let bx = vx + (vw - BADGE.len() as i32) / 2;
        put_str(buf, area, bx, vy + vh / 2, BADGE, badge_style);

        // Title block over the frame, fading in.
        if f.title_opacity > 0.0 {
            let centre = |text: &str| i32::from(area.x) + (i32::from(area.width) - text.chars().count() as i32) / 2;
            let y = i32::from(area.y);
            put_str(buf, area, centre(TITLE), y + 1, TITLE, Theme::heading_style(f.title_opacity));
            put_str(buf, area, centre(SUBTITLE), y + 2, SUBTITLE, Theme::body_style(f.title_opacity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::track::FrameTrack;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn full_scale_fills_the_stage() {
        let stage = Rect::new(0, 4, 80, 20);
        assert_eq!(scaled_rect(stage, 1.0), stage);
        let small = scaled_rect(stage, 0.5);
        assert_eq!(small, Rect::new(20, 9, 40, 10));
    }

    #[test]
    fn corners_round_once_shrinking() {
        let track = FrameTrack::default();
        let area = Rect::new(0, 0, 80, 24);

        let mut buf = Buffer::empty(area);
        FrameWidget { frame: &track.frame(0.0) }.render(area, &mut buf);
        assert!(row(&buf, 4).starts_with('┌'));
        assert!(!row(&buf, 1).contains(TITLE));

        let mut buf = Buffer::empty(area);
        let late = track.frame(1.0);
        FrameWidget { frame: &late }.render(area, &mut buf);
        let video = scaled_rect(Rect::new(0, 4, 80, 20), late.shape.scale);
        let top = row(&buf, video.y);
        assert!(top.contains('╭'));
        assert!(row(&buf, 1).contains(TITLE));
    }
}
