//! Page compositor.
//!
//! Each visible section is rendered into its own scratch buffer at full
//! content height, then copied into the frame at its scrolled (or pinned)
//! position, so sections can hang off either edge of the screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::page::SectionKind;
use crate::app::state::AppState;

use super::frame::FrameWidget;
use super::hero::HeroWidget;
use super::marquee::MarqueeWidget;
use super::paint::blit;
use super::phone_track::PhoneTrackWidget;
use super::theme::Theme;

pub struct PageView<'a> {
    pub state: &'a AppState,
}

fn render_footer(area: Rect, buf: &mut Buffer) {
    Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled("Built in public, shipped every two weeks.", Theme::heading_style(0.8))),
        Line::from(Span::styled("Home: back to top", Theme::body_style(0.8))),
    ])
    .alignment(Alignment::Center)
    .render(area, buf);
}

impl<'a> Widget for PageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Theme::page_style());
        let state = self.state;

        for placement in state.page.placements() {
            let visible = placement.height > 0
                && placement.top < i32::from(area.height)
                && placement.top + placement.height > 0;
            if !visible {
                continue;
            }
            let height = placement.height.min(i32::from(u16::MAX)) as u16;
            let content = Rect::new(0, 0, area.width, height);
            let mut scratch = Buffer::empty(content);
            scratch.set_style(content, Theme::page_style());

            match placement.kind {
                SectionKind::Hero => HeroWidget {
                    markers: &state.markers,
                    placed: &state.placed,
                    angle: state.globe_angle,
                }
                .render(content, &mut scratch),
                SectionKind::PhoneTrack => PhoneTrackWidget { frame: &state.phone_frame }
                    .render(content, &mut scratch),
                SectionKind::ComingSoon => FrameWidget { frame: &state.coming_soon_frame }
                    .render(content, &mut scratch),
                SectionKind::Testimonials => MarqueeWidget { shift: state.marquee }
                    .render(content, &mut scratch),
                SectionKind::Footer => render_footer(content, &mut scratch),
            }

            blit(&scratch, buf, area, placement.top);
        }
    }
}
