//! Testimonials: three rows of cards that slide with the pointer.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::derive::MarqueeShift;
use crate::core::track::{Testimonial, TESTIMONIALS};

use super::paint::{draw_box, put_str, truncate, Corners};
use super::phone_track::CELL_W_PX;
use super::theme::Theme;

const CARD_W: i32 = 34;
const CARD_H: i32 = 4;
const GAP: i32 = 2;

pub struct MarqueeWidget {
    pub shift: MarqueeShift,
}

/// Testimonials for row `row`, rotated so neighbouring rows differ.
fn row_cards(row: usize) -> impl Iterator<Item = &'static Testimonial> {
    let start = (row * 2) % TESTIMONIALS.len();
    TESTIMONIALS.iter().cycle().skip(start)
}

/// Column offset of a px shift.
pub fn shift_cols(px: i32) -> i32 {
    (f64::from(px) / CELL_W_PX).round() as i32
}

fn draw_card(buf: &mut Buffer, area: Rect, x: i32, y: i32, t: &Testimonial) {
    let border = Style::default().fg(Theme::fade(Theme::MUTED, 0.5));
    draw_box(buf, area, (x, y, CARD_W, CARD_H), Corners::Rounded, border);
    let inner = (CARD_W - 4) as usize;
    let quote = truncate(&format!("“{}”", t.quote), inner);
    put_str(buf, area, x + 2, y + 1, &quote, Theme::heading_style(0.9));
    let by = truncate(&format!("{}, {}", t.name, t.title), inner);
    put_str(buf, area, x + 2, y + 2, &by, Theme::body_style(1.0));
}

impl Widget for MarqueeWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = "What our clients say";
        let hx = i32::from(area.x) + (i32::from(area.width) - heading.len() as i32) / 2;
        put_str(buf, area, hx, i32::from(area.y) + 1, heading, Theme::heading_style(1.0));

        let shifts = [self.shift.top, self.shift.middle, self.shift.bottom];
        let pitch = CARD_W + GAP;
        for (row, px) in shifts.into_iter().enumerate() {
            let y = i32::from(area.y) + 3 + row as i32 * (CARD_H + 1);
            // Stagger rows by half a card, then slide.
            let mut x = i32::from(area.x) - pitch + shift_cols(px) - (row as i32 % 2) * pitch / 2;
            for t in row_cards(row) {
                if x >= i32::from(area.right()) {
                    break;
                }
                draw_card(buf, area, x, y, t);
                x += pitch;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn px_shift_converts_to_columns() {
        assert_eq!(shift_cols(80), 10);
        assert_eq!(shift_cols(-48), -6);
        assert_eq!(shift_cols(0), 0);
    }

    #[test]
    fn rows_start_on_different_testimonials() {
        let first: Vec<_> = (0..3).map(|r| row_cards(r).next().map(|t| t.name)).collect();
        assert_eq!(first[0], Some(TESTIMONIALS[0].name));
        assert_eq!(first[1], Some(TESTIMONIALS[2].name));
        assert_eq!(first[2], Some(TESTIMONIALS[4].name));
    }

    #[test]
    fn pointer_shift_moves_the_top_row() {
        let area = Rect::new(0, 0, 100, 20);
        let mut still = Buffer::empty(area);
        MarqueeWidget { shift: MarqueeShift::default() }.render(area, &mut still);
        let mut moved = Buffer::empty(area);
        MarqueeWidget { shift: MarqueeShift { top: 80, middle: 48, bottom: -80 } }
            .render(area, &mut moved);
        assert!(row(&still, 1).contains("What our clients say"));
        let (a, b) = (row(&still, 4), row(&moved, 4));
        assert_ne!(a, b);
        // Ten columns to the right.
        assert_eq!(a.chars().take(90).collect::<String>(), b.chars().skip(10).collect::<String>());
    }
}
