//! Clipped drawing primitives.
//!
//! Animated elements slide partly outside their section, so coordinates
//! here are signed and everything outside `area` is dropped instead of
//! panicking on an out-of-bounds cell.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Box corner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corners {
    Square,
    Rounded,
}

impl Corners {
    fn glyphs(self) -> [char; 4] {
        match self {
            Corners::Square => ['┌', '┐', '└', '┘'],
            Corners::Rounded => ['╭', '╮', '╰', '╯'],
        }
    }
}

fn inside(area: Rect, x: i32, y: i32) -> bool {
    x >= i32::from(area.x)
        && y >= i32::from(area.y)
        && x < i32::from(area.right())
        && y < i32::from(area.bottom())
}

/// Write one character.
pub fn put_char(buf: &mut Buffer, area: Rect, x: i32, y: i32, ch: char, style: Style) {
    if !inside(area, x, y) {
        return;
    }
    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
        cell.set_char(ch).set_style(style);
    }
}

/// Write a single-width string starting at `(x, y)`.
pub fn put_str(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        put_char(buf, area, x + i as i32, y, ch, style);
    }
}

/// Paint a style over a signed rectangle.
pub fn fill(buf: &mut Buffer, area: Rect, (x, y, w, h): (i32, i32, i32, i32), style: Style) {
    for row in y..y + h {
        for col in x..x + w {
            if !inside(area, col, row) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
                cell.set_style(style);
            }
        }
    }
}

/// Draw a box outline.  Boxes smaller than 2×2 are skipped.
pub fn draw_box(
    buf: &mut Buffer,
    area: Rect,
    (x, y, w, h): (i32, i32, i32, i32),
    corners: Corners,
    style: Style,
) {
    if w < 2 || h < 2 {
        return;
    }
    let [tl, tr, bl, br] = corners.glyphs();
    let (right, bottom) = (x + w - 1, y + h - 1);
    for col in x + 1..right {
        put_char(buf, area, col, y, '─', style);
        put_char(buf, area, col, bottom, '─', style);
    }
    for row in y + 1..bottom {
        put_char(buf, area, x, row, '│', style);
        put_char(buf, area, right, row, '│', style);
    }
    put_char(buf, area, x, y, tl, style);
    put_char(buf, area, right, y, tr, style);
    put_char(buf, area, x, bottom, bl, style);
    put_char(buf, area, right, bottom, br, style);
}

/// Copy `src` onto `dst`, with `src`'s first row landing `top` rows below
/// `area.y`.  Rows outside `area` are dropped.
pub fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, top: i32) {
    let width = src.area.width.min(area.width);
    for sy in 0..src.area.height {
        let dy = top + i32::from(sy);
        if dy < 0 || dy >= i32::from(area.height) {
            continue;
        }
        for sx in 0..width {
            let (Some(cell), Some(target)) = (
                src.cell((src.area.x + sx, src.area.y + sy)),
                dst.cell_mut((area.x + sx, area.y + dy as u16)),
            ) else {
                continue;
            };
            *target = cell.clone();
        }
    }
}

/// Truncate to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap into lines of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = line.chars().count() + 1 + word.chars().count();
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
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
    fn strings_are_clipped_on_both_sides() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        put_str(&mut buf, area, -2, 0, "abcdefgh", Style::default());
        assert_eq!(row(&buf, 0), "cdefg");
        put_str(&mut buf, area, 0, 3, "zzz", Style::default());
        assert_eq!(row(&buf, 0), "cdefg");
    }

    #[test]
    fn boxes_draw_corners() {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        draw_box(&mut buf, area, (0, 0, 4, 3), Corners::Rounded, Style::default());
        assert_eq!(row(&buf, 0), "╭──╮");
        assert_eq!(row(&buf, 1), "│  │");
        assert_eq!(row(&buf, 2), "╰──╯");
    }

    #[test]
    fn blit_drops_rows_outside_target() {
        let src_area = Rect::new(0, 0, 3, 3);
        let mut src = Buffer::empty(src_area);
        for y in 0..3 {
            put_str(&mut src, src_area, 0, y, &y.to_string().repeat(3), Style::default());
        }
        let area = Rect::new(0, 0, 3, 2);
        let mut dst = Buffer::empty(area);
        blit(&src, &mut dst, area, -1);
        assert_eq!(row(&dst, 0), "111");
        assert_eq!(row(&dst, 1), "222");
    }

    #[test]
    fn text_helpers() {
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("hi", 6), "hi");
        assert_eq!(wrap("the quick brown fox", 9), vec!["the quick", "brown fox"]);
    }
}
