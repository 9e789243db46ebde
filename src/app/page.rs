//! Virtual page layout — the marketing page laid out in terminal rows.
//!
//! Section heights are multiples of the viewport height, so resizing the
//! terminal rescales the whole document.  Until the first draw reports a
//! viewport, no geometry exists and samplers skip.

use crate::core::sampler::RegionGeometry;

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    PhoneTrack,
    ComingSoon,
    Testimonials,
    Footer,
}

impl SectionKind {
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::PhoneTrack => "Process",
            SectionKind::ComingSoon => "Coming Soon",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Footer => "Footer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    /// Height in viewport heights.
    pub height_vh: f64,
    /// Pinned sections keep their content stuck to the viewport while the
    /// section scrolls past.
    pub pinned: bool,
}

/// Where a section's content lands on screen, in rows relative to the
/// viewport top.  May extend past either edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: SectionKind,
    pub top: i32,
    pub height: i32,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub sections: Vec<Section>,
    viewport_height: f64,
    viewport_width: f64,
    scroll_y: f64,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(vec![
            Section { kind: SectionKind::Hero, height_vh: 1.0, pinned: false },
            Section { kind: SectionKind::PhoneTrack, height_vh: 7.0, pinned: true },
            Section { kind: SectionKind::ComingSoon, height_vh: 3.0, pinned: true },
            Section { kind: SectionKind::Testimonials, height_vh: 1.0, pinned: false },
            Section { kind: SectionKind::Footer, height_vh: 0.5, pinned: false },
        ])
    }
}

impl Page {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            viewport_height: 0.0,
            viewport_width: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Record the viewport size.  Returns `true` if it changed.  The scroll
    /// offset keeps its relative position in the document.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        if width == self.viewport_width && height == self.viewport_height {
            return false;
        }
        let fraction = if self.max_scroll() > 0.0 {
            self.scroll_y / self.max_scroll()
        } else {
            0.0
        };
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.scroll_y = (fraction * self.max_scroll()).round();
        true
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn is_laid_out(&self) -> bool {
        self.viewport_height > 0.0
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn section_height(&self, s: &Section) -> f64 {
        (s.height_vh * self.viewport_height).round()
    }

    pub fn total_height(&self) -> f64 {
        self.sections.iter().map(|s| self.section_height(s)).sum()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    /// Scroll by `delta` rows, clamped to the document.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_y + delta);
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Absolute offset of section `index` from the document top.
    pub fn section_offset(&self, index: usize) -> f64 {
        self.sections
            .iter()
            .take(index)
            .map(|s| self.section_height(s))
            .sum()
    }

    pub fn index_of(&self, kind: SectionKind) -> Option<usize> {
        self.sections.iter().position(|s| s.kind == kind)
    }

    /// Index of the section under the viewport top.
    pub fn current_section(&self) -> usize {
        let mut offset = 0.0;
        for (i, s) in self.sections.iter().enumerate() {
            offset += self.section_height(s);
            if self.scroll_y < offset {
                return i;
            }
        }
        self.sections.len().saturating_sub(1)
    }

    pub fn scroll_to_section(&mut self, index: usize) {
        let index = index.min(self.sections.len().saturating_sub(1));
        self.scroll_to(self.section_offset(index));
    }

    /// Region geometry of a section, or `None` before layout.
    pub fn geometry(&self, kind: SectionKind) -> Option<RegionGeometry> {
        if !self.is_laid_out() {
            return None;
        }
        let index = self.index_of(kind)?;
        let section = &self.sections[index];
        Some(RegionGeometry::new(
            self.section_offset(index) - self.scroll_y,
            self.section_height(section),
            self.viewport_height,
        ))
    }

    /// On-screen placement of every section's content.  Pinned content is
    /// one viewport tall and sticks to the top while its section scrolls.
    pub fn placements(&self) -> Vec<Placement> {
        let vh = self.viewport_height;
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let top = self.section_offset(i) - self.scroll_y;
                let height = self.section_height(s);
                let (top, height) = if s.pinned {
                    let stuck = top.max(0.0).min(top + height - vh);
                    (stuck, vh)
                } else {
                    (top, height)
                };
                Placement {
                    kind: s.kind,
                    top: top.round() as i32,
                    height: height.round() as i32,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sampler::sample_progress;

    fn laid_out() -> Page {
        let mut p = Page::default();
        p.set_viewport(80.0, 20.0);
        p
    }

    #[test]
    fn no_geometry_before_layout() {
        assert_eq!(Page::default().geometry(SectionKind::PhoneTrack), None);
    }

    #[test]
    fn document_dimensions() {
        let p = laid_out();
        assert_eq!(p.total_height(), 250.0);
        assert_eq!(p.max_scroll(), 230.0);
        assert_eq!(p.section_offset(1), 20.0);
        assert_eq!(p.section_offset(2), 160.0);
    }

    #[test]
    fn phone_progress_follows_scroll() {
        let mut p = laid_out();
        p.scroll_to(20.0);
        let g = p.geometry(SectionKind::PhoneTrack).unwrap();
        assert_eq!(sample_progress(&g), 0.0);
        // 140 tall, 20 viewport → 120 rows of travel.
        p.scroll_to(80.0);
        let g = p.geometry(SectionKind::PhoneTrack).unwrap();
        assert!((sample_progress(&g) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut p = laid_out();
        p.scroll_by(-50.0);
        assert_eq!(p.scroll_y(), 0.0);
        p.scroll_by(10_000.0);
        assert_eq!(p.scroll_y(), 230.0);
    }

    #[test]
    fn pinned_content_sticks_to_top() {
        let mut p = laid_out();
        p.scroll_to(60.0);
        let phone = p.placements()[1];
        assert_eq!(phone, Placement { kind: SectionKind::PhoneTrack, top: 0, height: 20 });
        // Past the end of its section the content scrolls away.
        p.scroll_to(150.0);
        assert_eq!(p.placements()[1].top, -10);
    }

    #[test]
    fn section_navigation() {
        let mut p = laid_out();
        p.scroll_to_section(2);
        assert_eq!(p.scroll_y(), 160.0);
        assert_eq!(p.current_section(), 2);
        // The footer is shorter than the viewport, so the last jump
        // bottoms out inside the testimonials.
        p.scroll_to_section(99);
        assert_eq!(p.scroll_y(), 230.0);
        assert_eq!(p.current_section(), 3);
    }

    #[test]
    fn resize_keeps_relative_position() {
        let mut p = laid_out();
        p.scroll_to(115.0);
        assert!(p.set_viewport(80.0, 40.0));
        assert_eq!(p.scroll_y(), 230.0);
        assert!(!p.set_viewport(80.0, 40.0));
    }
}
