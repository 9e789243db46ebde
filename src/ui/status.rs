//! Bottom status bar: key hint (or the last status message) on the left,
//! section and track progress on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::app::state::{ActiveView, AppState};

use super::theme::Theme;

pub struct StatusBar<'a> {
    pub state: &'a AppState,
}

fn track_summary(state: &AppState) -> String {
    let fmt = |suspended: bool, progress: f64| {
        if suspended {
            "idle".to_string()
        } else {
            format!("{:>3.0}%", progress * 100.0)
        }
    };
    let section = state
        .page
        .sections
        .get(state.page.current_section())
        .map(|s| s.kind.label())
        .unwrap_or_default();
    format!(
        "{section} │ process {} │ soon {} │ {} ",
        fmt(state.phone.is_suspended(), state.phone.progress()),
        fmt(state.coming_soon.is_suspended(), state.coming_soon.progress()),
        state.phone.smoothing().label(),
    )
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = self.state.config.status_bar_hint();
        let left = match self.state.active_view {
            ActiveView::Page => self.state.status_message.as_deref().unwrap_or(&hint),
            ActiveView::SettingsMenu | ActiveView::ControlsSubmenu => "",
        };
        Paragraph::new(format!(" {left}"))
            .style(Theme::status_bar_style())
            .render(area, buf);

        let right = track_summary(self.state);
        let width = (right.chars().count() as u16).min(area.width);
        let right_area = Rect::new(area.right() - width, area.y, width, 1);
        Paragraph::new(right)
            .style(Theme::status_bar_style())
            .alignment(Alignment::Right)
            .render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn summary_shows_progress_and_smoothing() {
        let mut s = AppState::new(AppConfig::default(), Vec::new());
        s.set_page_area(Rect::new(0, 0, 80, 20));
        s.jump_to_section(2);
        s.advance(1.0 / 60.0);
        let text = track_summary(&s);
        assert!(text.starts_with("Coming Soon"));
        assert!(text.contains("process 100%"));
        assert!(text.contains("soon   0%"));
        assert!(text.contains("Exponential"));
    }
}
