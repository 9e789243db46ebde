//! Colour palette and text styles used across the UI.
//!
//! Terminals have no alpha channel, so opacity is rendered by blending a
//! colour towards the page background.

use ratatui::style::{Color, Modifier, Style};

use crate::core::derive::Rgb;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    /// Page background every faded colour blends into.
    pub const BACKGROUND: Rgb = Rgb(12, 14, 20);
    pub const INK: Rgb = Rgb(230, 234, 240);
    pub const MUTED: Rgb = Rgb(140, 148, 160);
    pub const ACCENT: Rgb = Rgb(77, 166, 255);

    /// `rgb` at `opacity` over the page background.
    pub fn fade(rgb: Rgb, opacity: f64) -> Color {
        let Rgb(r, g, b) = rgb.with_opacity(opacity, Self::BACKGROUND);
        Color::Rgb(r, g, b)
    }

    pub fn color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }

    // ── page ───────────────────────────────────────────────────
    pub fn page_style() -> Style {
        Style::default().bg(Self::color(Self::BACKGROUND)).fg(Self::color(Self::INK))
    }

    /// Headline text at `opacity`.
    pub fn heading_style(opacity: f64) -> Style {
        Style::default()
            .fg(Self::fade(Self::INK, opacity))
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style(opacity: f64) -> Style {
        Style::default().fg(Self::fade(Self::MUTED, opacity))
    }

    pub fn label_style(opacity: f64) -> Style {
        Style::default()
            .fg(Self::fade(Self::ACCENT, opacity))
            .add_modifier(Modifier::ITALIC)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn popup_title_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
