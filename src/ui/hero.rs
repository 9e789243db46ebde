//! Hero section — headline over a slowly spinning globe of project markers.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Paragraph, Widget,
    },
};

use crate::core::cluster::{depth_shrink, marker_scale, rotate_y, to_sphere, GeoPoint, PlacedMarker};
use crate::core::derive::Rgb;
use crate::core::markers::Marker;

use super::theme::Theme;

/// Globe radius in canvas units.
const RADIUS: f64 = 1.0;
const MARKER: Rgb = Rgb(255, 176, 64);

pub struct HeroWidget<'a> {
    pub markers: &'a [Marker],
    pub placed: &'a [PlacedMarker],
    pub angle: f64,
}

/// A marker projected for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMarker {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    /// First marker of its cluster (the one that gets a label).
    pub lead: bool,
}

/// Project placed markers onto the rotated globe.
pub fn project(placed: &[PlacedMarker], angle: f64) -> Vec<ProjectedMarker> {
    placed
        .iter()
        .map(|m| {
            let [x, y, z] = rotate_y(to_sphere(m.display, RADIUS + m.lift * 0.25), angle);
            ProjectedMarker {
                x,
                y,
                z,
                scale: marker_scale(z, RADIUS) * depth_shrink(m.order),
                lead: m.order == 0,
            }
        })
        .collect()
}

fn glyph(scale: f64, front: bool) -> &'static str {
    match (front, scale) {
        (false, _) => "·",
        (true, s) if s >= 1.05 => "●",
        (true, s) if s >= 0.85 => "•",
        _ => "∙",
    }
}

/// Front-facing graticule points every 30°.
fn graticule(angle: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for lat in (-60..=60).step_by(30) {
        for lng in (-180..180).step_by(6) {
            let [x, y, z] = rotate_y(to_sphere(GeoPoint::new(f64::from(lat), f64::from(lng)), RADIUS), angle);
            if z > 0.0 {
                points.push((x, y));
            }
        }
    }
    for lng in (-180..180).step_by(30) {
        for lat in (-84..=84).step_by(4) {
            let [x, y, z] = rotate_y(to_sphere(GeoPoint::new(f64::from(lat), f64::from(lng)), RADIUS), angle);
            if z > 0.0 {
                points.push((x, y));
            }
        }
    }
    points
}

impl<'a> Widget for HeroWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [head, globe] = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled("Software, built in public.", Theme::heading_style(1.0))),
            Line::from(Span::styled(
                "Every dot is a shipped project. Scroll to see how we work.",
                Theme::body_style(1.0),
            )),
        ])
        .alignment(Alignment::Center)
        .render(head, buf);

        if globe.width < 4 || globe.height < 3 {
            return;
        }

        // Cells are roughly twice as tall as wide.
        let y_span = RADIUS * 1.25;
        let x_span = y_span * f64::from(globe.width) / (f64::from(globe.height) * 2.0);
        let grid = graticule(self.angle);
        let projected = project(self.placed, self.angle);
        let outline = Theme::fade(Theme::MUTED, 0.6);
        let grid_colour = Theme::fade(Theme::MUTED, 0.25);

        Canvas::default()
            .background_color(Theme::color(Theme::BACKGROUND))
            .x_bounds([-x_span, x_span])
            .y_bounds([-y_span, y_span])
            .paint(|ctx| {
                ctx.draw(&Points { coords: &grid, color: grid_colour });
                ctx.draw(&Circle { x: 0.0, y: 0.0, radius: RADIUS, color: outline });
                ctx.layer();

                // Far side first so front markers win overlaps.
                let mut order: Vec<usize> = (0..projected.len()).collect();
                order.sort_by(|&a, &b| projected[a].z.total_cmp(&projected[b].z));
                for i in order {
                    let p = &projected[i];
                    let front = p.z > 0.0;
                    let opacity = if front { 1.0 } else { 0.35 };
                    let style = Style::default().fg(Theme::fade(MARKER, opacity));
                    ctx.print(p.x, p.y, Span::styled(glyph(p.scale, front), style));
                    if front && p.lead && p.z > 0.5 {
                        if let Some(m) = self.markers.get(i) {
                            let label = format!(" {}", m.label);
                            ctx.print(p.x, p.y, Span::styled(label, Theme::body_style(p.z)));
                        }
                    }
                }
            })
            .render(globe, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cluster::{place_markers, ClusterConfig};

    #[test]
    fn facing_marker_projects_to_centre_front() {
        // Longitude -90 faces the camera at zero rotation.
        let placed = place_markers(&[GeoPoint::new(0.0, -90.0)], &ClusterConfig::default());
        let p = &project(&placed, 0.0)[0];
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
        assert!((p.z - 1.0).abs() < 1e-9);
        assert!((p.scale - 1.2).abs() < 1e-9);
        assert_eq!(glyph(p.scale, true), "●");
    }

    #[test]
    fn rotation_moves_markers_behind() {
        let placed = place_markers(&[GeoPoint::new(0.0, -90.0)], &ClusterConfig::default());
        let p = &project(&placed, std::f64::consts::PI)[0];
        assert!(p.z < 0.0);
        assert_eq!(glyph(p.scale, false), "·");
    }

    #[test]
    fn cluster_peers_are_lifted_and_shrunk() {
        let points = [GeoPoint::new(0.0, -90.0), GeoPoint::new(0.01, -90.01)];
        let placed = place_markers(&points, &ClusterConfig::default());
        let projected = project(&placed, 0.0);
        assert!(projected[0].lead && !projected[1].lead);
    }

    #[test]
    fn renders_headline() {
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        HeroWidget { markers: &[], placed: &[], angle: 0.0 }.render(area, &mut buf);
        let text: String = (0..area.width)
            .map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert!(text.contains("Software, built in public."));
    }
}
