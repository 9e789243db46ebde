//! Globe marker sources — the built-in showcase set, or a `lat,lng,label`
//! file supplied on the command line.

use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use super::cluster::GeoPoint;

/// One labelled location on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point: GeoPoint,
    pub label: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum MarkerError {
    #[error("line {line}: expected `lat,lng,label`")]
    MissingField { line: usize },
    #[error("line {line}: `{value}` is not a number")]
    BadNumber { line: usize, value: String },
    #[error("line {line}: coordinate ({lat}, {lng}) out of range")]
    OutOfRange { line: usize, lat: f64, lng: f64 },
}

/// Parse marker lines.  Blank lines and `#` comments are skipped.
pub fn parse_markers(text: &str) -> Result<Vec<Marker>, MarkerError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut parts = trimmed.splitn(3, ',');
        let (Some(lat), Some(lng)) = (parts.next(), parts.next()) else {
            return Err(MarkerError::MissingField { line });
        };
        let label = parts.next().map(str::trim).unwrap_or_default();
        if label.is_empty() {
            return Err(MarkerError::MissingField { line });
        }
        let number = |s: &str| {
            s.trim().parse::<f64>().map_err(|_| MarkerError::BadNumber {
                line,
                value: s.trim().to_string(),
            })
        };
        let (lat, lng) = (number(lat)?, number(lng)?);
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(MarkerError::OutOfRange { line, lat, lng });
        }
        out.push(Marker {
            point: GeoPoint::new(lat, lng),
            label: label.to_string(),
        });
    }
    Ok(out)
}

/// Read and parse a marker file.
pub fn load_markers(path: &Path) -> anyhow::Result<Vec<Marker>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading markers from {}", path.display()))?;
    let markers =
        parse_markers(&text).with_context(|| format!("parsing markers in {}", path.display()))?;
    tracing::info!(count = markers.len(), path = %path.display(), "loaded globe markers");
    Ok(markers)
}

/// Showcase locations, with deliberate duplicates so clusters appear.
pub fn builtin_markers() -> Vec<Marker> {
    const BUILTIN: &[(f64, f64, &str)] = &[
        (40.7128, -74.0060, "storefront-kit"),
        (40.7150, -74.0100, "portfolio-cms"),
        (40.7306, -73.9866, "agency-site"),
        (51.5074, -0.1278, "booking-engine"),
        (51.5080, -0.1300, "ledger-ui"),
        (48.8566, 2.3522, "atelier"),
        (35.6762, 139.6503, "kanji-cards"),
        (37.7749, -122.4194, "edge-blog"),
        (37.7750, -122.4180, "saas-starter"),
        (37.7760, -122.4170, "analytics-hub"),
        (-33.8688, 151.2093, "surf-report"),
        (-23.5505, -46.6333, "marketplace"),
        (19.0760, 72.8777, "chai-pos"),
        (52.5200, 13.4050, "synth-lab"),
    ];
    BUILTIN
        .iter()
        .map(|&(lat, lng, label)| Marker {
            point: GeoPoint::new(lat, lng),
            label: label.to_string(),
        })
        .collect()
}
