//! Globe marker placement — fan out markers that share a location.
//!
//! Markers are bucketed on a coarse lat/lng grid.  Buckets with more than
//! one marker spread along a golden-angle spiral around the shared point,
//! and each marker is lifted a little further off the sphere than the one
//! before it, so a crowded city reads as a stack of balloons.
//!
//! Placement depends only on the input order: clusters are keyed in a
//! `BTreeMap` and members keep discovery order, so repeated renders of the
//! same list never jitter.

use std::collections::BTreeMap;
use std::f64::consts::PI;

// ───────────────────────────────────────── types ─────────────

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Tuning for cluster detection and spreading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    /// Grid size in degrees; markers rounding to the same cell cluster.
    pub bucket_deg: f64,
    /// Extra distance from the sphere per position in the cluster.
    pub lift_step: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            bucket_deg: 0.6,
            lift_step: 0.10,
        }
    }
}

/// Where a marker is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    /// Original (anchor) coordinate.
    pub anchor: GeoPoint,
    /// Spread display coordinate.
    pub display: GeoPoint,
    /// Extra radial distance from the sphere.
    pub lift: f64,
    /// Position within the cluster (0 for the first-seen marker).
    pub order: usize,
    /// Indices of every marker in the same cluster, including this one.
    pub peers: Vec<usize>,
}

// ───────────────────────────────────────── algorithm ─────────

/// Golden angle in radians, `π(3 − √5)`.
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

fn bucket_key(p: &GeoPoint, bucket_deg: f64) -> (i64, i64) {
    let size = if bucket_deg > 0.0 { bucket_deg } else { 0.6 };
    ((p.lat / size).round() as i64, (p.lng / size).round() as i64)
}

/// Place every marker.  Output is index-aligned with `points`.
pub fn place_markers(points: &[GeoPoint], config: &ClusterConfig) -> Vec<PlacedMarker> {
    let mut groups: BTreeMap<(i64, i64), Vec<usize>> = BTreeMap::new();
    for (idx, p) in points.iter().enumerate() {
        groups.entry(bucket_key(p, config.bucket_deg)).or_default().push(idx);
    }

    let mut placed: Vec<PlacedMarker> = points
        .iter()
        .enumerate()
        .map(|(idx, &p)| PlacedMarker {
            anchor: p,
            display: p,
            lift: 0.0,
            order: 0,
            peers: vec![idx],
        })
        .collect();

    let golden = golden_angle();
    for members in groups.values() {
        if members.len() <= 1 {
            continue;
        }
        // Bigger clusters spread wider, up to 1.2°.
        let step_deg = (0.28 + members.len() as f64 * 0.07).min(1.2);
        for (order, &idx) in members.iter().enumerate() {
            let base = points[idx];
            let angle = order as f64 * golden;
            let r = step_deg * ((order + 1) as f64).sqrt();
            let cos_lat = (base.lat.to_radians()).cos().max(0.1);
            let lat = (base.lat + r * angle.cos()).clamp(-89.9, 89.9);
            let lng = wrap_lng(base.lng + r * angle.sin() / cos_lat);

            let marker = &mut placed[idx];
            marker.display = GeoPoint::new(lat, lng);
            marker.lift = config.lift_step * order as f64;
            marker.order = order;
            marker.peers = members.clone();
        }
    }

    placed
}

fn wrap_lng(lng: f64) -> f64 {
    if lng > 180.0 {
        lng - 360.0
    } else if lng < -180.0 {
        lng + 360.0
    } else {
        lng
    }
}

// ───────────────────────────────────────── projection ────────

/// Position on a sphere of `radius` for a coordinate, y up.
pub fn to_sphere(p: GeoPoint, radius: f64) -> [f64; 3] {
    let phi = (90.0 - p.lat).to_radians();
    let theta = (p.lng + 180.0).to_radians();
    [
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    ]
}

/// Rotate a point about the vertical axis.
pub fn rotate_y(v: [f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [v[0] * c + v[2] * s, v[1], -v[0] * s + v[2] * c]
}

/// Icon scale from depth: markers facing the camera (large `z`) grow,
/// markers on the far side shrink; kept in `0.7..=1.2`.
pub fn marker_scale(z: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 1.0;
    }
    let facing = (z + radius) / (2.0 * radius);
    (0.7 + facing * 0.5).clamp(0.7, 1.2)
}

/// Deeper cluster peers shrink slightly to reduce visual overlap.
pub fn depth_shrink(order: usize) -> f64 {
    let depth_lift = (0.04 * order as f64).min(0.25);
    1.0 - depth_lift * 0.2
}
