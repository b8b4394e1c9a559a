//! Overlap tests between the player circle and world entities

use glam::DVec2;

/// Circle vs axis-aligned rectangle (`min` is the top-left corner).
///
/// Clamps the circle center onto the rectangle and compares the squared
/// distance to the squared radius. A center on or inside the rectangle
/// edge always overlaps.
pub fn circle_rect_overlap(center: DVec2, radius: f64, min: DVec2, size: DVec2) -> bool {
    let closest = center.clamp(min, min + size);
    center.distance_squared(closest) < radius * radius
}

/// Circle vs circle: strict sum-of-radii test
pub fn circle_circle_overlap(a: DVec2, ra: f64, b: DVec2, rb: f64) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}
