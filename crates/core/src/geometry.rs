//! Plane geometry helpers used by the discovery model.
//!
//! Points are passed as `(x, y)` tuples so the helpers stay independent of
//! the [`Point`](crate::point::Point) model.

/// Squared segment length below which a segment is treated as a point.
const DEGENERATE_SEGMENT_SQ: f64 = 0.001;

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Returns true if the segment `p1 → p2` touches the circle at `center`.
///
/// Solves `|p1 + t(p2 - p1) - center|² = r²` for `t`. The segment hits the
/// circle when a root lies in `[0, 1]`, or when the roots bracket the whole
/// segment (the segment lies inside the circle).
///
/// # Example
///
/// ```rust
/// use teleroute_core::geometry::segment_intersects_circle;
///
/// // Passes 5 units from the center of a radius-10 circle.
/// assert!(segment_intersects_circle((0.0, 5.0), (100.0, 5.0), (50.0, 0.0), 10.0));
/// // Passes 15 units away.
/// assert!(!segment_intersects_circle((0.0, 15.0), (100.0, 15.0), (50.0, 0.0), 10.0));
/// ```
pub fn segment_intersects_circle(
    p1: (f64, f64),
    p2: (f64, f64),
    center: (f64, f64),
    radius: f64,
) -> bool {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let fx = p1.0 - center.0;
    let fy = p1.1 - center.1;

    let a = dx * dx + dy * dy;
    if a < DEGENERATE_SEGMENT_SQ {
        return euclidean_distance(p1, center) <= radius;
    }

    let b = 2.0 * (fx * dx + fy * dy);
    let c = (fx * fx + fy * fy) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2) || (t1 < 0.0 && t2 > 1.0)
}
