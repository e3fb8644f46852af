use super::Point2;

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Returns the closest point to `p` on the closed segment from `a` to `b`.
///
/// Computed via the clamped scalar projection
/// `t = clamp((p - a)·(b - a) / |b - a|², 0, 1)`.
/// A zero-length segment is detected explicitly and returns `a` instead of
/// letting the zero denominator taint the result with NaN.
#[must_use]
pub fn project_onto_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return *a;
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    Point2::new(a.x + t * dx, a.y + t * dy)
}

/// Returns the minimum distance from point `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    distance(p, &project_onto_segment(p, a, b))
}
