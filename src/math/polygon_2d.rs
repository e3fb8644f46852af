use super::distance_2d::{distance, project_onto_segment};
use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
/// Fewer than 3 vertices yields `0.0`.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the unsigned area of a closed polygon in native squared units.
///
/// Winding-independent. Fewer than 3 vertices is not a computable shape
/// and yields `0.0`; callers decide how to report that.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Returns the axis-aligned bounding box, or `None` for an empty point set.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<Bounds2D> {
    let first = points.first()?;
    let mut bounds = Bounds2D {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for pt in &points[1..] {
        bounds.min_x = bounds.min_x.min(pt.x);
        bounds.min_y = bounds.min_y.min(pt.y);
        bounds.max_x = bounds.max_x.max(pt.x);
        bounds.max_y = bounds.max_y.max(pt.y);
    }
    Some(bounds)
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(Vector2::new(d.x / len, d.y / len))
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the closest point to `query` lying on the polygon boundary.
///
/// Every edge of the closed loop (including the implicit last-to-first
/// edge) is considered; the globally nearest projection wins. Ties at a
/// shared vertex resolve to the first edge scanned, which yields the same
/// coordinate.
///
/// # Errors
///
/// Returns `GeometryError::InsufficientVertices` if the polygon has fewer
/// than 3 vertices — a completed boundary is required.
pub fn nearest_boundary_point(points: &[Point2], query: &Point2) -> Result<Point2> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::InsufficientVertices {
            required: 3,
            actual: n,
        }
        .into());
    }

    let mut min_dist = f64::INFINITY;
    let mut nearest = points[0];
    for i in 0..n {
        let projected = project_onto_segment(query, &points[i], &points[(i + 1) % n]);
        let dist = distance(query, &projected);
        if dist < min_dist {
            min_dist = dist;
            nearest = projected;
        }
    }
    Ok(nearest)
}
