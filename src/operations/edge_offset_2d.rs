use crate::error::Result;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::Point2;

/// Offsets a closed polygon by translating each edge along its own normal.
///
/// For each directed edge `(p1 → p2)` the output vertex is
/// `p1 + left_normal(dir) * distance`, so the result has the same vertex
/// count and edge correspondence as the input. Positive distance offsets
/// toward the left of the walking direction: inward for counter-clockwise
/// polygons, outward for clockwise ones. The operation is winding-tolerant
/// and the caller owns the sign.
///
/// This is **not** a robust polygon offset: adjacent offset edges are not
/// re-intersected, so concave polygons or distances large relative to
/// local feature size can self-intersect or invert. Kept deliberately —
/// callers use small incremental offsets relative to the field size, and
/// the simple form keeps ring vertices in lockstep with the input.
#[derive(Debug)]
pub struct EdgeOffset2D {
    points: Vec<Point2>,
    distance: f64,
}

impl EdgeOffset2D {
    /// Creates a new edge-offset operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, distance: f64) -> Self {
        Self { points, distance }
    }

    /// Executes the offset operation.
    ///
    /// Fewer than 3 vertices is not a closed shape; the result is an
    /// empty polygon (no offset possible), not an error.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polygon contains a
    /// zero-length edge.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        if n < 3 {
            return Ok(Vec::new());
        }

        let mut result = Vec::with_capacity(n);
        for i in 0..n {
            let p1 = &self.points[i];
            let p2 = &self.points[(i + 1) % n];
            let dir = segment_direction(p1, p2)?;
            let offset = left_normal(dir) * self.distance;
            result.push(Point2::new(p1.x + offset.x, p1.y + offset.y));
        }
        Ok(result)
    }
}
