use crate::error::{OperationError, Result};
use crate::math::polygon_2d::bounds_2d;
use crate::math::Point2;

/// Fills a polygon interior with a boustrophedon (back-and-forth) pattern
/// of horizontal scanlines.
///
/// Scanlines start at the bounding box's `min_y` and advance by the lane
/// spacing. On each line, edge crossings are collected with the half-open
/// test `(p1.y <= y && p2.y > y) || (p2.y <= y && p1.y > y)` (so a shared
/// vertex on the line is counted once), sorted ascending, and paired
/// `(0,1), (2,3), …` into inside spans. A trailing unmatched crossing —
/// possible only for self-intersecting input, which this planner does not
/// reject — is dropped silently. Span endpoints are emitted left-to-right
/// on even lanes and right-to-left on odd lanes so consecutive lanes chain
/// into a continuous zig-zag.
#[derive(Debug)]
pub struct BoustrophedonFill2D {
    points: Vec<Point2>,
    lane_spacing: f64,
}

impl BoustrophedonFill2D {
    /// Creates a new scan-fill operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, lane_spacing: f64) -> Self {
        Self {
            points,
            lane_spacing,
        }
    }

    /// Executes the fill and returns the pattern as an ordered point list.
    ///
    /// Fewer than 3 vertices is a collapsed shape and yields an empty
    /// pattern, not an error.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the lane spacing is not
    /// positive and finite — rejected up front so the sweep cannot loop
    /// indefinitely.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if !self.lane_spacing.is_finite() || self.lane_spacing <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "lane spacing must be positive and finite, got {}",
                self.lane_spacing
            ))
            .into());
        }

        let n = self.points.len();
        if n < 3 {
            return Ok(Vec::new());
        }

        let Some(bounds) = bounds_2d(&self.points) else {
            return Ok(Vec::new());
        };

        // Indexed sweep: the lane count is fixed before iterating, so the
        // loop terminates for any positive spacing.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lane_count = ((bounds.max_y - bounds.min_y) / self.lane_spacing).floor() as usize + 1;

        let mut pattern = Vec::new();
        for lane in 0..lane_count {
            #[allow(clippy::cast_precision_loss)]
            let y = bounds.min_y + lane as f64 * self.lane_spacing;

            let mut crossings = Vec::new();
            for i in 0..n {
                let p1 = &self.points[i];
                let p2 = &self.points[(i + 1) % n];
                if (p1.y <= y && p2.y > y) || (p2.y <= y && p1.y > y) {
                    let t = (y - p1.y) / (p2.y - p1.y);
                    crossings.push(p1.x + t * (p2.x - p1.x));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                if lane % 2 == 0 {
                    pattern.push(Point2::new(span[0], y));
                    pattern.push(Point2::new(span[1], y));
                } else {
                    pattern.push(Point2::new(span[1], y));
                    pattern.push(Point2::new(span[0], y));
                }
            }
        }
        Ok(pattern)
    }
}
