use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::math::distance_2d::distance;
use crate::math::Point2;
use crate::operations::{BoustrophedonFill2D, EdgeOffset2D};

/// Summary metrics for a planned route, derived from its point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    /// Sum of Euclidean distances between consecutive route points, in
    /// native coordinate units.
    pub total_distance: f64,
    /// Number of points in the route.
    pub point_count: usize,
}

/// A planned coverage route: an ordered point sequence plus metrics.
///
/// The order is the physical path the machine follows. Entry and exit are
/// annotations echoed from the caller; they never shape the path.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub points: Vec<Point2>,
    pub metrics: RouteMetrics,
    pub entry: Option<Point2>,
    pub exit: Option<Point2>,
}

/// Plans a coverage route over a field polygon: `perimeter_rounds` inward
/// offset rings followed by a boustrophedon fill of the innermost ring.
///
/// Ring `i` is the field offset by `-(i * lane spacing)` along each edge's
/// left normal, so successive rings shrink inward for clockwise-wound
/// fields (screen-style coordinates) and grow for counter-clockwise ones —
/// the winding convention is the caller's, matching [`EdgeOffset2D`].
///
/// Each invocation is a pure function of the polygon and configuration;
/// the planner holds no state across calls.
#[derive(Debug)]
pub struct RoutePlanner {
    points: Vec<Point2>,
    config: PlannerConfig,
    entry: Option<Point2>,
    exit: Option<Point2>,
}

impl RoutePlanner {
    /// Creates a new route planning operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, config: PlannerConfig) -> Self {
        Self {
            points,
            config,
            entry: None,
            exit: None,
        }
    }

    /// Attaches entry/exit annotations to carry through to the plan.
    #[must_use]
    pub fn with_access_points(mut self, entry: Point2, exit: Point2) -> Self {
        self.entry = Some(entry);
        self.exit = Some(exit);
        self
    }

    /// Executes the planning operation.
    ///
    /// A polygon with fewer than 3 vertices produces an empty route with
    /// zero metrics, mirroring the empty results of the underlying
    /// operations.
    ///
    /// # Errors
    ///
    /// - `ConfigError` if the configuration yields no positive effective
    ///   lane spacing
    /// - `GeometryError::Degenerate` if the polygon contains a
    ///   zero-length edge
    pub fn execute(&self) -> Result<RoutePlan> {
        let spacing = self.config.effective_lane_spacing()?;
        debug!(
            vertices = self.points.len(),
            rounds = self.config.perimeter_rounds,
            spacing,
            "planning coverage route"
        );

        let mut route = Vec::new();
        for i in 0..self.config.perimeter_rounds {
            let ring_offset = -(f64::from(i) * spacing);
            let ring = EdgeOffset2D::new(self.points.clone(), ring_offset).execute()?;
            route.extend(ring);
        }

        let inner_offset = -(f64::from(self.config.perimeter_rounds) * spacing);
        let inner = EdgeOffset2D::new(self.points.clone(), inner_offset).execute()?;
        if inner.len() >= 3 {
            let fill = BoustrophedonFill2D::new(inner, spacing).execute()?;
            route.extend(fill);
        }

        let metrics = RouteMetrics {
            total_distance: route_distance(&route),
            point_count: route.len(),
        };
        debug!(
            points = metrics.point_count,
            total_distance = metrics.total_distance,
            "route assembled"
        );

        Ok(RoutePlan {
            points: route,
            metrics,
            entry: self.entry,
            exit: self.exit,
        })
    }
}

/// Returns the total length of a point sequence walked in order.
///
/// Zero for sequences of length 0 or 1.
#[must_use]
pub fn route_distance(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::distance_2d::distance;

    /// Clockwise square with side 100: the winding the planner's negative
    /// ring offsets shrink inward.
    fn field_cw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 0.0),
        ]
    }

    /// Config with an effective lane spacing of 20 native units.
    fn config(rounds: u32) -> PlannerConfig {
        PlannerConfig::new(250.0, 50.0, rounds, 10.0).unwrap()
    }

    #[test]
    fn zero_rounds_starts_with_fill() {
        let plan = RoutePlanner::new(field_cw(), config(0)).execute().unwrap();
        // No ring vertices: the route opens on the first scanline at min_y.
        assert!(!plan.points.is_empty());
        assert!((plan.points[0].y).abs() < 1e-9);
        let fill = BoustrophedonFill2D::new(field_cw(), 20.0)
            .execute()
            .unwrap();
        assert_eq!(plan.points.len(), fill.len());
        for (a, b) in plan.points.iter().zip(fill.iter()) {
            assert!(distance(a, b) < 1e-9);
        }
    }

    #[test]
    fn first_ring_is_the_field_boundary() {
        let field = field_cw();
        let plan = RoutePlanner::new(field.clone(), config(2)).execute().unwrap();
        // Ring 0 is offset by -0: the original vertices verbatim.
        for (planned, original) in plan.points.iter().zip(field.iter()) {
            assert!(distance(planned, original) < 1e-9);
        }
    }

    #[test]
    fn successive_rings_step_by_one_lane_spacing() {
        let plan = RoutePlanner::new(field_cw(), config(2)).execute().unwrap();
        // Ring 1 occupies indices 4..8: each vertex is the matching field
        // vertex shifted 20 units along its own edge's normal. Corners are
        // not re-intersected, so the shift is along the boundary for a
        // square, not diagonally inward.
        let expected_ring1 = [
            Point2::new(20.0, 0.0),
            Point2::new(0.0, 80.0),
            Point2::new(80.0, 100.0),
            Point2::new(100.0, 20.0),
        ];
        for (pt, expected) in plan.points[4..8].iter().zip(expected_ring1.iter()) {
            assert!(
                distance(pt, expected) < 1e-9,
                "ring vertex ({}, {}), expected ({}, {})",
                pt.x,
                pt.y,
                expected.x,
                expected.y
            );
        }
        // The interior fill is the scan of the innermost ring (offset by
        // rounds * spacing = 40), appended after the rings.
        let inner = EdgeOffset2D::new(field_cw(), -40.0).execute().unwrap();
        let fill = BoustrophedonFill2D::new(inner, 20.0).execute().unwrap();
        assert_eq!(plan.points.len(), 8 + fill.len());
        for (a, b) in plan.points[8..].iter().zip(fill.iter()) {
            assert!(distance(a, b) < 1e-9);
        }
    }

    #[test]
    fn metrics_match_independent_recompute() {
        let plan = RoutePlanner::new(field_cw(), config(2)).execute().unwrap();
        assert_eq!(plan.metrics.point_count, plan.points.len());
        let recomputed: f64 = plan
            .points
            .windows(2)
            .map(|pair| distance(&pair[0], &pair[1]))
            .sum();
        assert!(
            (plan.metrics.total_distance - recomputed).abs() < 1e-9,
            "metrics={}, recomputed={recomputed}",
            plan.metrics.total_distance
        );
    }

    #[test]
    fn access_points_are_annotation_only() {
        let entry = Point2::new(0.0, 50.0);
        let exit = Point2::new(100.0, 50.0);
        let with = RoutePlanner::new(field_cw(), config(1))
            .with_access_points(entry, exit)
            .execute()
            .unwrap();
        let without = RoutePlanner::new(field_cw(), config(1)).execute().unwrap();

        assert_eq!(with.entry, Some(entry));
        assert_eq!(with.exit, Some(exit));
        assert!(without.entry.is_none() && without.exit.is_none());
        // Identical paths: access points never shape the route.
        assert_eq!(with.points.len(), without.points.len());
        for (a, b) in with.points.iter().zip(without.points.iter()) {
            assert!(distance(a, b) < 1e-12);
        }
    }

    #[test]
    fn insufficient_vertices_yield_empty_plan() {
        let two = vec![Point2::new(0.0, 0.0), Point2::new(50.0, 50.0)];
        let plan = RoutePlanner::new(two, config(1)).execute().unwrap();
        assert!(plan.points.is_empty());
        assert_eq!(plan.metrics.point_count, 0);
        assert!(plan.metrics.total_distance.abs() < 1e-12);
    }

    #[test]
    fn invalid_configuration_fails_fast() {
        let config = PlannerConfig {
            work_width: 100.0,
            overlap_width: 100.0,
            perimeter_rounds: 1,
            unit_scale: 10.0,
        };
        assert!(RoutePlanner::new(field_cw(), config).execute().is_err());
    }

    #[test]
    fn route_distance_short_sequences() {
        assert!(route_distance(&[]).abs() < 1e-12);
        assert!(route_distance(&[Point2::new(3.0, 4.0)]).abs() < 1e-12);
        let two = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)];
        assert!((route_distance(&two) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn single_round_point_count() {
        // One perimeter ring (4 vertices) plus the fill of the ring inset
        // by one lane spacing.
        let plan = RoutePlanner::new(field_cw(), config(1)).execute().unwrap();
        let fill = BoustrophedonFill2D::new(
            EdgeOffset2D::new(field_cw(), -20.0).execute().unwrap(),
            20.0,
        )
        .execute()
        .unwrap();
        assert_eq!(plan.points.len(), 4 + fill.len());
    }
}
