pub mod edge_offset_2d;
pub mod route_plan;
pub mod scan_fill_2d;

pub use edge_offset_2d::EdgeOffset2D;
pub use route_plan::{RouteMetrics, RoutePlan, RoutePlanner};
pub use scan_fill_2d::BoustrophedonFill2D;
