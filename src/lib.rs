pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod units;

pub use config::PlannerConfig;
pub use error::{FieldRouteError, Result};
pub use operations::{RouteMetrics, RoutePlan, RoutePlanner};
