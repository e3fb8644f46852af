use thiserror::Error;

/// Top-level error type for the fieldroute planning engine.
#[derive(Debug, Error)]
pub enum FieldRouteError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon requires at least {required} vertices, got {actual}")]
    InsufficientVertices { required: usize, actual: usize },
}

/// Errors related to planner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("overlap width {overlap_width} is out of range [0, {work_width}]")]
    OverlapOutOfRange { overlap_width: f64, work_width: f64 },

    #[error(
        "work width {work_width} minus overlap width {overlap_width} leaves no effective lane spacing"
    )]
    NoEffectiveSpacing { work_width: f64, overlap_width: f64 },
}

/// Errors related to planning operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`FieldRouteError`].
pub type Result<T> = std::result::Result<T, FieldRouteError>;
