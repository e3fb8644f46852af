use crate::error::{ConfigError, Result};

/// Planner parameters supplied by the caller.
///
/// Widths are physical lengths (e.g. centimeters); `unit_scale` converts
/// them to the polygon's native coordinate units (physical units per
/// coordinate unit). All planning happens in native units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Working width of the implement.
    pub work_width: f64,
    /// Desired overlap between adjacent passes, in the same unit as
    /// `work_width`.
    pub overlap_width: f64,
    /// Number of perimeter rings driven before the interior fill.
    pub perimeter_rounds: u32,
    /// Physical units per native coordinate unit.
    pub unit_scale: f64,
}

impl PlannerConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `work_width` or `unit_scale` is not
    /// positive, if `overlap_width` lies outside `[0, work_width]`, or if
    /// the effective lane spacing comes out non-positive.
    pub fn new(
        work_width: f64,
        overlap_width: f64,
        perimeter_rounds: u32,
        unit_scale: f64,
    ) -> Result<Self> {
        let config = Self {
            work_width,
            overlap_width,
            perimeter_rounds,
            unit_scale,
        };
        config.effective_lane_spacing()?;
        Ok(config)
    }

    /// Returns the perpendicular distance between adjacent passes in
    /// native coordinate units: `(work_width - overlap_width) / unit_scale`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for non-positive `work_width` or
    /// `unit_scale`, out-of-range `overlap_width`, or a spacing that is
    /// not strictly positive (overlap equal to the work width).
    pub fn effective_lane_spacing(&self) -> Result<f64> {
        if !self.work_width.is_finite() || self.work_width <= 0.0 {
            return Err(ConfigError::NonPositive {
                parameter: "work_width",
                value: self.work_width,
            }
            .into());
        }
        if !self.unit_scale.is_finite() || self.unit_scale <= 0.0 {
            return Err(ConfigError::NonPositive {
                parameter: "unit_scale",
                value: self.unit_scale,
            }
            .into());
        }
        if !self.overlap_width.is_finite()
            || self.overlap_width < 0.0
            || self.overlap_width > self.work_width
        {
            return Err(ConfigError::OverlapOutOfRange {
                overlap_width: self.overlap_width,
                work_width: self.work_width,
            }
            .into());
        }
        let spacing = (self.work_width - self.overlap_width) / self.unit_scale;
        if spacing <= 0.0 {
            return Err(ConfigError::NoEffectiveSpacing {
                work_width: self.work_width,
                overlap_width: self.overlap_width,
            }
            .into());
        }
        Ok(spacing)
    }
}
