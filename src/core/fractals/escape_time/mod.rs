pub mod burning_ship;
pub mod julia;
pub mod mandelbrot;
pub mod smoothing;

use crate::core::data::parameters::{ParameterDescriptor, ParameterSchema};
use crate::core::fractals::family::ComputeError;

pub(crate) const MAX_ITER: &str = "max_iter";

pub(crate) const DEFAULT_MAX_ITER: i64 = 256;

/// Base schema shared by every escape-time family.
pub(crate) fn escape_time_schema() -> ParameterSchema {
    let mut schema = ParameterSchema::new();

    schema.insert(
        MAX_ITER,
        ParameterDescriptor::int(
            DEFAULT_MAX_ITER,
            10,
            2000,
            10,
            "Maximum iterations for escape calculation",
        ),
    );

    schema
}

/// Validates an iteration budget and narrows it for the kernels.
pub(crate) fn checked_budget(budget: i64) -> Result<u32, ComputeError> {
    if budget <= 0 {
        return Err(ComputeError::NonPositiveBudget { budget });
    }

    Ok(u32::try_from(budget).unwrap_or(u32::MAX))
}
