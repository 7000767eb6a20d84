use crate::core::data::bounds::Bounds;
use crate::core::data::parameters::{ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::data::transform_set::TransformSetError;
use std::error::Error;
use std::fmt;

/// Broad capability category of a fractal family; the render pipeline
/// keys its adaptive-budget handling on this.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FamilyType {
    EscapeTime,
    Ifs,
    Deterministic,
}

impl FamilyType {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EscapeTime => "escape_time",
            Self::Ifs => "ifs",
            Self::Deterministic => "deterministic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeError {
    NonPositiveBudget { budget: i64 },
    TransformSet(TransformSetError),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBudget { budget } => {
                write!(f, "iteration budget must be positive, got {}", budget)
            }
            Self::TransformSet(err) => write!(f, "transform set error: {}", err),
        }
    }
}

impl Error for ComputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonPositiveBudget { .. } => None,
            Self::TransformSet(err) => Some(err),
        }
    }
}

impl From<TransformSetError> for ComputeError {
    fn from(err: TransformSetError) -> Self {
        Self::TransformSet(err)
    }
}

/// Capability set every fractal family implements: compute a scalar field
/// for a view, and describe its default view, parameters and category.
pub trait FractalFamily: Send + Sync {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError>;

    fn default_bounds(&self) -> Bounds;

    fn parameters(&self) -> ParameterSchema;

    fn family_type(&self) -> FamilyType;

    fn display_name(&self) -> &'static str;
}
