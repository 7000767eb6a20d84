pub mod barnsley_fern;
pub mod chaos_seeded_sierpinski;
pub mod dragon_curve;
pub mod selectors;
pub mod sierpinski;

use crate::core::actions::chaos_game::{accumulate_density, normalise_density};
use crate::core::data::affine_transform::AffineTransform;
use crate::core::data::bounds::Bounds;
use crate::core::data::parameters::{ParameterDescriptor, ParameterSchema};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::data::transform_set::TransformSet;
use crate::core::fractals::family::ComputeError;
use crate::core::fractals::ifs::selectors::WeightedRandomSelector;

pub(crate) const ITERATIONS: &str = "iterations";

/// Base schema shared by the stochastic IFS families.
pub(crate) fn ifs_schema(default_iterations: i64) -> ParameterSchema {
    let mut schema = ParameterSchema::new();

    schema.insert(
        ITERATIONS,
        ParameterDescriptor::int(
            default_iterations,
            1_000,
            10_000_000,
            10_000,
            "Number of points to generate",
        ),
    );

    schema
}

/// Shared chaos-game pipeline for the stochastic families: validate the
/// budget, run one entropy-seeded chain and normalise the density.
pub(crate) fn compute_ifs_density(
    resolution: Resolution,
    bounds: Bounds,
    budget: i64,
    weighted: Vec<(AffineTransform, f64)>,
    seed_point: (f64, f64),
) -> Result<ScalarField, ComputeError> {
    if budget <= 0 {
        return Err(ComputeError::NonPositiveBudget { budget });
    }

    let transforms = TransformSet::new(weighted)?;
    let mut selector = WeightedRandomSelector::from_entropy();

    let mut field = accumulate_density(
        resolution,
        bounds,
        budget as u64,
        &transforms,
        seed_point,
        &mut selector,
    );
    normalise_density(&mut field);

    Ok(field)
}
