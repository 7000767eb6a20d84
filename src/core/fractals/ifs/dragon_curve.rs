use crate::core::data::affine_transform::AffineTransform;
use crate::core::data::bounds::Bounds;
use crate::core::data::parameters::{ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};
use crate::core::fractals::ifs::{ITERATIONS, compute_ifs_density, ifs_schema};

const DEFAULT_ITERATIONS: i64 = 500_000;

fn dragon_transforms() -> Vec<(AffineTransform, f64)> {
    vec![
        (AffineTransform::new(0.5, -0.5, 0.5, 0.5, 0.0, 0.0), 0.5),
        (AffineTransform::new(-0.5, 0.5, -0.5, -0.5, 1.0, 0.0), 0.5),
    ]
}

#[derive(Debug, Default)]
pub struct DragonCurve;

impl FractalFamily for DragonCurve {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let budget = params.int_or(ITERATIONS, DEFAULT_ITERATIONS);

        compute_ifs_density(resolution, bounds, budget, dragon_transforms(), (0.5, 0.0))
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::of(-0.5, 1.5, -0.75, 0.75)
    }

    fn parameters(&self) -> ParameterSchema {
        ifs_schema(DEFAULT_ITERATIONS)
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::Ifs
    }

    fn display_name(&self) -> &'static str {
        "Dragon Curve"
    }
}
