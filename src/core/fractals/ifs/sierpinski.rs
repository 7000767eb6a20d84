use crate::core::data::affine_transform::AffineTransform;
use crate::core::data::bounds::Bounds;
use crate::core::data::parameters::{ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};
use crate::core::fractals::ifs::{ITERATIONS, compute_ifs_density, ifs_schema};

const DEFAULT_ITERATIONS: i64 = 200_000;

pub(crate) const SEED_POINT: (f64, f64) = (0.5, 0.5);

/// Three half-scale contractions toward the triangle corners.
pub(crate) fn sierpinski_transforms() -> Vec<(AffineTransform, f64)> {
    vec![
        (
            AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.0, 0.0),
            1.0 / 3.0,
        ),
        (
            AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.5, 0.0),
            1.0 / 3.0,
        ),
        (
            AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.25, 0.433),
            1.0 / 3.0,
        ),
    ]
}

pub(crate) const DEFAULT_BOUNDS: Bounds = Bounds::of(-0.1, 1.1, -0.1, 1.0);

#[derive(Debug, Default)]
pub struct SierpinskiTriangle;

impl FractalFamily for SierpinskiTriangle {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let budget = params.int_or(ITERATIONS, DEFAULT_ITERATIONS);

        compute_ifs_density(
            resolution,
            bounds,
            budget,
            sierpinski_transforms(),
            SEED_POINT,
        )
    }

    fn default_bounds(&self) -> Bounds {
        DEFAULT_BOUNDS
    }

    fn parameters(&self) -> ParameterSchema {
        ifs_schema(DEFAULT_ITERATIONS)
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::Ifs
    }

    fn display_name(&self) -> &'static str {
        "Sierpinski Triangle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::parameters::ParamValue;

    #[test]
    fn test_compute_produces_normalised_density() {
        let field = SierpinskiTriangle
            .compute(
                Resolution::new(32, 32).unwrap(),
                DEFAULT_BOUNDS,
                &Params::new().with(ITERATIONS, ParamValue::Int(20_000)),
            )
            .unwrap();

        let (min, max) = field.min_max();

        assert!(min >= 0.0);
        assert_eq!(max, 1.0);
        assert!(field.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_two_runs_typically_differ() {
        let resolution = Resolution::new(32, 32).unwrap();
        let params = Params::new().with(ITERATIONS, ParamValue::Int(20_000));

        let first = SierpinskiTriangle
            .compute(resolution, DEFAULT_BOUNDS, &params)
            .unwrap();
        let second = SierpinskiTriangle
            .compute(resolution, DEFAULT_BOUNDS, &params)
            .unwrap();

        let difference: f64 = first
            .values()
            .iter()
            .zip(second.values())
            .map(|(a, b)| f64::from((a - b).abs()))
            .sum();

        // entropy-seeded chains explore the attractor differently
        assert!(difference > 0.0);
    }

    #[test]
    fn test_probabilities_are_uniform() {
        let transforms = sierpinski_transforms();

        assert_eq!(transforms.len(), 3);
        assert!(transforms.iter().all(|(_, p)| (*p - 1.0 / 3.0).abs() < 1e-12));
    }
}
