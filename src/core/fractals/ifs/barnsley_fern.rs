use crate::core::data::affine_transform::AffineTransform;
use crate::core::data::bounds::Bounds;
use crate::core::data::parameters::{ParameterDescriptor, ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};
use crate::core::fractals::ifs::{ITERATIONS, compute_ifs_density, ifs_schema};

const DEFAULT_ITERATIONS: i64 = 1_000_000;

pub(crate) const COLOR_MODE: &str = "color_mode";

fn fern_transforms() -> Vec<(AffineTransform, f64)> {
    vec![
        // stem
        (AffineTransform::new(0.0, 0.0, 0.0, 0.16, 0.0, 0.0), 0.01),
        // successively smaller leaflets
        (
            AffineTransform::new(0.85, 0.04, -0.04, 0.85, 0.0, 1.6),
            0.85,
        ),
        (
            AffineTransform::new(0.2, -0.26, 0.23, 0.22, 0.0, 1.6),
            0.07,
        ),
        (
            AffineTransform::new(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44),
            0.07,
        ),
    ]
}

#[derive(Debug, Default)]
pub struct BarnsleyFern;

impl FractalFamily for BarnsleyFern {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let budget = params.int_or(ITERATIONS, DEFAULT_ITERATIONS);

        compute_ifs_density(resolution, bounds, budget, fern_transforms(), (0.0, 0.0))
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::of(-3.0, 3.0, -0.5, 10.5)
    }

    fn parameters(&self) -> ParameterSchema {
        let mut schema = ifs_schema(DEFAULT_ITERATIONS);

        schema.insert(
            COLOR_MODE,
            ParameterDescriptor::text(
                "density",
                &["density", "height", "age"],
                "Coloring mode for the fern",
            ),
        );

        schema
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::Ifs
    }

    fn display_name(&self) -> &'static str {
        "Barnsley Fern"
    }
}
