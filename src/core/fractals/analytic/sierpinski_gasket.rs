use crate::core::actions::compute_field::compute_field_parallel;
use crate::core::actions::ports::pixel_kernel::PixelKernel;
use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use crate::core::data::parameters::{ParameterDescriptor, ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};

pub(crate) const DETAIL: &str = "max_iter";

const DEFAULT_DETAIL: i64 = 16;

const DETAIL_CAP: u32 = 24;

// width of the default view, the reference for the detail bump
const REFERENCE_WIDTH: f64 = 1.2;

#[derive(Debug)]
struct GasketKernel {
    levels: u32,
}

impl PixelKernel for GasketKernel {
    fn value_at(&self, coord: Complex) -> f32 {
        let x = coord.real;
        let y = coord.imag;

        if x < 0.0 || y < 0.0 || x > 1.0 || y > 1.0 {
            return 0.0;
        }

        // membership by bit test: a point is in the gasket when its scaled
        // integer coordinates share no set bit at any level
        let scale = (1u64 << self.levels) as f64;
        let mut ix = (x * scale) as u64;
        let mut iy = (y * scale) as u64;

        for level in 0..self.levels {
            if ix & iy != 0 {
                return level as f32 / self.levels as f32;
            }

            ix >>= 1;
            iy >>= 1;
        }

        1.0
    }
}

/// Sierpinski triangle as a closed-form membership field: no stochastic
/// process, stable under zoom, bit-identical across renders.
#[derive(Debug, Default)]
pub struct SierpinskiGasket;

impl FractalFamily for SierpinskiGasket {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let budget = params.int_or(DETAIL, DEFAULT_DETAIL);

        if budget <= 0 {
            return Err(ComputeError::NonPositiveBudget { budget });
        }

        // one extra subdivision level per doubling of the zoom
        let zoom = REFERENCE_WIDTH / bounds.width();
        let bump = zoom.max(1.0).log2() as u32;
        let levels = (budget.min(i64::from(DETAIL_CAP)) as u32)
            .saturating_add(bump)
            .min(DETAIL_CAP);

        Ok(compute_field_parallel(
            resolution,
            bounds,
            &GasketKernel { levels },
        ))
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::of(-0.1, 1.1, -0.1, 1.0)
    }

    fn parameters(&self) -> ParameterSchema {
        let mut schema = ParameterSchema::new();

        schema.insert(
            DETAIL,
            ParameterDescriptor::int(DEFAULT_DETAIL, 8, 24, 1, "Detail level"),
        );

        schema
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::Deterministic
    }

    fn display_name(&self) -> &'static str {
        "Sierpinski Gasket"
    }
}
