use crate::core::actions::compute_field::compute_field_parallel;
use crate::core::actions::ports::pixel_kernel::PixelKernel;
use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use crate::core::data::parameters::{ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::escape_time::smoothing::{
    ESCAPE_RADIUS_SQUARED, smooth_escape_value,
};
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITER, MAX_ITER, checked_budget,
    escape_time_schema};
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};

#[derive(Debug, Default)]
pub struct Mandelbrot;

#[derive(Debug)]
pub(crate) struct MandelbrotKernel {
    pub(crate) max_iterations: u32,
}

impl PixelKernel for MandelbrotKernel {
    fn value_at(&self, c: Complex) -> f32 {
        let mut z = Complex {
            real: 0.0,
            imag: 0.0,
        };

        for iteration in 0..self.max_iterations {
            let magnitude_squared = z.magnitude_squared();

            if magnitude_squared > ESCAPE_RADIUS_SQUARED {
                return smooth_escape_value(iteration, magnitude_squared.sqrt());
            }

            z = z * z + c;
        }

        self.max_iterations as f32
    }
}

impl FractalFamily for Mandelbrot {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let max_iterations = checked_budget(params.int_or(MAX_ITER, DEFAULT_MAX_ITER))?;
        let kernel = MandelbrotKernel { max_iterations };

        Ok(compute_field_parallel(resolution, bounds, &kernel))
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::of(-2.5, 1.0, -1.25, 1.25)
    }

    fn parameters(&self) -> ParameterSchema {
        escape_time_schema()
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::EscapeTime
    }

    fn display_name(&self) -> &'static str {
        "Mandelbrot Set"
    }
}
