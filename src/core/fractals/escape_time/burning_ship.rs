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
pub struct BurningShip;

#[derive(Debug)]
pub(crate) struct BurningShipKernel {
    pub(crate) max_iterations: u32,
}

impl PixelKernel for BurningShipKernel {
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

            // z' = (|Re z| + i|Im z|)² + c
            let folded = z.abs_components();
            z = folded * folded + c;
        }

        self.max_iterations as f32
    }
}

impl FractalFamily for BurningShip {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let max_iterations = checked_budget(params.int_or(MAX_ITER, DEFAULT_MAX_ITER))?;
        let kernel = BurningShipKernel { max_iterations };

        Ok(compute_field_parallel(resolution, bounds, &kernel))
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::of(-2.5, 1.5, -2.0, 1.0)
    }

    fn parameters(&self) -> ParameterSchema {
        escape_time_schema()
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::EscapeTime
    }

    fn display_name(&self) -> &'static str {
        "Burning Ship"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::mandelbrot::MandelbrotKernel;

    #[test]
    fn test_origin_never_escapes() {
        let kernel = BurningShipKernel { max_iterations: 48 };
        let value = kernel.value_at(Complex {
            real: 0.0,
            imag: 0.0,
        });

        assert_eq!(value, 48.0);
    }

    #[test]
    fn test_fold_breaks_mandelbrot_orbit() {
        // c = i cycles forever under z² + c but escapes once the components
        // are folded: 0 → i → -1+i → 3i
        let c = Complex {
            real: 0.0,
            imag: 1.0,
        };

        let mandelbrot = MandelbrotKernel { max_iterations: 64 }.value_at(c);
        let ship = BurningShipKernel { max_iterations: 64 }.value_at(c);

        assert_eq!(mandelbrot, 64.0);
        assert!(ship < 64.0);
    }

    #[test]
    fn test_compute_returns_requested_shape() {
        let field = BurningShip
            .compute(
                Resolution::new(12, 10).unwrap(),
                Bounds::new(-2.5, 1.5, -2.0, 1.0).unwrap(),
                &Params::new(),
            )
            .unwrap();

        assert_eq!(field.resolution().width(), 12);
        assert_eq!(field.resolution().height(), 10);
        assert!(field.values().iter().all(|v| v.is_finite()));
    }
}
