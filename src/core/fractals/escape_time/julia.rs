use crate::core::actions::compute_field::compute_field_parallel;
use crate::core::actions::ports::pixel_kernel::PixelKernel;
use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use crate::core::data::parameters::{ParameterDescriptor, ParameterSchema, Params};
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::escape_time::smoothing::{
    ESCAPE_RADIUS_SQUARED, smooth_escape_value,
};
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITER, MAX_ITER, checked_budget,
    escape_time_schema};
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};

pub(crate) const C_REAL: &str = "c_real";
pub(crate) const C_IMAG: &str = "c_imag";

const DEFAULT_C_REAL: f64 = -0.4;
const DEFAULT_C_IMAG: f64 = 0.6;

#[derive(Debug, Default)]
pub struct Julia;

#[derive(Debug)]
pub(crate) struct JuliaKernel {
    pub(crate) max_iterations: u32,
    pub(crate) constant: Complex,
}

impl PixelKernel for JuliaKernel {
    fn value_at(&self, coord: Complex) -> f32 {
        // the pixel seeds the orbit; the constant is fixed across the view
        let mut z = coord;

        for iteration in 0..self.max_iterations {
            let magnitude_squared = z.magnitude_squared();

            if magnitude_squared > ESCAPE_RADIUS_SQUARED {
                return smooth_escape_value(iteration, magnitude_squared.sqrt());
            }

            z = z * z + self.constant;
        }

        self.max_iterations as f32
    }
}

impl FractalFamily for Julia {
    fn compute(
        &self,
        resolution: Resolution,
        bounds: Bounds,
        params: &Params,
    ) -> Result<ScalarField, ComputeError> {
        let max_iterations = checked_budget(params.int_or(MAX_ITER, DEFAULT_MAX_ITER))?;
        let kernel = JuliaKernel {
            max_iterations,
            constant: Complex {
                real: params.float_or(C_REAL, DEFAULT_C_REAL),
                imag: params.float_or(C_IMAG, DEFAULT_C_IMAG),
            },
        };

        Ok(compute_field_parallel(resolution, bounds, &kernel))
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::of(-2.0, 2.0, -1.5, 1.5)
    }

    fn parameters(&self) -> ParameterSchema {
        let mut schema = escape_time_schema();

        schema.insert(
            C_REAL,
            ParameterDescriptor::float(
                DEFAULT_C_REAL,
                -2.0,
                2.0,
                0.01,
                "Real component of Julia constant",
            ),
        );
        schema.insert(
            C_IMAG,
            ParameterDescriptor::float(
                DEFAULT_C_IMAG,
                -2.0,
                2.0,
                0.01,
                "Imaginary component of Julia constant",
            ),
        );

        schema
    }

    fn family_type(&self) -> FamilyType {
        FamilyType::EscapeTime
    }

    fn display_name(&self) -> &'static str {
        "Julia Set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::parameters::ParamValue;

    #[test]
    fn test_seed_outside_radius_escapes_at_step_zero() {
        let kernel = JuliaKernel {
            max_iterations: 32,
            constant: Complex {
                real: 0.0,
                imag: 0.0,
            },
        };
        let value = kernel.value_at(Complex {
            real: 4.0,
            imag: 0.0,
        });

        // magnitude 4 at iteration 0: 0 + 1 - log2(log2(4)) = 0
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_contracting_seed_reaches_budget() {
        let kernel = JuliaKernel {
            max_iterations: 32,
            constant: Complex {
                real: 0.0,
                imag: 0.0,
            },
        };
        let value = kernel.value_at(Complex {
            real: 0.5,
            imag: 0.0,
        });

        assert_eq!(value, 32.0);
    }

    #[test]
    fn test_constant_comes_from_params() {
        let resolution = Resolution::new(16, 12).unwrap();
        let bounds = Bounds::new(-2.0, 2.0, -1.5, 1.5).unwrap();

        let default_field = Julia.compute(resolution, bounds, &Params::new()).unwrap();
        let swirl_field = Julia
            .compute(
                resolution,
                bounds,
                &Params::new()
                    .with(C_REAL, ParamValue::Float(0.285))
                    .with(C_IMAG, ParamValue::Float(0.01)),
            )
            .unwrap();

        assert_ne!(default_field, swirl_field);
    }

    #[test]
    fn test_schema_includes_constant_components() {
        let schema = Julia.parameters();

        assert!(schema.contains_key(C_REAL));
        assert!(schema.contains_key(C_IMAG));
        assert!(schema.contains_key(MAX_ITER));
    }
}
