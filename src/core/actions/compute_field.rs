use rayon::prelude::*;

use crate::core::actions::ports::pixel_kernel::PixelKernel;
use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;

fn coord_steps(resolution: Resolution, bounds: Bounds) -> (f64, f64) {
    (
        bounds.width() / f64::from(resolution.width()),
        bounds.height() / f64::from(resolution.height()),
    )
}

/// Evaluates a per-pixel kernel over the whole canvas sequentially.
///
/// Pixel (px, py) maps to the coordinate (x_min + px·dx, y_min + py·dy),
/// so row 0 sits at y_min.
#[allow(dead_code)]
pub fn compute_field<K: PixelKernel>(
    resolution: Resolution,
    bounds: Bounds,
    kernel: &K,
) -> ScalarField {
    let (dx, dy) = coord_steps(resolution, bounds);
    let width = resolution.width() as usize;
    let mut field = ScalarField::new(resolution);

    for (py, row) in field.values_mut().chunks_mut(width).enumerate() {
        let y = bounds.y_min() + py as f64 * dy;

        for (px, cell) in row.iter_mut().enumerate() {
            let x = bounds.x_min() + px as f64 * dx;
            *cell = kernel.value_at(Complex { real: x, imag: y });
        }
    }

    field
}

/// Evaluates a per-pixel kernel in parallel using rayon's work-stealing
/// scheduler. Rows are disjoint output slices, so no locking is needed.
pub fn compute_field_parallel<K: PixelKernel>(
    resolution: Resolution,
    bounds: Bounds,
    kernel: &K,
) -> ScalarField {
    let (dx, dy) = coord_steps(resolution, bounds);
    let width = resolution.width() as usize;
    let mut field = ScalarField::new(resolution);

    field
        .values_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(py, row)| {
            let y = bounds.y_min() + py as f64 * dy;

            for (px, cell) in row.iter_mut().enumerate() {
                let x = bounds.x_min() + px as f64 * dx;
                *cell = kernel.value_at(Complex { real: x, imag: y });
            }
        });

    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubSumKernel;

    impl PixelKernel for StubSumKernel {
        fn value_at(&self, coord: Complex) -> f32 {
            (coord.real + coord.imag) as f32
        }
    }

    fn resolution(width: i32, height: i32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    fn bounds() -> Bounds {
        Bounds::new(-2.0, 2.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_field_has_requested_shape() {
        let field = compute_field(resolution(10, 8), bounds(), &StubSumKernel);

        assert_eq!(field.resolution().width(), 10);
        assert_eq!(field.resolution().height(), 8);
        assert_eq!(field.values().len(), 80);
    }

    #[test]
    fn test_first_pixel_maps_to_bounds_origin() {
        let field = compute_field(resolution(4, 4), bounds(), &StubSumKernel);

        // pixel (0, 0) evaluates at (x_min, y_min)
        assert_eq!(field.value_at(0, 0), -3.0);
    }

    #[test]
    fn test_parallel_generates_same_results_as_sequential() {
        let sequential = compute_field(resolution(64, 48), bounds(), &StubSumKernel);
        let parallel = compute_field_parallel(resolution(64, 48), bounds(), &StubSumKernel);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_parallel_with_single_pixel() {
        let sequential = compute_field(resolution(1, 1), bounds(), &StubSumKernel);
        let parallel = compute_field_parallel(resolution(1, 1), bounds(), &StubSumKernel);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_all_values_finite() {
        let field = compute_field_parallel(resolution(32, 32), bounds(), &StubSumKernel);

        assert!(field.values().iter().all(|v| v.is_finite()));
    }
}
