use crate::core::data::complex::Complex;

/// Per-pixel scalar computation over the coordinate plane. Configuration
/// errors are rejected at kernel construction, so evaluation itself is
/// infallible and free of shared mutable state.
pub trait PixelKernel: Sync {
    fn value_at(&self, coord: Complex) -> f32;
}
