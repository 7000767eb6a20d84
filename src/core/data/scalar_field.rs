use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScalarFieldError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ScalarFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "scalar field expects {} values, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for ScalarFieldError {}

/// Row-major height×width grid of scalar values produced by a kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    resolution: Resolution,
    values: Vec<f32>,
}

impl ScalarField {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            values: vec![0.0; resolution.pixel_count()],
        }
    }

    pub fn from_values(
        resolution: Resolution,
        values: Vec<f32>,
    ) -> Result<Self, ScalarFieldError> {
        if values.len() != resolution.pixel_count() {
            return Err(ScalarFieldError::SizeMismatch {
                expected: resolution.pixel_count(),
                actual: values.len(),
            });
        }

        Ok(Self { resolution, values })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    #[must_use]
    pub fn value_at(&self, x: u32, y: u32) -> f32 {
        self.values[y as usize * self.resolution.width() as usize + x as usize]
    }

    /// Adds weight into one cell; callers guarantee (x, y) is on the grid.
    pub(crate) fn deposit(&mut self, x: u32, y: u32, weight: f32) {
        self.values[y as usize * self.resolution.width() as usize + x as usize] += weight;
    }

    #[must_use]
    pub fn min_max(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for &value in &self.values {
            min = min.min(value);
            max = max.max(value);
        }

        (min, max)
    }

    /// Sum of all cells, in f64 to avoid drift on large grids.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().map(|&v| f64::from(v)).sum()
    }
}
