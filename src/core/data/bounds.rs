use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundsError {
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    InvalidSize {
        width: f64,
        height: f64,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "bounds must be finite: x [{}, {}] y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "bounds size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for BoundsError {}

/// Coordinate-space view rectangle. Replaced, never mutated in place:
/// pan/zoom/reset build a new value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, BoundsError> {
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Err(BoundsError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(BoundsError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds bounds from literals known to satisfy the invariants
    /// (finite, min strictly below max). Use [`Bounds::new`] for runtime
    /// values.
    #[must_use]
    pub const fn of(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Same-size bounds shifted by a coordinate-space delta.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max + dx,
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
        }
    }
}
