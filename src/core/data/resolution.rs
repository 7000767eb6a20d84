use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "resolution must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Canvas size in pixels. Both dimensions are at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: i32, height: i32) -> Result<Self, ResolutionError> {
        if width < 1 || height < 1 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reduced resolution for a progressive ladder level, never below 1x1.
    #[must_use]
    pub fn scaled_down(&self, factor: u32) -> Self {
        let factor = factor.max(1);

        Self {
            width: (self.width / factor).max(1),
            height: (self.height / factor).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_new_valid() {
        let resolution = Resolution::new(800, 600).unwrap();

        assert_eq!(resolution.width(), 800);
        assert_eq!(resolution.height(), 600);
        assert_eq!(resolution.pixel_count(), 480_000);
    }

    #[test]
    fn test_resolution_dimensions_must_be_positive() {
        assert_eq!(
            Resolution::new(0, 600),
            Err(ResolutionError::InvalidSize {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            Resolution::new(800, -1),
            Err(ResolutionError::InvalidSize {
                width: 800,
                height: -1
            })
        );
    }

    #[test]
    fn test_scaled_down() {
        let resolution = Resolution::new(800, 600).unwrap();
        let reduced = resolution.scaled_down(8);

        assert_eq!(reduced.width(), 100);
        assert_eq!(reduced.height(), 75);
    }

    #[test]
    fn test_scaled_down_never_collapses_to_zero() {
        let resolution = Resolution::new(3, 2).unwrap();
        let reduced = resolution.scaled_down(8);

        assert_eq!(reduced.width(), 1);
        assert_eq!(reduced.height(), 1);
    }
}
