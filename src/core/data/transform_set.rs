use crate::core::data::affine_transform::AffineTransform;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformSetError {
    Empty,
    InvalidProbability { index: usize, probability: f64 },
}

impl fmt::Display for TransformSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "transform set must contain at least one transform"),
            Self::InvalidProbability { index, probability } => {
                write!(
                    f,
                    "transform {} has non-positive probability {}",
                    index, probability
                )
            }
        }
    }
}

impl Error for TransformSetError {}

/// Weighted affine transforms for the chaos game. Probabilities are
/// normalised to sum to 1 and stored as a cumulative table; the final
/// entry is forced to exactly 1.0 so a weighted draw cannot fall off the
/// end.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSet {
    transforms: Vec<AffineTransform>,
    cumulative: Vec<f64>,
}

impl TransformSet {
    pub fn new(weighted: Vec<(AffineTransform, f64)>) -> Result<Self, TransformSetError> {
        if weighted.is_empty() {
            return Err(TransformSetError::Empty);
        }

        for (index, (_, probability)) in weighted.iter().enumerate() {
            if !probability.is_finite() || *probability <= 0.0 {
                return Err(TransformSetError::InvalidProbability {
                    index,
                    probability: *probability,
                });
            }
        }

        let total: f64 = weighted.iter().map(|(_, p)| p).sum();
        let mut transforms = Vec::with_capacity(weighted.len());
        let mut cumulative = Vec::with_capacity(weighted.len());
        let mut running = 0.0;

        for (transform, probability) in weighted {
            running += probability / total;
            transforms.push(transform);
            cumulative.push(running);
        }

        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        Ok(Self {
            transforms,
            cumulative,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    #[must_use]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    #[must_use]
    pub fn apply(&self, index: usize, x: f64, y: f64) -> (f64, f64) {
        self.transforms[index].apply(x, y)
    }
}
