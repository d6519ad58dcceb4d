use crate::math::{Point, Real};

/// A point wrapper implementing `Eq` and `Hash` from the exact bit patterns of its coordinates.
///
/// Coordinates are widened to `f64` and negative zeros are folded into positive
/// zeros, so two keys are equal exactly when the wrapped points compare equal
/// with `==`. Points with NaN coordinates are never equal to themselves with
/// `==`; their keys are only equal to keys built from the same bit pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashablePoint([u64; 3]);

impl HashablePoint {
    /// Builds the hashing key of `point`.
    pub fn new(point: &Point<Real>) -> Self {
        HashablePoint([
            Self::coordinate_bits(point.x),
            Self::coordinate_bits(point.y),
            Self::coordinate_bits(point.z),
        ])
    }

    fn coordinate_bits(x: Real) -> u64 {
        // Adding a positive zero turns -0.0 into +0.0 and leaves everything else untouched.
        (f64::from(x) + 0.0).to_bits()
    }
}
