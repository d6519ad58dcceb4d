use crate::math::{Point, Real};
use robust::Coord3D;

/// The orientation (signed volume) test the hull solver is built upon.
///
/// `orient(a, b, c, d)` must be positive when `d` lies on the side of the plane
/// through `a`, `b`, `c` from which these three points appear in clockwise
/// order, negative on the other side, and zero when the four points are
/// coplanar. For a fixed `a`, `b`, `c`, its magnitude must grow monotonically
/// with the distance from `d` to that plane since it is used to rank points
/// by distance.
///
/// Every orientation decision of the solver goes through a single
/// implementation of this trait, so any implementation with a consistent sign
/// convention yields a valid hull.
pub trait Orientation {
    /// Computes the orientation of `d` relative to the plane through `a`, `b`, `c`.
    fn orient(&self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> f64;
}

/// Orientation test with an exact sign, based on Shewchuk's adaptive `orient3d` predicate.
///
/// The returned value is six times the signed volume of the tetrahedron `abcd`,
/// computed with just enough precision to make its sign exact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RobustOrientation;

impl Orientation for RobustOrientation {
    #[inline]
    fn orient(&self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> f64 {
        robust::orient3d(coord(a), coord(b), coord(c), coord(d))
    }
}

/// Orientation test evaluating the determinant with plain floating-point arithmetic.
///
/// Faster than [`RobustOrientation`], but its sign is unreliable for nearly
/// coplanar inputs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FastOrientation;

impl Orientation for FastOrientation {
    #[inline]
    fn orient(&self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> f64 {
        let ad = a - d;
        let bd = b - d;
        let cd = c - d;
        f64::from(ad.dot(&bd.cross(&cd)))
    }
}

impl<O: Orientation + ?Sized> Orientation for &O {
    #[inline]
    fn orient(&self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> f64 {
        (**self).orient(a, b, c, d)
    }
}

#[inline]
fn coord(p: &Point<Real>) -> Coord3D<Real> {
    Coord3D {
        x: p.x,
        y: p.y,
        z: p.z,
    }
}
