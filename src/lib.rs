/*!
chull3d
========

**chull3d** computes the convex hull of a 3-dimensional point set with an
incremental face-conflict algorithm that can be driven one step at a time.

```
# #[cfg(feature = "f32")] {
use chull3d::math::Point;
use chull3d::ConvexHullSolver;

let points = vec![
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
    Point::new(0.1, 0.1, 0.1),
];

let mut solver = ConvexHullSolver::new(&points);
solver.iterate_to_completion().unwrap();

assert!(solver.is_complete());
assert_eq!(solver.hull().len(), 4);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod convex_hull;
pub mod utils;

pub use self::convex_hull::{
    check_convex_hull, convex_hull, try_convex_hull, ConvexHullError, ConvexHullSolver,
    FastOrientation, HullEdge, HullFace, HullFaceSet, Iteration, Orientation, RobustOrientation,
};

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
