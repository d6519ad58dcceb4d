//! Incremental construction of 3D convex hulls.
//!
//! The hull is seeded with the two sides of a triangle, then grown one point
//! at a time by [`ConvexHullSolver`]: every point waiting to be absorbed is
//! associated with a face it can see, and absorbing a point replaces all the
//! faces it can see with a fan of faces joining it to their boundary.

pub use self::convex_hull::{convex_hull, try_convex_hull};
pub use self::error::ConvexHullError;
pub use self::face_set::HullFaceSet;
pub use self::hull_edge::HullEdge;
pub use self::hull_face::{FaceKey, HullFace};
pub use self::orientation::{FastOrientation, Orientation, RobustOrientation};
pub use self::solver::{ConvexHullSolver, Iteration};
pub use self::validation::check_convex_hull;

mod convex_hull;
mod error;
mod face_set;
mod hull_edge;
mod hull_face;
mod initial_hull;
mod orientation;
mod solver;
mod validation;
