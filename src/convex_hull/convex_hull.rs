use super::{ConvexHullError, ConvexHullSolver};
use crate::math::{Point, Real};

/// Computes the convex hull of a set of 3d points.
///
/// Returns the hull vertices and the outward-oriented triangles indexing them.
/// Less than three distinct points give an empty hull, and coplanar points give
/// a two-sided triangle.
///
/// # Panics
///
/// Panics if the hull could not be patched after absorbing a point, which
/// only happens with corrupted geometry. Use [`try_convex_hull`] to validate
/// the input and get an error instead.
pub fn convex_hull(points: &[Point<Real>]) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let mut solver = ConvexHullSolver::new(points);

    if let Err(err) = solver.iterate_to_completion() {
        panic!("Internal convex hull error: {}", err);
    }

    solver.vertices_indices()
}

/// Computes the convex hull of a set of 3d points, after validating them.
///
/// See [`ConvexHullSolver::try_new`] for the checks performed on the input.
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    let mut solver = ConvexHullSolver::try_new(points)?;
    let _ = solver.iterate_to_completion()?;
    Ok(solver.vertices_indices())
}
