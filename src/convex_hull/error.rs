/// Errors that can occur while building or checking a convex hull.
///
/// The incremental solver itself is total over well-formed input: a seed
/// triangle that is not degenerate and points with finite coordinates. The
/// validated constructor [`ConvexHullSolver::try_new`] reports inputs that
/// break these preconditions, and [`ConvexHullSolver::iterate`] reports any
/// inconsistency detected while patching the hull. None of these are
/// transient: retrying with the same input yields the same error.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use chull3d::{ConvexHullError, ConvexHullSolver};
/// use chull3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0), // Collinear with the two first points.
///     Point::new(0.0, 0.0, 1.0),
/// ];
///
/// match ConvexHullSolver::try_new(&points) {
///     Err(ConvexHullError::DegenerateSeed) => println!("Reorder the input points."),
///     Err(err) => println!("Unexpected error: {}", err),
///     Ok(_) => unreachable!(),
/// }
/// # }
/// ```
///
/// [`ConvexHullSolver::try_new`]: crate::ConvexHullSolver::try_new
/// [`ConvexHullSolver::iterate`]: crate::ConvexHullSolver::iterate
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConvexHullError {
    /// The input point with the given index has a NaN or infinite coordinate.
    #[error("Input point {0} has a non-finite coordinate.")]
    InvalidPoint(usize),

    /// The three points picked to seed the hull are collinear (or coincide).
    ///
    /// The two seed faces would have no well-defined plane, so every other
    /// point would be classified as coplanar with them.
    #[error("The three seed points are affinely dependent.")]
    DegenerateSeed,

    /// The boundary of the faces visible from an absorbed point is not made of closed loops.
    ///
    /// Reports a hull vertex used by an odd number of horizon edges. This means
    /// the current face set is corrupted, and the hole left by the removed faces
    /// cannot be patched.
    #[error("The horizon is not closed around vertex {0}.")]
    OpenHorizon(u32),

    /// An edge of the hull belongs to a single face.
    #[error("Detected unfinished triangle, edge: ({0}, {1})")]
    UnfinishedTriangle(u32, u32),

    /// An edge of the hull belongs to more than two faces.
    ///
    /// The error reports the index (in iteration order) of the face that was
    /// found to be the third one, and the vertex indices of the edge.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),

    /// The two faces sharing an edge traverse it in the same direction.
    #[error("Faces adjacent to edge ({0}, {1}) have inconsistent orientations.")]
    InconsistentOrientation(u32, u32),

    /// A point lies strictly in front of a face of the hull.
    #[error("Point {point} lies in front of the hull face {face:?}.")]
    NotConvex {
        /// The vertex indices of the face.
        face: [u32; 3],
        /// The index of the point outside of the hull.
        point: u32,
    },
}
