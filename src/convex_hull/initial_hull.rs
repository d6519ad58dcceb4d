use super::{HullFace, HullFaceSet, Orientation};
use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::HashablePoint;

/// Removes duplicate points, keeping the first occurrence of each distinct point in input order.
///
/// Two points are duplicates if they compare equal with `==`. From there on,
/// a hull point is identified by its index in the returned vector.
pub fn intern_points(points: &[Point<Real>]) -> Vec<Point<Real>> {
    let mut seen = HashMap::with_capacity(points.len());
    let mut result = Vec::with_capacity(points.len());

    for pt in points {
        if let Entry::Vacant(e) = seen.entry(HashablePoint::new(pt)) {
            let _ = e.insert(result.len());
            result.push(*pt);
        }
    }

    result
}

/// Builds the two-sided seed hull from the first three points.
///
/// The seed triangle `(0, 1, 2)` yields two coincident faces of opposite
/// orientations. Every remaining point is associated with the face it lies in
/// front of, points exactly on the seed plane going to the face `(0, 1, 2)`.
/// With fewer than three points, the hull is empty.
pub fn build_initial_hull(points: &[Point<Real>], orientation: &impl Orientation) -> HullFaceSet {
    let mut hull = HullFaceSet::new();

    if points.len() < 3 {
        log::debug!(
            "Only {} distinct point(s) given: the hull has no face.",
            points.len()
        );
        return hull;
    }

    let (p0, p1, p2) = (0u32, 1u32, 2u32);
    let mut face1 = HullFace::new(p0, p1, p2);
    let mut face2 = HullFace::new(p2, p1, p0);

    for pid in 3..points.len() as u32 {
        let d = face1.orient_point(&points[pid as usize], points, orientation);

        if d >= 0.0 {
            face1.associate(pid);
        } else {
            face2.associate(pid);
        }
    }

    log::debug!(
        "Seeded hull with {} point(s) in front of {:?} and {} behind.",
        face1.num_associated_points(),
        face1.indices(),
        face2.num_associated_points()
    );

    let _ = hull.insert(face1);
    let _ = hull.insert(face2);
    hull
}
