use super::{ConvexHullError, HullFace, Orientation};
use crate::math::{Point, Real};
use crate::utils::hashmap::IndexMap;
use crate::utils::SortedPair;
use indexmap::map::Entry;

/// Checks if a convex-hull is properly formed.
///
/// The hull given by `triangles` (indices into `points`, outward side as
/// defined by [`HullFace`]) must be:
/// - closed: every edge is shared by exactly two triangles;
/// - consistently oriented: those two triangles traverse the edge in opposite directions;
/// - convex and enclosing: no point of `points` lies strictly in front of any triangle.
pub fn check_convex_hull(
    points: &[Point<Real>],
    triangles: &[[u32; 3]],
    orientation: &impl Orientation,
) -> Result<(), ConvexHullError> {
    struct EdgeData {
        // The first triangle and the direction it traverses the edge in.
        first: (usize, [u32; 2]),
        second: Option<usize>,
    }

    let mut edges: IndexMap<SortedPair<u32>, EdgeData> = IndexMap::default();

    for (itri, tri) in triangles.iter().enumerate() {
        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];

            match edges.entry(SortedPair::new(ivtx1, ivtx2)) {
                Entry::Vacant(e) => {
                    let _ = e.insert(EdgeData {
                        first: (itri, [ivtx1, ivtx2]),
                        second: None,
                    });
                }
                Entry::Occupied(mut e) => {
                    if e.get().second.is_some() {
                        return Err(ConvexHullError::TJunction(itri, ivtx1, ivtx2));
                    }

                    if e.get().first.1 == [ivtx1, ivtx2] {
                        return Err(ConvexHullError::InconsistentOrientation(ivtx1, ivtx2));
                    }

                    e.get_mut().second = Some(itri);
                }
            }
        }
    }

    for data in edges.values() {
        if data.second.is_none() {
            let [a, b] = data.first.1;
            return Err(ConvexHullError::UnfinishedTriangle(a, b));
        }
    }

    for tri in triangles {
        let face = HullFace::new(tri[0], tri[1], tri[2]);

        for (ipt, pt) in points.iter().enumerate() {
            if face.can_see_point(pt, points, orientation) {
                return Err(ConvexHullError::NotConvex {
                    face: *tri,
                    point: ipt as u32,
                });
            }
        }
    }

    Ok(())
}
