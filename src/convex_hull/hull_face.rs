use super::{HullEdge, Orientation};
use crate::math::{Point, Real};

/// The rotation-invariant identity of a [`HullFace`].
///
/// This is the face's vertex triple rotated so that its smallest index comes
/// first. The three rotations of a triangle share the same key while its
/// reflection (the same triangle seen from the other side) does not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceKey([u32; 3]);

impl FaceKey {
    /// Computes the key of the oriented triangle `(p0, p1, p2)`.
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        if p0 <= p1 && p0 <= p2 {
            FaceKey([p0, p1, p2])
        } else if p1 <= p0 && p1 <= p2 {
            FaceKey([p1, p2, p0])
        } else {
            FaceKey([p2, p0, p1])
        }
    }

    /// The canonical vertex triple.
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }
}

/// An oriented triangular face of the hull, with the points it conflicts with.
///
/// The outward side of the face `(p0, p1, p2)` is the side where
/// `orient(p2, p1, p0, q)` is positive. Points associated with the face lie
/// outside of the hull on that side and are waiting to be absorbed.
///
/// Faces compare equal when their vertices are equal up to a rotation:
/// `(p0, p1, p2) == (p1, p2, p0) == (p2, p0, p1)`, but `(p0, p1, p2) != (p2, p1, p0)`.
/// Associated points play no part in the comparison.
#[derive(Clone, Debug)]
pub struct HullFace {
    pts: [u32; 3],
    associated_points: Vec<u32>,
}

impl HullFace {
    /// Creates a face with no associated point.
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        HullFace {
            pts: [p0, p1, p2],
            associated_points: Vec::new(),
        }
    }

    /// The first vertex index.
    #[inline]
    pub fn p0(&self) -> u32 {
        self.pts[0]
    }

    /// The second vertex index.
    #[inline]
    pub fn p1(&self) -> u32 {
        self.pts[1]
    }

    /// The third vertex index.
    #[inline]
    pub fn p2(&self) -> u32 {
        self.pts[2]
    }

    /// The three vertex indices, in construction order.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        self.pts
    }

    /// The rotation-invariant identity of this face.
    #[inline]
    pub fn key(&self) -> FaceKey {
        FaceKey::new(self.pts[0], self.pts[1], self.pts[2])
    }

    /// The three vertices of this face, looked up in `points`.
    pub fn vertices(&self, points: &[Point<Real>]) -> [Point<Real>; 3] {
        self.pts.map(|i| points[i as usize])
    }

    /// The three boundary edges `(p0, p1)`, `(p1, p2)`, `(p2, p0)`.
    pub fn edges(&self) -> [HullEdge; 3] {
        [
            HullEdge::new(self.pts[0], self.pts[1]),
            HullEdge::new(self.pts[1], self.pts[2]),
            HullEdge::new(self.pts[2], self.pts[0]),
        ]
    }

    /// Orientation of `point` relative to this face: positive on its outward side.
    #[inline]
    pub fn orient_point(
        &self,
        point: &Point<Real>,
        points: &[Point<Real>],
        orientation: &impl Orientation,
    ) -> f64 {
        orientation.orient(
            &points[self.pts[2] as usize],
            &points[self.pts[1] as usize],
            &points[self.pts[0] as usize],
            point,
        )
    }

    /// Whether `point` lies strictly on the outward side of this face.
    #[inline]
    pub fn can_see_point(
        &self,
        point: &Point<Real>,
        points: &[Point<Real>],
        orientation: &impl Orientation,
    ) -> bool {
        self.orient_point(point, points, orientation) > 0.0
    }

    /// Whether the three vertices of this face are (nearly) collinear.
    ///
    /// The tolerance is on the sine of the angle between the two edges leaving
    /// `p0`, so the result does not depend on the scale of the triangle.
    pub fn is_affinely_dependent(&self, points: &[Point<Real>]) -> bool {
        const EPS: Real = crate::math::DEFAULT_EPSILON * 100.0;

        let [a, b, c] = self.vertices(points);
        let ab = b - a;
        let ac = c - a;
        let scale = ab.norm_squared() * ac.norm_squared();
        abs_diff_eq!(
            ab.cross(&ac).norm_squared(),
            0.0,
            epsilon = EPS * EPS * scale
        )
    }

    /// Associates the point with index `pid` to this face.
    #[inline]
    pub fn associate(&mut self, pid: u32) {
        self.associated_points.push(pid);
    }

    /// The indices of the points associated to this face, in association order.
    #[inline]
    pub fn associated_points(&self) -> &[u32] {
        &self.associated_points
    }

    /// The number of points associated to this face.
    #[inline]
    pub fn num_associated_points(&self) -> usize {
        self.associated_points.len()
    }

    /// Does this face have any point left to absorb?
    #[inline]
    pub fn has_associated_points(&self) -> bool {
        !self.associated_points.is_empty()
    }

    /// Removes the point `pid` from the associated points. Returns `false` if it wasn't associated.
    pub(crate) fn dissociate(&mut self, pid: u32) -> bool {
        match self.associated_points.iter().position(|p| *p == pid) {
            Some(i) => {
                let _ = self.associated_points.remove(i);
                true
            }
            None => false,
        }
    }

    /// Moves all the associated points out of this face.
    pub(crate) fn take_associated_points(&mut self) -> Vec<u32> {
        core::mem::take(&mut self.associated_points)
    }

    /// The associated point furthest from this face on its outward side.
    ///
    /// Distances are ranked with the orientation test itself. When several
    /// points are equally far, the last one wins. Returns `None` if no point is
    /// associated with this face.
    pub fn furthest_point(
        &self,
        points: &[Point<Real>],
        orientation: &impl Orientation,
    ) -> Option<u32> {
        let (first, rest) = self.associated_points.split_first()?;
        let mut furthest = *first;
        let mut furthest_dist = self.orient_point(&points[*first as usize], points, orientation);

        for pid in rest {
            let dist = self.orient_point(&points[*pid as usize], points, orientation);

            if dist >= furthest_dist {
                furthest = *pid;
                furthest_dist = dist;
            }
        }

        Some(furthest)
    }
}

impl PartialEq for HullFace {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HullFace {}

impl core::hash::Hash for HullFace {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}
