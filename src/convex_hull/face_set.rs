use super::hull_face::FaceKey;
use super::{HullFace, Orientation};
use crate::math::{Point, Real};
use crate::utils::hashmap::{HashSet, IndexMap};
use indexmap::map::Entry;

/// The set of faces making up the boundary of a hull.
///
/// Faces are unique up to the rotation of their vertices (see [`HullFace`]).
/// Iteration follows insertion order, so a given sequence of insertions and
/// removals always enumerates the faces the same way. Equality between two
/// sets ignores that order.
#[derive(Clone, Debug, Default)]
pub struct HullFaceSet {
    faces: IndexMap<FaceKey, HullFace>,
}

impl HullFaceSet {
    /// Creates an empty face set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Does this set contain no face?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Inserts a face.
    ///
    /// Returns `false`, and leaves the set unchanged, if an equal face is already present.
    pub fn insert(&mut self, face: HullFace) -> bool {
        match self.faces.entry(face.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                let _ = e.insert(face);
                true
            }
        }
    }

    /// Removes the face equal to `face`, if any.
    pub fn remove(&mut self, face: &HullFace) -> Option<HullFace> {
        self.faces.shift_remove(&face.key())
    }

    /// Removes every face whose key is in `keys`, keeping the relative order of the others.
    pub(crate) fn remove_all(&mut self, keys: &[FaceKey]) {
        let keys: HashSet<FaceKey> = keys.iter().copied().collect();
        self.faces.retain(|k, _| !keys.contains(k));
    }

    /// Does this set contain a face equal to `face`?
    #[inline]
    pub fn contains(&self, face: &HullFace) -> bool {
        self.faces.contains_key(&face.key())
    }

    /// The face with the given key.
    #[inline]
    pub fn get(&self, key: &FaceKey) -> Option<&HullFace> {
        self.faces.get(key)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: &FaceKey) -> Option<&mut HullFace> {
        self.faces.get_mut(key)
    }

    /// Iterates over the faces, in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &HullFace> {
        self.faces.values()
    }

    /// The first face, in insertion order, that still has associated points.
    pub fn next_face_to_consider(&self) -> Option<&HullFace> {
        self.iter().find(|f| f.has_associated_points())
    }

    /// The next point to absorb, with the face it is associated with.
    ///
    /// This is the furthest point of the first face, in insertion order, whose
    /// furthest point lies strictly in front of it. Points lying on the plane
    /// of their face are only considered once no such face is left: the hull
    /// may by then have grown faces they can see.
    pub fn next_point_to_absorb(
        &self,
        points: &[Point<Real>],
        orientation: &impl Orientation,
    ) -> Option<(FaceKey, u32)> {
        let mut on_plane = None;

        for face in self.iter() {
            let Some(pid) = face.furthest_point(points, orientation) else {
                continue;
            };

            if face.can_see_point(&points[pid as usize], points, orientation) {
                return Some((face.key(), pid));
            }

            if on_plane.is_none() {
                on_plane = Some((face.key(), pid));
            }
        }

        on_plane
    }

    /// The total number of points associated with the faces of this set.
    pub fn num_associated_points(&self) -> usize {
        self.iter().map(|f| f.num_associated_points()).sum()
    }

    /// The vertex indices of every face, in insertion order.
    pub fn indices(&self) -> Vec<[u32; 3]> {
        self.iter().map(|f| f.indices()).collect()
    }
}

impl PartialEq for HullFaceSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.faces.keys().all(|k| other.faces.contains_key(k))
    }
}

impl Eq for HullFaceSet {}

impl<'a> IntoIterator for &'a HullFaceSet {
    type Item = &'a HullFace;
    type IntoIter = indexmap::map::Values<'a, FaceKey, HullFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.values()
    }
}

impl FromIterator<HullFace> for HullFaceSet {
    fn from_iter<I: IntoIterator<Item = HullFace>>(iter: I) -> Self {
        let mut set = HullFaceSet::new();
        for face in iter {
            let _ = set.insert(face);
        }
        set
    }
}
