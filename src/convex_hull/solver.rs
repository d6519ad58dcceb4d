use super::hull_edge::Horizon;
use super::initial_hull::{build_initial_hull, intern_points};
use super::{
    check_convex_hull, ConvexHullError, HullFace, HullFaceSet, Orientation, RobustOrientation,
};
use crate::math::{Point, Real};
use crate::utils;

/// The outcome of a single [`ConvexHullSolver::iterate`] step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Iteration {
    /// A point was absorbed into the hull.
    Absorbed {
        /// Index of the absorbed point in [`ConvexHullSolver::points`].
        point: u32,
        /// Number of faces removed because the point could see them.
        removed_faces: usize,
        /// Number of faces created to patch the hole.
        added_faces: usize,
    },
    /// No face has associated points left: the hull is complete.
    Complete,
}

/// Incrementally builds the convex hull of a set of 3D points.
///
/// The solver starts from a two-sided seed triangle and every remaining
/// point is associated with a face it lies in front of. Each step takes a face
/// with pending points, absorbs the point furthest from it, removes every
/// face that point can see and patches the hole with faces joining the point
/// to the boundary of the hole (the horizon). The hull is complete once no
/// face has pending points.
///
/// The solver can be driven one step at a time with [`Self::iterate`], and
/// its current faces can be inspected with [`Self::hull`] between steps.
///
/// All orientation decisions are made with the [`Orientation`] implementation
/// `O`, which defaults to the exact [`RobustOrientation`].
#[derive(Clone, Debug)]
pub struct ConvexHullSolver<O: Orientation = RobustOrientation> {
    points: Vec<Point<Real>>,
    hull: HullFaceSet,
    complete: bool,
    orientation: O,
}

impl ConvexHullSolver<RobustOrientation> {
    /// Seeds a solver for the given points, without validating them.
    ///
    /// Duplicate points are merged. If less than three distinct points are
    /// given, the hull has no face and is immediately complete. The seed
    /// triangle is made of the three first distinct points, which must not be
    /// collinear for the result to be meaningful; see [`Self::try_new`] for a
    /// validating version.
    pub fn new(points: &[Point<Real>]) -> Self {
        Self::with_orientation(points, RobustOrientation)
    }

    /// Seeds a solver for the given points after checking they are usable.
    ///
    /// Fails with [`ConvexHullError::InvalidPoint`] if a point has a non-finite
    /// coordinate, and with [`ConvexHullError::DegenerateSeed`] if the three
    /// first distinct points are collinear.
    pub fn try_new(points: &[Point<Real>]) -> Result<Self, ConvexHullError> {
        Self::try_with_orientation(points, RobustOrientation)
    }
}

impl<O: Orientation> ConvexHullSolver<O> {
    /// Seeds a solver using a custom orientation test, without validating the points.
    pub fn with_orientation(points: &[Point<Real>], orientation: O) -> Self {
        let points = intern_points(points);
        let hull = build_initial_hull(&points, &orientation);
        let complete = hull.next_face_to_consider().is_none();

        ConvexHullSolver {
            points,
            hull,
            complete,
            orientation,
        }
    }

    /// Seeds a solver using a custom orientation test, after validating the points.
    pub fn try_with_orientation(
        points: &[Point<Real>],
        orientation: O,
    ) -> Result<Self, ConvexHullError> {
        if let Some(i) = points
            .iter()
            .position(|pt| !pt.coords.iter().all(|x| x.is_finite()))
        {
            return Err(ConvexHullError::InvalidPoint(i));
        }

        let solver = Self::with_orientation(points, orientation);

        if solver.points.len() >= 3 && HullFace::new(0, 1, 2).is_affinely_dependent(&solver.points)
        {
            return Err(ConvexHullError::DegenerateSeed);
        }

        Ok(solver)
    }

    /// The distinct input points. Hull faces refer to points by their index in this slice.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The faces of the hull, as built so far.
    #[inline]
    pub fn hull(&self) -> &HullFaceSet {
        &self.hull
    }

    /// Whether the hull is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The orientation test used by this solver.
    #[inline]
    pub fn orientation(&self) -> &O {
        &self.orientation
    }

    /// The number of points still waiting to be absorbed or discarded.
    pub fn num_pending_points(&self) -> usize {
        self.hull.num_associated_points()
    }

    /// The three vertices of one of the hull faces.
    pub fn face_vertices(&self, face: &HullFace) -> [Point<Real>; 3] {
        face.vertices(&self.points)
    }

    /// The current hull as a triangle mesh referencing only the hull vertices.
    pub fn vertices_indices(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let mut vertices = self.points.clone();
        let mut indices = self.hull.indices();
        utils::remove_unused_points(&mut vertices, &mut indices);
        (vertices, indices)
    }

    /// Checks that the current hull is closed, consistently oriented, and encloses every input point.
    ///
    /// This only holds once the hull is complete.
    pub fn validate(&self) -> Result<(), ConvexHullError> {
        check_convex_hull(&self.points, &self.hull.indices(), &self.orientation)
    }

    /// Advances the hull by absorbing one point.
    ///
    /// Absorbs the point given by [`HullFaceSet::next_point_to_absorb`]: the
    /// furthest point of the first face that strictly sees its own, falling
    /// back to points lying on the plane of their face. If no face has
    /// associated points, the solver is marked complete. Calling this on a
    /// complete solver does nothing.
    pub fn iterate(&mut self) -> Result<Iteration, ConvexHullError> {
        if self.complete {
            return Ok(Iteration::Complete);
        }

        let next = self
            .hull
            .next_point_to_absorb(&self.points, &self.orientation);

        let Some((face_key, point)) = next else {
            log::debug!("Convex hull complete with {} faces.", self.hull.len());
            self.complete = true;
            return Ok(Iteration::Complete);
        };

        // The point leaves its face even if it turns out to see no face at all.
        if let Some(face) = self.hull.get_mut(&face_key) {
            let _ = face.dissociate(point);
        }

        let (removed_faces, added_faces) = self.add_point_to_hull(point)?;

        Ok(Iteration::Absorbed {
            point,
            removed_faces,
            added_faces,
        })
    }

    /// Iterates until the hull is complete. Returns the number of absorbed points.
    pub fn iterate_to_completion(&mut self) -> Result<usize, ConvexHullError> {
        let mut absorbed = 0;

        while let Iteration::Absorbed { .. } = self.iterate()? {
            absorbed += 1;
        }

        Ok(absorbed)
    }

    fn add_point_to_hull(&mut self, point: u32) -> Result<(usize, usize), ConvexHullError> {
        let pt = self.points[point as usize];
        let mut horizon = Horizon::new();
        let mut candidates = Vec::new();
        let mut visible_faces = Vec::new();

        for face in self.hull.iter() {
            if face.can_see_point(&pt, &self.points, &self.orientation) {
                candidates.extend_from_slice(face.associated_points());

                for edge in face.edges() {
                    let _ = horizon.toggle(edge);
                }

                visible_faces.push(face.key());
            }
        }

        if let Some(vertex) = horizon.find_open_vertex() {
            return Err(ConvexHullError::OpenHorizon(vertex));
        }

        if visible_faces.is_empty() {
            log::debug!(
                "Point {} lies on the hull boundary and sees no face: discarded.",
                point
            );
            return Ok((0, 0));
        }

        self.hull.remove_all(&visible_faces);
        let added = self.add_faces(point, &horizon, candidates);

        Ok((visible_faces.len(), added))
    }

    /// Joins `point` to every horizon edge and hands the candidate points over to the new faces.
    fn add_faces(&mut self, point: u32, horizon: &Horizon, mut candidates: Vec<u32>) -> usize {
        candidates.retain(|pid| *pid != point);

        log::trace!(
            "Patching around point {} along {} horizon edges: {:?}",
            point,
            horizon.len(),
            horizon.iter().map(|e| [e.p0(), e.p1()]).collect::<Vec<_>>()
        );

        let num_candidates = candidates.len();
        let mut added = 0;

        for edge in horizon.iter() {
            let mut face = HullFace::new(edge.p0(), edge.p1(), point);

            // First fit: a point goes to the first new face it is in front of.
            candidates.retain(|pid| {
                if face.can_see_point(&self.points[*pid as usize], &self.points, &self.orientation) {
                    face.associate(*pid);
                    false
                } else {
                    true
                }
            });

            if self.hull.insert(face) {
                added += 1;
            } else {
                log::debug!(
                    "Face {:?} is already part of the hull.",
                    [edge.p0(), edge.p1(), point]
                );
            }
        }

        // Whatever is left is now inside the hull.
        log::debug!(
            "Absorbed point {}: {} new faces, {} of {} candidate points enclosed.",
            point,
            added,
            candidates.len(),
            num_candidates
        );

        added
    }
}
