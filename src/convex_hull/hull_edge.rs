use crate::utils::hashmap::IndexMap;
use crate::utils::SortedPair;

/// A segment joining two hull vertices, identified by their indices.
///
/// Edges are undirected: `HullEdge::new(a, b) == HullEdge::new(b, a)`. The two
/// faces sharing an edge enumerate it in opposite orders, and both must map
/// to the same edge. The order the points were given in is still recorded
/// and used to orient the faces built from the edge.
#[derive(Copy, Clone, Debug)]
pub struct HullEdge {
    pts: [u32; 2],
}

impl HullEdge {
    /// Creates the edge going from the point `p0` to the point `p1`.
    #[inline]
    pub fn new(p0: u32, p1: u32) -> Self {
        Self { pts: [p0, p1] }
    }

    /// The first point of this edge, in the order it was built with.
    #[inline]
    pub fn p0(&self) -> u32 {
        self.pts[0]
    }

    /// The second point of this edge, in the order it was built with.
    #[inline]
    pub fn p1(&self) -> u32 {
        self.pts[1]
    }

    /// The canonical, order-independent key of this edge.
    #[inline]
    pub fn key(&self) -> SortedPair<u32> {
        SortedPair::new(self.pts[0], self.pts[1])
    }
}

impl PartialEq for HullEdge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HullEdge {}

impl core::hash::Hash for HullEdge {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

/// Edges bounding the union of a set of faces.
///
/// Edges are folded in with [`Self::toggle`]: an edge seen for the second
/// time is shared by two faces of the set and is removed. Once every face has
/// been folded in, only the boundary remains.
#[derive(Clone, Debug, Default)]
pub(crate) struct Horizon {
    edges: IndexMap<SortedPair<u32>, HullEdge>,
}

impl Horizon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `edge` if it is not part of the horizon yet, removes it otherwise.
    ///
    /// Returns `true` if the edge was added.
    pub fn toggle(&mut self, edge: HullEdge) -> bool {
        let key = edge.key();

        if self.edges.shift_remove(&key).is_some() {
            false
        } else {
            let _ = self.edges.insert(key, edge);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// The horizon edges, in the order they were first encountered and oriented
    /// as in the face that contributed them.
    pub fn iter(&self) -> impl Iterator<Item = &HullEdge> {
        self.edges.values()
    }

    /// Finds a vertex that belongs to an odd number of horizon edges.
    ///
    /// A horizon without such vertex is a union of closed loops.
    pub fn find_open_vertex(&self) -> Option<u32> {
        let mut degrees: IndexMap<u32, usize> = IndexMap::default();

        for edge in self.edges.values() {
            *degrees.entry(edge.p0()).or_insert(0) += 1;
            *degrees.entry(edge.p1()).or_insert(0) += 1;
        }

        degrees
            .into_iter()
            .find(|(_, degree)| degree % 2 != 0)
            .map(|(vertex, _)| vertex)
    }
}
