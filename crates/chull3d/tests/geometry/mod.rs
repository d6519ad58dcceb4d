use chull3d::math::{Point, Real};
use oorandom::Rand32;

mod determinism;
mod duplicate_points;
mod small_inputs;
mod stepping;
mod tetrahedron;

/// Uniformly parametrized points in a ball of the given radius.
pub fn random_ball_points(seed: u64, count: usize, radius: Real) -> Vec<Point<Real>> {
    let mut rng = Rand32::new(seed);
    (0..count)
        .map(|_| {
            let r = rng.rand_float() as Real * radius;
            let theta = rng.rand_float() as Real * core::f64::consts::TAU as Real;
            let phi = rng.rand_float() as Real * core::f64::consts::PI as Real;
            Point::new(
                r * theta.cos() * phi.sin(),
                r * theta.sin() * phi.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}

/// Uniformly parametrized points in a disc of the given radius, in the `z = 0` plane.
pub fn random_disc_points(seed: u64, count: usize, radius: Real) -> Vec<Point<Real>> {
    let mut rng = Rand32::new(seed);
    (0..count)
        .map(|_| {
            let r = rng.rand_float() as Real * radius;
            let theta = rng.rand_float() as Real * core::f64::consts::TAU as Real;
            Point::new(r * theta.cos(), r * theta.sin(), 0.0)
        })
        .collect()
}

/// Number of distinct undirected edges of a triangle list.
pub fn num_edges(indices: &[[u32; 3]]) -> usize {
    let mut edges: Vec<_> = indices
        .iter()
        .flat_map(|t| [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])])
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges.len()
}
