use chull3d::math::{Point, Real};
use chull3d::{ConvexHullSolver, Iteration};
use core::f32::consts::{PI, TAU};
use rand::Rng;

const NUM_POINTS: usize = 500;
const RADIUS: Real = 10.0;

/// Uniformly parametrized point in a disc of the `z = 0` plane.
fn point_in_disc(rng: &mut impl Rng, radius: Real) -> Point<Real> {
    let r = rng.gen_range(0.0..radius);
    let theta = rng.gen_range(0.0..TAU);
    Point::new(r * theta.cos(), r * theta.sin(), 0.0)
}

/// Uniformly parametrized point in a ball.
fn point_in_ball(rng: &mut impl Rng, radius: Real) -> Point<Real> {
    let r = rng.gen_range(0.0..radius);
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(0.0..PI);
    Point::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    )
}

fn reset(rng: &mut impl Rng, flat: bool) -> ConvexHullSolver {
    let points: Vec<_> = (0..NUM_POINTS)
        .map(|_| {
            if flat {
                point_in_disc(rng, RADIUS)
            } else {
                point_in_ball(rng, RADIUS)
            }
        })
        .collect();

    ConvexHullSolver::new(&points)
}

fn main() {
    let mut rng = rand::thread_rng();

    for flat in [false, true] {
        let mut solver = reset(&mut rng, flat);
        println!(
            "New {} cloud: {} points, {} pending.",
            if flat { "flat" } else { "round" },
            solver.points().len(),
            solver.num_pending_points()
        );

        // A few single steps first.
        for _ in 0..5 {
            match solver.iterate() {
                Ok(Iteration::Absorbed {
                    point,
                    removed_faces,
                    added_faces,
                }) => println!(
                    "Absorbed point {}: -{} +{} faces, {} faces in total.",
                    point,
                    removed_faces,
                    added_faces,
                    solver.hull().len()
                ),
                Ok(Iteration::Complete) => break,
                Err(e) => {
                    eprintln!("Iteration failed: {}", e);
                    return;
                }
            }
        }

        match solver.iterate_to_completion() {
            Ok(absorbed) => println!(
                "Completed after {} more points: {} faces, valid: {:?}.",
                absorbed,
                solver.hull().len(),
                solver.validate()
            ),
            Err(e) => eprintln!("Iteration failed: {}", e),
        }
    }
}
