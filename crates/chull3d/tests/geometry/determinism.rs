use super::random_ball_points;
use chull3d::{ConvexHullSolver, FastOrientation, Iteration};

#[test]
fn identical_inputs_give_identical_hulls() {
    let points = random_ball_points(42, 500, 5.0);

    let mut solver1 = ConvexHullSolver::new(&points);
    let mut solver2 = ConvexHullSolver::new(&points);
    let _ = solver1.iterate_to_completion().unwrap();
    let _ = solver2.iterate_to_completion().unwrap();

    assert_eq!(solver1.hull(), solver2.hull());
    assert_eq!(solver1.hull().indices(), solver2.hull().indices());
}

#[test]
fn identical_inputs_absorb_points_in_the_same_order() {
    let points = random_ball_points(7, 200, 1.0);

    let steps = |mut solver: ConvexHullSolver| {
        let mut steps = Vec::new();
        loop {
            let step = solver.iterate().unwrap();
            steps.push(step);
            if step == Iteration::Complete {
                return steps;
            }
        }
    };

    assert_eq!(
        steps(ConvexHullSolver::new(&points)),
        steps(ConvexHullSolver::new(&points))
    );
}

#[test]
fn orientation_predicates_agree_on_well_spread_clouds() {
    let points = random_ball_points(1234, 60, 100.0);

    let mut robust = ConvexHullSolver::new(&points);
    let mut fast = ConvexHullSolver::with_orientation(&points, FastOrientation);
    let _ = robust.iterate_to_completion().unwrap();
    let _ = fast.iterate_to_completion().unwrap();

    assert_eq!(robust.hull(), fast.hull());
}
