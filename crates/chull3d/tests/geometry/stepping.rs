use super::random_ball_points;
use chull3d::{ConvexHullSolver, Iteration};

#[test]
fn pending_points_strictly_decrease() {
    let points = random_ball_points(99, 250, 3.0);
    let mut solver = ConvexHullSolver::new(&points);
    let mut pending = solver.num_pending_points();

    while let Iteration::Absorbed { point, .. } = solver.iterate().unwrap() {
        let now = solver.num_pending_points();
        assert!(now < pending);
        assert!(solver
            .hull()
            .iter()
            .all(|f| !f.associated_points().contains(&point)));
        pending = now;
    }

    assert_eq!(pending, 0);
    assert!(solver.is_complete());
}

#[test]
fn queries_do_not_change_the_solver() {
    let points = random_ball_points(5, 100, 1.0);
    let mut solver = ConvexHullSolver::new(&points);

    for _ in 0..10 {
        let _ = solver.iterate().unwrap();
        let hull = solver.hull().clone();
        let complete = solver.is_complete();

        for _ in 0..3 {
            assert_eq!(solver.hull(), &hull);
            assert_eq!(solver.hull().indices(), hull.indices());
            assert_eq!(solver.is_complete(), complete);
        }
    }
}

#[test]
fn stepping_and_running_to_completion_agree() {
    let points = random_ball_points(11, 150, 2.0);

    let mut stepped = ConvexHullSolver::new(&points);
    for _ in 0..20 {
        let _ = stepped.iterate().unwrap();
    }
    let _ = stepped.iterate_to_completion().unwrap();

    let mut direct = ConvexHullSolver::new(&points);
    let _ = direct.iterate_to_completion().unwrap();

    assert_eq!(stepped.hull(), direct.hull());
    assert_eq!(direct.iterate(), Ok(Iteration::Complete));
    assert_eq!(direct.iterate_to_completion(), Ok(0));
}
