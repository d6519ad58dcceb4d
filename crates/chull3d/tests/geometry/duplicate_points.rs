use chull3d::math::Point;
use chull3d::ConvexHullSolver;

#[test]
fn repeated_points_are_merged() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(1.0, 0.0, 0.0);

    let solver = ConvexHullSolver::new(&[a, a, b, b, a]);
    assert_eq!(solver.points(), &[a, b]);
    assert!(solver.is_complete());
    assert!(solver.hull().is_empty());
}

#[test]
fn repeated_points_do_not_break_the_seed() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(1.0, 0.0, 0.0);
    let c = Point::new(0.0, 1.0, 0.0);
    let d = Point::new(0.0, 0.0, 1.0);

    let mut solver = ConvexHullSolver::try_new(&[a, a, b, a, c, b, d, d, c]).unwrap();
    assert_eq!(solver.points(), &[a, b, c, d]);

    let _ = solver.iterate_to_completion().unwrap();
    assert_eq!(solver.hull().len(), 4);
    assert_eq!(solver.validate(), Ok(()));
}

#[test]
fn signed_zeros_are_the_same_point() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(-0.0, 0.0, -0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];

    let solver = ConvexHullSolver::new(&points);
    assert_eq!(solver.points().len(), 3);
    assert!(solver.is_complete());
    assert_eq!(solver.hull().len(), 2);
}
