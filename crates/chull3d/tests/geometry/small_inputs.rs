use chull3d::math::Point;
use chull3d::{ConvexHullSolver, Iteration};

#[test]
fn less_than_three_points_give_an_empty_complete_hull() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];

    for n in 0..3 {
        let mut solver = ConvexHullSolver::new(&points[..n]);
        assert!(solver.is_complete());
        assert!(solver.hull().is_empty());
        assert_eq!(solver.iterate(), Ok(Iteration::Complete));
        assert_eq!(solver.iterate_to_completion(), Ok(0));
        assert!(solver.hull().is_empty());
    }
}

#[test]
fn three_points_give_the_two_seed_faces() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let mut solver = ConvexHullSolver::new(&points);

    assert!(solver.is_complete());
    assert_eq!(solver.hull().len(), 2);
    assert_eq!(solver.num_pending_points(), 0);

    let mut faces = solver.hull().indices();
    faces.sort_unstable();
    assert_eq!(faces, vec![[0, 1, 2], [2, 1, 0]]);

    assert_eq!(solver.iterate(), Ok(Iteration::Complete));
    assert_eq!(solver.hull().len(), 2);
    assert_eq!(solver.validate(), Ok(()));
}

#[test]
fn four_points_give_a_tetrahedron() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let mut solver = ConvexHullSolver::new(&points);
    assert!(!solver.is_complete());
    assert_eq!(solver.iterate_to_completion(), Ok(1));
    assert!(solver.is_complete());

    let (vertices, indices) = solver.vertices_indices();
    assert_eq!(indices.len(), 4);
    assert_eq!(super::num_edges(&indices), 6);
    assert_eq!(vertices.len(), 4);
    for pt in &points {
        assert!(vertices.contains(pt));
    }
    assert_eq!(solver.validate(), Ok(()));
}
