use chull3d::math::Point;
use chull3d::utils::SortedPair;
use chull3d::{check_convex_hull, ConvexHullSolver, HullFace, RobustOrientation};

#[test]
fn inner_point_is_never_part_of_the_hull() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(1.0, 0.0, 0.0);
    let c = Point::new(0.0, 1.0, 0.0);
    let d = Point::new(0.0, 0.0, 1.0);
    let e = Point::new(0.1, 0.1, 0.1);

    let mut solver = ConvexHullSolver::new(&[a, b, c, d, e]);
    let _ = solver.iterate_to_completion().unwrap();

    let hull = solver.hull();
    assert_eq!(hull.len(), 4);

    // The faces of ABCD, seen counterclockwise from outside.
    for face in [
        HullFace::new(2, 1, 0),
        HullFace::new(0, 1, 3),
        HullFace::new(1, 2, 3),
        HullFace::new(2, 0, 3),
    ] {
        assert!(hull.contains(&face), "missing face {:?}", face.indices());
    }

    for face in hull {
        assert!(!face.indices().contains(&4));
        assert!(!face.has_associated_points());
    }

    assert_eq!(solver.validate(), Ok(()));
}

#[test]
fn every_edge_is_shared_by_exactly_two_faces() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(0.2, 0.3, 0.1),
    ];
    let mut solver = ConvexHullSolver::new(&points);
    let _ = solver.iterate_to_completion().unwrap();

    let mut counts = std::collections::HashMap::new();
    for face in solver.hull() {
        for edge in face.edges() {
            *counts.entry(SortedPair::new(edge.p0(), edge.p1())).or_insert(0) += 1;
        }
    }

    assert!(counts.values().all(|n| *n == 2));
    assert_eq!(
        check_convex_hull(solver.points(), &solver.hull().indices(), &RobustOrientation),
        Ok(())
    );
}
