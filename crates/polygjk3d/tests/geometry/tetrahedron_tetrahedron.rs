use approx::assert_relative_eq;
use polygjk3d::math::{Point, Real, Vector};
use polygjk3d::query::{self, ClosestFeature, GJKResult};
use polygjk3d::shape::PointSet;

fn tetrahedron(shift: Vector<Real>) -> [Point<Real>; 4] {
    [
        Point::new(-1.0, 1.0, -1.0) + shift,
        Point::new(1.0, 1.0, -1.0) + shift,
        Point::new(0.0, -1.0, -1.0) + shift,
        Point::new(0.0, 0.0, 1.0) + shift,
    ]
}

#[test]
fn distant_tetrahedra_do_not_overlap() {
    let pts1 = tetrahedron(Vector::x() * 10.0);
    let pts2 = tetrahedron(Vector::zeros());
    let g1 = PointSet::new(&pts1).unwrap();
    let g2 = PointSet::new(&pts2).unwrap();

    assert!(!query::query_overlap(&g1, &g2).unwrap());
    assert!(!query::query_overlap(&g2, &g1).unwrap());

    let res = query::query_distance(&g1, &g2).unwrap();
    let sep = res.separation().expect("The tetrahedra should be disjoint.");
    assert_relative_eq!(sep.distance, 8.0, epsilon = 1.0e-3);
    assert_relative_eq!(sep.distance, (sep.point1 - sep.point2).norm());
    assert_eq!(sep.feature1, ClosestFeature::Vertex(Point::new(9.0, 1.0, -1.0)));
    assert_eq!(sep.feature2, ClosestFeature::Vertex(Point::new(1.0, 1.0, -1.0)));
    assert_relative_eq!(
        sep.normal().unwrap().into_inner(),
        -Vector::x(),
        epsilon = 1.0e-5
    );

    assert_relative_eq!(query::distance(&g1, &g2).unwrap(), 8.0, epsilon = 1.0e-3);
    assert_relative_eq!(query::distance(&g2, &g1).unwrap(), 8.0, epsilon = 1.0e-3);
}

#[test]
fn identical_tetrahedra_overlap() {
    let pts = tetrahedron(Vector::zeros());
    let g = PointSet::new(&pts).unwrap();

    assert!(query::query_overlap(&g, &g).unwrap());
    assert_eq!(query::query_distance(&g, &g), Ok(GJKResult::Intersection));
    assert_eq!(query::distance(&g, &g), Ok(0.0));
}

#[test]
fn tetrahedra_touching_at_a_vertex_overlap() {
    // Both tetrahedra share the vertex (1, 1, -1).
    let pts1 = tetrahedron(Vector::zeros());
    let pts2 = tetrahedron(Vector::x() * 2.0);
    let g1 = PointSet::new(&pts1).unwrap();
    let g2 = PointSet::new(&pts2).unwrap();

    let res = query::query_distance(&g1, &g2).unwrap();
    assert!(res.is_intersection());
    assert!(res.separation().is_none());
    assert!(query::query_overlap(&g1, &g2).unwrap());
}

#[test]
fn tetrahedra_separated_along_z() {
    let pts1 = tetrahedron(Vector::zeros());
    let pts2 = tetrahedron(Vector::z() * 5.0);
    let g1 = PointSet::new(&pts1).unwrap();
    let g2 = PointSet::new(&pts2).unwrap();

    // The apex of the first tetrahedron faces the base of the second one.
    let sep = *query::query_distance(&g1, &g2)
        .unwrap()
        .separation()
        .unwrap();
    assert_relative_eq!(sep.distance, 3.0, epsilon = 1.0e-4);
    assert_relative_eq!(sep.point1, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-4);
    assert_relative_eq!(sep.point2, Point::new(0.0, 0.0, 4.0), epsilon = 1.0e-4);
    assert_eq!(sep.feature1, ClosestFeature::Vertex(Point::new(0.0, 0.0, 1.0)));
    assert_eq!(sep.feature2.num_vertices(), 3);

    for pt in sep.feature1.vertices() {
        assert!(g1.contains_vertex(pt));
    }
    for pt in sep.feature2.vertices() {
        assert!(g2.contains_vertex(pt));
    }
    assert!(!query::query_overlap(&g1, &g2).unwrap());
}
