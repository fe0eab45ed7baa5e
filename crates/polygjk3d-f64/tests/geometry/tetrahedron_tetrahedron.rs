use approx::assert_relative_eq;
use polygjk3d_f64::math::{Point, Real, Vector};
use polygjk3d_f64::query::{self, ClosestFeature, GjkOptions};
use polygjk3d_f64::shape::PointSet;

fn tetrahedron(shift: Vector<Real>) -> [Point<Real>; 4] {
    [
        Point::new(-1.0, 1.0, -1.0) + shift,
        Point::new(1.0, 1.0, -1.0) + shift,
        Point::new(0.0, -1.0, -1.0) + shift,
        Point::new(0.0, 0.0, 1.0) + shift,
    ]
}

#[test]
fn distant_tetrahedra_f64() {
    let pts1 = tetrahedron(Vector::x() * 10.0);
    let pts2 = tetrahedron(Vector::zeros());
    let g1 = PointSet::new(&pts1).unwrap();
    let g2 = PointSet::new(&pts2).unwrap();

    let sep = *query::query_distance(&g1, &g2)
        .unwrap()
        .separation()
        .unwrap();
    assert_relative_eq!(sep.distance, 8.0, epsilon = 1.0e-12);
    assert_eq!(sep.feature1, ClosestFeature::Vertex(pts1[0]));
    assert_eq!(sep.feature2, ClosestFeature::Vertex(pts2[1]));
    assert!(!query::query_overlap(&g1, &g2).unwrap());
}

#[test]
fn point_near_an_edge_f64() {
    let tetra = [
        Point::origin(),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let pt = [Point::new(0.5, -1.0e-6, -1.0e-6)];
    let g1 = PointSet::new(&tetra).unwrap();
    let g2 = PointSet::new(&pt).unwrap();

    let dist = query::distance(&g1, &g2).unwrap();
    assert_relative_eq!(dist, 1.0e-6 * (2.0 as Real).sqrt(), max_relative = 1.0e-6);

    // Touching with the default epsilon, disjoint with a tighter one.
    assert!(query::query_overlap(&g1, &g2).unwrap());
    let options = GjkOptions {
        epsilon: 1.0e-9,
        ..GjkOptions::default()
    };
    assert!(!query::query_overlap_with_options(&g1, &g2, &options).unwrap());
    assert!(!query::query_overlap_with_options(&g2, &g1, &options).unwrap());
}

#[test]
fn overlapping_tetrahedra_f64() {
    let pts1 = tetrahedron(Vector::new(0.25, 0.1, 0.0));
    let pts2 = tetrahedron(Vector::zeros());
    let g1 = PointSet::new(&pts1).unwrap();
    let g2 = PointSet::new(&pts2).unwrap();

    assert!(query::query_overlap(&g1, &g2).unwrap());
    assert!(query::query_overlap(&g2, &g1).unwrap());
    assert_eq!(query::distance(&g1, &g2), Ok(0.0));
}
