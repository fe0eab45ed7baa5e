#[macro_use]
extern crate approx; // for relative_eq!

use polygjk3d::math::{Point, Real, Vector};
use polygjk3d::query;
use polygjk3d::shape::PointSet;

fn cube_vertices(center: Vector<Real>) -> [Point<Real>; 8] {
    [
        Point::new(-1.0, -1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(1.0, -1.0, 1.0),
        Point::new(1.0, 1.0, -1.0),
        Point::new(1.0, 1.0, 1.0),
    ]
    .map(|pt| pt + center)
}

fn main() {
    let cube = cube_vertices(Vector::zeros());
    let cube_intersecting = cube_vertices(Vector::new(0.0, 1.0, 0.0));
    let cube_disjoint = cube_vertices(Vector::new(0.0, 3.0, 0.0));

    let shape = PointSet::new(&cube).unwrap();
    let shape_intersecting = PointSet::new(&cube_intersecting).unwrap();
    let shape_disjoint = PointSet::new(&cube_disjoint).unwrap();

    let dist_intersecting = query::distance(&shape_intersecting, &shape).unwrap();
    let dist_disjoint = query::distance(&shape_disjoint, &shape).unwrap();

    assert_eq!(dist_intersecting, 0.0);
    assert!(relative_eq!(dist_disjoint, 1.0, epsilon = 1.0e-6));
}
