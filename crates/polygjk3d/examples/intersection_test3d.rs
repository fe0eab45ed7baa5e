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
    let cube_intersecting = cube_vertices(Vector::new(1.0, 1.0, 1.0));
    let cube_disjoint = cube_vertices(Vector::new(3.0, 3.0, 3.0));

    let shape = PointSet::new(&cube).unwrap();
    let shape_intersecting = PointSet::new(&cube_intersecting).unwrap();
    let shape_disjoint = PointSet::new(&cube_disjoint).unwrap();

    let intersecting = query::query_overlap(&shape_intersecting, &shape).unwrap();
    let not_intersecting = !query::query_overlap(&shape_disjoint, &shape).unwrap();

    assert!(intersecting);
    assert!(not_intersecting);
}
