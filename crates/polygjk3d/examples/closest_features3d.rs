use polygjk3d::math::Point;
use polygjk3d::query::{self, GJKResult};
use polygjk3d::shape::PointSet;

fn main() {
    let triangle = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(0.0, 4.0, 0.0),
    ];
    // A segment above the hypotenuse of the triangle.
    let segment = [Point::new(-1.0, 6.0, 1.0), Point::new(6.0, -1.0, 1.0)];

    let shape1 = PointSet::new(&triangle).unwrap();
    let shape2 = PointSet::new(&segment).unwrap();

    match query::query_distance(&shape1, &shape2).unwrap() {
        GJKResult::Intersection => println!("The shapes are intersecting."),
        GJKResult::ClosestPoints(sep) => {
            println!("Distance: {}", sep.distance);
            println!("Closest point on shape 1: {}", sep.point1);
            println!("Closest point on shape 2: {}", sep.point2);
            println!(
                "Feature of shape 1: {:?} ({} of {} vertices)",
                sep.feature1.vertices(),
                sep.feature1.num_vertices(),
                shape1.num_points()
            );
            println!(
                "Feature of shape 2: {:?} ({} of {} vertices)",
                sep.feature2.vertices(),
                sep.feature2.num_vertices(),
                shape2.num_points()
            );

            assert_eq!(sep.feature1.num_vertices(), 2);
            assert_eq!(sep.feature2.num_vertices(), 2);
        }
    }
}
