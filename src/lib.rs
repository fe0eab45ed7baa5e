/*!
polygjk
========

**polygjk** answers distance and overlap queries between two convex point
sets in 3D using the Gilbert-Johnson-Keerthi algorithm.

The point sets are consumed as-is: their convex hull is never computed. The
result of a distance query traces the closest points back to the vertices of
each input set, so the caller learns whether the nearest feature of each
shape is a vertex, an edge, or a face.

```
# #[cfg(feature = "f32")] {
use polygjk3d::math::Point;
use polygjk3d::query;
use polygjk3d::shape::PointSet;

let tetra = [
    Point::new(-1.0, 1.0, -1.0),
    Point::new(1.0, 1.0, -1.0),
    Point::new(0.0, -1.0, -1.0),
    Point::new(0.0, 0.0, 1.0),
];
let shifted = tetra.map(|p| p + polygjk3d::math::Vector::x() * 10.0);

let a = PointSet::new(&shifted).unwrap();
let b = PointSet::new(&tetra).unwrap();

assert!(!query::query_overlap(&a, &b).unwrap());
let dist = query::distance(&a, &b).unwrap();
assert!((dist - 8.0).abs() < 1.0e-3);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for every zero comparison of the GJK queries.
    ///
    /// This is the default value of [`GjkOptions::epsilon`](crate::query::gjk::GjkOptions).
    pub const DEFAULT_EPSILON: Real = 1.0e-3;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The maximum number of vertices of a simplex in this space.
    pub const MAX_SIMPLEX_LEN: usize = DIM + 1;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
