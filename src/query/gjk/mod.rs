//! The GJK algorithm for distance computation and intersection tests.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::separation::{ClosestFeature, Separation};
pub use self::simplex::{Simplex, SimplexReduction, SimplexVertex};

mod cso_point;
mod gjk;
mod separation;
mod simplex;
