//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. The vector does not need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;
}
