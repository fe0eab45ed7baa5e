use crate::math::Real;
use crate::query::gjk::{self, GJKResult, GjkOptions};
use crate::query::QueryError;
use crate::shape::PointSet;

/// Computes the distance, closest points, and closest features of two point sets.
///
/// Returns [`GJKResult::Intersection`] if the convex hulls of both point sets overlap,
/// or are closer than [`crate::math::DEFAULT_EPSILON`] to each other.
pub fn query_distance(g1: &PointSet, g2: &PointSet) -> Result<GJKResult, QueryError> {
    query_distance_with_options(g1, g2, &GjkOptions::default())
}

/// Computes the distance, closest points, and closest features of two point sets.
///
/// This allows a more fine grained control over the underlying GJK algorithm.
pub fn query_distance_with_options(
    g1: &PointSet,
    g2: &PointSet,
    options: &GjkOptions,
) -> Result<GJKResult, QueryError> {
    gjk::closest_points(g1, g2, options)
}

/// Computes the minimum distance separating two point sets.
///
/// Returns `0.0` if the point sets are touching or penetrating.
pub fn distance(g1: &PointSet, g2: &PointSet) -> Result<Real, QueryError> {
    query_distance(g1, g2).map(|res| res.distance())
}
