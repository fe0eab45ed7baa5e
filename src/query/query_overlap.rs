use crate::query::gjk::{self, GjkOptions};
use crate::query::QueryError;
use crate::shape::PointSet;

/// Tests whether the convex hulls of two point sets overlap.
///
/// Point sets touching each other, up to [`GjkOptions::epsilon`], are reported as
/// overlapping.
pub fn query_overlap(g1: &PointSet, g2: &PointSet) -> Result<bool, QueryError> {
    query_overlap_with_options(g1, g2, &GjkOptions::default())
}

/// Tests whether the convex hulls of two point sets overlap.
///
/// This allows a more fine grained control over the underlying GJK algorithm.
pub fn query_overlap_with_options(
    g1: &PointSet,
    g2: &PointSet,
    options: &GjkOptions,
) -> Result<bool, QueryError> {
    gjk::intersection_test(g1, g2, options)
}
