use crate::math::{Point, Real, Vector};
use crate::query::QueryError;
use crate::shape::SupportMap;

/// A borrowed, non-empty set of points treated as the convex polytope they span.
///
/// No convex-hull is computed: every point of the set is a candidate support
/// point, including the ones lying inside the polytope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointSet<'a> {
    points: &'a [Point<Real>],
}

impl<'a> PointSet<'a> {
    /// Creates a point set viewing the given vertices.
    ///
    /// Returns [`QueryError::EmptyPointSet`] if `points` is empty.
    pub fn new(points: &'a [Point<Real>]) -> Result<Self, QueryError> {
        if points.is_empty() {
            Err(QueryError::EmptyPointSet)
        } else {
            Ok(Self { points })
        }
    }

    /// The vertices of this point set.
    #[inline]
    pub fn points(&self) -> &'a [Point<Real>] {
        self.points
    }

    /// The number of vertices of this point set. Always at least 1.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Does this set contain a vertex exactly equal to `pt`?
    pub fn contains_vertex(&self, pt: &Point<Real>) -> bool {
        self.points.iter().any(|p| p == pt)
    }

    /// The index of the vertex maximizing its dot product with `dir`.
    ///
    /// Ties are resolved in favor of the vertex with the smallest index.
    pub fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best_pt = 0;
        let mut best_dot = self.points[0].coords.dot(dir);

        for (i, p) in self.points.iter().enumerate().skip(1) {
            let dot = p.coords.dot(dir);

            if dot > best_dot {
                best_dot = dot;
                best_pt = i;
            }
        }

        best_pt
    }
}

impl SupportMap for PointSet<'_> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.points[self.support_point_id(dir)]
    }
}
