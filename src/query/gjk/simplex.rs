use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector, MAX_SIMPLEX_LEN};
use crate::query::gjk::CSOPoint;
use crate::query::QueryError;

/// A vertex that can be stored in a [`Simplex`].
///
/// The Voronoi region tests only look at [`SimplexVertex::point`], the position of the
/// vertex on the CSO. Implementors may carry any extra data alongside it, like the
/// original vertices of both shapes carried by [`CSOPoint`].
pub trait SimplexVertex: Copy {
    /// The position of this vertex on the CSO.
    fn point(&self) -> &Point<Real>;
}

impl SimplexVertex for CSOPoint {
    #[inline]
    fn point(&self) -> &Point<Real> {
        &self.point
    }
}

impl SimplexVertex for Point<Real> {
    #[inline]
    fn point(&self) -> &Point<Real> {
        self
    }
}

/// The result of [`Simplex::reduce`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexReduction {
    /// The simplex has been reduced to the feature closest to the origin. The next
    /// support point must be searched along this (non-normalized) direction.
    Continue(Vector<Real>),
    /// The origin lies inside of the tetrahedron formed by the simplex.
    ContainsOrigin,
}

/// A simplex of up to four vertices reduced with Voronoï region tests.
///
/// The vertices are ordered from the oldest to the newest: the last vertex is always the
/// most recently added support point, called `A` in the documentation below. Then come
/// `B`, `C` and `D`, so that a tetrahedron is stored as `[D, C, B, A]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Simplex<P> {
    vertices: ArrayVec<P, MAX_SIMPLEX_LEN>,
}

impl<P: SimplexVertex> Simplex<P> {
    /// Creates a simplex made of a single vertex.
    pub fn new(pt: P) -> Self {
        let mut vertices = ArrayVec::new();
        vertices.push(pt);
        Simplex { vertices }
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this simplex contain no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices of this simplex, from the oldest to the newest.
    #[inline]
    pub fn vertices(&self) -> &[P] {
        &self.vertices
    }

    /// The most recently added vertex.
    #[inline]
    pub fn newest(&self) -> Option<&P> {
        self.vertices.last()
    }

    /// Does this simplex have a vertex located exactly at `pt` on the CSO?
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.vertices.iter().any(|v| v.point() == pt)
    }

    /// Appends a vertex to this simplex.
    ///
    /// Returns `false` without modifying the simplex if it already has four vertices.
    pub fn push(&mut self, pt: P) -> bool {
        self.vertices.try_push(pt).is_ok()
    }

    /// Appends a vertex to this simplex unless one of its vertices sits at the same
    /// location on the CSO.
    ///
    /// Returns `false` without modifying the simplex if the point is a duplicate or if the
    /// simplex already has four vertices.
    pub fn add_point(&mut self, pt: P) -> bool {
        if self.contains_point(pt.point()) {
            return false;
        }

        self.push(pt)
    }

    /// Removes the newest vertex of this simplex.
    pub fn pop(&mut self) -> Option<P> {
        self.vertices.pop()
    }

    /// Checks if this simplex lost a dimension: a segment with coincident endpoints, a
    /// triangle with a zero area, or a tetrahedron with a zero volume.
    ///
    /// Simplices with less than two vertices are never degenerate.
    pub fn is_degenerate(&self, eps: Real) -> bool {
        let n = self.vertices.len();
        let pt = |i: usize| *self.vertices[n - 1 - i].point();

        match n {
            2 => (pt(1) - pt(0)).norm_squared() < eps * eps,
            3 => {
                let (a, b, c) = (pt(0), pt(1), pt(2));
                let area = 0.5 * (b - a).cross(&(c - a)).norm();
                area.abs() < eps
            }
            4 => {
                let (a, b, c, d) = (pt(0), pt(1), pt(2), pt(3));
                let volume = (1.0 / 6.0) * (c - a).cross(&(b - a)).dot(&(d - a));
                volume.abs() < eps
            }
            _ => false,
        }
    }

    /// Reduces this simplex to its sub-simplex closest to the origin and computes the
    /// direction along which the next support point must be searched.
    ///
    /// The simplex must have between two and four vertices. A simplex with less vertices is
    /// left untouched and the direction toward the origin from its newest vertex (if any)
    /// is returned.
    pub fn reduce(&mut self) -> Result<SimplexReduction, QueryError> {
        match self.vertices.len() {
            2 => Ok(SimplexReduction::Continue(self.reduce_segment())),
            3 => Ok(SimplexReduction::Continue(self.reduce_triangle())),
            4 => self.reduce_tetrahedron(),
            _ => Ok(SimplexReduction::Continue(
                self.newest().map(|a| -a.point().coords).unwrap_or_else(Vector::zeros),
            )),
        }
    }

    /// Keeps only the vertices at the given indices, in the given order.
    fn select(&mut self, ids: &[usize]) {
        let selected: ArrayVec<P, MAX_SIMPLEX_LEN> =
            ids.iter().map(|i| self.vertices[*i]).collect();
        self.vertices = selected;
    }

    /// Reduces to the edge between the newest vertex `A` and the vertex at index `b`,
    /// or to `A` alone if the origin is behind `A` along that edge.
    fn reduce_to_edge(&mut self, b: usize, ab: &Vector<Real>, ao: &Vector<Real>) -> Vector<Real> {
        let a = self.vertices.len() - 1;

        if ab.dot(ao) > 0.0 {
            self.select(&[b, a]);
            ab.cross(ao).cross(ab)
        } else {
            self.select(&[a]);
            *ao
        }
    }

    // [B, A]
    fn reduce_segment(&mut self) -> Vector<Real> {
        let a = *self.vertices[1].point();
        let b = *self.vertices[0].point();
        let ao = -a.coords;
        let ab = b - a;

        self.reduce_to_edge(0, &ab, &ao)
    }

    // [C, B, A]
    fn reduce_triangle(&mut self) -> Vector<Real> {
        let a = *self.vertices[2].point();
        let b = *self.vertices[1].point();
        let c = *self.vertices[0].point();
        let ao = -a.coords;
        let ab = b - a;
        let ac = c - a;
        let abc = ab.cross(&ac);

        if abc.cross(&ac).dot(&ao) > 0.0 {
            return self.reduce_to_edge(0, &ac, &ao);
        }

        if ab.cross(&abc).dot(&ao) > 0.0 {
            return self.reduce_to_edge(1, &ab, &ao);
        }

        if abc.dot(&ao) > 0.0 {
            abc
        } else {
            // Flip the winding so the triangle normal faces the origin.
            self.vertices.swap(0, 1);
            -abc
        }
    }

    // [D, C, B, A]
    fn reduce_tetrahedron(&mut self) -> Result<SimplexReduction, QueryError> {
        let a = *self.vertices[3].point();
        let b = *self.vertices[2].point();
        let c = *self.vertices[1].point();
        let d = *self.vertices[0].point();
        let ao = -a.coords;
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;

        // The face normals point outward if the tetrahedron is positively oriented. The
        // faces kept as the next simplex are wound so their normal faces the origin.
        let acb = ab.cross(&ac);
        let abd = ad.cross(&ab);
        let adc = ac.cross(&ad);

        let outside_acb = acb.dot(&ao) > 0.0;
        let outside_abd = abd.dot(&ao) > 0.0;
        let outside_adc = adc.dot(&ao) > 0.0;

        let dir = if outside_acb {
            if outside_abd {
                self.reduce_to_edge(2, &ab, &ao)
            } else if outside_adc {
                self.reduce_to_edge(1, &ac, &ao)
            } else {
                self.reduce_to_face([1, 2, 3], &ab, &ac, &ao)?;
                acb
            }
        } else if outside_abd {
            if outside_adc {
                self.reduce_to_edge(0, &ad, &ao)
            } else {
                self.reduce_to_face([2, 0, 3], &ab, &ad, &ao)?;
                abd
            }
        } else if outside_adc {
            self.reduce_to_face([0, 1, 3], &ac, &ad, &ao)?;
            adc
        } else {
            return Ok(SimplexReduction::ContainsOrigin);
        };

        Ok(SimplexReduction::Continue(dir))
    }

    /// Reduces a tetrahedron to one of its faces adjacent to `A`.
    ///
    /// The origin is outside of that face only, so it must be in front of at least one of
    /// `edge1` and `edge2`, the two face edges starting at `A`.
    fn reduce_to_face(
        &mut self,
        face: [usize; 3],
        edge1: &Vector<Real>,
        edge2: &Vector<Real>,
        ao: &Vector<Real>,
    ) -> Result<(), QueryError> {
        if edge1.dot(ao) <= 0.0 && edge2.dot(ao) <= 0.0 {
            log::debug!(
                "Hit unexpected state in GJK: the origin is outside of the tetrahedron face {:?} but behind both of its edges.",
                face
            );
            return Err(QueryError::SimplexInvariant { face });
        }

        self.select(&face);
        Ok(())
    }
}
