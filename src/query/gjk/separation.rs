use arrayvec::ArrayVec;
use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex};

/// The feature of a point set closest to the other point set.
///
/// The vertices are exact copies of vertices of the point set, without duplicates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ClosestFeature {
    /// The closest feature is a vertex.
    Vertex(Point<Real>),
    /// The closest feature is the edge between two vertices.
    Edge([Point<Real>; 2]),
    /// The closest feature is the triangle with these three vertices.
    Face([Point<Real>; 3]),
}

impl ClosestFeature {
    /// Builds the feature spanned by the given vertices, after removing duplicates.
    ///
    /// The first occurrence of each vertex is kept, preserving the input order. Returns
    /// `None` if `vertices` is empty or has more than three distinct elements.
    pub fn from_vertices(vertices: &[Point<Real>]) -> Option<Self> {
        let mut unique = ArrayVec::<Point<Real>, 3>::new();

        for pt in vertices {
            if !unique.contains(pt) && unique.try_push(*pt).is_err() {
                return None;
            }
        }

        match unique.as_slice() {
            [a] => Some(ClosestFeature::Vertex(*a)),
            [a, b] => Some(ClosestFeature::Edge([*a, *b])),
            [a, b, c] => Some(ClosestFeature::Face([*a, *b, *c])),
            _ => None,
        }
    }

    /// The vertices of this feature.
    pub fn vertices(&self) -> &[Point<Real>] {
        match self {
            ClosestFeature::Vertex(pt) => core::slice::from_ref(pt),
            ClosestFeature::Edge(pts) => pts,
            ClosestFeature::Face(pts) => pts,
        }
    }

    /// The number of vertices of this feature: 1, 2 or 3.
    pub fn num_vertices(&self) -> usize {
        self.vertices().len()
    }
}

/// The distance, closest points, and closest features of two disjoint point sets.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Separation {
    /// The distance between both point sets.
    pub distance: Real,
    /// The point of the first point set closest to the second one.
    pub point1: Point<Real>,
    /// The point of the second point set closest to the first one.
    pub point2: Point<Real>,
    /// The feature of the first point set containing `point1`.
    pub feature1: ClosestFeature,
    /// The feature of the second point set containing `point2`.
    pub feature2: ClosestFeature,
}

impl Separation {
    /// Computes the separation realized by the terminal simplex of a GJK run.
    ///
    /// The simplex must have between one and three vertices.
    pub(crate) fn from_simplex(simplex: &Simplex<CSOPoint>) -> Self {
        // Simplices start with one vertex, and the distance driver gives up on a
        // tetrahedron before it is ever finalized.
        debug_assert!(!simplex.is_empty() && simplex.len() <= 3);

        let (distance, point1, point2) = match simplex.vertices() {
            [a] => (a.point.coords.norm(), a.orig1, a.orig2),
            [b, a] => project_origin_on_segment(a, b),
            [c, b, a] => project_origin_on_triangle(a, b, c),
            _ => unreachable!(),
        };

        let mut orig1 = ArrayVec::<Point<Real>, 3>::new();
        let mut orig2 = ArrayVec::<Point<Real>, 3>::new();
        for pt in simplex.vertices() {
            orig1.push(pt.orig1);
            orig2.push(pt.orig2);
        }

        match (
            ClosestFeature::from_vertices(&orig1),
            ClosestFeature::from_vertices(&orig2),
        ) {
            (Some(feature1), Some(feature2)) => Separation {
                distance,
                point1,
                point2,
                feature1,
                feature2,
            },
            // Both vertex lists have as many entries as the simplex, at least one.
            _ => unreachable!(),
        }
    }

    /// The unit direction from `point1` to `point2`, if they are not equal.
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.point2 - self.point1, 0.0)
    }
}

// The parameter along the edge is not clamped: the simplex reduction only keeps an
// edge if the origin projects inside of it.
fn project_origin_on_segment(a: &CSOPoint, b: &CSOPoint) -> (Real, Point<Real>, Point<Real>) {
    let ao = -a.point.coords;
    let ab = *b - *a;
    let k = ao.dot(&ab) / ab.norm_squared();

    let closest = a.point + ab * k;
    let point1 = a.orig1 + (b.orig1 - a.orig1) * k;
    let point2 = a.orig2 + (b.orig2 - a.orig2) * k;

    (closest.coords.norm(), point1, point2)
}

// The barycentric coordinates are not clamped either, floating point errors may push
// them slightly outside of the triangle.
fn project_origin_on_triangle(
    a: &CSOPoint,
    b: &CSOPoint,
    c: &CSOPoint,
) -> (Real, Point<Real>, Point<Real>) {
    let ao = -a.point.coords;
    let ab = *b - *a;
    let ac = *c - *a;

    let normal = ab.cross(&ac).normalize();
    let dist = ao.dot(&normal);

    // `proj` is the projection of the origin on the triangle plane.
    let proj = -normal * dist;
    let ap = a.point.coords - proj;

    let ab2 = ab.dot(&ab);
    let ac2 = ac.dot(&ac);
    let ab_ac = ab.dot(&ac);

    let kcommon = 1.0 / (ab_ac * ab_ac - ab2 * ac2);
    let kab = kcommon * ap.dot(&(ab * ac2 - ac * ab_ac));
    let kac = kcommon * ap.dot(&(ac * ab2 - ab * ab_ac));

    let point1 = a.orig1 + (b.orig1 - a.orig1) * kab + (c.orig1 - a.orig1) * kac;
    let point2 = a.orig2 + (b.orig2 - a.orig2) * kab + (c.orig2 - a.orig2) * kac;

    (dist.abs(), point1, point2)
}
