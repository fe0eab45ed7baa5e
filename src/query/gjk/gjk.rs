//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! # What is GJK?
//!
//! The **Gilbert-Johnson-Keerthi (GJK)** algorithm computes the distance between two convex
//! shapes. It operates on the **Minkowski difference** (also called Configuration Space
//! Obstacle or CSO) of both shapes: the origin lies inside of the CSO if and only if the
//! shapes overlap, and the distance from the origin to the CSO is the distance between the
//! shapes.
//!
//! Starting from a single support point, GJK builds a simplex (a point, a segment, a triangle,
//! or a tetrahedron) inside of the CSO and repeatedly:
//!
//! 1. reduces it to its feature closest to the origin, using Voronoï region tests,
//! 2. extends it with the support point of the CSO along the direction from that feature
//!    toward the origin.
//!
//! # Main Functions in This Module
//!
//! - [`closest_points`] computes the distance, closest points, and closest features of two
//!   shapes. It stops as soon as it cannot progress anymore: when the new support point is
//!   already part of the simplex, or when it would make the simplex degenerate.
//! - [`intersection_test`] only tells if the shapes overlap. It stops as soon as the new
//!   support point does not reach the origin along the search direction, or does not get
//!   any closer to it, which is cheaper.
//!
//! Both share the same simplex reduction, see [`Simplex::reduce`].

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, Separation, Simplex, SimplexReduction};
use crate::query::QueryError;
use crate::shape::SupportMap;

/// Options of the GJK queries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The tolerance of every zero comparison (point coincidence, zero area or zero volume).
    ///
    /// [`intersection_test`] also reports shapes closer than this as overlapping.
    ///
    /// Defaults to [`DEFAULT_EPSILON`]. Scale it with the coordinates of the shapes.
    pub epsilon: Real,
    /// The maximum number of iterations of [`closest_points`].
    ///
    /// If it is reached, the result is computed from the current simplex. Defaults to 16.
    pub max_iterations: usize,
    /// The maximum number of iterations of [`intersection_test`].
    ///
    /// Defaults to `None`: the test runs until it reaches a conclusion. If a limit is set
    /// and reached, the shapes are reported as disjoint.
    pub max_intersection_iterations: Option<usize>,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: 16,
            max_intersection_iterations: None,
        }
    }
}

/// Results of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GJKResult {
    /// The shapes are intersecting (overlapping).
    ///
    /// Shapes touching each other, up to the [`GjkOptions::epsilon`] tolerance, fall in
    /// this category too.
    Intersection,
    /// The shapes are disjoint.
    ClosestPoints(Separation),
}

impl GJKResult {
    /// Are the shapes overlapping?
    #[inline]
    pub fn is_intersection(&self) -> bool {
        matches!(self, GJKResult::Intersection)
    }

    /// The separation between the shapes, if they are disjoint.
    #[inline]
    pub fn separation(&self) -> Option<&Separation> {
        match self {
            GJKResult::Intersection => None,
            GJKResult::ClosestPoints(sep) => Some(sep),
        }
    }

    /// The distance between the shapes. Zero if they are overlapping.
    #[inline]
    pub fn distance(&self) -> Real {
        self.separation().map(|sep| sep.distance).unwrap_or(0.0)
    }
}

/// The direction of the very first support point of both GJK queries.
#[inline]
pub fn initial_direction() -> Vector<Real> {
    -Vector::z()
}

/// Computes the closest points between two shapes using the GJK algorithm.
///
/// # Returns
///
/// - `Ok(GJKResult::Intersection)` if the shapes overlap, or are closer than
///   `options.epsilon` to each other.
/// - `Ok(GJKResult::ClosestPoints(separation))` otherwise, with the distance, closest
///   points, and closest features of both shapes.
/// - `Err(QueryError::SimplexInvariant { .. })` if the simplex classification reached an
///   inconsistent state.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polygjk3d::math::Point;
/// use polygjk3d::query::gjk::{self, GjkOptions, GJKResult};
/// use polygjk3d::shape::PointSet;
///
/// let segment = [Point::new(-1.0, 2.0, 0.0), Point::new(1.0, 2.0, 0.0)];
/// let vertex = [Point::origin()];
/// let g1 = PointSet::new(&segment).unwrap();
/// let g2 = PointSet::new(&vertex).unwrap();
///
/// match gjk::closest_points(&g1, &g2, &GjkOptions::default()).unwrap() {
///     GJKResult::ClosestPoints(sep) => {
///         assert!((sep.distance - 2.0).abs() < 1.0e-5);
///         assert_eq!(sep.feature1.num_vertices(), 2);
///     }
///     GJKResult::Intersection => unreachable!(),
/// }
/// # }
/// ```
pub fn closest_points<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
) -> Result<GJKResult, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps = options.epsilon;
    let is_origin = |pt: &Point<Real>| pt.coords.norm_squared() < eps * eps;

    let initial = CSOPoint::from_shapes(g1, g2, &initial_direction());

    // Both shapes share a vertex: no need to go further.
    if is_origin(&initial.point) {
        log::trace!("GJK: the initial support point is the origin.");
        return Ok(GJKResult::Intersection);
    }

    let mut dir = -initial.point.coords;
    let mut simplex = Simplex::new(initial);

    for niter in 0..options.max_iterations {
        let cso_point = CSOPoint::from_shapes(g1, g2, &dir);

        if is_origin(&cso_point.point) {
            log::trace!("GJK: the origin was reached after {} iterations.", niter);
            return Ok(GJKResult::Intersection);
        }

        if !simplex.add_point(cso_point) {
            log::trace!("GJK: no progress after {} iterations.", niter);
            return Ok(GJKResult::ClosestPoints(Separation::from_simplex(&simplex)));
        }

        // The new point would not let us refine the simplex any further without
        // suffering from floating point errors.
        if simplex.is_degenerate(eps) {
            let _ = simplex.pop();
            log::trace!("GJK: degenerate simplex after {} iterations.", niter);
            return Ok(GJKResult::ClosestPoints(Separation::from_simplex(&simplex)));
        }

        match simplex.reduce()? {
            SimplexReduction::Continue(new_dir) => dir = new_dir,
            SimplexReduction::ContainsOrigin => {
                log::trace!("GJK: the origin is inside of the simplex.");
                return Ok(GJKResult::Intersection);
            }
        }
    }

    log::debug!(
        "GJK did not converge after {} iterations, computing the separation from the last simplex.",
        options.max_iterations
    );
    Ok(GJKResult::ClosestPoints(Separation::from_simplex(&simplex)))
}

/// Tests if two shapes overlap using the GJK algorithm.
///
/// Contrary to [`closest_points`], this only tracks the points of the CSO, and stops as soon as
/// the support point along the search direction stays more than `options.epsilon` short of
/// the origin. When the support points stop progressing toward the origin, the shapes are
/// reported as overlapping if the origin is closer than `options.epsilon` to the current
/// simplex. Shapes touching each other are reported as overlapping.
///
/// Rounding errors can make the search cycle through the same simplices forever. A cycle is
/// detected when the search comes back to an earlier state, and the verdict is then given by
/// [`closest_points`].
///
/// Returns `Err(QueryError::SimplexInvariant { .. })` if the simplex classification reached
/// an inconsistent state.
pub fn intersection_test<G1, G2>(g1: &G1, g2: &G2, options: &GjkOptions) -> Result<bool, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps = options.epsilon;
    let initial = CSOPoint::from_shapes(g1, g2, &initial_direction()).point;
    let mut dir = -initial.coords;
    let mut newest = initial;
    let mut simplex = Simplex::new(initial);
    let mut cycles = CycleDetector::new();
    let mut niter = 0;

    loop {
        if options.max_intersection_iterations == Some(niter) {
            log::debug!(
                "GJK intersection test did not converge after {} iterations.",
                niter
            );
            return Ok(false);
        }

        // The origin lies on the simplex.
        if dir == Vector::zeros() {
            log::trace!("GJK: the origin is on the simplex after {} iterations.", niter);
            return Ok(true);
        }

        if cycles.visit(&dir, &simplex) {
            log::debug!(
                "GJK intersection test cycled after {} iterations, falling back to the distance.",
                niter
            );
            return Ok(closest_points(g1, g2, options)?.distance() <= eps);
        }

        let point = CSOPoint::from_shapes(g1, g2, &dir).point;
        let tolerance = eps * dir.norm();
        // Minus the distance from the origin to the current feature, scaled by `|dir|`.
        let feature_dot = dir.dot(&newest.coords);
        let support_dot = dir.dot(&point.coords);

        if support_dot - feature_dot <= tolerance {
            let touching = -feature_dot <= tolerance;
            log::trace!(
                "GJK: no progress after {} iterations, the origin is {} the simplex.",
                niter,
                if touching { "on" } else { "away from" }
            );
            return Ok(touching);
        }

        // The whole CSO lies more than `eps` away from the origin along `dir`.
        if support_dot < -tolerance {
            log::trace!("GJK: separating direction found after {} iterations.", niter);
            return Ok(false);
        }

        // The simplex never has more than three vertices after a reduction.
        let pushed = simplex.push(point);
        debug_assert!(pushed);
        newest = point;

        match simplex.reduce()? {
            SimplexReduction::Continue(new_dir) => dir = new_dir,
            SimplexReduction::ContainsOrigin => {
                log::trace!("GJK: the origin is inside of the simplex.");
                return Ok(true);
            }
        }

        niter += 1;
    }
}

/// Brent's cycle detection over the states of [`intersection_test`].
///
/// The saved state is refreshed after a number of steps doubling each time, so that any cycle
/// is detected within a few of its periods.
struct CycleDetector {
    saved: Option<(Vector<Real>, Simplex<Point<Real>>)>,
    power: usize,
    steps: usize,
}

impl CycleDetector {
    fn new() -> Self {
        Self {
            saved: None,
            power: 1,
            steps: 0,
        }
    }

    /// Records a state. Returns `true` if it is the saved one.
    fn visit(&mut self, dir: &Vector<Real>, simplex: &Simplex<Point<Real>>) -> bool {
        if matches!(&self.saved, Some((d, s)) if d == dir && s == simplex) {
            return true;
        }

        self.steps += 1;
        if self.steps == self.power {
            self.saved = Some((*dir, simplex.clone()));
            self.power *= 2;
            self.steps = 0;
        }

        false
    }
}
