/// Errors reported by the GJK queries.
///
/// Every degenerate geometry (zero-length edges, flat triangles or tetrahedra)
/// is an expected numerical condition handled by the queries themselves. The
/// variants below are only returned for invalid inputs, or when the simplex
/// classification reaches a state it considers geometrically impossible.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A point set must contain at least one point.
    #[error("a point set must contain at least one point.")]
    EmptyPointSet,
    /// The origin was found outside of a tetrahedron face while being behind both
    /// of the face edges adjacent to the newest simplex vertex.
    #[error("inconsistent Voronoi region classification outside of the tetrahedron face {face:?}.")]
    SimplexInvariant {
        /// The tetrahedron face that was being tested, given as indices of its
        /// vertices in the simplex (the last one is always the newest vertex).
        face: [usize; 3],
    },
}
