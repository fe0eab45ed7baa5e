//! Non-persistent geometric queries between point sets.
//!
//! The methods provided by this module are:
//!
//! * [`query::query_distance()`](query_distance) to compute the distance, closest points,
//!   and closest features of two point sets.
//! * [`query::distance()`](distance) to compute only the distance between two point sets.
//! * [`query::query_overlap()`](query_overlap) to determine if two point sets are
//!   intersecting or not.
//!
//! All of them rely on the GJK algorithm exposed by the [`gjk`] module. The `_with_options`
//! variants take [`gjk::GjkOptions`] to tune its tolerance and iteration limits.

pub use self::error::QueryError;
pub use self::gjk::{ClosestFeature, GJKResult, GjkOptions, Separation};
pub use self::query_distance::{distance, query_distance, query_distance_with_options};
pub use self::query_overlap::{query_overlap, query_overlap_with_options};

mod error;
pub mod gjk;
mod query_distance;
mod query_overlap;
