//! Shapes supported by polygjk.

pub use self::point_set::PointSet;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod point_set;
mod support_map;
