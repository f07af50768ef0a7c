//! Point projection on triangle features.

pub use self::point_segment::project_local_point_on_segment;
pub use self::point_triangle::project_local_point_on_triangle;

mod point_segment;
mod point_triangle;
