//! Various unsorted geometrical and logical operators.

pub use self::center::{aabb_center, center};

mod center;
