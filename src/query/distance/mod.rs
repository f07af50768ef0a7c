//! Implementation details of the `distance` function.

pub use self::distance::distance;
pub use self::distance_ssv_ssv::{distance_ssv_ssv, SsvDistance};
pub use self::distance_triangle_triangle::distance_triangle_triangle;

mod distance;
mod distance_ssv_ssv;
mod distance_triangle_triangle;
