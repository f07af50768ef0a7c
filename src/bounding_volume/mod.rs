//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
pub use crate::bounding_volume::bounding_sphere_utils::{
    point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    spheres_bounding_sphere_with_center,
};

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_triangle;
mod bounding_sphere_utils;
