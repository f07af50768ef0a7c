//! Proximity queries between pairs of rigid triangle meshes.
//!
//! # General cases
//! The two main queries provided by this module are:
//!
//! * [`query::distance()`](distance()) to compute the minimum distance between two models, and a
//!   pair of closest points.
//! * [`query::collide()`](collide()) to determine if two models are closer than a given
//!   tolerance.
//!
//! Both take two [`SsvModel`](crate::shape::SsvModel)s, their optional rigid placements, and a
//! [`PairCache`] receiving the witness pair of triangles. An [`SsvTreeCollider`] runs the same
//! queries with non-default [`SsvQueryOptions`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the queries
//! above: point projections, segment-segment closest points, and the exact triangle-triangle
//! distance. They only operate on primitives expressed in the same coordinate frame.

pub use self::collide::{collide, collide_ssv_ssv};
pub use self::distance::{distance, distance_ssv_ssv, SsvDistance};
pub use self::error::SsvQueryError;
pub use self::pair_cache::{PairCache, PrimitivePair};
pub use self::query_options::SsvQueryOptions;
pub use self::ssv_tree_collider::SsvTreeCollider;

mod closest_points;
mod collide;
mod distance;
mod error;
mod pair_cache;
mod point;
mod query_options;
mod ssv_query_session;
mod ssv_tree_collider;

/// Queries dedicated to specific pairs of primitives.
pub mod details {
    pub use super::closest_points::*;
    pub use super::distance::distance_triangle_triangle;
    pub use super::point::*;
}
