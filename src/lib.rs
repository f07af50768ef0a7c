/*!
ssv3d
=====

**ssv3d** answers proximity queries between two rigid triangle meshes, each wrapped in a
precomputed binary tree of bounding spheres (a sphere-swept-volume tree):

* [`query::distance`] computes the exact minimum distance between the two meshes together with a
  pair of closest points.
* [`query::collide`] tells whether the two meshes are closer than a given tolerance and, if they
  are, which pair of triangles proves it.

Both queries perform a simultaneous branch-and-bound traversal of the two trees, pruning every
pair of subtrees whose bounding spheres are provably too far apart, and compute exact
triangle-triangle distances at the leaves.

```
# #[cfg(feature = "f32")] {
use ssv3d::math::{Isometry, Point};
use ssv3d::query::{self, PairCache};
use ssv3d::shape::{SsvMesh, TriMesh};

let vertices = vec![
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
];
let mesh = TriMesh::new(vertices, vec![[0, 1, 2]]).unwrap();
let model0 = SsvMesh::new(mesh.clone());
let model1 = SsvMesh::new(mesh);
let world1 = Isometry::translation(0.0, 0.0, 2.0);

let mut cache = PairCache::new();
let result = query::distance(&model0, &model1, None, Some(&world1), &mut cache).unwrap();
assert!((result.distance - 2.0).abs() < 1.0e-5);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]
#![no_std]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "std")]
extern crate std;

#[cfg_attr(test, macro_use)]
extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitQuaternion, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
