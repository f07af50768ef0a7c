//! Shapes supported by the proximity queries.

pub use self::segment::{Segment, SegmentPointLocation};
pub use self::ssv_mesh::{SsvMesh, SsvModel};
pub use self::triangle::{Triangle, TrianglePointLocation};
pub use self::triangle_source::TriangleSource;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod segment;
mod ssv_mesh;
mod triangle;
mod triangle_source;
mod trimesh;
