//! Sphere-swept-volume trees: binary hierarchies of bounding spheres over mesh triangles.

pub use ssv_hierarchy::SsvHierarchy;
pub use ssv_node::{SsvNode, SsvNodeKind, SsvTreeFlags};
pub use ssv_quantized::{QuantizedSsvNode, QuantizedSsvTree};
pub use ssv_tree::SsvTree;
pub(crate) use ssv_tree::TRAVERSAL_STACK_SIZE;
pub use ssv_validation::SsvTreeError;

mod ssv_build;
mod ssv_hierarchy;
mod ssv_node;
mod ssv_quantized;
mod ssv_tree;
mod ssv_validation;
