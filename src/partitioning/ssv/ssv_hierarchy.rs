use super::{SsvNodeKind, SsvTreeFlags};
use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};

/// A read-only binary hierarchy of bounding spheres over the primitives of a mesh.
///
/// This is the only view the proximity queries have of a tree. Nodes are identified by their
/// index in `0..self.num_nodes()` and the root, if any, is the node `0`. Implementors must
/// guarantee that:
/// - every internal node has two valid children, and the hierarchy is acyclic;
/// - the bounding sphere of a node encloses every primitive of its subtree.
///
/// Queries never mutate the hierarchy, so a single tree can be shared by any number of
/// concurrent queries.
pub trait SsvHierarchy {
    /// Structural flags of this tree.
    fn flags(&self) -> SsvTreeFlags;

    /// The number of nodes of this tree.
    fn num_nodes(&self) -> usize;

    /// The kind (leaf or internal) of the node `id`.
    fn node_kind(&self, id: u32) -> SsvNodeKind;

    /// The center of the bounding sphere of the node `id`, in the mesh’s local space.
    fn node_center(&self, id: u32) -> Point<Real>;

    /// The squared radius of the bounding sphere of the node `id`.
    fn node_size_sq(&self, id: u32) -> Real;

    /// The index of the root node, or `None` if the tree is empty.
    #[inline]
    fn root(&self) -> Option<u32> {
        if self.num_nodes() == 0 {
            None
        } else {
            Some(0)
        }
    }

    /// Does this tree store explicit leaf nodes?
    #[inline]
    fn has_leaf_nodes(&self) -> bool {
        self.flags().contains(SsvTreeFlags::LEAF_NODES)
    }

    /// Are the bounding volumes of this tree quantized?
    #[inline]
    fn is_quantized(&self) -> bool {
        self.flags().contains(SsvTreeFlags::QUANTIZED)
    }

    /// Is the node `id` a leaf?
    #[inline]
    fn is_leaf(&self, id: u32) -> bool {
        self.node_kind(id).is_leaf()
    }

    /// The bounding sphere of the node `id`.
    #[inline]
    fn node_bounding_sphere(&self, id: u32) -> BoundingSphere {
        BoundingSphere::from_squared_radius(self.node_center(id), self.node_size_sq(id))
    }

    /// The primitive of the first leaf, in node order.
    ///
    /// Returns `None` if the tree has no leaf.
    fn first_leaf_primitive(&self) -> Option<u32> {
        (0..self.num_nodes() as u32).find_map(|id| self.node_kind(id).primitive())
    }
}
