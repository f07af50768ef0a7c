use super::{SsvHierarchy, SsvNode, SsvNodeKind, SsvTreeFlags};
use crate::math::{Point, Real};
use alloc::vec::Vec;
use core::ops::Index;
use smallvec::SmallVec;

pub(crate) const TRAVERSAL_STACK_SIZE: usize = 32;

/// A binary tree of bounding spheres over the triangles of a mesh.
///
/// The nodes are stored in a flat array with the root at index `0`. Internal nodes reference
/// their children by index. Once built, the tree is immutable.
///
/// Deserialized trees go through the same topology checks as [`SsvTree::from_nodes`], except that
/// they may be empty.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "super::ssv_validation::SsvTreeData")
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SsvTree {
    pub(super) nodes: Vec<SsvNode>,
    pub(super) flags: SsvTreeFlags,
}

impl SsvTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            flags: SsvTreeFlags::LEAF_NODES,
        }
    }

    /// Does this tree contain no node at all?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes of this tree, root first.
    pub fn nodes(&self) -> &[SsvNode] {
        &self.nodes
    }

    /// The root of this tree, if it isn’t empty.
    pub fn root_node(&self) -> Option<&SsvNode> {
        self.nodes.first()
    }

    /// Iterates through the `(node_id, primitive)` pairs of every leaf, in node order.
    pub fn leaves(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, node)| node.kind.primitive().map(|prim| (id as u32, prim)))
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// This is `0` for an empty tree, and `1` for a tree with a single leaf.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut stack: SmallVec<[(u32, usize); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        let mut depth = 0;
        stack.push((0, 1));

        while let Some((id, node_depth)) = stack.pop() {
            depth = depth.max(node_depth);

            if let SsvNodeKind::Internal { neg, pos } = self.nodes[id as usize].kind {
                stack.push((pos, node_depth + 1));
                stack.push((neg, node_depth + 1));
            }
        }

        depth
    }
}

impl Index<u32> for SsvTree {
    type Output = SsvNode;

    #[inline]
    fn index(&self, id: u32) -> &SsvNode {
        &self.nodes[id as usize]
    }
}

impl SsvHierarchy for SsvTree {
    #[inline]
    fn flags(&self) -> SsvTreeFlags {
        self.flags
    }

    #[inline]
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn node_kind(&self, id: u32) -> SsvNodeKind {
        self.nodes[id as usize].kind
    }

    #[inline]
    fn node_center(&self, id: u32) -> Point<Real> {
        self.nodes[id as usize].center
    }

    #[inline]
    fn node_size_sq(&self, id: u32) -> Real {
        self.nodes[id as usize].size_sq
    }
}
