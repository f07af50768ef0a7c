use super::ssv_tree::TRAVERSAL_STACK_SIZE;
use super::{QuantizedSsvNode, QuantizedSsvTree, SsvNode, SsvNodeKind, SsvTree, SsvTreeFlags};
use crate::math::{Real, Vector};
use crate::shape::TriangleSource;
use alloc::vec;
use alloc::vec::Vec;
use smallvec::SmallVec;

/// Indicates an inconsistency in a node array given to [`SsvTree::from_nodes`] or
/// [`QuantizedSsvTree::from_parts`], or read by a deserializer.
///
/// [`QuantizedSsvTree::from_parts`]: super::QuantizedSsvTree::from_parts
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SsvTreeError {
    /// A tree must contain at least one node.
    #[error("a tree must contain at least one node.")]
    Empty,
    /// The queries require trees with explicit leaf nodes.
    #[error("the tree flags must contain `LEAF_NODES`.")]
    MissingLeafNodes,
    /// An internal node references a child that doesn’t exist, or the root.
    #[error("the node {node} references the invalid child {child}.")]
    InvalidChild {
        /// The node with the invalid child.
        node: u32,
        /// The invalid child index.
        child: u32,
    },
    /// A node is referenced as a child more than once.
    #[error("the node {node} has more than one parent.")]
    MultipleParents {
        /// The node referenced more than once.
        node: u32,
    },
    /// A node cannot be reached from the root.
    #[error("the node {node} is not reachable from the root.")]
    Unreachable {
        /// The unreachable node.
        node: u32,
    },
}

impl SsvTree {
    /// Creates a tree from a node array built externally.
    ///
    /// The root must be the node `0`. This checks the topology of the tree (every child index is
    /// valid, every non-root node has exactly one parent, and every node is reachable from the
    /// root) but not its geometry. Use [`Self::assert_well_formed`] to check that bounding spheres
    /// actually enclose their subtrees.
    pub fn from_nodes(nodes: Vec<SsvNode>, flags: SsvTreeFlags) -> Result<Self, SsvTreeError> {
        if nodes.is_empty() {
            return Err(SsvTreeError::Empty);
        }

        check_topology(nodes.len(), flags, |id| nodes[id].kind)?;

        Ok(Self { nodes, flags })
    }

    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if every leaf primitive is a valid index of `source`, every leaf
    /// sphere contains the vertices of its triangle, and every internal sphere contains the
    /// spheres of its two children. Sphere containment is checked up to a small relative
    /// tolerance.
    ///
    /// This is mostly a utility for debugging and testing.
    pub fn assert_well_formed<S: TriangleSource + ?Sized>(&self, source: &S) {
        const TOLERANCE: Real = 1.0e-4;

        for (id, node) in self.nodes.iter().enumerate() {
            let sphere = node.bounding_sphere();
            let slack = TOLERANCE * (1.0 + sphere.radius);

            match node.kind {
                SsvNodeKind::Leaf { primitive } => {
                    assert!(
                        source.contains_primitive(primitive),
                        "Leaf {id} references the invalid primitive {primitive}."
                    );

                    for pt in source.triangle(primitive).vertices() {
                        assert!(
                            na::distance(&sphere.center, &pt) <= sphere.radius + slack,
                            "Leaf {id} doesn’t enclose the vertex {pt:?} of its triangle."
                        );
                    }
                }
                SsvNodeKind::Internal { neg, pos } => {
                    for child in [neg, pos] {
                        let child_sphere = self.nodes[child as usize].bounding_sphere();
                        assert!(
                            sphere.loosened(slack).contains(&child_sphere),
                            "Node {id} doesn’t enclose its child {child}."
                        );
                    }
                }
            }
        }
    }
}

/// The serialized form of an [`SsvTree`].
#[cfg(any(feature = "serde-serialize", test))]
#[cfg_attr(feature = "serde-serialize", derive(Deserialize))]
#[derive(Clone, Debug)]
pub(crate) struct SsvTreeData {
    pub nodes: Vec<SsvNode>,
    pub flags: SsvTreeFlags,
}

#[cfg(any(feature = "serde-serialize", test))]
impl TryFrom<SsvTreeData> for SsvTree {
    type Error = SsvTreeError;

    fn try_from(data: SsvTreeData) -> Result<Self, SsvTreeError> {
        check_topology(data.nodes.len(), data.flags, |id| data.nodes[id].kind)?;

        Ok(Self {
            nodes: data.nodes,
            flags: data.flags,
        })
    }
}

/// The serialized form of a [`QuantizedSsvTree`].
#[cfg(any(feature = "serde-serialize", test))]
#[cfg_attr(feature = "serde-serialize", derive(Deserialize))]
#[derive(Clone, Debug)]
pub(crate) struct QuantizedSsvTreeData {
    pub nodes: Vec<QuantizedSsvNode>,
    pub dequantization: Vector<Real>,
    pub flags: SsvTreeFlags,
}

#[cfg(any(feature = "serde-serialize", test))]
impl TryFrom<QuantizedSsvTreeData> for QuantizedSsvTree {
    type Error = SsvTreeError;

    fn try_from(data: QuantizedSsvTreeData) -> Result<Self, SsvTreeError> {
        QuantizedSsvTree::checked(data.nodes, data.dequantization, data.flags)
    }
}

/// Checks the topology of the `num_nodes` nodes of a tree rooted at the node `0`.
///
/// Every child index must be valid, every non-root node must have exactly one parent, and every
/// node must be reachable from the root.
pub(super) fn check_topology(
    num_nodes: usize,
    flags: SsvTreeFlags,
    kind: impl Fn(usize) -> SsvNodeKind,
) -> Result<(), SsvTreeError> {
    if !flags.contains(SsvTreeFlags::LEAF_NODES) {
        return Err(SsvTreeError::MissingLeafNodes);
    }

    if num_nodes == 0 {
        return Ok(());
    }

    let mut has_parent = vec![false; num_nodes];

    for id in 0..num_nodes {
        if let SsvNodeKind::Internal { neg, pos } = kind(id) {
            for child in [neg, pos] {
                if child == 0 || child as usize >= num_nodes {
                    return Err(SsvTreeError::InvalidChild {
                        node: id as u32,
                        child,
                    });
                }

                if has_parent[child as usize] {
                    return Err(SsvTreeError::MultipleParents { node: child });
                }

                has_parent[child as usize] = true;
            }
        }
    }

    // Every node but the root has exactly one parent at this point. Cycles can only remain in
    // components disconnected from the root.
    let mut visited = vec![false; num_nodes];
    let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    stack.push(0);

    while let Some(id) = stack.pop() {
        visited[id as usize] = true;

        if let SsvNodeKind::Internal { neg, pos } = kind(id as usize) {
            stack.push(pos);
            stack.push(neg);
        }
    }

    if let Some(node) = visited.iter().position(|v| !*v) {
        return Err(SsvTreeError::Unreachable { node: node as u32 });
    }

    Ok(())
}
