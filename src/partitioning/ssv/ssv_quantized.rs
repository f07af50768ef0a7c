use super::ssv_validation::check_topology;
use super::{SsvHierarchy, SsvNodeKind, SsvTree, SsvTreeError, SsvTreeFlags};
use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;
use na::ComplexField;

/// A node of a [`QuantizedSsvTree`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantizedSsvNode {
    center: [i16; 3],
    size_sq: Real,
    kind: SsvNodeKind,
}

impl QuantizedSsvNode {
    /// Creates a node from its quantized center, its squared radius, and its kind.
    ///
    /// The squared radius must account for the quantization error of the center.
    #[inline]
    pub fn new(center: [i16; 3], size_sq: Real, kind: SsvNodeKind) -> Self {
        Self {
            center,
            size_sq,
            kind,
        }
    }

    /// The quantized center of this node’s bounding sphere.
    #[inline]
    pub fn quantized_center(&self) -> [i16; 3] {
        self.center
    }

    /// The squared radius of this node’s bounding sphere, inflated by the quantization error.
    #[inline]
    pub fn size_sq(&self) -> Real {
        self.size_sq
    }

    /// The kind of this node.
    #[inline]
    pub fn kind(&self) -> SsvNodeKind {
        self.kind
    }
}

/// A sphere-swept-volume tree with bounding sphere centers stored as 16-bit integers.
///
/// Each coordinate of a center is stored as a multiple of a per-axis coefficient. The radius of
/// every node is enlarged by the distance between its exact and dequantized centers, so the
/// dequantized spheres still enclose their primitives. Queries on quantized trees therefore
/// return exactly the same results as on the trees they were built from; only the pruning is
/// slightly less effective.
///
/// Deserialized trees go through the topology checks of [`QuantizedSsvTree::from_parts`], except
/// that they may be empty.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "super::ssv_validation::QuantizedSsvTreeData")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct QuantizedSsvTree {
    nodes: Vec<QuantizedSsvNode>,
    dequantization: Vector<Real>,
    flags: SsvTreeFlags,
}

impl QuantizedSsvTree {
    /// Creates a quantized tree from nodes built externally.
    ///
    /// The root must be the node `0`, and `dequantization` holds the per-axis coefficients that
    /// map quantized centers back to local space. This checks the topology of the tree with the
    /// same rules as [`SsvTree::from_nodes`]. The `QUANTIZED` flag is always set on the result.
    pub fn from_parts(
        nodes: Vec<QuantizedSsvNode>,
        dequantization: Vector<Real>,
        flags: SsvTreeFlags,
    ) -> Result<Self, SsvTreeError> {
        if nodes.is_empty() {
            return Err(SsvTreeError::Empty);
        }

        Self::checked(nodes, dequantization, flags)
    }

    pub(super) fn checked(
        nodes: Vec<QuantizedSsvNode>,
        dequantization: Vector<Real>,
        flags: SsvTreeFlags,
    ) -> Result<Self, SsvTreeError> {
        check_topology(nodes.len(), flags, |id| nodes[id].kind)?;

        Ok(Self {
            nodes,
            dequantization,
            flags: flags | SsvTreeFlags::QUANTIZED,
        })
    }

    /// Quantizes the bounding spheres of `tree`, keeping its topology.
    pub fn from_tree(tree: &SsvTree) -> Self {
        let mut extents = Vector::zeros();
        for node in tree.nodes() {
            extents = extents.sup(&node.center().coords.abs());
        }

        let max_quantized = i16::MAX as Real;
        let dequantization = extents.map(|e| if e > 0.0 { e / max_quantized } else { 1.0 });

        let nodes = tree
            .nodes()
            .iter()
            .map(|node| {
                let exact = node.center();
                let mut center = [0; 3];

                for i in 0..3 {
                    let q = ComplexField::round(exact[i] / dequantization[i]);
                    center[i] = q.clamp(-max_quantized, max_quantized) as i16;
                }

                let error = na::distance(exact, &dequantize(&center, &dequantization));
                let radius = ComplexField::sqrt(node.size_sq()) + error;

                QuantizedSsvNode {
                    center,
                    size_sq: radius * radius,
                    kind: node.kind(),
                }
            })
            .collect();

        Self {
            nodes,
            dequantization,
            flags: tree.flags() | SsvTreeFlags::QUANTIZED,
        }
    }

    /// The nodes of this tree, root first.
    pub fn nodes(&self) -> &[QuantizedSsvNode] {
        &self.nodes
    }

    /// The per-axis coefficients mapping quantized coordinates back to the mesh’s local space.
    pub fn dequantization_coefficients(&self) -> &Vector<Real> {
        &self.dequantization
    }
}

#[inline]
fn dequantize(center: &[i16; 3], coeffs: &Vector<Real>) -> Point<Real> {
    Point::new(
        center[0] as Real * coeffs.x,
        center[1] as Real * coeffs.y,
        center[2] as Real * coeffs.z,
    )
}

impl SsvHierarchy for QuantizedSsvTree {
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
        dequantize(&self.nodes[id as usize].center, &self.dequantization)
    }

    #[inline]
    fn node_size_sq(&self, id: u32) -> Real {
        self.nodes[id as usize].size_sq
    }
}
