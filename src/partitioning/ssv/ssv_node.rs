use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};

/// Structural properties of a sphere-swept-volume tree.
///
/// Two trees can only be queried against each other if their flags are identical.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SsvTreeFlags(u8);

bitflags::bitflags! {
    impl SsvTreeFlags: u8 {
        /// The tree stores one explicit leaf node per primitive.
        const LEAF_NODES = 1;
        /// The node bounding volumes are stored in a quantized form.
        const QUANTIZED = 1 << 1;
    }
}

/// The topological part of a tree node: either a leaf owning a single primitive, or an internal
/// node with exactly two children.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SsvNodeKind {
    /// A leaf node, referencing the index of a single triangle of the mesh.
    Leaf {
        /// The index of the primitive owned by this leaf.
        primitive: u32,
    },
    /// An internal node, referencing its two children by their index in the tree’s node array.
    Internal {
        /// Index of the first child, traversed first.
        neg: u32,
        /// Index of the second child.
        pos: u32,
    },
}

impl SsvNodeKind {
    /// Is this a leaf?
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(self, SsvNodeKind::Leaf { .. })
    }

    /// The primitive index if this is a leaf.
    #[inline]
    pub fn primitive(self) -> Option<u32> {
        match self {
            SsvNodeKind::Leaf { primitive } => Some(primitive),
            SsvNodeKind::Internal { .. } => None,
        }
    }

    /// The two children indices (`[neg, pos]`) if this is an internal node.
    #[inline]
    pub fn children(self) -> Option<[u32; 2]> {
        match self {
            SsvNodeKind::Leaf { .. } => None,
            SsvNodeKind::Internal { neg, pos } => Some([neg, pos]),
        }
    }
}

/// A node of a sphere-swept-volume tree.
///
/// The bounding sphere is stored as its center and squared radius (its "size"), expressed in the
/// local space of the mesh the tree was built for.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SsvNode {
    pub(super) center: Point<Real>,
    pub(super) size_sq: Real,
    pub(super) kind: SsvNodeKind,
}

impl SsvNode {
    /// Creates a node from its bounding sphere center, squared radius, and kind.
    #[inline]
    pub fn new(center: Point<Real>, size_sq: Real, kind: SsvNodeKind) -> Self {
        Self {
            center,
            size_sq,
            kind,
        }
    }

    /// Creates a leaf node bounded by `sphere`.
    #[inline]
    pub fn leaf(sphere: &BoundingSphere, primitive: u32) -> Self {
        Self::new(
            sphere.center,
            sphere.squared_radius(),
            SsvNodeKind::Leaf { primitive },
        )
    }

    /// Creates an internal node bounded by `sphere`.
    #[inline]
    pub fn internal(sphere: &BoundingSphere, neg: u32, pos: u32) -> Self {
        Self::new(
            sphere.center,
            sphere.squared_radius(),
            SsvNodeKind::Internal { neg, pos },
        )
    }

    /// The center of this node’s bounding sphere.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The squared radius of this node’s bounding sphere.
    #[inline]
    pub fn size_sq(&self) -> Real {
        self.size_sq
    }

    /// The bounding sphere of this node.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::from_squared_radius(self.center, self.size_sq)
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// The kind of this node.
    #[inline]
    pub fn kind(&self) -> SsvNodeKind {
        self.kind
    }
}
