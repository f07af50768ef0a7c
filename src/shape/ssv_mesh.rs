use crate::partitioning::{QuantizedSsvTree, SsvHierarchy, SsvTree};
use crate::shape::{TriMesh, TriangleSource};

/// A triangle mesh paired with the bounding volume tree the proximity queries traverse.
///
/// This is everything [`query::distance`](crate::query::distance) and
/// [`query::collide`](crate::query::collide) need to know about a model. Implement it on your
/// own types to query meshes and trees stored outside of this crate.
pub trait SsvModel {
    /// The tree type of this model.
    type Tree: SsvHierarchy + ?Sized;
    /// The triangle collection the tree leaves index into.
    type Mesh: TriangleSource + ?Sized;

    /// The bounding volume tree of this model, if it has one.
    fn ssv_tree(&self) -> Option<&Self::Tree>;

    /// The triangles of this model, if they can be accessed.
    fn triangle_source(&self) -> Option<&Self::Mesh>;
}

/// A triangle mesh with its sphere-swept-volume tree.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SsvMesh<T = SsvTree> {
    mesh: TriMesh,
    tree: Option<T>,
}

impl SsvMesh<SsvTree> {
    /// Wraps `mesh` and builds its tree with [`SsvTree::from_triangles`].
    pub fn new(mesh: TriMesh) -> Self {
        let tree = SsvTree::from_triangles(&mesh);
        Self {
            mesh,
            tree: Some(tree),
        }
    }

    /// A copy of this model where the tree bounding volumes are quantized.
    pub fn quantized(&self) -> SsvMesh<QuantizedSsvTree> {
        SsvMesh {
            mesh: self.mesh.clone(),
            tree: self.tree.as_ref().map(QuantizedSsvTree::from_tree),
        }
    }
}

impl<T> SsvMesh<T> {
    /// Wraps `mesh` without any tree.
    ///
    /// Queries involving this model fail until a tree is attached with [`Self::set_tree`].
    pub fn without_tree(mesh: TriMesh) -> Self {
        Self { mesh, tree: None }
    }

    /// Wraps `mesh` together with a tree built externally.
    ///
    /// The leaves of `tree` must reference valid triangle indices of `mesh`.
    pub fn from_parts(mesh: TriMesh, tree: Option<T>) -> Self {
        Self { mesh, tree }
    }

    /// The triangle mesh of this model.
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// The tree of this model.
    pub fn tree(&self) -> Option<&T> {
        self.tree.as_ref()
    }

    /// Replaces the tree of this model, returning the previous one.
    pub fn set_tree(&mut self, tree: Option<T>) -> Option<T> {
        core::mem::replace(&mut self.tree, tree)
    }
}

impl<T: SsvHierarchy> SsvModel for SsvMesh<T> {
    type Tree = T;
    type Mesh = TriMesh;

    #[inline]
    fn ssv_tree(&self) -> Option<&T> {
        self.tree.as_ref()
    }

    #[inline]
    fn triangle_source(&self) -> Option<&TriMesh> {
        Some(&self.mesh)
    }
}
