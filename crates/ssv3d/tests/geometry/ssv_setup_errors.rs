use crate::random_soup::{model, random_soup, rng};
use ssv3d::math::{Point, Real};
use ssv3d::partitioning::{SsvHierarchy, SsvNodeKind, SsvTree, SsvTreeFlags};
use ssv3d::query::{self, PairCache, SsvQueryError};
use ssv3d::shape::{SsvMesh, SsvModel, TriMesh, Triangle};

/// A model whose triangles cannot be accessed.
struct DetachedTree(SsvTree);

impl SsvModel for DetachedTree {
    type Tree = SsvTree;
    type Mesh = [Triangle];

    fn ssv_tree(&self) -> Option<&SsvTree> {
        Some(&self.0)
    }

    fn triangle_source(&self) -> Option<&[Triangle]> {
        None
    }
}

/// A tree advertising different structural flags than the trees built by this crate.
struct FlaggedTree {
    tree: SsvTree,
    flags: SsvTreeFlags,
}

impl SsvHierarchy for FlaggedTree {
    fn flags(&self) -> SsvTreeFlags {
        self.flags
    }

    fn num_nodes(&self) -> usize {
        self.tree.num_nodes()
    }

    fn node_kind(&self, id: u32) -> SsvNodeKind {
        self.tree.node_kind(id)
    }

    fn node_center(&self, id: u32) -> Point<Real> {
        self.tree.node_center(id)
    }

    fn node_size_sq(&self, id: u32) -> Real {
        self.tree.node_size_sq(id)
    }
}

#[test]
fn missing_tree() {
    let tris = random_soup(&mut rng(0), 8);
    let mesh = TriMesh::from_triangles(&tris).unwrap();
    let with_tree = model(&tris);
    let without_tree = SsvMesh::<SsvTree>::without_tree(mesh.clone());
    let empty_tree = SsvMesh::from_parts(mesh, Some(SsvTree::new()));
    let mut cache = PairCache::new();

    for (model0, model1) in [
        (&with_tree, &without_tree),
        (&without_tree, &with_tree),
        (&with_tree, &empty_tree),
        (&empty_tree, &with_tree),
    ] {
        assert_eq!(
            query::distance(model0, model1, None, None, &mut cache),
            Err(SsvQueryError::MissingTree)
        );
        assert_eq!(
            query::collide(model0, model1, None, None, 1.0, &mut cache),
            Err(SsvQueryError::MissingTree)
        );
    }

    assert_eq!(cache.last_pair(), None);
}

#[test]
fn mismatched_tree_flags() {
    let tris = random_soup(&mut rng(1), 8);
    let mesh = TriMesh::from_triangles(&tris).unwrap();
    let exact = model(&tris);
    let quantized = exact.quantized();
    let mut cache = PairCache::new();

    assert_eq!(
        query::distance(&exact, &quantized, None, None, &mut cache),
        Err(SsvQueryError::StructuralMismatch)
    );
    assert_eq!(
        query::collide(&quantized, &exact, None, None, 1.0, &mut cache),
        Err(SsvQueryError::StructuralMismatch)
    );

    let without_leaf_flag = SsvMesh::from_parts(
        mesh,
        Some(FlaggedTree {
            tree: SsvTree::from_triangles(&tris),
            flags: SsvTreeFlags::empty(),
        }),
    );
    assert_eq!(
        query::distance(&exact, &without_leaf_flag, None, None, &mut cache),
        Err(SsvQueryError::StructuralMismatch)
    );
    assert_eq!(cache.last_pair(), None);
}

#[test]
fn unresolved_mesh() {
    let tris = random_soup(&mut rng(2), 8);
    let with_mesh = model(&tris);
    let detached = DetachedTree(SsvTree::from_triangles(&tris));
    let mut cache = PairCache::new();

    assert_eq!(
        query::distance(&with_mesh, &detached, None, None, &mut cache),
        Err(SsvQueryError::MeshResolutionFailure)
    );
    assert_eq!(
        query::collide(&detached, &with_mesh, None, None, 1.0, &mut cache),
        Err(SsvQueryError::MeshResolutionFailure)
    );
    assert_eq!(cache.last_pair(), None);

    // Setup succeeds again once both meshes are reachable.
    assert!(query::distance(&with_mesh, &with_mesh, None, None, &mut cache).is_ok());
    assert!(cache.last_pair().is_some());
}
