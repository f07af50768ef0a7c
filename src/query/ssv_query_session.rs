use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::partitioning::SsvHierarchy;
use crate::query::details::distance_triangle_triangle;
use crate::query::{PairCache, PrimitivePair, SsvQueryError, SsvQueryOptions};
use crate::shape::{SsvModel, Triangle, TriangleSource};
use na::ComplexField;

/// The state shared by every step of a tree-tree traversal.
///
/// Holds the two trees and triangle sources, and the rigid transform mapping the local space of
/// the first mesh into the local space of the second mesh. It is computed once, at the start of
/// each query, and never outlives it.
pub(crate) struct SsvQuerySession<'a, T0: ?Sized, S0: ?Sized, T1: ?Sized, S1: ?Sized> {
    pub tree0: &'a T0,
    pub tree1: &'a T1,
    mesh0: &'a S0,
    mesh1: &'a S1,
    rotation: Matrix<Real>,
    translation: Vector<Real>,
    pos1: Isometry<Real>,
    first_leaves: PrimitivePair,
}

impl<'a, T0, S0, T1, S1> SsvQuerySession<'a, T0, S0, T1, S1>
where
    T0: SsvHierarchy + ?Sized,
    S0: TriangleSource + ?Sized,
    T1: SsvHierarchy + ?Sized,
    S1: TriangleSource + ?Sized,
{
    pub fn new<M0, M1>(
        model0: &'a M0,
        model1: &'a M1,
        world0: Option<&Isometry<Real>>,
        world1: Option<&Isometry<Real>>,
    ) -> Result<Self, SsvQueryError>
    where
        M0: SsvModel<Tree = T0, Mesh = S0> + ?Sized,
        M1: SsvModel<Tree = T1, Mesh = S1> + ?Sized,
    {
        let (tree0, tree1) = match (model0.ssv_tree(), model1.ssv_tree()) {
            (Some(tree0), Some(tree1)) => (tree0, tree1),
            _ => {
                log::debug!("SSV query setup failed: a model has no tree.");
                return Err(SsvQueryError::MissingTree);
            }
        };

        let first_leaves = match (tree0.first_leaf_primitive(), tree1.first_leaf_primitive()) {
            (Some(id0), Some(id1)) => PrimitivePair::new(id0, id1),
            _ => {
                log::debug!("SSV query setup failed: a tree is empty.");
                return Err(SsvQueryError::MissingTree);
            }
        };

        if tree0.has_leaf_nodes() != tree1.has_leaf_nodes()
            || tree0.is_quantized() != tree1.is_quantized()
        {
            log::debug!(
                "SSV query setup failed: incompatible tree flags {:?} and {:?}.",
                tree0.flags(),
                tree1.flags()
            );
            return Err(SsvQueryError::StructuralMismatch);
        }

        let (mesh0, mesh1) = match (model0.triangle_source(), model1.triangle_source()) {
            (Some(mesh0), Some(mesh1)) => (mesh0, mesh1),
            _ => {
                log::debug!("SSV query setup failed: a triangle mesh could not be resolved.");
                return Err(SsvQueryError::MeshResolutionFailure);
            }
        };

        let pos0 = world0.copied().unwrap_or_else(Isometry::identity);
        let pos1 = world1.copied().unwrap_or_else(Isometry::identity);
        let pos10 = pos1.inv_mul(&pos0);

        Ok(Self {
            tree0,
            tree1,
            mesh0,
            mesh1,
            rotation: pos10.rotation.to_rotation_matrix().into_inner(),
            translation: pos10.translation.vector,
            pos1,
            first_leaves,
        })
    }

    /// Maps a point from the local space of the first mesh to the local space of the second.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation * pt.coords + self.translation)
    }

    /// Maps a point from the local space of the second mesh to world space.
    #[inline]
    pub fn to_world(&self, pt: &Point<Real>) -> Point<Real> {
        self.pos1 * pt
    }

    /// A lower bound of the distance between the primitives of the subtrees `b0` and `b1`.
    ///
    /// This is negative if the two bounding spheres overlap.
    #[inline]
    pub fn node_distance_lower_bound(&self, b0: u32, b1: u32) -> Real {
        let center0 = self.transform_point(&self.tree0.node_center(b0));
        let center1 = self.tree1.node_center(b1);

        na::distance(&center0, &center1)
            - ComplexField::sqrt(self.tree0.node_size_sq(b0))
            - ComplexField::sqrt(self.tree1.node_size_sq(b1))
    }

    /// Exact distance between two primitives, and the closest points on each of them.
    ///
    /// Both points are expressed in the local space of the second mesh.
    pub fn primitive_distance(&self, pair: PrimitivePair) -> (Real, Point<Real>, Point<Real>) {
        let tri0 = self.mesh0.triangle(pair.id0);
        let tri0 = Triangle::new(
            self.transform_point(&tri0.a),
            self.transform_point(&tri0.b),
            self.transform_point(&tri0.c),
        );
        let tri1 = self.mesh1.triangle(pair.id1);

        distance_triangle_triangle(&tri0, &tri1)
    }

    /// The pair the traversal should evaluate before any other.
    ///
    /// This is the pair of first leaves, in node order, of both trees, unless a warm-start pair
    /// is available.
    pub fn seed_pair(&self, options: &SsvQueryOptions, cache: &PairCache) -> PrimitivePair {
        self.warm_start_pair(options, cache)
            .unwrap_or(self.first_leaves)
    }

    /// The pair recorded in `cache`, if warm-starting is enabled and that pair is valid for both
    /// meshes.
    pub fn warm_start_pair(
        &self,
        options: &SsvQueryOptions,
        cache: &PairCache,
    ) -> Option<PrimitivePair> {
        if !options.warm_start {
            return None;
        }

        let pair = cache.last_pair()?;

        if self.mesh0.contains_primitive(pair.id0) && self.mesh1.contains_primitive(pair.id1) {
            log::trace!("Warm-starting the SSV query from {:?}.", pair);
            Some(pair)
        } else {
            None
        }
    }
}
