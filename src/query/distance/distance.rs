use crate::math::{Isometry, Real};
use crate::query::{distance_ssv_ssv, PairCache, SsvDistance, SsvQueryError, SsvQueryOptions};
use crate::shape::SsvModel;

/// Computes the minimum distance between two models, and the closest points achieving it.
///
/// `world0` and `world1` are the rigid placements of both models; `None` stands for the identity.
/// The two returned points are expressed in the world space of the *second* model, i.e.,
/// transformed by `world1`. The pair of triangles achieving the minimum distance is recorded in
/// `cache`.
///
/// Fails if either model lacks a tree, if the two trees have different structural flags, or if
/// either mesh cannot be accessed. Intersecting models have a distance of `0.0`.
///
/// This uses the default [`SsvQueryOptions`]. Use an
/// [`SsvTreeCollider`](crate::query::SsvTreeCollider) to customize them.
pub fn distance<M0, M1>(
    model0: &M0,
    model1: &M1,
    world0: Option<&Isometry<Real>>,
    world1: Option<&Isometry<Real>>,
    cache: &mut PairCache,
) -> Result<SsvDistance, SsvQueryError>
where
    M0: SsvModel + ?Sized,
    M1: SsvModel + ?Sized,
{
    distance_ssv_ssv(
        model0,
        model1,
        world0,
        world1,
        &SsvQueryOptions::default(),
        cache,
    )
}
