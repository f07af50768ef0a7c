use crate::math::{Isometry, Real};
use crate::query::{collide_ssv_ssv, PairCache, PrimitivePair, SsvQueryError, SsvQueryOptions};
use crate::shape::SsvModel;

/// Tests if the distance between two models is smaller than or equal to `tolerance`.
///
/// Returns the first pair of triangles found within `tolerance` of each other, or `None` if
/// there is none. A tolerance of `0.0` tests for intersection. On a hit, the returned pair is
/// also recorded in `cache`.
///
/// `world0` and `world1` are the rigid placements of both models; `None` stands for the identity.
/// This uses the default [`SsvQueryOptions`].
pub fn collide<M0, M1>(
    model0: &M0,
    model1: &M1,
    world0: Option<&Isometry<Real>>,
    world1: Option<&Isometry<Real>>,
    tolerance: Real,
    cache: &mut PairCache,
) -> Result<Option<PrimitivePair>, SsvQueryError>
where
    M0: SsvModel + ?Sized,
    M1: SsvModel + ?Sized,
{
    collide_ssv_ssv(
        model0,
        model1,
        world0,
        world1,
        tolerance,
        &SsvQueryOptions::default(),
        cache,
    )
}
