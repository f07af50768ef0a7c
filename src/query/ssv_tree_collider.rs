use crate::math::{Isometry, Real};
use crate::query::{
    collide_ssv_ssv, distance_ssv_ssv, PairCache, PrimitivePair, SsvDistance, SsvQueryError,
    SsvQueryOptions,
};
use crate::shape::SsvModel;

/// Runs proximity queries between pairs of models with a fixed set of [`SsvQueryOptions`].
///
/// The collider itself holds no per-query state: the same collider can be used for any number
/// of model pairs, and the [`PairCache`] is passed explicitly to each query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SsvTreeCollider {
    options: SsvQueryOptions,
}

impl SsvTreeCollider {
    /// A collider with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A collider with the given options.
    pub fn with_options(options: SsvQueryOptions) -> Self {
        Self { options }
    }

    /// Enables or disables warm-starting from the pair cache.
    pub fn with_warm_start(mut self, warm_start: bool) -> Self {
        self.options.warm_start = warm_start;
        self
    }

    /// The options used by this collider.
    pub fn options(&self) -> &SsvQueryOptions {
        &self.options
    }

    /// Computes the minimum distance between two models.
    ///
    /// See [`query::distance`](crate::query::distance) for details.
    pub fn distance<M0, M1>(
        &self,
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
        distance_ssv_ssv(model0, model1, world0, world1, &self.options, cache)
    }

    /// Tests if two models are closer than `tolerance`.
    ///
    /// See [`query::collide`](crate::query::collide) for details.
    pub fn collide<M0, M1>(
        &self,
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
            &self.options,
            cache,
        )
    }
}
