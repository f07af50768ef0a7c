/// Options controlling the execution of the tree-tree proximity queries.
///
/// None of these options change the result of a query, only the amount of work needed to
/// compute it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SsvQueryOptions {
    /// Start the queries from the pair recorded in the [`PairCache`](crate::query::PairCache).
    ///
    /// For distance queries, the recorded pair seeds the distance upper bound. For collision
    /// queries, the recorded pair is tested before anything else. This is most effective when
    /// the same two meshes are queried repeatedly with slowly changing placements.
    ///
    /// Ignored if the cache is empty or if its indices are out of bounds for either mesh.
    pub warm_start: bool,
}

impl SsvQueryOptions {
    /// Options with every optimization disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables warm-starting from the pair cache.
    pub fn with_warm_start(mut self, warm_start: bool) -> Self {
        self.warm_start = warm_start;
        self
    }
}
