/// A pair of primitive indices, one from each of the two queried meshes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimitivePair {
    /// Index of the triangle of the first mesh.
    pub id0: u32,
    /// Index of the triangle of the second mesh.
    pub id1: u32,
}

impl PrimitivePair {
    /// Creates a new pair of primitive indices.
    #[inline]
    pub fn new(id0: u32, id1: u32) -> Self {
        Self { id0, id1 }
    }
}

/// Caller-owned record of the witness pair found by the last successful query.
///
/// A distance query records the pair of triangles achieving the minimum distance. A collision
/// query records the colliding pair, and leaves the cache untouched if there is no collision.
///
/// The queries only read this cache if warm-starting is enabled through
/// [`SsvQueryOptions::warm_start`](crate::query::SsvQueryOptions::warm_start).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PairCache {
    last: Option<PrimitivePair>,
}

impl PairCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pair recorded by the last successful query, if any.
    #[inline]
    pub fn last_pair(&self) -> Option<PrimitivePair> {
        self.last
    }

    #[inline]
    pub(crate) fn record(&mut self, pair: PrimitivePair) {
        self.last = Some(pair);
    }

    /// Forgets the recorded pair.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
