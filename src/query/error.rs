/// Error raised when a proximity query between two models cannot be set up.
///
/// Every check happens before the traversal starts: once a query runs, it always completes.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SsvQueryError {
    /// One of the models has no tree, or an empty one.
    #[error("both models must have a non-empty bounding volume tree.")]
    MissingTree,
    /// The two trees don’t have the same structural flags.
    #[error("the two trees must both store leaf nodes and be either both quantized or both exact.")]
    StructuralMismatch,
    /// The triangles of one of the models cannot be accessed.
    #[error("the triangle mesh of one of the models could not be resolved.")]
    MeshResolutionFailure,
}
