//! Spatial partitioning tools.

pub use self::ssv::{
    QuantizedSsvNode, QuantizedSsvTree, SsvHierarchy, SsvNode, SsvNodeKind, SsvTree,
    SsvTreeError, SsvTreeFlags,
};

pub(crate) use self::ssv::TRAVERSAL_STACK_SIZE;

mod ssv;
