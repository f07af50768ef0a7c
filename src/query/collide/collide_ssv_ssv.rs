use crate::math::{Isometry, Real};
use crate::partitioning::{SsvHierarchy, SsvNodeKind, TRAVERSAL_STACK_SIZE};
use crate::query::ssv_query_session::SsvQuerySession;
use crate::query::{PairCache, PrimitivePair, SsvQueryError, SsvQueryOptions};
use crate::shape::{SsvModel, TriangleSource};
use smallvec::SmallVec;

/// Tests if two models are closer than `tolerance`, returning the first pair of triangles found
/// within that distance.
///
/// This follows the same traversal as [`distance_ssv_ssv`](crate::query::distance_ssv_ssv)
/// except that node pairs are discarded as soon as their bounding spheres are farther than
/// `tolerance`, and the search stops at the first pair of triangles closer than `tolerance`
/// (distance equal to `tolerance` included). That pair is recorded in `cache`. If there is no
/// such pair, `cache` is left unchanged.
pub fn collide_ssv_ssv<M0, M1>(
    model0: &M0,
    model1: &M1,
    world0: Option<&Isometry<Real>>,
    world1: Option<&Isometry<Real>>,
    tolerance: Real,
    options: &SsvQueryOptions,
    cache: &mut PairCache,
) -> Result<Option<PrimitivePair>, SsvQueryError>
where
    M0: SsvModel + ?Sized,
    M1: SsvModel + ?Sized,
{
    let session = SsvQuerySession::new(model0, model1, world0, world1)?;

    let hit = match session.warm_start_pair(options, cache) {
        Some(pair) if session.primitive_distance(pair).0 <= tolerance => Some(pair),
        _ => first_pair_within_tolerance(&session, tolerance),
    };

    if let Some(pair) = hit {
        cache.record(pair);
    }

    Ok(hit)
}

fn first_pair_within_tolerance<T0, S0, T1, S1>(
    session: &SsvQuerySession<'_, T0, S0, T1, S1>,
    tolerance: Real,
) -> Option<PrimitivePair>
where
    T0: SsvHierarchy + ?Sized,
    S0: TriangleSource + ?Sized,
    T1: SsvHierarchy + ?Sized,
    S1: TriangleSource + ?Sized,
{
    let tree0 = session.tree0;
    let tree1 = session.tree1;
    let mut stack: SmallVec<[(u32, u32); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    stack.push((0, 0));

    while let Some((b0, b1)) = stack.pop() {
        if session.node_distance_lower_bound(b0, b1) > tolerance {
            continue;
        }

        match (tree0.node_kind(b0), tree1.node_kind(b1)) {
            (SsvNodeKind::Leaf { primitive: id0 }, SsvNodeKind::Leaf { primitive: id1 }) => {
                let pair = PrimitivePair::new(id0, id1);
                if session.primitive_distance(pair).0 <= tolerance {
                    return Some(pair);
                }
            }
            (SsvNodeKind::Internal { neg, pos }, SsvNodeKind::Leaf { .. }) => {
                stack.push((pos, b1));
                stack.push((neg, b1));
            }
            (SsvNodeKind::Internal { neg, pos }, SsvNodeKind::Internal { .. })
                if tree0.node_size_sq(b0) > tree1.node_size_sq(b1) =>
            {
                stack.push((pos, b1));
                stack.push((neg, b1));
            }
            (_, SsvNodeKind::Internal { neg, pos }) => {
                stack.push((b0, pos));
                stack.push((b0, neg));
            }
        }
    }

    None
}
