use crate::math::{Isometry, Point, Real};
use crate::partitioning::{SsvHierarchy, SsvNodeKind, TRAVERSAL_STACK_SIZE};
use crate::query::ssv_query_session::SsvQuerySession;
use crate::query::{PairCache, PrimitivePair, SsvQueryError, SsvQueryOptions};
use crate::shape::{SsvModel, TriangleSource};
use smallvec::SmallVec;

/// The result of a distance query between two models.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SsvDistance {
    /// The minimum distance between the two models. Zero if they intersect.
    pub distance: Real,
    /// The closest point on the first model.
    ///
    /// Expressed in the world space of the second model.
    pub point0: Point<Real>,
    /// The closest point on the second model.
    ///
    /// Expressed in the world space of the second model.
    pub point1: Point<Real>,
    /// The pair of triangles achieving the minimum distance.
    pub pair: PrimitivePair,
}

/// Minimum distance between two models, and the pair of triangles achieving it.
///
/// The two trees are traversed simultaneously, depth-first. A pair of nodes is discarded as soon
/// as the distance between their bounding spheres exceeds the smallest triangle-triangle
/// distance found so far. On success, the witness pair is recorded in `cache`.
///
/// Both returned points are the closest points computed in the local space of the second mesh,
/// transformed by `world1`. A `None` placement is the identity.
pub fn distance_ssv_ssv<M0, M1>(
    model0: &M0,
    model1: &M1,
    world0: Option<&Isometry<Real>>,
    world1: Option<&Isometry<Real>>,
    options: &SsvQueryOptions,
    cache: &mut PairCache,
) -> Result<SsvDistance, SsvQueryError>
where
    M0: SsvModel + ?Sized,
    M1: SsvModel + ?Sized,
{
    let session = SsvQuerySession::new(model0, model1, world0, world1)?;
    let seed = session.seed_pair(options, cache);
    let (distance, point0, point1) = session.primitive_distance(seed);

    let mut visitor = SsvDistanceVisitor {
        session: &session,
        best_distance: distance,
        best_points: (point0, point1),
        best_pair: seed,
    };
    visitor.traverse();

    cache.record(visitor.best_pair);

    Ok(SsvDistance {
        distance: visitor.best_distance,
        point0: session.to_world(&visitor.best_points.0),
        point1: session.to_world(&visitor.best_points.1),
        pair: visitor.best_pair,
    })
}

struct SsvDistanceVisitor<'s, 'a, T0: ?Sized, S0: ?Sized, T1: ?Sized, S1: ?Sized> {
    session: &'s SsvQuerySession<'a, T0, S0, T1, S1>,
    best_distance: Real,
    best_points: (Point<Real>, Point<Real>),
    best_pair: PrimitivePair,
}

impl<T0, S0, T1, S1> SsvDistanceVisitor<'_, '_, T0, S0, T1, S1>
where
    T0: SsvHierarchy + ?Sized,
    S0: TriangleSource + ?Sized,
    T1: SsvHierarchy + ?Sized,
    S1: TriangleSource + ?Sized,
{
    fn traverse(&mut self) {
        let tree0 = self.session.tree0;
        let tree1 = self.session.tree1;
        let mut stack: SmallVec<[(u32, u32); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push((0, 0));

        while let Some((b0, b1)) = stack.pop() {
            if self.session.node_distance_lower_bound(b0, b1) > self.best_distance {
                continue;
            }

            match (tree0.node_kind(b0), tree1.node_kind(b1)) {
                (SsvNodeKind::Leaf { primitive: id0 }, SsvNodeKind::Leaf { primitive: id1 }) => {
                    let pair = PrimitivePair::new(id0, id1);
                    let (distance, point0, point1) = self.session.primitive_distance(pair);

                    if distance < self.best_distance {
                        self.best_distance = distance;
                        self.best_points = (point0, point1);
                        self.best_pair = pair;
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
    }
}
