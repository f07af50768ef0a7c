use crate::math::{Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// Projects a point on a segment, and returns the projection with its location on the segment.
///
/// Zero-length segments are supported: every point projects on their first vertex.
#[inline]
pub fn project_local_point_on_segment(
    seg: &Segment,
    pt: &Point<Real>,
) -> (Point<Real>, SegmentPointLocation) {
    let ab = seg.b - seg.a;
    let ap = pt - seg.a;
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    if ab_ap <= 0.0 {
        // Voronoï region of vertex 'a'.
        (seg.a, SegmentPointLocation::OnVertex(0))
    } else if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        (seg.b, SegmentPointLocation::OnVertex(1))
    } else {
        // Voronoï region of the segment interior.
        let u = ab_ap / sqnab;
        (seg.a + ab * u, SegmentPointLocation::OnEdge([1.0 - u, u]))
    }
}
