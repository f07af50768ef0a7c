use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::{Segment, SegmentPointLocation};

/// Closest points between two segments.
///
/// The first returned point lies on `seg1`, the second on `seg2`.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (loc1, loc2) = closest_points_segment_segment_with_locations(seg1, seg2);
    (seg1.point_at(&loc1), seg2.point_at(&loc2))
}

/// Closest points between two segments, given as locations on each segment.
///
/// Both segments must be expressed in the same coordinate frame. Parallel and zero-length
/// segments are supported.
#[inline]
pub fn closest_points_segment_segment_with_locations(
    seg1: &Segment,
    seg2: &Segment,
) -> (SegmentPointLocation, SegmentPointLocation) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.b - seg1.a;
    let d2 = seg2.b - seg2.a;
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = DEFAULT_EPSILON;
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (
        SegmentPointLocation::from_parameter(s),
        SegmentPointLocation::from_parameter(t),
    )
}
