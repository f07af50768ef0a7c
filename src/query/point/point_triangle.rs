use crate::math::{Point, Real};
use crate::query::point::project_local_point_on_segment;
use crate::shape::{Segment, SegmentPointLocation, Triangle, TrianglePointLocation};

/// Projects a point on a triangle, and returns the projection with its location on the triangle.
///
/// The triangle is seen as a surface (a point "below" the triangle projects on its face, not on
/// itself). Degenerate triangles are supported and behave like the segment or point they
/// collapse to.
#[inline]
pub fn project_local_point_on_triangle(
    tri: &Triangle,
    pt: &Point<Real>,
) -> (Point<Real>, TrianglePointLocation) {
    let a = tri.a;
    let b = tri.b;
    let c = tri.c;

    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let ab_ap = ab.dot(&ap);
    let ac_ap = ac.dot(&ap);

    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        // Voronoï region of `a`.
        return (a, TrianglePointLocation::OnVertex(0));
    }

    let bp = pt - b;
    let ab_bp = ab.dot(&bp);
    let ac_bp = ac.dot(&bp);

    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        // Voronoï region of `b`.
        return (b, TrianglePointLocation::OnVertex(1));
    }

    let cp = pt - c;
    let ab_cp = ab.dot(&cp);
    let ac_cp = ac.dot(&cp);

    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        // Voronoï region of `c`.
        return (c, TrianglePointLocation::OnVertex(2));
    }

    // Explicit cross products are more numerically stable than the usual
    // dot-product-only formulation.
    let bc = c - b;
    let n = tri.scaled_normal();

    let vc = n.dot(&ab.cross(&ap));
    if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        // Voronoï region of `ab`.
        let v = ab_ap / ab.norm_squared();
        return (a + ab * v, TrianglePointLocation::OnEdge(0, [1.0 - v, v]));
    }

    let vb = -n.dot(&ac.cross(&cp));
    if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        // Voronoï region of `ac`.
        let w = ac_ap / ac.norm_squared();
        return (a + ac * w, TrianglePointLocation::OnEdge(2, [1.0 - w, w]));
    }

    let va = n.dot(&bc.cross(&bp));
    if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
        // Voronoï region of `bc`.
        let w = bc.dot(&bp) / bc.norm_squared();
        return (b + bc * w, TrianglePointLocation::OnEdge(1, [1.0 - w, w]));
    }

    // Voronoï region of the face.
    let denom = va + vb + vc;
    if denom > 0.0 {
        let v = vb / denom;
        let w = vc / denom;
        return (
            a + ab * v + ac * w,
            TrianglePointLocation::OnFace([1.0 - v - w, v, w]),
        );
    }

    // The triangle is degenerate: it collapsed into a segment (or a point), so the
    // projection lies on one of its edges.
    project_on_closest_edge(tri, pt)
}

fn project_on_closest_edge(
    tri: &Triangle,
    pt: &Point<Real>,
) -> (Point<Real>, TrianglePointLocation) {
    let mut best_dist = Real::MAX;
    let mut best = (tri.a, TrianglePointLocation::OnVertex(0));

    // Edges in `TrianglePointLocation` order: AB, BC, AC.
    let edges = [(0, tri.a, tri.b), (1, tri.b, tri.c), (2, tri.a, tri.c)];
    let vertex_ids = [[0, 1], [1, 2], [0, 2]];

    for (edge_id, p1, p2) in edges {
        let seg = Segment::new(p1, p2);
        let (proj, loc) = project_local_point_on_segment(&seg, pt);
        let dist = na::distance_squared(&proj, pt);

        if dist < best_dist {
            best_dist = dist;
            let location = match loc {
                SegmentPointLocation::OnVertex(i) => {
                    TrianglePointLocation::OnVertex(vertex_ids[edge_id as usize][i as usize])
                }
                SegmentPointLocation::OnEdge(bcoords) => {
                    TrianglePointLocation::OnEdge(edge_id, bcoords)
                }
            };
            best = (proj, location);
        }
    }

    best
}
