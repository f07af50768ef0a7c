use crate::math::{Point, Real};
use crate::query::details::{closest_points_segment_segment, project_local_point_on_triangle};
use crate::shape::Triangle;
use na::ComplexField;

/// Exact distance between two triangles, and a pair of closest points.
///
/// Both triangles must be expressed in the same coordinate frame. Returns
/// `(distance, point1, point2)` where `point1` lies on `tri1` and `point2` lies on `tri2`.
///
/// Intersecting triangles have a distance of exactly `0.0`, in which case both points are the
/// same point of the intersection. Degenerate triangles are handled as the segment or point
/// they collapse to.
pub fn distance_triangle_triangle(
    tri1: &Triangle,
    tri2: &Triangle,
) -> (Real, Point<Real>, Point<Real>) {
    if let Some(pt) = plane_crossing_point(tri1, tri2).or_else(|| plane_crossing_point(tri2, tri1))
    {
        return (0.0, pt, pt);
    }

    let mut best_sq = Real::MAX;
    let mut best = (tri1.a, tri2.a);
    let mut keep_closest = |pt1: Point<Real>, pt2: Point<Real>| {
        let dist_sq = na::distance_squared(&pt1, &pt2);
        if dist_sq < best_sq {
            best_sq = dist_sq;
            best = (pt1, pt2);
        }
    };

    for edge1 in tri1.edges() {
        for edge2 in tri2.edges() {
            let (pt1, pt2) = closest_points_segment_segment(&edge1, &edge2);
            keep_closest(pt1, pt2);
        }
    }

    // The segment tests above already cover the vertices of a degenerate triangle.
    if !tri2.is_degenerate() {
        for pt1 in tri1.vertices() {
            let (pt2, _) = project_local_point_on_triangle(tri2, &pt1);
            keep_closest(pt1, pt2);
        }
    }

    if !tri1.is_degenerate() {
        for pt2 in tri2.vertices() {
            let (pt1, _) = project_local_point_on_triangle(tri1, &pt2);
            keep_closest(pt1, pt2);
        }
    }

    (ComplexField::sqrt(best_sq), best.0, best.1)
}

// A point where `tri` touches the interior or boundary of `other`: either a vertex of `tri`
// lying exactly on `other`, or an edge of `tri` crossing the plane of `other` inside of it.
fn plane_crossing_point(tri: &Triangle, other: &Triangle) -> Option<Point<Real>> {
    if other.is_degenerate() {
        return None;
    }

    let normal = other.scaled_normal();
    let vertices = tri.vertices();
    let dists = vertices.map(|pt| normal.dot(&(pt - other.a)));

    for i in 0..3 {
        if dists[i] == 0.0 && other.contains_coplanar_point(&vertices[i]) {
            return Some(vertices[i]);
        }
    }

    for i in 0..3 {
        let j = (i + 1) % 3;

        if (dists[i] < 0.0 && dists[j] > 0.0) || (dists[i] > 0.0 && dists[j] < 0.0) {
            let t = dists[i] / (dists[i] - dists[j]);
            let pt = vertices[i] + (vertices[j] - vertices[i]) * t;

            if other.contains_coplanar_point(&pt) {
                return Some(pt);
            }
        }
    }

    None
}
