//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Segment;
use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// Description of the location of a point on a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment AC.
    OnEdge(u32, [Real; 2]),
    /// The point lies on the triangle interior.
    OnFace([Real; 3]),
}

impl TrianglePointLocation {
    /// The barycentric coordinates corresponding to this point location.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        let mut bcoords = [0.0; 3];

        match self {
            TrianglePointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            TrianglePointLocation::OnEdge(i, uv) => {
                let idx = match i {
                    0 => (0, 1),
                    1 => (1, 2),
                    _ => (0, 2),
                };

                bcoords[idx.0] = uv[0];
                bcoords[idx.1] = uv[1];
            }
            TrianglePointLocation::OnFace(uvw) => bcoords = *uvw,
        }

        bcoords
    }

    /// Returns `true` if the point is located on the relative interior of the triangle.
    pub fn is_on_face(&self) -> bool {
        matches!(self, TrianglePointLocation::OnFace(..))
    }
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The centroid of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        crate::utils::center(&self.vertices())
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Returns a new triangle with vertices transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    ///
    /// The cross product is taken between the two shortest edges, which keeps it accurate for
    /// long and thin triangles.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let bc = self.c - self.b;
        let ca = self.a - self.c;
        let (ab_sq, bc_sq, ca_sq) = (ab.norm_squared(), bc.norm_squared(), ca.norm_squared());

        // AB × AC = BC × CA = CA × AB
        if ab_sq >= bc_sq && ab_sq >= ca_sq {
            bc.cross(&ca)
        } else if bc_sq >= ca_sq {
            ca.cross(&ab)
        } else {
            ab.cross(&bc)
        }
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        if self.is_degenerate() {
            None
        } else {
            Some(Unit::new_normalize(self.scaled_normal()))
        }
    }

    /// Checks if this triangle has a zero (or numerically negligible) area.
    ///
    /// A triangle is degenerate if two of its vertices coincide or if its three vertices are
    /// (nearly) collinear, i.e., if its height relative to its longest edge is below
    /// `DEFAULT_EPSILON * 100`. Long and thin triangles with a non-negligible area are not
    /// degenerate, whatever their angles.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        const EPS: Real = DEFAULT_EPSILON * 100.0;

        let longest_edge_sq = (self.b - self.a)
            .norm_squared()
            .max((self.c - self.b).norm_squared())
            .max((self.a - self.c).norm_squared());
        let max_normal_norm = EPS * longest_edge_sq;

        self.scaled_normal().norm_squared() <= max_normal_norm * max_normal_norm
    }

    /// Checks if a point lying on the plane of this triangle is inside of it (boundary included).
    ///
    /// The point is assumed to be on the triangle’s plane. The result is meaningless otherwise,
    /// or if the triangle is degenerate.
    #[inline]
    pub fn contains_coplanar_point(&self, pt: &Point<Real>) -> bool {
        let n = self.scaled_normal();
        let vertices = self.vertices();

        (0..3).all(|i| {
            let v1 = vertices[i];
            let v2 = vertices[(i + 1) % 3];
            n.dot(&(v2 - v1).cross(&(pt - v1))) >= 0.0
        })
    }
}
