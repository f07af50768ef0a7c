use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::utils;
use na::ComplexField;

/// Computes the bounding sphere of a set of point, given its center.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> BoundingSphere {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    BoundingSphere::new(center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding sphere of the specified set of point.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> BoundingSphere {
    point_cloud_bounding_sphere_with_center(pts, utils::center(pts))
}

/// Computes the smallest sphere centered at `center` that contains all the given spheres.
#[inline]
pub fn spheres_bounding_sphere_with_center<'a>(
    spheres: impl IntoIterator<Item = &'a BoundingSphere>,
    center: Point<Real>,
) -> BoundingSphere {
    let mut radius: Real = 0.0;

    for sphere in spheres {
        radius = radius.max(na::distance(&center, &sphere.center) + sphere.radius);
    }

    BoundingSphere::new(center, radius)
}
