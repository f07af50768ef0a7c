//! Bounding sphere.

use crate::math::{Isometry, Point, Real};
use na::ComplexField;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// Creates a bounding sphere from its center and its squared radius.
    ///
    /// This is the representation stored by the nodes of sphere-swept-volume trees.
    #[inline]
    pub fn from_squared_radius(center: Point<Real>, squared_radius: Real) -> BoundingSphere {
        BoundingSphere::new(center, ComplexField::sqrt(squared_radius))
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The squared radius of this bounding sphere.
    #[inline]
    pub fn squared_radius(&self) -> Real {
        self.radius * self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// A lower bound of the distance between any point of `self` and any point of `other`.
    ///
    /// This is the center-to-center distance minus both radii. It is negative if the two spheres
    /// overlap.
    #[inline]
    pub fn distance_lower_bound(&self, other: &BoundingSphere) -> Real {
        na::distance(&self.center, &other.center) - self.radius - other.radius
    }

    /// Checks if this bounding sphere intersects another one.
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    /// Checks if this bounding sphere contains another one.
    #[inline]
    pub fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    /// Checks if this bounding sphere contains the given point.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.squared_radius()
    }

    /// Creates a new, enlarged version, of this bounding sphere.
    #[inline]
    pub fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
