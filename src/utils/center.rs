use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// # Panics
///
/// Panics if the input slice is empty.
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    let mut res = Point::origin();
    for pt in pts {
        res += pt.coords * denom;
    }

    res
}

/// Computes the center of the axis-aligned box enclosing a set of points.
///
/// Returns the origin if `pts` yields nothing.
#[inline]
pub fn aabb_center(pts: impl IntoIterator<Item = Point<Real>>) -> Point<Real> {
    let mut pts = pts.into_iter();
    let Some(first) = pts.next() else {
        return Point::origin();
    };

    let mut mins = first;
    let mut maxs = first;

    for pt in pts {
        mins = mins.inf(&pt);
        maxs = maxs.sup(&pt);
    }

    na::center(&mins, &maxs)
}
