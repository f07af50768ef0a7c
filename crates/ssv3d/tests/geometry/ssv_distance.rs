use crate::random_soup::model;
use approx::assert_relative_eq;
use ssv3d::math::{Isometry, Point, Vector};
use ssv3d::query::{self, PairCache, PrimitivePair};
use ssv3d::shape::Triangle;

fn unit_triangle(z: f32) -> Triangle {
    Triangle::new(
        Point::new(0.0, 0.0, z),
        Point::new(1.0, 0.0, z),
        Point::new(0.0, 1.0, z),
    )
}

#[test]
fn parallel_triangles_distance() {
    let model0 = model(&[unit_triangle(0.0)]);
    let model1 = model(&[unit_triangle(2.0)]);
    let mut cache = PairCache::new();

    let result = query::distance(&model0, &model1, None, None, &mut cache).unwrap();
    assert_relative_eq!(result.distance, 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(result.point0.z, 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(result.point1.z, 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(
        result.point1 - result.point0,
        Vector::new(0.0, 0.0, 2.0),
        epsilon = 1.0e-5
    );
    assert_eq!(result.pair, PrimitivePair::new(0, 0));
    assert_eq!(cache.last_pair(), Some(PrimitivePair::new(0, 0)));
}

#[test]
fn placement_of_first_model_moves_it() {
    let model0 = model(&[unit_triangle(0.0)]);
    let model1 = model(&[unit_triangle(2.0)]);
    let mut cache = PairCache::new();

    let world0 = Isometry::translation(0.0, 0.0, -1.0);
    let result = query::distance(&model0, &model1, Some(&world0), None, &mut cache).unwrap();
    assert_relative_eq!(result.distance, 3.0, epsilon = 1.0e-5);
}

#[test]
fn output_points_are_mapped_by_second_placement() {
    let model0 = model(&[unit_triangle(0.0)]);
    let model1 = model(&[unit_triangle(0.0)]);
    let mut cache = PairCache::new();

    // Mesh 1 is moved 2 units up, then both points are expressed in its world space.
    let world1 = Isometry::translation(10.0, 0.0, 2.0);
    let world0 = Isometry::translation(10.0, 0.0, 0.0);
    let result =
        query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache).unwrap();

    assert_relative_eq!(result.distance, 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(result.point0.z, 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(result.point1.z, 2.0, epsilon = 1.0e-5);
    assert!(result.point0.x >= 10.0 - 1.0e-5 && result.point0.x <= 11.0 + 1.0e-5);
    assert!(result.point1.x >= 10.0 - 1.0e-5 && result.point1.x <= 11.0 + 1.0e-5);
}

#[test]
fn coplanar_placement_has_zero_distance() {
    let model0 = model(&[unit_triangle(0.0)]);
    let model1 = model(&[unit_triangle(2.0)]);
    let mut cache = PairCache::new();

    let world1 = Isometry::translation(0.0, 0.0, -2.0);
    let result = query::distance(&model0, &model1, None, Some(&world1), &mut cache).unwrap();
    assert_eq!(result.distance, 0.0);
    assert_eq!(
        query::collide(&model0, &model1, None, Some(&world1), 0.0, &mut cache).unwrap(),
        Some(PrimitivePair::new(0, 0))
    );
}

#[test]
fn crossing_triangles_have_zero_distance() {
    let model0 = model(&[unit_triangle(0.0)]);
    let model1 = model(&[Triangle::new(
        Point::new(0.2, 0.2, -0.5),
        Point::new(0.2, 0.2, 0.5),
        Point::new(0.6, 0.2, 0.5),
    )]);
    let mut cache = PairCache::new();

    let result = query::distance(&model0, &model1, None, None, &mut cache).unwrap();
    assert_eq!(result.distance, 0.0);
    assert_relative_eq!(result.point0, result.point1);
    assert_relative_eq!(result.point0, Point::new(0.2, 0.2, 0.0), epsilon = 1.0e-5);

    assert!(query::collide(&model0, &model1, None, None, 0.0, &mut cache)
        .unwrap()
        .is_some());
}

#[test]
fn distance_picks_closest_pair_among_many() {
    // A row of triangles, each 1 unit farther than the previous one.
    let row: Vec<_> = (0..16)
        .map(|i| unit_triangle(2.0 + i as f32))
        .collect();
    let model0 = model(&[unit_triangle(0.0)]);
    let model1 = model(&row);
    let mut cache = PairCache::new();

    let result = query::distance(&model0, &model1, None, None, &mut cache).unwrap();
    assert_relative_eq!(result.distance, 2.0, epsilon = 1.0e-5);
    assert_eq!(result.pair, PrimitivePair::new(0, 0));

    // Reversed placement: the last triangle of the row becomes the closest one.
    let world0 = Isometry::translation(0.0, 0.0, 20.0);
    let result = query::distance(&model0, &model1, Some(&world0), None, &mut cache).unwrap();
    assert_relative_eq!(result.distance, 3.0, epsilon = 1.0e-5);
    assert_eq!(result.pair, PrimitivePair::new(0, 15));
    assert_eq!(cache.last_pair(), Some(PrimitivePair::new(0, 15)));
}
