use crate::random_soup::{model, random_isometry, rng};
use crate::reference_distance::reference_brute_force;
use rand::rngs::StdRng;
use rand::Rng;
use ssv3d::math::{Point, Real};
use ssv3d::query::{self, PairCache};
use ssv3d::shape::Triangle;

// A long and thin triangle of the `xy` plane. Its angle at the origin is `width / length`.
fn sliver(length: Real, width: Real) -> Triangle {
    Triangle::new(
        Point::origin(),
        Point::new(length, 0.0, 0.0),
        Point::new(length, width, 0.0),
    )
}

/// Slivers with real area, each paired with a small vertical triangle placed above a point of
/// its face, far from its long edges.
///
/// If `piercing` is `true`, the vertical triangles cross their sliver. Otherwise, their lowest
/// vertex stands above the face, closer to it than to any of its edges.
fn slivers_with_companions(
    rng: &mut StdRng,
    len: usize,
    piercing: bool,
) -> (Vec<Triangle>, Vec<Triangle>) {
    let mut slivers = Vec::with_capacity(len);
    let mut companions = Vec::with_capacity(len);

    for _ in 0..len {
        let frame = random_isometry(rng, 10.0);
        let length: Real = rng.gen_range(35.0..45.0);
        let width = rng.gen_range(0.005..0.01);

        let x = length * rng.gen_range(0.3..0.9);
        let local_width = width * x / length;
        let y = local_width * rng.gen_range(0.4..0.6);
        let margin = y.min(local_width - y);

        let (bottom, top) = if piercing {
            (-0.5, 0.5)
        } else {
            let height = margin * rng.gen_range(0.2..0.5);
            (height, height + 0.5)
        };

        let companion = Triangle::new(
            Point::new(x, y, bottom),
            Point::new(x, y, top),
            Point::new(x + 0.01, y, top),
        );

        slivers.push(sliver(length, width).transformed(&frame));
        companions.push(companion.transformed(&frame));
    }

    (slivers, companions)
}

#[test]
fn slivers_are_not_degenerate() {
    let mut rng = rng(0);
    let (slivers, _) = slivers_with_companions(&mut rng, 32, true);
    assert!(slivers.iter().all(|tri| !tri.is_degenerate()));
}

#[test]
fn pierced_slivers_intersect() {
    for seed in 0..20 {
        let mut rng = rng(seed);
        let (slivers, companions) = slivers_with_companions(&mut rng, 8, true);
        let world = random_isometry(&mut rng, 3.0);

        let model0 = model(&slivers);
        let model1 = model(&companions);
        let mut cache = PairCache::new();

        let expected = reference_brute_force(&slivers, &companions, &world, &world);
        assert_eq!(expected, 0.0);

        let result = query::distance(&model0, &model1, None, None, &mut cache).unwrap();
        assert_eq!(result.distance, 0.0);
        let result = query::distance(&model1, &model0, None, None, &mut cache).unwrap();
        assert_eq!(result.distance, 0.0);

        assert!(query::collide(&model0, &model1, None, None, 0.0, &mut cache)
            .unwrap()
            .is_some());
        assert!(query::collide(&model1, &model0, None, None, 0.0, &mut cache)
            .unwrap()
            .is_some());

        let moved = query::distance(&model0, &model1, Some(&world), Some(&world), &mut cache)
            .unwrap()
            .distance;
        assert!(moved <= 1.0e-4);
    }
}

#[test]
fn distance_above_slivers_matches_reference() {
    for seed in 100..120 {
        let mut rng = rng(seed);
        let (slivers, companions) = slivers_with_companions(&mut rng, 8, false);
        let world = random_isometry(&mut rng, 3.0);

        let model0 = model(&slivers);
        let model1 = model(&companions);
        let mut cache = PairCache::new();

        let expected = reference_brute_force(&slivers, &companions, &world, &world) as Real;

        let d01 = query::distance(&model0, &model1, Some(&world), Some(&world), &mut cache)
            .unwrap()
            .distance;
        let d10 = query::distance(&model1, &model0, Some(&world), Some(&world), &mut cache)
            .unwrap()
            .distance;

        assert!(
            (d01 - expected).abs() <= 1.0e-4,
            "seed {}: {} != {}",
            seed,
            d01,
            expected
        );
        assert!(
            (d10 - expected).abs() <= 1.0e-4,
            "seed {}: {} != {}",
            seed,
            d10,
            expected
        );

        assert!(query::collide(
            &model0,
            &model1,
            Some(&world),
            Some(&world),
            expected + 1.0e-4,
            &mut cache
        )
        .unwrap()
        .is_some());
    }
}

#[test]
fn random_sliver_soups_match_reference() {
    for seed in 200..230 {
        let mut rng = rng(seed);
        let mut random_slivers = |len: usize| -> Vec<Triangle> {
            (0..len)
                .map(|_| {
                    let frame = random_isometry(&mut rng, 2.0);
                    let length = rng.gen_range(2.0..4.0);
                    let width = rng.gen_range(1.0e-4..5.0e-4);
                    sliver(length, width).transformed(&frame)
                })
                .collect()
        };
        let tris0 = random_slivers(24);
        let tris1 = random_slivers(24);
        let world0 = random_isometry(&mut rng, 1.0);
        let world1 = random_isometry(&mut rng, 1.0);

        let model0 = model(&tris0);
        let model1 = model(&tris1);
        let mut cache = PairCache::new();

        let expected = reference_brute_force(&tris0, &tris1, &world0, &world1) as Real;
        let result =
            query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache).unwrap();

        assert!(
            (result.distance - expected).abs() <= 1.0e-4,
            "seed {}: {} != {}",
            seed,
            result.distance,
            expected
        );
    }
}
