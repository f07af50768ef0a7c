use crate::random_soup::{brute_force_distance, model, random_isometry, random_soup, rng};
use approx::assert_relative_eq;
use rand::Rng;
use ssv3d::query::{self, PairCache, SsvTreeCollider};

#[test]
fn distance_matches_brute_force() {
    for seed in 0..40 {
        let mut rng = rng(seed);
        let len0 = rng.gen_range(1..32);
        let len1 = rng.gen_range(1..32);
        let tris0 = random_soup(&mut rng, len0);
        let tris1 = random_soup(&mut rng, len1);
        let world0 = random_isometry(&mut rng, 3.0);
        let world1 = random_isometry(&mut rng, 3.0);

        let model0 = model(&tris0);
        let model1 = model(&tris1);
        let mut cache = PairCache::new();

        let result =
            query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache).unwrap();
        let (expected, _) = brute_force_distance(&tris0, &tris1, &world0, &world1);

        assert!(result.distance >= 0.0);
        assert_relative_eq!(result.distance, expected, epsilon = 1.0e-4);
        assert_eq!(cache.last_pair(), Some(result.pair));

        // The reported pair and points achieve the reported distance.
        let tri0 = tris0[result.pair.id0 as usize].transformed(&world0);
        let tri1 = tris1[result.pair.id1 as usize].transformed(&world1);
        let (pair_dist, _, _) = ssv3d::query::details::distance_triangle_triangle(&tri0, &tri1);
        assert_relative_eq!(pair_dist, result.distance, epsilon = 1.0e-4);
        assert_relative_eq!(
            ssv3d::na::distance(&result.point0, &result.point1),
            result.distance,
            epsilon = 1.0e-4
        );
    }
}

#[test]
fn distance_is_symmetric() {
    for seed in 100..130 {
        let mut rng = rng(seed);
        let tris0 = random_soup(&mut rng, 20);
        let tris1 = random_soup(&mut rng, 12);
        let world0 = random_isometry(&mut rng, 4.0);
        let world1 = random_isometry(&mut rng, 4.0);

        let model0 = model(&tris0);
        let model1 = model(&tris1);
        let mut cache = PairCache::new();

        let d01 = query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache)
            .unwrap()
            .distance;
        let d10 = query::distance(&model1, &model0, Some(&world1), Some(&world0), &mut cache)
            .unwrap()
            .distance;

        assert_relative_eq!(d01, d10, epsilon = 1.0e-4);
    }
}

#[test]
fn distance_is_invariant_under_rigid_motion() {
    for seed in 200..230 {
        let mut rng = rng(seed);
        let tris0 = random_soup(&mut rng, 16);
        let tris1 = random_soup(&mut rng, 16);
        let world0 = random_isometry(&mut rng, 3.0);
        let world1 = random_isometry(&mut rng, 3.0);
        let motion = random_isometry(&mut rng, 10.0);

        let model0 = model(&tris0);
        let model1 = model(&tris1);
        let mut cache = PairCache::new();

        let d = query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache)
            .unwrap()
            .distance;
        let moved0 = motion * world0;
        let moved1 = motion * world1;
        let moved = query::distance(&model0, &model1, Some(&moved0), Some(&moved1), &mut cache)
            .unwrap()
            .distance;

        assert_relative_eq!(d, moved, epsilon = 1.0e-3);
    }
}

#[test]
fn collide_agrees_with_distance() {
    for seed in 300..340 {
        let mut rng = rng(seed);
        let tris0 = random_soup(&mut rng, 24);
        let tris1 = random_soup(&mut rng, 24);
        let world0 = random_isometry(&mut rng, 3.0);
        let world1 = random_isometry(&mut rng, 3.0);

        let model0 = model(&tris0);
        let model1 = model(&tris1);
        let mut cache = PairCache::new();

        let d = query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache)
            .unwrap()
            .distance;

        let hit = query::collide(
            &model0,
            &model1,
            Some(&world0),
            Some(&world1),
            d + 1.0e-3,
            &mut cache,
        )
        .unwrap();
        assert!(hit.is_some(), "missed a pair at distance {d}");
        assert_eq!(cache.last_pair(), hit);

        if d > 1.0e-2 {
            let miss = query::collide(
                &model0,
                &model1,
                Some(&world0),
                Some(&world1),
                d - 1.0e-3,
                &mut cache,
            )
            .unwrap();
            assert_eq!(miss, None);
            assert_eq!(cache.last_pair(), hit);
        }
    }
}

#[test]
fn quantized_trees_give_the_same_distances() {
    for seed in 400..420 {
        let mut rng = rng(seed);
        let tris0 = random_soup(&mut rng, 30);
        let tris1 = random_soup(&mut rng, 30);
        let world0 = random_isometry(&mut rng, 3.0);
        let world1 = random_isometry(&mut rng, 3.0);

        let model0 = model(&tris0);
        let model1 = model(&tris1);
        let quantized0 = model0.quantized();
        let quantized1 = model1.quantized();
        let mut cache = PairCache::new();

        let exact = query::distance(&model0, &model1, Some(&world0), Some(&world1), &mut cache)
            .unwrap()
            .distance;
        let quantized = query::distance(
            &quantized0,
            &quantized1,
            Some(&world0),
            Some(&world1),
            &mut cache,
        )
        .unwrap()
        .distance;

        assert_relative_eq!(exact, quantized, epsilon = 1.0e-5);
    }
}

#[test]
fn warm_start_doesnt_change_results() {
    let cold = SsvTreeCollider::new();
    let warm = SsvTreeCollider::new().with_warm_start(true);
    let mut rng = rng(500);
    let tris0 = random_soup(&mut rng, 32);
    let tris1 = random_soup(&mut rng, 32);
    let model0 = model(&tris0);
    let model1 = model(&tris1);
    let mut warm_cache = PairCache::new();

    for _ in 0..30 {
        let world0 = random_isometry(&mut rng, 3.0);
        let world1 = random_isometry(&mut rng, 3.0);
        let mut cold_cache = PairCache::new();

        let expected = cold
            .distance(&model0, &model1, Some(&world0), Some(&world1), &mut cold_cache)
            .unwrap()
            .distance;
        let result = warm
            .distance(&model0, &model1, Some(&world0), Some(&world1), &mut warm_cache)
            .unwrap()
            .distance;
        assert_relative_eq!(expected, result, epsilon = 1.0e-5);

        for tolerance in [expected - 1.0e-2, expected + 1.0e-2] {
            let cold_hit = cold
                .collide(
                    &model0,
                    &model1,
                    Some(&world0),
                    Some(&world1),
                    tolerance,
                    &mut cold_cache,
                )
                .unwrap();
            let warm_hit = warm
                .collide(
                    &model0,
                    &model1,
                    Some(&world0),
                    Some(&world1),
                    tolerance,
                    &mut warm_cache,
                )
                .unwrap();
            assert_eq!(cold_hit.is_some(), warm_hit.is_some());
        }
    }
}
