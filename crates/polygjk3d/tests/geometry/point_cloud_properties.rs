// Randomized consistency checks between the distance and overlap queries on small point
// clouds, flat ones included. Unlike boxes, these have no closed-form distance.

use oorandom::Rand32;
use polygjk3d::math::{Point, Real};
use polygjk3d::query::{self, GJKResult, GjkOptions};
use polygjk3d::shape::PointSet;

const NUM_SEEDS: u64 = 20;
const SAMPLES_PER_SEED: usize = 100;

// A search reaching this cap reports the point sets as disjoint. This would break the checks
// on overlapping and touching sets below instead of hanging the test.
fn bounded_options() -> GjkOptions {
    GjkOptions {
        max_intersection_iterations: Some(64),
        ..GjkOptions::default()
    }
}

fn coord(rng: &mut Rand32, scale: Real) -> Real {
    (rng.rand_range(0..2001) as Real / 1000.0 - 1.0) * scale
}

fn random_point(rng: &mut Rand32, scale: Real) -> Point<Real> {
    let x = coord(rng, scale);
    let y = coord(rng, scale);
    let z = coord(rng, scale);
    Point::new(x, y, z)
}

// One to eight points, all of them on a single plane three times out of ten.
fn random_cloud(rng: &mut Rand32) -> Vec<Point<Real>> {
    let num_points = rng.rand_range(1..9) as usize;

    if rng.rand_range(0..10) < 3 {
        let origin = random_point(rng, 1.0);
        let u = random_point(rng, 1.0).coords;
        let v = random_point(rng, 1.0).coords;

        (0..num_points)
            .map(|_| {
                let s = coord(rng, 1.5);
                let t = coord(rng, 1.5);
                origin + u * s + v * t
            })
            .collect()
    } else {
        (0..num_points).map(|_| random_point(rng, 1.5)).collect()
    }
}

#[test]
fn random_clouds_distance_and_overlap_agree() {
    let options = bounded_options();
    let mut num_touching = 0;

    for seed in 0..NUM_SEEDS {
        let mut rng = Rand32::new(seed);

        for _ in 0..SAMPLES_PER_SEED {
            let pts1 = random_cloud(&mut rng);
            let pts2 = random_cloud(&mut rng);
            let g1 = PointSet::new(&pts1).unwrap();
            let g2 = PointSet::new(&pts2).unwrap();

            assert_eq!(query::query_overlap_with_options(&g1, &g1, &options), Ok(true));
            assert!(query::distance(&g1, &g1).unwrap() < 1.0e-3);

            let overlap = query::query_overlap_with_options(&g1, &g2, &options).unwrap();
            let res = query::query_distance(&g1, &g2).unwrap();

            if overlap {
                assert!(res.distance() < 1.0e-2, "{:?} {:?}", pts1, pts2);
            } else {
                assert!(!res.is_intersection(), "{:?} {:?}", pts1, pts2);
            }

            if res.distance() > 1.0e-2 {
                assert_eq!(
                    query::query_overlap_with_options(&g2, &g1, &options),
                    Ok(overlap)
                );
            }

            // Move the second cloud along the separation until both touch.
            if let GJKResult::ClosestPoints(sep) = res {
                let shift = sep.point1 - sep.point2;
                let touching: Vec<_> = pts2.iter().map(|pt| *pt + shift).collect();
                let g3 = PointSet::new(&touching).unwrap();
                num_touching += 1;

                assert_eq!(
                    query::query_overlap_with_options(&g1, &g3, &options),
                    Ok(true),
                    "{:?} {:?}",
                    pts1,
                    touching
                );
                assert_eq!(query::query_overlap_with_options(&g3, &g1, &options), Ok(true));
                assert!(query::distance(&g1, &g3).unwrap() < 1.0e-2);
            }
        }
    }

    assert!(num_touching > 0);
}

#[test]
fn random_triangles_overlap_themselves() {
    let options = bounded_options();

    for seed in 0..NUM_SEEDS {
        let mut rng = Rand32::new(seed);

        for _ in 0..SAMPLES_PER_SEED {
            let a = random_point(&mut rng, 1.5);
            let b = random_point(&mut rng, 1.5);
            let c = if rng.rand_range(0..2) == 0 {
                random_point(&mut rng, 1.5)
            } else {
                // Nearly collinear.
                let t = rng.rand_range(0..1001) as Real / 1000.0;
                let scale = (10.0 as Real).powi(-(rng.rand_range(2..7) as i32));
                a + (b - a) * t + random_point(&mut rng, scale).coords
            };

            let tri = [a, b, c];
            let g = PointSet::new(&tri).unwrap();

            assert_eq!(
                query::query_overlap_with_options(&g, &g, &options),
                Ok(true),
                "{:?}",
                tri
            );
            assert!(query::distance(&g, &g).unwrap() < 1.0e-3);
        }
    }
}
