//! Hit-or-miss estimator
use crate::core::{MonteCarloResult, SamplePoint, ValidationError};
use crate::shapes::ShapeKind;

use log::debug;
use num_traits::{Float, FloatConst, FromPrimitive};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Estimates the area of `shape` by drawing `calls` points uniformly from its bounding region
/// and counting how many pass the containment test.
///
/// Shapes that fill their bounding region (rectangle and square) are not sampled at all: the
/// hit ratio is exactly one and the estimate equals the exact area regardless of `calls`.
/// For all other shapes the result varies statistically between calls; only its structural
/// invariants are deterministic.
///
/// The estimation keeps a running counter only and allocates no per-point records.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidParameter`] if a shape parameter is not strictly positive
/// and [`ValidationError::InvalidSampleCount`] if `calls` is zero. Both are detected before any
/// point is drawn.
pub fn estimate<T, R>(
    shape: &ShapeKind<T>,
    rng: &mut R,
    calls: usize,
) -> Result<MonteCarloResult<T>, ValidationError>
where
    T: Float + FloatConst + FromPrimitive + std::fmt::Debug,
    R: Rng,
    Standard: Distribution<T>,
{
    shape.validate()?;

    if calls == 0 {
        return Err(ValidationError::InvalidSampleCount);
    }

    let region = shape.bounding_region();

    let points_inside = if shape.fills_bounding_region() {
        calls
    } else {
        (0..calls).fold(0, |hits, _| {
            let (x, y) = region.sample(rng);

            if shape.contains(x, y) {
                hits + 1
            } else {
                hits
            }
        })
    };

    let result = MonteCarloResult::new(calls, points_inside, region.area(), shape.exact_area());

    debug!(
        "estimated {} area with N={}: {:?} (exact {:?}, error {:?}%)",
        shape.name(),
        calls,
        result.estimate(),
        result.exact_area(),
        result.error_percentage()
    );

    Ok(result)
}

/// Draws `calls` classified points from the bounding region of `shape`.
///
/// The estimator itself never materializes points; this function exists for consumers that want
/// to render the sampled cloud, for example a scatter plot of hits and misses.
///
/// # Errors
///
/// Same failure modes as [`estimate`].
pub fn sample_cloud<T, R>(
    shape: &ShapeKind<T>,
    rng: &mut R,
    calls: usize,
) -> Result<Vec<SamplePoint<T>>, ValidationError>
where
    T: Float + FloatConst + FromPrimitive,
    R: Rng,
    Standard: Distribution<T>,
{
    shape.validate()?;

    if calls == 0 {
        return Err(ValidationError::InvalidSampleCount);
    }

    let region = shape.bounding_region();

    Ok((0..calls)
        .map(|_| {
            let (x, y) = region.sample(rng);
            SamplePoint::new(x, y, shape.contains(x, y))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand_pcg::Pcg64;

    fn rng() -> Pcg64 {
        Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
    }

    #[test]
    fn test_circle_estimate_approaches_pi() {
        let shape = ShapeKind::Circle { radius: 1.0 };
        let result = estimate(&shape, &mut rng(), 100_000).unwrap();

        assert_eq!(result.calls(), 100_000);
        assert!(result.points_inside() <= result.calls());
        assert_eq!(result.bounding_area(), 4.0);
        assert_approx_eq!(result.exact_area(), std::f64::consts::PI);
        // 100k samples put the estimate well within two percent of pi
        assert!(result.error_percentage() < 2.0);
    }

    #[test]
    fn test_rectangle_is_estimated_exactly() {
        let shape = ShapeKind::Rectangle {
            width: 3.0,
            height: 2.0,
        };

        for &calls in &[1, 100, 10_000] {
            let result = estimate(&shape, &mut rng(), calls).unwrap();

            assert_eq!(result.points_inside(), calls);
            assert_eq!(result.ratio(), 1.0);
            assert_eq!(result.estimate(), 6.0);
            assert_eq!(result.error_percentage(), 0.0);
        }
    }

    #[test]
    fn test_square_is_estimated_exactly() {
        let shape = ShapeKind::Square { side: 2.5 };
        let result = estimate(&shape, &mut rng(), 1000).unwrap();

        assert_eq!(result.points_inside(), 1000);
        assert_eq!(result.estimate(), 6.25);
        assert_eq!(result.error_percentage(), 0.0);
    }

    #[test]
    fn test_estimate_works_with_f32() {
        let shape = ShapeKind::Circle { radius: 1.0_f32 };
        let result = estimate(&shape, &mut rng(), 10_000).unwrap();

        assert!(result.ratio() >= 0.0 && result.ratio() <= 1.0);
        assert!(result.error_percentage() >= 0.0);
    }

    #[test]
    fn test_invalid_parameters_are_rejected_before_sampling() {
        let mut rng = rng();

        assert_eq!(
            estimate(&ShapeKind::Circle { radius: 0.0 }, &mut rng, 1000).unwrap_err(),
            ValidationError::InvalidParameter {
                name: "radius",
                value: 0.0
            }
        );
        assert_eq!(
            estimate(
                &ShapeKind::Rectangle {
                    width: -1.0,
                    height: 1.0
                },
                &mut rng,
                1000
            )
            .unwrap_err(),
            ValidationError::InvalidParameter {
                name: "width",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_zero_calls_are_rejected() {
        let shape = ShapeKind::Circle { radius: 1.0 };

        assert_eq!(
            estimate(&shape, &mut rng(), 0).unwrap_err(),
            ValidationError::InvalidSampleCount
        );
        assert!(matches!(
            sample_cloud(&shape, &mut rng(), 0),
            Err(ValidationError::InvalidSampleCount)
        ));
    }

    #[test]
    fn test_sample_cloud_classifies_points() {
        let shape = ShapeKind::Circle { radius: 1.0 };
        let cloud = sample_cloud(&shape, &mut rng(), 1000).unwrap();

        assert_eq!(cloud.len(), 1000);

        for point in &cloud {
            assert!((-1.0..1.0).contains(&point.x()));
            assert!((-1.0..1.0).contains(&point.y()));
            assert_eq!(point.is_inside(), shape.contains(point.x(), point.y()));
        }

        // with radius 1 roughly pi/4 of the points are hits
        let hits = cloud.iter().filter(|p| p.is_inside()).count();
        assert!(hits > 600 && hits < 950);
    }
}
