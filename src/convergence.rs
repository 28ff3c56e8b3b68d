//! Convergence analysis across a sequence of sample sizes.
use crate::callbacks::Callback;
use crate::core::{ConvergenceEntry, ConvergenceSeries, ValidationError};
use crate::estimators::hit_or_miss;
use crate::shapes::ShapeKind;

use log::debug;
use num_traits::{Float, FloatConst, FromPrimitive};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Runs the hit-or-miss estimator for `shape` once per entry of `sample_counts` and assembles
/// the results into a [`ConvergenceSeries`].
///
/// The entries of the series appear in the exact order the sample counts were given in; callers
/// typically pass an ascending sequence such as `[100, 500, 1000, 5000, 10000, 50000, 100000]`.
/// The `callback` is invoked after every finished sample size with the series collected so far,
/// so a consumer can observe the analysis progressively. After the last entry the summary of
/// the series is computed, see [`ConvergenceSeries::best`] and [`ConvergenceSeries::worst`].
///
/// # Errors
///
/// The whole request is validated up-front: an invalid shape parameter returns
/// [`ValidationError::InvalidParameter`], an empty `sample_counts` returns
/// [`ValidationError::EmptySampleCounts`] and any zero count returns
/// [`ValidationError::InvalidSampleCount`]. In all cases no sampling is performed and no
/// partial series is produced.
pub fn analyze<T, R>(
    shape: &ShapeKind<T>,
    rng: &mut R,
    callback: &impl Callback<T>,
    sample_counts: &[usize],
) -> Result<ConvergenceSeries<T>, ValidationError>
where
    T: Float + FloatConst + FromPrimitive + std::fmt::Debug,
    R: Rng,
    Standard: Distribution<T>,
{
    shape.validate()?;

    if sample_counts.is_empty() {
        return Err(ValidationError::EmptySampleCounts);
    }

    if sample_counts.contains(&0) {
        return Err(ValidationError::InvalidSampleCount);
    }

    debug!(
        "analyzing {} convergence over {} sample sizes",
        shape.name(),
        sample_counts.len()
    );

    // storage for the results of each sample size
    let mut entries = Vec::with_capacity(sample_counts.len());

    // sample sizes are treated sequentially, in request order
    for &calls in sample_counts {
        let result = hit_or_miss::estimate(shape, rng, calls)?;

        entries.push(ConvergenceEntry::new(calls, result));
        callback.publish(&entries);
    }

    Ok(ConvergenceSeries::new(entries))
}
