//! This module contains the records produced by the estimator and the analyzer.
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

/// The result of a single hit-or-miss estimation run.
///
/// The record is immutable; it is created by the estimator and handed to the caller as plain
/// data. All derived fields are computed once at construction.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MonteCarloResult<T> {
    calls: usize,
    points_inside: usize,
    bounding_area: T,
    ratio: T,
    estimate: T,
    exact: T,
    error_pct: T,
}

impl<T: Copy> MonteCarloResult<T> {
    /// Returns the number of times $N$ a point has been drawn from the bounding region.
    pub const fn calls(&self) -> usize {
        self.calls
    }

    /// Returns the number of drawn points $N_\mathrm{in}$ that passed the containment test.
    pub const fn points_inside(&self) -> usize {
        self.points_inside
    }

    /// Returns the area $|B|$ of the bounding region the points were drawn from.
    pub fn bounding_area(&self) -> T {
        self.bounding_area
    }

    /// Returns the hit ratio $p = N_\mathrm{in} / N$, a value in $[0, 1]$.
    pub fn ratio(&self) -> T {
        self.ratio
    }

    /// Returns the area estimate $\hat{A} = p \cdot |B|$.
    pub fn estimate(&self) -> T {
        self.estimate
    }

    /// Returns the analytically exact area the estimate is compared against.
    pub fn exact_area(&self) -> T {
        self.exact
    }

    /// Returns the error percentage $|\hat{A} - A| / A \cdot 100$, or zero if the exact area
    /// is zero.
    pub fn error_percentage(&self) -> T {
        self.error_pct
    }
}

impl<T> MonteCarloResult<T>
where
    T: Float + FromPrimitive,
{
    /// Constructor. Derives the hit ratio, the area estimate and the error percentage from the
    /// raw counts.
    pub(crate) fn new(calls: usize, points_inside: usize, bounding_area: T, exact: T) -> Self {
        debug_assert!(calls > 0);
        debug_assert!(points_inside <= calls);

        // TODO: Get rid of unwrap.
        let ratio = T::from_usize(points_inside).unwrap() / T::from_usize(calls).unwrap();
        let estimate = ratio * bounding_area;
        let hundred = T::from_usize(100).unwrap();
        let error_pct = if exact > T::zero() {
            ((estimate - exact) / exact * hundred).abs()
        } else {
            T::zero()
        };

        Self {
            calls,
            points_inside,
            bounding_area,
            ratio,
            estimate,
            exact,
            error_pct,
        }
    }

    /// Returns the variance of the hit-or-miss estimator, $V = |B|^2 \, p (1 - p) / N$.
    pub fn var(&self) -> T {
        // TODO: Get rid of unwrap.
        let calls = T::from_usize(self.calls).unwrap();
        self.bounding_area * self.bounding_area * self.ratio * (T::one() - self.ratio) / calls
    }

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    pub fn std(&self) -> T {
        self.var().sqrt()
    }
}

/// One step of a convergence series: the requested sample size together with the result it
/// produced.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvergenceEntry<T> {
    calls: usize,
    result: MonteCarloResult<T>,
}

impl<T> ConvergenceEntry<T> {
    /// Constructor.
    pub(crate) const fn new(calls: usize, result: MonteCarloResult<T>) -> Self {
        Self { calls, result }
    }

    /// Returns the sample size this entry was produced with.
    pub const fn calls(&self) -> usize {
        self.calls
    }

    /// Returns the estimation result for this sample size.
    pub const fn result(&self) -> &MonteCarloResult<T> {
        &self.result
    }
}

/// The ordered outcome of a convergence analysis.
///
/// Entries appear in the exact order the sample counts were requested in, one entry per count.
/// The summary accessors [`Self::best`] and [`Self::worst`] return members of the series; ties
/// are broken by first occurrence.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvergenceSeries<T> {
    entries: Vec<ConvergenceEntry<T>>,
    min_error: usize,
    max_error: usize,
}

impl<T: Float> ConvergenceSeries<T> {
    /// Constructor. Computes the indices of the entries with the smallest and the largest error
    /// percentage.
    pub(crate) fn new(entries: Vec<ConvergenceEntry<T>>) -> Self {
        debug_assert!(!entries.is_empty());

        let mut min_error = 0;
        let mut max_error = 0;

        for (index, entry) in entries.iter().enumerate() {
            if entry.result().error_percentage() < entries[min_error].result().error_percentage()
            {
                min_error = index;
            }
            if entry.result().error_percentage() > entries[max_error].result().error_percentage()
            {
                max_error = index;
            }
        }

        Self {
            entries,
            min_error,
            max_error,
        }
    }

    /// Returns the entries of the series in request order.
    pub fn entries(&self) -> &[ConvergenceEntry<T>] {
        &self.entries
    }

    /// Returns the entry with the smallest error percentage.
    pub fn best(&self) -> &ConvergenceEntry<T> {
        &self.entries[self.min_error]
    }

    /// Returns the entry with the largest error percentage.
    pub fn worst(&self) -> &ConvergenceEntry<T> {
        &self.entries[self.max_error]
    }

    /// Destructure the series and return its entries.
    pub fn into_entries(self) -> Vec<ConvergenceEntry<T>> {
        self.entries
    }
}
