//! The core module
pub mod errors;
pub mod results;

pub use crate::core::errors::ValidationError;
pub use crate::core::results::{ConvergenceEntry, ConvergenceSeries, MonteCarloResult};

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single point drawn from a bounding region, classified against the target shape.
///
/// Sample points are ephemeral: the estimator only keeps a running counter of the points whose
/// containment test succeeded. They are exposed for consumers that want to draw the sampled
/// cloud, see [`crate::estimators::hit_or_miss::sample_cloud`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct SamplePoint<T> {
    x: T,
    y: T,
    inside: bool,
}

impl<T: Copy> SamplePoint<T> {
    /// Constructor.
    pub(crate) const fn new(x: T, y: T, inside: bool) -> Self {
        Self { x, y, inside }
    }

    /// Returns the horizontal coordinate of the point.
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the vertical coordinate of the point.
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns `true` if the point lies inside the target shape.
    pub const fn is_inside(&self) -> bool {
        self.inside
    }
}

/// An axis-aligned rectangle that fully contains a shape and from which uniform samples are
/// drawn.
///
/// The region is described by its center and its half-extents along both axes. It is derived
/// deterministically from a shape and its parameters, see
/// [`crate::shapes::ShapeKind::bounding_region`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct BoundingRegion<T> {
    center_x: T,
    center_y: T,
    half_width: T,
    half_height: T,
}

impl<T: Float> BoundingRegion<T> {
    /// Creates a region centered at the origin with the given half-extents.
    pub(crate) fn centered(half_width: T, half_height: T) -> Self {
        Self {
            center_x: T::zero(),
            center_y: T::zero(),
            half_width,
            half_height,
        }
    }

    /// Creates a region whose lower-left corner sits at the origin, spanning `width` times
    /// `height`.
    pub(crate) fn cornered(width: T, height: T) -> Self {
        let two = T::one() + T::one();
        Self {
            center_x: width / two,
            center_y: height / two,
            half_width: width / two,
            half_height: height / two,
        }
    }

    /// Returns the center of the region.
    pub fn center(&self) -> (T, T) {
        (self.center_x, self.center_y)
    }

    /// Returns the half-extent of the region along the horizontal axis.
    pub fn half_width(&self) -> T {
        self.half_width
    }

    /// Returns the half-extent of the region along the vertical axis.
    pub fn half_height(&self) -> T {
        self.half_height
    }

    /// Returns the range `[lo, hi)` covered by the region on the horizontal axis.
    pub fn x_range(&self) -> (T, T) {
        (
            self.center_x - self.half_width,
            self.center_x + self.half_width,
        )
    }

    /// Returns the range `[lo, hi)` covered by the region on the vertical axis.
    pub fn y_range(&self) -> (T, T) {
        (
            self.center_y - self.half_height,
            self.center_y + self.half_height,
        )
    }

    /// Returns the area of the region.
    ///
    /// This is the normalization entering the hit-or-miss estimate, so it is always the area of
    /// the rectangle that is actually sampled from.
    pub fn area(&self) -> T {
        let two = T::one() + T::one();
        (two * self.half_width) * (two * self.half_height)
    }

    /// Draws a point uniformly from the region, each coordinate independently uniform over its
    /// axis range.
    pub fn sample<R>(&self, rng: &mut R) -> (T, T)
    where
        R: Rng,
        Standard: Distribution<T>,
    {
        let (x_lo, x_hi) = self.x_range();
        let (y_lo, y_hi) = self.y_range();
        let x = x_lo + rng.gen::<T>() * (x_hi - x_lo);
        let y = y_lo + rng.gen::<T>() * (y_hi - y_lo);
        (x, y)
    }
}
