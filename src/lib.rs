#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `hitmiss` estimates the area of planar geometric shapes using hit-or-miss [Monte
//! Carlo sampling] and compares each estimate against the analytically exact area, so that the
//! convergence of the estimator can be studied as a function of the sample size.
//!
//! # Features
//!
//! This library was designed with the following features as essential in mind:
//!
//! - **Generic numeric type**. The numeric type used in this library is not fixed, but instead a
//! generic parameter, so that the estimation routines can be used with either `f32`, `f64`, or a
//! custom numeric type that implements the `Float` trait from the `num-traits` crate.
//! - **Generic random number generator**. Every random number generator that implements the `Rng`
//! trait from the `rand` crate can be used with the estimator. The generator is injected by the
//! caller, which means tests can substitute a seeded generator and obtain reproducible runs.
//! - **Shapes as a sum type**. The supported shapes form a closed set of variants, each carrying
//! its defining parameters. Bounding region, containment test and exact area are dispatched by
//! pattern matching, so adding a shape is a localized change.
//! - **Fail-fast validation**. Non-positive shape parameters and empty or zero sample counts are
//! rejected before a single point is drawn. The library never substitutes defaults or clamps
//! invalid inputs.
//! - **Progressive publishing**. The convergence analyzer invokes a callback after every finished
//! sample size with the series collected so far, so a consumer can refresh a display while the
//! analysis is still running. A channel-backed callback is provided for consumers living on
//! another thread.
//!
//! # What is ...?
//!
//! This section is a dictionary of terms that are used in this documentation. Given a shape $S$
//! contained in an axis-aligned bounding region $B$, the hit-or-miss estimate of its area is
//!
//! $$ \hat{A} = \frac{N_\mathrm{in}}{N} \cdot |B| $$
//!
//! where the $N$ sampled points are uniformly distributed over $B$. We use the following terms:
//!
//! - the number of *calls* or the *sample size* is $N$, which is the number of points drawn from
//! the bounding region. We assume that this is the expensive operation;
//! - the *bounding region* is the axis-aligned rectangle $B$ that fully contains the shape and
//! over which points are sampled;
//! - the *containment predicate* is the boolean test deciding whether a sampled point lies inside
//! the shape; $N_\mathrm{in}$ counts the points for which it holds;
//! - the *exact area* is the closed-form analytically computed area of the shape, used as ground
//! truth for the error;
//! - the *error percentage* is $|\hat{A} - A| / A \cdot 100$, the relative deviation of the
//! estimate from the exact area $A$;
//! - a *convergence series* is the ordered collection of estimates obtained for an increasing
//! sequence of sample sizes, used to study estimator accuracy versus cost.
//!
//! [Monte Carlo sampling]: https://en.wikipedia.org/wiki/Monte_Carlo_method

pub mod callbacks;
pub mod convergence;
pub mod core;
pub mod estimators;
pub mod shapes;

pub use crate::core::*;
