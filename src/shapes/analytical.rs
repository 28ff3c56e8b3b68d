//! Closed-form exact areas for the supported shapes.
//!
//! These functions are pure and total for strictly positive inputs. They do not validate their
//! arguments; validation happens at the estimation entry points before any of them is called.
use num_traits::{Float, FloatConst, FromPrimitive};

/// Returns the area of a circle, $\pi r^2$.
pub fn circle_area<T: Float + FloatConst>(radius: T) -> T {
    T::PI() * radius * radius
}

/// Returns the area of a rectangle, $w \cdot h$.
pub fn rectangle_area<T: Float>(width: T, height: T) -> T {
    width * height
}

/// Returns the area of a triangle, $\frac{1}{2} b \cdot h$.
pub fn triangle_area<T: Float>(base: T, height: T) -> T {
    let two = T::one() + T::one();
    base * height / two
}

/// Returns the area of a square, $s^2$.
pub fn square_area<T: Float>(side: T) -> T {
    side * side
}

/// Returns the area of an ellipse, $\pi a b$.
pub fn ellipse_area<T: Float + FloatConst>(semi_major: T, semi_minor: T) -> T {
    T::PI() * semi_major * semi_minor
}

/// Returns the area of a regular hexagon with circumradius `side`, $\frac{3 \sqrt{3}}{2} s^2$.
pub fn hexagon_area<T: Float + FromPrimitive>(side: T) -> T {
    // TODO: Get rid of unwrap.
    let three = T::from_usize(3).unwrap();
    let two = T::from_usize(2).unwrap();
    three * three.sqrt() / two * side * side
}
