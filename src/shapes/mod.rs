//! Shape definitions.
//!
//! Every supported shape is a variant of [`ShapeKind`], carrying its defining parameters.
//! Bounding region, containment predicate and exact area are dispatched by pattern matching on
//! the variant.
pub mod analytical;

use crate::core::{BoundingRegion, ValidationError};
use num_traits::{Float, FloatConst, FromPrimitive};
use serde::{Deserialize, Serialize};

fn check_positive<T: Float>(name: &'static str, value: T) -> Result<(), ValidationError> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(ValidationError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// The closed set of planar shapes supported by the estimator.
///
/// All parameters must be strictly positive; [`Self::validate`] is called by the estimation
/// entry points before any sampling takes place.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum ShapeKind<T> {
    /// A circle centered at the origin.
    Circle {
        /// The radius of the circle.
        radius: T,
    },
    /// An axis-aligned rectangle with its lower-left corner at the origin.
    Rectangle {
        /// The horizontal extent of the rectangle.
        width: T,
        /// The vertical extent of the rectangle.
        height: T,
    },
    /// A right triangle with legs along the axes and the right angle at the origin. The
    /// hypotenuse runs from `(base, 0)` to `(0, height)`.
    Triangle {
        /// The length of the leg along the horizontal axis.
        base: T,
        /// The length of the leg along the vertical axis.
        height: T,
    },
    /// An axis-aligned square with its lower-left corner at the origin.
    Square {
        /// The side length of the square.
        side: T,
    },
    /// An ellipse centered at the origin with its semi-axes along the coordinate axes.
    Ellipse {
        /// The semi-axis along the horizontal axis.
        semi_major: T,
        /// The semi-axis along the vertical axis.
        semi_minor: T,
    },
    /// A regular hexagon centered at the origin with circumradius `side`, one vertex on the
    /// positive horizontal axis.
    Hexagon {
        /// The side length of the hexagon, which equals its circumradius.
        side: T,
    },
}

impl<T> ShapeKind<T>
where
    T: Float + FloatConst + FromPrimitive,
{
    /// Checks that every parameter of the shape is strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidParameter`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Circle { radius } => check_positive("radius", *radius),
            Self::Rectangle { width, height } => {
                check_positive("width", *width)?;
                check_positive("height", *height)
            }
            Self::Triangle { base, height } => {
                check_positive("base", *base)?;
                check_positive("height", *height)
            }
            Self::Square { side } => check_positive("side", *side),
            Self::Ellipse {
                semi_major,
                semi_minor,
            } => {
                check_positive("semi_major", *semi_major)?;
                check_positive("semi_minor", *semi_minor)
            }
            Self::Hexagon { side } => check_positive("side", *side),
        }
    }

    /// Returns the analytically exact area of the shape.
    pub fn exact_area(&self) -> T {
        match self {
            Self::Circle { radius } => analytical::circle_area(*radius),
            Self::Rectangle { width, height } => analytical::rectangle_area(*width, *height),
            Self::Triangle { base, height } => analytical::triangle_area(*base, *height),
            Self::Square { side } => analytical::square_area(*side),
            Self::Ellipse {
                semi_major,
                semi_minor,
            } => analytical::ellipse_area(*semi_major, *semi_minor),
            Self::Hexagon { side } => analytical::hexagon_area(*side),
        }
    }

    /// Returns the axis-aligned bounding region the shape is sampled from.
    ///
    /// The hexagon region is deliberately oversized, twice the true extent horizontally and
    /// four times vertically, a tolerated inefficiency inherited from the reference behavior.
    /// Its area is still the area that is actually sampled from, so the estimate remains
    /// unbiased.
    pub fn bounding_region(&self) -> BoundingRegion<T> {
        let two = T::one() + T::one();

        match self {
            Self::Circle { radius } => BoundingRegion::centered(*radius, *radius),
            Self::Rectangle { width, height } => BoundingRegion::cornered(*width, *height),
            Self::Triangle { base, height } => BoundingRegion::cornered(*base, *height),
            Self::Square { side } => BoundingRegion::cornered(*side, *side),
            Self::Ellipse {
                semi_major,
                semi_minor,
            } => BoundingRegion::centered(*semi_major, *semi_minor),
            Self::Hexagon { side } => {
                // TODO: Get rid of unwrap.
                let sqrt3 = T::from_usize(3).unwrap().sqrt();
                BoundingRegion::centered(two * *side, two * *side * sqrt3)
            }
        }
    }

    /// Returns `true` if the point `(x, y)` lies inside the shape.
    pub fn contains(&self, x: T, y: T) -> bool {
        let two = T::one() + T::one();

        match self {
            Self::Circle { radius } => x * x + y * y <= *radius * *radius,
            // the bounding region coincides with the shape
            Self::Rectangle { .. } | Self::Square { .. } => true,
            Self::Triangle { base, height } => y <= *height * (T::one() - x / *base),
            Self::Ellipse {
                semi_major,
                semi_minor,
            } => {
                (x * x) / (*semi_major * *semi_major) + (y * y) / (*semi_minor * *semi_minor)
                    <= T::one()
            }
            Self::Hexagon { side } => {
                let dx = x.abs();
                let dy = y.abs();
                // distance from the center to the middle of an edge
                // TODO: Get rid of unwrap.
                let apothem = *side * T::from_usize(3).unwrap().sqrt() / two;

                dx <= *side
                    && dy <= apothem
                    && *side * apothem - *side / two * dy - apothem * dx >= T::zero()
            }
        }
    }

    /// Returns `true` if the bounding region coincides with the shape, in which case sampling
    /// is degenerate and every drawn point is inside.
    pub fn fills_bounding_region(&self) -> bool {
        matches!(self, Self::Rectangle { .. } | Self::Square { .. })
    }

    /// Returns the name of the shape variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Rectangle { .. } => "rectangle",
            Self::Triangle { .. } => "triangle",
            Self::Square { .. } => "square",
            Self::Ellipse { .. } => "ellipse",
            Self::Hexagon { .. } => "hexagon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_parameters() {
        assert!(ShapeKind::Circle { radius: 1.0 }.validate().is_ok());
        assert!(ShapeKind::Ellipse {
            semi_major: 2.0,
            semi_minor: 1.0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_and_negative_parameters() {
        assert_eq!(
            ShapeKind::Circle { radius: 0.0 }.validate(),
            Err(ValidationError::InvalidParameter {
                name: "radius",
                value: 0.0
            })
        );
        assert_eq!(
            ShapeKind::Rectangle {
                width: -1.0,
                height: 2.0
            }
            .validate(),
            Err(ValidationError::InvalidParameter {
                name: "width",
                value: -1.0
            })
        );
        assert_eq!(
            ShapeKind::Triangle {
                base: 3.0,
                height: 0.0
            }
            .validate(),
            Err(ValidationError::InvalidParameter {
                name: "height",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_parameters() {
        assert!(ShapeKind::Square {
            side: f64::INFINITY
        }
        .validate()
        .is_err());
        assert!(ShapeKind::Hexagon { side: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_circle_containment() {
        let circle = ShapeKind::Circle { radius: 1.0 };

        assert!(circle.contains(0.0, 0.0));
        assert!(circle.contains(1.0, 0.0));
        assert!(circle.contains(0.6, 0.6));
        assert!(!circle.contains(0.8, 0.8));
    }

    #[test]
    fn test_triangle_containment() {
        let triangle = ShapeKind::Triangle {
            base: 4.0,
            height: 2.0,
        };

        // the hypotenuse runs from (4, 0) to (0, 2)
        assert!(triangle.contains(0.0, 0.0));
        assert!(triangle.contains(2.0, 1.0));
        assert!(triangle.contains(1.0, 1.4));
        assert!(!triangle.contains(2.0, 1.1));
        assert!(!triangle.contains(3.9, 1.9));
    }

    #[test]
    fn test_ellipse_containment() {
        let ellipse = ShapeKind::Ellipse {
            semi_major: 2.0,
            semi_minor: 1.0,
        };

        assert!(ellipse.contains(2.0, 0.0));
        assert!(ellipse.contains(0.0, -1.0));
        assert!(!ellipse.contains(2.0, 0.1));
        assert!(!ellipse.contains(1.5, 0.8));
    }

    #[test]
    fn test_hexagon_containment() {
        let hexagon = ShapeKind::Hexagon { side: 1.0 };
        let apothem = 3.0_f64.sqrt() / 2.0;

        // vertices and edge midpoints are inside
        assert!(hexagon.contains(0.0, 0.0));
        assert!(hexagon.contains(1.0, 0.0));
        assert!(hexagon.contains(0.0, apothem));
        // the corners of the tight bounding box are not
        assert!(!hexagon.contains(1.0, apothem));
        assert!(!hexagon.contains(-1.0, -apothem));
        // just outside the slanted edge between (1, 0) and (1/2, apothem)
        assert!(!hexagon.contains(0.9, 0.3));
        assert!(hexagon.contains(0.9, 0.1));
    }

    #[test]
    fn test_rectangle_and_square_fill_their_bounding_region() {
        let rectangle = ShapeKind::Rectangle {
            width: 3.0,
            height: 2.0,
        };
        let square = ShapeKind::Square { side: 2.0 };

        assert!(rectangle.fills_bounding_region());
        assert!(square.fills_bounding_region());
        assert!(!ShapeKind::Circle { radius: 1.0 }.fills_bounding_region());
        assert!(rectangle.contains(2.9, 1.9));
        assert!(square.contains(0.0, 2.0));
    }

    #[test]
    fn test_bounding_regions() {
        let circle = ShapeKind::Circle { radius: 2.0 };
        assert_eq!(circle.bounding_region().center(), (0.0, 0.0));
        assert_eq!(circle.bounding_region().area(), 16.0);

        let triangle = ShapeKind::Triangle {
            base: 4.0,
            height: 2.0,
        };
        assert_eq!(triangle.bounding_region().x_range(), (0.0, 4.0));
        assert_eq!(triangle.bounding_region().y_range(), (0.0, 2.0));
        assert_eq!(triangle.bounding_region().area(), 8.0);

        // the hexagon region is oversized on purpose
        let hexagon = ShapeKind::Hexagon { side: 1.0 };
        let region = hexagon.bounding_region();
        assert_eq!(region.half_width(), 2.0);
        assert_eq!(region.half_height(), 2.0 * 3.0_f64.sqrt());
        assert!(region.area() > 4.0 * hexagon.exact_area());
    }

    #[test]
    fn test_exact_area_dispatch() {
        let shape = ShapeKind::Hexagon { side: 1.0 };
        assert_eq!(shape.exact_area(), analytical::hexagon_area(1.0));
        assert_eq!(shape.name(), "hexagon");
    }
}
