//! Math utility functions.

use euclid::default::Vector3D;

use crate::Component;

type Vector = Vector3D<Component>;

/// Replace a non-finite value with 0.
pub fn normalize(value: Component) -> Component {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Wrap a hue in degrees into `[0, 360)`. A negative remainder is pushed up
/// by a full turn, so -30 maps to 330. Values already in range pass through
/// unchanged.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue % 360.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: Component, min: Component, max: Component) -> Component {
    num_traits::clamp(value, min, max)
}

/// Combine the 3 components as a weighted sum with the given coefficients.
pub fn weighted_sum(
    coefficients: &[Component; 3],
    x: Component,
    y: Component,
    z: Component,
) -> Component {
    Vector::new(coefficients[0], coefficients[1], coefficients[2]).dot(Vector::new(x, y, z))
}
