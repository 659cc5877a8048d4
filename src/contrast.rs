//! WCAG 2.x relative luminance, contrast ratio and compliance
//! classification.
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use crate::{math, Component, Rgb};

/// The per-channel coefficients combining linear-light sRGB channels into
/// the relative luminance.
const LUMINANCE_COEFFICIENTS: [Component; 3] = [0.2126, 0.7152, 0.0722];

/// The breakpoint below which the sRGB transfer function is linear. WCAG 2.x
/// pins this at 0.03928; for 8-bit channels it is indistinguishable from the
/// 0.04045 used by IEC 61966-2-1.
const GAMMA_THRESHOLD: Component = 0.03928;

/// Contrast ratio at or above which normal text meets AAA.
const AAA_NORMAL: Component = 7.0;
/// Contrast ratio at or above which normal text meets AA.
const AA_NORMAL: Component = 4.5;
/// Contrast ratio at or above which large text meets AA.
const AA_LARGE: Component = 3.0;

/// Expand one gamma-encoded sRGB channel to linear light.
fn gamma_expand(value: Component) -> Component {
    if value <= GAMMA_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// The WCAG relative luminance of this color, in `[0, 1]`. 0 is black
    /// and 1 is white.
    pub fn relative_luminance(self) -> Component {
        let linear = self.to_components().map(gamma_expand);
        math::weighted_sum(&LUMINANCE_COEFFICIENTS, linear.0, linear.1, linear.2)
    }
}

/// The WCAG contrast ratio between two colors, in `[1, 21]`. 1 means the
/// colors are identical, 21 is black against white. The arguments are
/// interchangeable.
pub fn contrast_ratio(first: Rgb, second: Rgb) -> Component {
    let first = first.relative_luminance();
    let second = second.relative_luminance();

    let lighter = first.max(second);
    let darker = first.min(second);

    (lighter + 0.05) / (darker + 0.05)
}

/// The WCAG 2.x conformance level of a contrast ratio for normal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compliance {
    /// Enhanced contrast, ratio of at least 7.
    Aaa,
    /// Minimum contrast for normal text, ratio of at least 4.5.
    Aa,
    /// Minimum contrast for large text only, ratio of at least 3.
    AaLarge,
    /// Below every WCAG threshold.
    Fail,
}

impl Compliance {
    /// Classify a contrast ratio. Each band is inclusive at its lower bound,
    /// so the bands partition `[1, 21]` without overlap.
    pub fn from_ratio(ratio: Component) -> Self {
        if ratio >= AAA_NORMAL {
            Self::Aaa
        } else if ratio >= AA_NORMAL {
            Self::Aa
        } else if ratio >= AA_LARGE {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl std::fmt::Display for Compliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA-Large",
            Self::Fail => "Fail",
        })
    }
}
