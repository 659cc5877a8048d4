//! Model a color with the HSL notation in the sRGB color space.

use crate::color::{clamp_and_flag, wrap_and_flag};
use crate::{Component, Flags};

/// A color specified with the HSL notation in the sRGB color space.
///
/// The hue is in degrees in `[0, 360)`, saturation and lightness are
/// percentages in `[0, 100]`. Components keep full float precision so that
/// chained derivations do not compound rounding error; [`Hsl::rounded`] and
/// the `Display` impl produce the integer form shown to users.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color, in degrees.
    pub hue: Component,
    /// The saturation component of the color, as a percentage.
    pub saturation: Component,
    /// The lightness component of the color, as a percentage.
    pub lightness: Component,
    /// Marks the components that were adjusted into range on construction.
    pub flags: Flags,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    ///
    /// Out-of-range input is normalized rather than rejected, since it
    /// usually originates from a slider or number field mid-edit: the hue is
    /// wrapped into `[0, 360)`, percentages are clamped into `[0, 100]` and
    /// non-finite values become 0. Every adjustment is recorded in `flags`.
    pub fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        let mut flags = Flags::empty();

        let hue = wrap_and_flag(hue, &mut flags, Flags::C0_ADJUSTED);
        let saturation = clamp_and_flag(saturation, 0.0, 100.0, &mut flags, Flags::C1_ADJUSTED);
        let lightness = clamp_and_flag(lightness, 0.0, 100.0, &mut flags, Flags::C2_ADJUSTED);

        Self {
            hue,
            saturation,
            lightness,
            flags,
        }
    }

    /// Return the components rounded to the nearest integer for display.
    pub fn rounded(&self) -> (u16, u8, u8) {
        (
            self.hue.round() as u16,
            self.saturation.round() as u8,
            self.lightness.round() as u8,
        )
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hue, saturation, lightness) = self.rounded();
        f.write_fmt(format_args!("hsl({}, {}%, {}%)", hue, saturation, lightness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_input_is_untouched() {
        let hsl = Hsl::new(217.0, 91.0, 60.0);
        assert_eq!(hsl.hue, 217.0);
        assert_eq!(hsl.saturation, 91.0);
        assert_eq!(hsl.lightness, 60.0);
        assert!(hsl.flags.is_empty());
    }

    #[test]
    fn out_of_range_input_is_normalized_and_flagged() {
        let hsl = Hsl::new(-30.0, 120.0, -5.0);
        assert_eq!(hsl.hue, 330.0);
        assert_eq!(hsl.saturation, 100.0);
        assert_eq!(hsl.lightness, 0.0);
        assert_eq!(
            hsl.flags,
            Flags::C0_ADJUSTED | Flags::C1_ADJUSTED | Flags::C2_ADJUSTED
        );
    }

    #[test]
    fn non_finite_input_becomes_zero() {
        let hsl = Hsl::new(Component::NAN, 50.0, Component::INFINITY);
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 50.0);
        assert_eq!(hsl.lightness, 0.0);
        assert_eq!(hsl.flags, Flags::C0_ADJUSTED | Flags::C2_ADJUSTED);
    }

    #[test]
    fn display_rounds_the_components() {
        let hsl = Hsl::new(217.2, 91.4, 59.8);
        assert_eq!(hsl.to_string(), "hsl(217, 91%, 60%)");
    }
}
