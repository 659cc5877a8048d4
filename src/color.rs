//! The canonical [`Rgb`] color and the value types shared by every
//! conversion.

use bitflags::bitflags;

use crate::math;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all derived components are computed as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all derived components are computed as.
pub type Component = f64;

/// Represent the three components that describe a color in one notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark components that a constructor had to adjust into their
    /// valid range (hue wrapped, percentage clamped, non-finite zeroed).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component of a model was adjusted.
        const C0_ADJUSTED = 1 << 0;
        /// Set when the second component of a model was adjusted.
        const C1_ADJUSTED = 1 << 1;
        /// Set when the third component of a model was adjusted.
        const C2_ADJUSTED = 1 << 2;
        /// Set when the fourth component of a model was adjusted.
        const C3_ADJUSTED = 1 << 3;
    }
}

/// Clamp `value` into `[min, max]`, setting `flag` in `flags` when the input
/// was out of range or non-finite.
pub(crate) fn clamp_and_flag(
    value: Component,
    min: Component,
    max: Component,
    flags: &mut Flags,
    flag: Flags,
) -> Component {
    let clamped = math::clamp(math::normalize(value), min, max);
    if clamped != value {
        *flags |= flag;
    }
    clamped
}

/// Wrap `hue` into `[0, 360)`, setting `flag` in `flags` when the input was
/// out of range or non-finite.
pub(crate) fn wrap_and_flag(hue: Component, flags: &mut Flags, flag: Flags) -> Component {
    let wrapped = math::normalize_hue(math::normalize(hue));
    if wrapped != hue {
        *flags |= flag;
    }
    wrapped
}

/// A color in the sRGB color space, quantized to 8 bits per channel.
///
/// This is the canonical form of the engine; hex strings, [`Hsl`] and
/// [`Cmyk`] are derived views of it and round-trip back to the same triple
/// within ±1 per channel.
///
/// [`Hsl`]: crate::Hsl
/// [`Cmyk`]: crate::Cmyk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with the given 8-bit channels.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels normalized to `[0, 1]`.
    pub(crate) fn to_components(self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Quantize unit-scale components back to 8-bit channels, clamping each
    /// component to `[0, 1]` and rounding to the nearest integer.
    pub(crate) fn from_components(components: &Components) -> Self {
        let Components(red, green, blue) = components.map(|c| {
            (math::clamp(math::normalize(c), 0.0, 1.0) * 255.0).round()
        });
        Self {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
        }
    }

    /// Format the color as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "#{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue
        ))
    }
}

impl std::str::FromStr for Rgb {
    type Err = crate::hex::ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::hex::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0x3b, 0x82, 0xf6).to_string(), "#3b82f6");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn from_components_rounds_and_clamps() {
        let rgb = Rgb::from_components(&Components(0.5, 1.2, -0.1));
        assert_eq!(rgb, Rgb::new(128, 255, 0));

        let rgb = Rgb::from_components(&Components(Component::NAN, 0.0, 1.0));
        assert_eq!(rgb, Rgb::new(0, 0, 255));
    }

    #[test]
    fn clamp_and_flag_marks_adjusted_components() {
        let mut flags = Flags::empty();
        let value = clamp_and_flag(50.0, 0.0, 100.0, &mut flags, Flags::C1_ADJUSTED);
        assert_eq!(value, 50.0);
        assert!(flags.is_empty());

        let value = clamp_and_flag(120.0, 0.0, 100.0, &mut flags, Flags::C1_ADJUSTED);
        assert_eq!(value, 100.0);
        assert_eq!(flags, Flags::C1_ADJUSTED);
    }

    #[test]
    fn wrap_and_flag_wraps_hue() {
        let mut flags = Flags::empty();
        let hue = wrap_and_flag(-30.0, &mut flags, Flags::C0_ADJUSTED);
        assert_eq!(hue, 330.0);
        assert_eq!(flags, Flags::C0_ADJUSTED);

        let mut flags = Flags::empty();
        let hue = wrap_and_flag(359.0, &mut flags, Flags::C0_ADJUSTED);
        assert_eq!(hue, 359.0);
        assert!(flags.is_empty());
    }
}
