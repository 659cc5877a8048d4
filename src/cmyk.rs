//! Model a color with the CMYK notation used for print.

use crate::color::clamp_and_flag;
use crate::{Component, Flags};

/// A color specified with the CMYK (cyan, magenta, yellow, key) notation.
///
/// All four components are percentages in `[0, 100]`, kept at full float
/// precision; [`Cmyk::rounded`] and the `Display` impl produce the integer
/// form shown to users.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component of the color, as a percentage.
    pub cyan: Component,
    /// The magenta component of the color, as a percentage.
    pub magenta: Component,
    /// The yellow component of the color, as a percentage.
    pub yellow: Component,
    /// The key (black) component of the color, as a percentage.
    pub key: Component,
    /// Marks the components that were adjusted into range on construction.
    pub flags: Flags,
}

impl Cmyk {
    /// Create a new color with CMYK components, clamping each percentage
    /// into `[0, 100]` and zeroing non-finite values. Every adjustment is
    /// recorded in `flags`.
    pub fn new(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        key: Component,
    ) -> Self {
        let mut flags = Flags::empty();

        let cyan = clamp_and_flag(cyan, 0.0, 100.0, &mut flags, Flags::C0_ADJUSTED);
        let magenta = clamp_and_flag(magenta, 0.0, 100.0, &mut flags, Flags::C1_ADJUSTED);
        let yellow = clamp_and_flag(yellow, 0.0, 100.0, &mut flags, Flags::C2_ADJUSTED);
        let key = clamp_and_flag(key, 0.0, 100.0, &mut flags, Flags::C3_ADJUSTED);

        Self {
            cyan,
            magenta,
            yellow,
            key,
            flags,
        }
    }

    /// Return the components rounded to the nearest integer for display.
    pub fn rounded(&self) -> (u8, u8, u8, u8) {
        (
            self.cyan.round() as u8,
            self.magenta.round() as u8,
            self.yellow.round() as u8,
            self.key.round() as u8,
        )
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (cyan, magenta, yellow, key) = self.rounded();
        f.write_fmt(format_args!(
            "cmyk({}%, {}%, {}%, {}%)",
            cyan, magenta, yellow, key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_input_is_untouched() {
        let cmyk = Cmyk::new(76.0, 47.0, 0.0, 3.5);
        assert_eq!(cmyk.cyan, 76.0);
        assert_eq!(cmyk.magenta, 47.0);
        assert_eq!(cmyk.yellow, 0.0);
        assert_eq!(cmyk.key, 3.5);
        assert!(cmyk.flags.is_empty());
    }

    #[test]
    fn out_of_range_input_is_clamped_and_flagged() {
        let cmyk = Cmyk::new(110.0, -1.0, 50.0, Component::NAN);
        assert_eq!(cmyk.cyan, 100.0);
        assert_eq!(cmyk.magenta, 0.0);
        assert_eq!(cmyk.yellow, 50.0);
        assert_eq!(cmyk.key, 0.0);
        assert_eq!(
            cmyk.flags,
            Flags::C0_ADJUSTED | Flags::C1_ADJUSTED | Flags::C3_ADJUSTED
        );
    }

    #[test]
    fn display_rounds_the_components() {
        let cmyk = Cmyk::new(76.01, 47.15, 0.0, 3.53);
        assert_eq!(cmyk.to_string(), "cmyk(76%, 47%, 0%, 4%)");
    }
}
