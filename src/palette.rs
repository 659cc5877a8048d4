//! Palette generation from one base color and a harmony rule.

use crate::math;
use crate::{Component, Hsl, ParseColorError};

/// Lightness floor for monochromatic steps, keeping the dark end of the
/// ramp from collapsing into pure black.
const LIGHTNESS_FLOOR: Component = 10.0;

/// Lightness ceiling for monochromatic steps, keeping the light end of the
/// ramp from collapsing into pure white.
const LIGHTNESS_CEILING: Component = 90.0;

/// One entry of a harmony table: the hue offset in degrees and the
/// lightness offset in percentage points applied to the base color.
type Offset = (Component, Component);

/// A named rule for deriving an ordered sequence of related colors from one
/// base color.
///
/// Derivation happens in HSL, where hue rotation and lightness stepping are
/// plain addition. That trades the hue-rotation artifacts of HSL against
/// perceptually uniform spaces for simplicity, which is the right call for a
/// lightweight design tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Harmony {
    /// Five hues 15 degrees apart, centered on the base hue.
    Analogous,
    /// The base color and its opposite on the hue wheel.
    Complementary,
    /// Three hues 120 degrees apart, starting at the base hue.
    Triadic,
    /// Five lightness steps of the base hue, 20 points apart.
    Monochromatic,
}

impl Harmony {
    /// The offsets this rule applies, and the index of the base color in
    /// the generated sequence.
    fn offsets(self) -> (&'static [Offset], usize) {
        match self {
            Self::Analogous => (
                &[
                    (-30.0, 0.0),
                    (-15.0, 0.0),
                    (0.0, 0.0),
                    (15.0, 0.0),
                    (30.0, 0.0),
                ],
                2,
            ),
            Self::Complementary => (&[(0.0, 0.0), (180.0, 0.0)], 0),
            Self::Triadic => (&[(0.0, 0.0), (120.0, 0.0), (240.0, 0.0)], 0),
            Self::Monochromatic => (
                &[
                    (0.0, -40.0),
                    (0.0, -20.0),
                    (0.0, 0.0),
                    (0.0, 20.0),
                    (0.0, 40.0),
                ],
                2,
            ),
        }
    }

    /// Generate the palette for the given base color, as hex strings.
    ///
    /// The base color is converted to HSL once, at full float precision, and
    /// each offset is applied to that. Hue arithmetic wraps modulo 360, so a
    /// base hue of 350 complements to 170, not 530. The element at the base
    /// position is the input string itself rather than a lossy round trip
    /// through HSL; all derived elements are lowercase `#rrggbb`.
    pub fn palette(self, base: &str) -> Result<Vec<String>, ParseColorError> {
        let hsl = crate::hex::parse(base)?.to_hsl();
        let (offsets, base_index) = self.offsets();

        let palette = offsets
            .iter()
            .enumerate()
            .map(|(index, &(hue_offset, lightness_offset))| {
                if index == base_index {
                    return base.trim().to_string();
                }

                let lightness = if lightness_offset == 0.0 {
                    hsl.lightness
                } else {
                    math::clamp(
                        hsl.lightness + lightness_offset,
                        LIGHTNESS_FLOOR,
                        LIGHTNESS_CEILING,
                    )
                };

                Hsl::new(hsl.hue + hue_offset, hsl.saturation, lightness)
                    .to_rgb()
                    .to_hex()
            })
            .collect();

        Ok(palette)
    }
}
