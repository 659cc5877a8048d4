//! Conversions between the canonical RGB form and its derived notations.
//!
//! Each notation is modeled with its own type and conversions are
//! implemented as methods on the relevant models. The component math lives
//! in the private `util` module and operates on unit-scale values; the
//! model boundary handles the percent/degree scaling and 8-bit
//! quantization.

use crate::{Cmyk, Components, Hsl, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());
        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert this color to the CMYK notation.
    pub fn to_cmyk(self) -> Cmyk {
        let [cyan, magenta, yellow, key] = util::rgb_to_cmyk(&self.to_components());
        Cmyk::new(cyan * 100.0, magenta * 100.0, yellow * 100.0, key * 100.0)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the canonical RGB form.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::hsl_to_rgb(&Components(
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        )))
    }
}

impl Cmyk {
    /// Convert this color from the CMYK notation to the canonical RGB form.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::cmyk_to_rgb(&[
            self.cyan / 100.0,
            self.magenta / 100.0,
            self.yellow / 100.0,
            self.key / 100.0,
        ]))
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::normalize_hue;

    /// Convert from RGB to HSL. The hue is returned in degrees in
    /// `[0, 360)`, saturation and lightness on the unit scale.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue and saturation carry no information.
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(normalize_hue(hue), saturation, lightness)
    }

    /// Resolve one RGB channel from the fractional hue position `t`.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        // Wrap the position into [0, 1).
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert from HSL to RGB. The hue is taken in degrees, saturation and
    /// lightness on the unit scale.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue) / 360.0;

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    /// Convert from RGB to CMYK, all values on the unit scale.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let Components(red, green, blue) = *from;

        let key = 1.0 - red.max(green).max(blue);

        if key >= 1.0 {
            // Pure black: the chromatic channels would divide by zero.
            return [0.0, 0.0, 0.0, 1.0];
        }

        let cyan = (1.0 - red - key) / (1.0 - key);
        let magenta = (1.0 - green - key) / (1.0 - key);
        let yellow = (1.0 - blue - key) / (1.0 - key);

        [cyan, magenta, yellow, key]
    }

    /// Convert from CMYK to RGB, all values on the unit scale.
    pub fn cmyk_to_rgb(from: &[Component; 4]) -> Components {
        let [cyan, magenta, yellow, key] = *from;

        Components(
            (1.0 - cyan) * (1.0 - key),
            (1.0 - magenta) * (1.0 - key),
            (1.0 - yellow) * (1.0 - key),
        )
    }
}
