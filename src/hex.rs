//! Parsing of `#rrggbb` hex color strings.

use crate::Rgb;

/// An erroneous hex color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input does not contain exactly six hexadecimal digits after the
    /// optional leading `#`. For example, `#abc` and `#1234567` both have the
    /// wrong length.
    UnexpectedLength,

    /// The input contains a character that is not an ASCII hexadecimal digit.
    /// For example, `#00gg00` has a malformed second channel.
    MalformedDigit,
}

impl std::fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedLength => {
                f.write_str("hex color should have exactly 6 digits after the optional `#`")
            }
            Self::MalformedDigit => {
                f.write_str("hex color should contain only hexadecimal digits")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Parse a 24-bit color in hexadecimal format.
///
/// The leading `#` is optional and digits are case-insensitive, so
/// `#3B82F6`, `3b82f6` and `#3b82F6` all parse to the same color. Anything
/// that is not six hexadecimal digits after the optional `#` is an error;
/// notably the three digit shorthand is not accepted. The caller decides how
/// to recover, the parser never falls back to a default color.
pub fn parse(s: &str) -> Result<Rgb, ParseColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() != 6 {
        return Err(ParseColorError::UnexpectedLength);
    }

    // `from_str_radix` alone is too lenient: it accepts a leading `+` sign.
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::MalformedDigit);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ParseColorError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ParseColorError::MalformedDigit)?;
        u8::from_str_radix(t, 16).map_err(|_| ParseColorError::MalformedDigit)
    }

    let red = parse_channel(s, 0)?;
    let green = parse_channel(s, 1)?;
    let blue = parse_channel(s, 2)?;
    Ok(Rgb::new(red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() -> Result<(), ParseColorError> {
        assert_eq!(parse("#3b82f6")?, Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(parse("3b82f6")?, Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(parse("#3B82F6")?, Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(parse("  #ffffff  ")?, Rgb::new(255, 255, 255));
        Ok(())
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(parse("#fff"), Err(ParseColorError::UnexpectedLength));
        assert_eq!(parse(""), Err(ParseColorError::UnexpectedLength));
        assert_eq!(parse("#"), Err(ParseColorError::UnexpectedLength));
        assert_eq!(parse("#1234567"), Err(ParseColorError::UnexpectedLength));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(parse("#00gg00"), Err(ParseColorError::MalformedDigit));
        assert_eq!(parse("zzzzzz"), Err(ParseColorError::MalformedDigit));
        // Correct byte length, but splits in the middle of the character.
        assert_eq!(parse("#💩00"), Err(ParseColorError::MalformedDigit));
    }

    #[test]
    fn rejects_signed_channels() {
        // `u8::from_str_radix` accepts a leading `+`, the grammar does not.
        assert_eq!(parse("#+1+2+3"), Err(ParseColorError::MalformedDigit));
        assert_eq!(parse("+12345"), Err(ParseColorError::MalformedDigit));
        assert_eq!(parse("#+00000"), Err(ParseColorError::MalformedDigit));
    }

    #[test]
    fn round_trips_through_display() -> Result<(), ParseColorError> {
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0x3b, 0x82, 0xf6),
            Rgb::new(1, 2, 3),
        ] {
            assert_eq!(parse(&rgb.to_hex())?, rgb);
        }
        Ok(())
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let rgb: Rgb = "#a1a1aa".parse().unwrap();
        assert_eq!(rgb, Rgb::new(0xa1, 0xa1, 0xaa));
        assert!("not-a-color".parse::<Rgb>().is_err());
    }
}
