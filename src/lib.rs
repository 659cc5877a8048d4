//! huekit provides the color model conversions, palette harmonies and WCAG
//! contrast analysis backing small color design tools.

#![deny(missing_docs)]

mod cmyk;
mod color;
mod contrast;
mod convert;
mod hex;
mod hsl;
mod math;
mod palette;

pub use cmyk::Cmyk;
pub use color::{Component, Components, Flags, Rgb};
pub use contrast::{contrast_ratio, Compliance};
pub use hex::ParseColorError;
pub use hsl::Hsl;
pub use palette::Harmony;
