use huekit::{contrast_ratio, Compliance, Harmony, Rgb};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

const SWATCH_WIDTH: u32 = 160;
const SWATCH_HEIGHT: u32 = 160;

fn harmony_from_name(name: &str) -> Option<Harmony> {
    match name {
        "analogous" => Some(Harmony::Analogous),
        "complementary" => Some(Harmony::Complementary),
        "triadic" => Some(Harmony::Triadic),
        "monochromatic" => Some(Harmony::Monochromatic),
        _ => None,
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let base = args.next().unwrap_or_else(|| "#3b82f6".to_string());
    let rule_name = args.next().unwrap_or_else(|| "analogous".to_string());

    let rule = match harmony_from_name(&rule_name) {
        Some(rule) => rule,
        None => {
            eprintln!("unknown harmony rule: {}", rule_name);
            eprintln!("expected one of: analogous, complementary, triadic, monochromatic");
            std::process::exit(1);
        }
    };

    let palette = match rule.palette(&base) {
        Ok(palette) => palette,
        Err(err) => {
            eprintln!("{}: {}", base, err);
            std::process::exit(1);
        }
    };

    let white = Rgb::new(255, 255, 255);
    let black = Rgb::new(0, 0, 0);

    let mut img = RgbaImage::new(SWATCH_WIDTH * palette.len() as u32, SWATCH_HEIGHT);

    for (index, entry) in palette.iter().enumerate() {
        let rgb: Rgb = entry.parse().unwrap();

        draw_filled_rect_mut(
            &mut img,
            Rect::at((index as u32 * SWATCH_WIDTH) as i32, 0).of_size(SWATCH_WIDTH, SWATCH_HEIGHT),
            Rgba([rgb.red, rgb.green, rgb.blue, 255]),
        );

        let on_white = contrast_ratio(rgb, white);
        let on_black = contrast_ratio(rgb, black);

        println!(
            "{}  {}  {}  on white {:.2} ({})  on black {:.2} ({})",
            rgb.to_hex(),
            rgb.to_hsl(),
            rgb.to_cmyk(),
            on_white,
            Compliance::from_ratio(on_white),
            on_black,
            Compliance::from_ratio(on_black),
        );
    }

    img.save("palette.png").unwrap();
}
