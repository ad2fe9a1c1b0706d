//! Color parsing and blending helpers
//!
//! Skeleton fills are computed per cell, so everything here works on plain
//! RGB triples and converts named terminal colors to their usual RGB values.

use ratatui::style::Color;
use skeletonable_core::{Error, Result};

/// Light gray, the default skeleton tint
pub const LIGHT_GRAY: Color = Color::Rgb(0xd3, 0xd3, 0xd3);

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Like [`parse_hex_color`] but reports the offending input
pub fn try_parse_color(hex: &str) -> Result<Color> {
    parse_hex_color(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))
}

/// Resolve any terminal color to an RGB triple
pub fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black | Color::Reset => (0x00, 0x00, 0x00),
        Color::Red => (0x80, 0x00, 0x00),
        Color::Green => (0x00, 0x80, 0x00),
        Color::Yellow => (0x80, 0x80, 0x00),
        Color::Blue => (0x00, 0x00, 0x80),
        Color::Magenta => (0x80, 0x00, 0x80),
        Color::Cyan => (0x00, 0x80, 0x80),
        Color::Gray => (0xc0, 0xc0, 0xc0),
        Color::DarkGray => (0x80, 0x80, 0x80),
        Color::LightRed => (0xff, 0x00, 0x00),
        Color::LightGreen => (0x00, 0xff, 0x00),
        Color::LightYellow => (0xff, 0xff, 0x00),
        Color::LightBlue => (0x00, 0x00, 0xff),
        Color::LightMagenta => (0xff, 0x00, 0xff),
        Color::LightCyan => (0x00, 0xff, 0xff),
        Color::White => (0xff, 0xff, 0xff),
        Color::Indexed(i) => indexed_to_rgb(i),
    }
}

fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => to_rgb(match index {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::Gray,
            8 => Color::DarkGray,
            9 => Color::LightRed,
            10 => Color::LightGreen,
            11 => Color::LightYellow,
            12 => Color::LightBlue,
            13 => Color::LightMagenta,
            14 => Color::LightCyan,
            _ => Color::White,
        }),
        16..=231 => {
            let i = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}

/// Linear blend between two colors, `t` in [0, 1]
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = to_rgb(from);
    let (r2, g2, b2) = to_rgb(to);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Relative luminance in [0, 1]
pub fn luminance(color: Color) -> f64 {
    let (r, g, b) = to_rgb(color);
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

pub fn is_light(color: Color) -> bool {
    luminance(color) > 0.5
}

fn scale(color: Color, factor: f64) -> Color {
    let (r, g, b) = to_rgb(color);
    let s = |v: u8| (v as f64 * factor).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(s(r), s(g), s(b))
}

pub fn lighter(color: Color) -> Color {
    let (r, g, b) = to_rgb(color);
    // Pure black cannot be scaled up
    if (r, g, b) == (0, 0, 0) {
        return Color::Rgb(0x40, 0x40, 0x40);
    }
    scale(color, 1.35)
}

pub fn darker(color: Color) -> Color {
    scale(color, 0.94)
}

/// Second gradient stop derived from a base color:
/// darker for light bases, lighter for dark ones
pub fn complementary(color: Color) -> Color {
    if is_light(color) {
        darker(color)
    } else {
        lighter(color)
    }
}

/// Approximate `color` drawn with `alpha` opacity over `background`
pub fn with_alpha(color: Color, alpha: f64, background: Color) -> Color {
    blend(background, color, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_try_parse_reports_input() {
        let err = try_parse_color("nope").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "nope"));
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
        // Out of range factors are clamped
        assert_eq!(blend(a, b, 3.0), b);
    }

    #[test]
    fn test_named_colors_resolve() {
        assert_eq!(to_rgb(Color::White), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(15)), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(232)), (8, 8, 8));
        assert_eq!(to_rgb(Color::Indexed(196)), (255, 0, 0));
    }

    #[test]
    fn test_complementary_direction() {
        assert!(luminance(complementary(LIGHT_GRAY)) < luminance(LIGHT_GRAY));
        let dark = Color::Rgb(0x30, 0x30, 0x30);
        assert!(luminance(complementary(dark)) > luminance(dark));
        assert_ne!(complementary(Color::Black), Color::Rgb(0, 0, 0));
    }
}
