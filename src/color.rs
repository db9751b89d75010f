//! CSS color parsing and lightening for color swatches
//!
//! Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` and
//! `hsl()`/`hsla()`, in both comma and space separated forms. Alpha is parsed
//! but dropped, since terminal cells have no transparency. Anything else parses
//! to `None`.

use ratatui::style::Color;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Move each channel toward white by `ratio` (clamped to 0..=1)
    pub fn lighten(self, ratio: f64) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        let channel = |c: u8| -> u8 {
            let c = f64::from(c);
            (c + (255.0 - c) * ratio).round() as u8
        };
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Parse a CSS color string
pub fn parse_css_color(css: &str) -> Option<Rgb> {
    let css = css.trim();
    if let Some(hex) = css.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (name, args) = css.split_once('(')?;
    let args = args.strip_suffix(')')?;
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    match name.trim() {
        "rgb" | "rgba" => Some(Rgb::new(
            parse_rgb_channel(parts[0])?,
            parse_rgb_channel(parts[1])?,
            parse_rgb_channel(parts[2])?,
        )),
        "hsl" | "hsla" => {
            let hue = parts[0].trim_end_matches("deg").parse::<f64>().ok()?;
            let saturation = parse_percent(parts[1])?;
            let lightness = parse_percent(parts[2])?;
            Some(hsl_to_rgb(hue, saturation, lightness))
        }
        _ => None,
    }
}

/// Parse a CSS color and lighten it, as used for swatch borders
pub fn lighten(css: &str, ratio: f64) -> Option<Rgb> {
    parse_css_color(css).map(|rgb| rgb.lighten(ratio))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 | 8 => Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_rgb_channel(part: &str) -> Option<u8> {
    let value = match part.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok()? * 255.0 / 100.0,
        None => part.parse::<f64>().ok()?,
    };
    Some(value.clamp(0.0, 255.0).round() as u8)
}

fn parse_percent(part: &str) -> Option<f64> {
    let value = part.strip_suffix('%')?.parse::<f64>().ok()?;
    Some((value / 100.0).clamp(0.0, 1.0))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(360.0);
    let a = saturation * lightness.min(1.0 - lightness);
    let f = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let v = lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (v * 255.0).round() as u8
    };
    Rgb::new(f(0.0), f(8.0), f(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_css_color("#fff"), Some(Rgb::WHITE));
        assert_eq!(parse_css_color("#f008"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_css_color("#0c2945"), Some(Rgb::new(12, 41, 69)));
        assert_eq!(parse_css_color("#0c294580"), Some(Rgb::new(12, 41, 69)));
        assert_eq!(parse_css_color("#ggg"), None);
        assert_eq!(parse_css_color("#12345"), None);
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(parse_css_color("rgb(1, 2, 3)"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(parse_css_color("rgba(255,0,0,0.5)"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_css_color("rgb(0 128 255 / 50%)"), Some(Rgb::new(0, 128, 255)));
        assert_eq!(parse_css_color("rgb(100%, 0%, 0%)"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_css_color("rgb(1, 2)"), None);
        assert_eq!(parse_css_color("rgbish"), None);
    }

    #[test]
    fn test_hsl_functions() {
        assert_eq!(parse_css_color("hsl(0, 100%, 50%)"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_css_color("hsl(120deg 100% 25%)"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(parse_css_color("hsla(240, 100%, 50%, 0.3)"), Some(Rgb::new(0, 0, 255)));
        assert_eq!(parse_css_color("hsl(0, 0%, 100%)"), Some(Rgb::WHITE));
        assert_eq!(parse_css_color("hsl(0, 100, 50)"), None);
    }

    #[test]
    fn test_lighten_bounds() {
        let base = Rgb::new(51, 51, 51);
        assert_eq!(base.lighten(0.0), base);
        assert_eq!(base.lighten(1.0), Rgb::WHITE);
        assert_eq!(base.lighten(0.3).to_hex(), "#707070");
        assert_eq!(lighten("#000", 0.5), Some(Rgb::new(128, 128, 128)));
        assert_eq!(lighten("not a color", 0.7), None);
    }
}
