// File: crates/spectrum-core/src/color.rs
// Summary: CSS color strings ("#f00", "rgba(255, 0, 0, 0.5)", "red") resolved to Skia colors.

use skia_safe as skia;
use std::fmt;
use tracing::warn;

/// A CSS color as given by the caller, together with the resolved Skia color.
#[derive(Clone, Debug, PartialEq)]
pub struct CssColor {
    css: String,
    color: skia::Color,
}

impl CssColor {
    /// Parse a CSS color. Unrecognized input resolves to opaque black and is logged.
    pub fn new(css: impl Into<String>) -> Self {
        let css = css.into();
        let color = parse_css_color(&css).unwrap_or_else(|| {
            warn!(color = %css, "unrecognized css color, using black");
            skia::Color::BLACK
        });
        Self { css, color }
    }

    pub fn transparent() -> Self {
        Self { css: "rgba(0, 0, 0, 0)".to_string(), color: skia::Color::TRANSPARENT }
    }

    /// The string this color was created from.
    pub fn as_str(&self) -> &str { &self.css }

    pub fn to_skia(&self) -> skia::Color { self.color }

    pub fn is_transparent(&self) -> bool { self.color.a() == 0 }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl From<&str> for CssColor {
    fn from(s: &str) -> Self { Self::new(s) }
}

impl From<String> for CssColor {
    fn from(s: String) -> Self { Self::new(s) }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a basic color name.
pub fn parse_css_color(input: &str) -> Option<skia::Color> {
    let s = input.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        return parse_rgb_args(args, true);
    }
    if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_rgb_args(args, false);
    }
    named(&s)
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            Some(skia::Color::from_argb(255, r * 17, g * 17, b * 17))
        }
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Option<skia::Color> {
    let parts = args.split(',').map(str::trim).collect::<Vec<_>>();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |p: &str| -> Option<u8> {
        let v = p.parse::<f64>().ok()?;
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let a = if with_alpha {
        let v = parts[3].parse::<f64>().ok()?;
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        255
    };
    Some(skia::Color::from_argb(a, r, g, b))
}

fn named(name: &str) -> Option<skia::Color> {
    let c = match name {
        "transparent" => skia::Color::TRANSPARENT,
        "black" => skia::Color::BLACK,
        "white" => skia::Color::WHITE,
        "red" => skia::Color::from_argb(255, 255, 0, 0),
        "green" => skia::Color::from_argb(255, 0, 128, 0),
        "lime" => skia::Color::from_argb(255, 0, 255, 0),
        "blue" => skia::Color::from_argb(255, 0, 0, 255),
        "yellow" => skia::Color::from_argb(255, 255, 255, 0),
        "orange" => skia::Color::from_argb(255, 255, 165, 0),
        "purple" => skia::Color::from_argb(255, 128, 0, 128),
        "gray" | "grey" => skia::Color::from_argb(255, 128, 128, 128),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_css_color("#f00"), Some(skia::Color::from_argb(255, 255, 0, 0)));
        assert_eq!(parse_css_color("#00FF80"), Some(skia::Color::from_argb(255, 0, 255, 128)));
        assert_eq!(parse_css_color("#0000ff80"), Some(skia::Color::from_argb(128, 0, 0, 255)));
        assert_eq!(parse_css_color("#12"), None);
    }

    #[test]
    fn functional_forms() {
        assert_eq!(parse_css_color("rgb(10, 20, 30)"), Some(skia::Color::from_argb(255, 10, 20, 30)));
        assert_eq!(parse_css_color("rgba(255, 0, 0, 0.5)"), Some(skia::Color::from_argb(128, 255, 0, 0)));
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0)"), Some(skia::Color::TRANSPARENT));
        assert_eq!(parse_css_color("rgb(1, 2)"), None);
    }

    #[test]
    fn invalid_falls_back_to_black() {
        let c = CssColor::new("not-a-color");
        assert_eq!(c.to_skia(), skia::Color::BLACK);
        assert_eq!(c.as_str(), "not-a-color");
        assert!(CssColor::transparent().is_transparent());
    }
}
