//! Colors and the canvas theme
//!
//! Pane colors are generated at runtime; everything else drawn on screen
//! (background, dividers, control buttons) comes from the [`Theme`], which is
//! read from the `theme:` section of `config.yaml`.

use serde::{Deserialize, Serialize};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from hue (degrees), saturation and lightness (0.0-1.0)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());

        let (r1, g1, b1) = match h_prime as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r1), channel(g1), channel(b1))
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#rrggbb", or "#rrggbbaa" when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Colors used for everything on the canvas except the panes themselves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Window background around the canvas
    pub background: Color,
    /// Divider bar between the two sides of a split
    pub divider: Color,
    /// Divider bar under the pointer or being dragged
    pub divider_hover: Color,
    /// Control button fill
    pub button_background: Color,
    /// Control button fill under the pointer
    pub button_hover: Color,
    /// Control button icon
    pub button_foreground: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x17, 0x17, 0x17),
            divider: Color::rgba(0, 0, 0, 0x80),
            divider_hover: Color::rgb(0, 0, 0),
            button_background: Color::rgba(0, 0, 0, 0x99),
            button_hover: Color::rgba(0, 0, 0, 0xcc),
            button_foreground: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(
            Color::from_hex("00000080").unwrap(),
            Color::rgba(0, 0, 0, 0x80)
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("##ff0000").is_err());
    }

    #[test]
    fn test_hex_round_trip_keeps_alpha() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_hex(), "#01020304");
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
        assert_eq!(Color::rgb(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn test_from_hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(360.0, 1.0, 0.5), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hsl_grey_when_unsaturated() {
        let c = Color::from_hsl(200.0, 0.0, 0.5);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_argb_packing() {
        let color = Color::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(color.to_argb_u32(), 0x44112233);
    }
}
