use std::fmt;

use crate::core::error::ColorError;

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

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Blend from white toward `self`; `strength` 0 is white, 1 is the colour.
    pub fn from_white(self, strength: f64) -> Self {
        let strength = strength.clamp(0.0, 1.0);
        let mix = |channel: u8| (255.0 + (f64::from(channel) - 255.0) * strength).round() as u8;
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        let expected = Rgb {
            r: 0x3f,
            g: 0xa7,
            b: 0xd6,
        };
        assert_eq!(Rgb::parse("#3fa7d6").unwrap(), expected);
        assert_eq!(Rgb::parse("3FA7D6").unwrap(), expected);
        assert_eq!(expected.to_hex(), "#3fa7d6");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Rgb::parse("#fff").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
        assert!(Rgb::parse("#ééé").is_err());
    }

    #[test]
    fn blend_endpoints() {
        let color = Rgb { r: 0, g: 100, b: 200 };
        assert_eq!(color.from_white(0.0), Rgb::WHITE);
        assert_eq!(color.from_white(1.0), color);
        let half = Rgb { r: 55, g: 155, b: 255 }.from_white(0.5);
        assert_eq!(half, Rgb { r: 155, g: 205, b: 255 });
    }
}
