use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hex color {input:?}; expected the format #RRGGBB")]
pub struct InvalidColor {
    pub input: String,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color written as `#RRGGBB` (hex digits are case-insensitive).
    ///
    /// # Errors
    /// Anything else, including shorthand (`#RGB`), alpha channels
    /// or a missing `#`, is rejected.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidColor> {
        let invalid = || InvalidColor {
            input: hex.to_string(),
        };

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        // `from_str_radix` would also accept a leading sign
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    #[must_use]
    pub fn to_discord(self) -> u32 {
        let r = u32::from(self.r);
        let g = u32::from(self.g);
        let b = u32::from(self.b);
        (r << 16) | (g << 8) | b
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_discord())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urgent_red() {
        let color = Color::from_hex("#A80000").unwrap();
        assert_eq!(color.to_discord(), 0xA8_0000);
        assert_eq!(color.to_discord(), 11_010_048);
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        assert_eq!(Color::from_hex("#a80000"), Color::from_hex("#A80000"));
        assert_eq!(Color::from_hex("#aBcDeF").unwrap().to_discord(), 0xAB_CDEF);
    }

    #[test]
    fn full_range() {
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#FFFFFF").unwrap().to_discord(), 0xFF_FFFF);
        assert_eq!(Color::from_hex("#010203").unwrap(), Color::new(1, 2, 3));
    }

    #[test]
    fn rejects_malformed() {
        let inputs = [
            "", "#", "A80000", "#A8000", "#A800000", "#GG0000", "#+A0000", "#-10000", " #A80000",
            "#A80000 ", "0xA80000", "#a8０000",
        ];
        for input in inputs {
            let err = Color::from_hex(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&Color::new(0xA8, 0, 0)).unwrap();
        assert_eq!(json, "11010048");
    }
}
