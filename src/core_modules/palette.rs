// THEORY:
// The `palette` module owns everything about target colors: the `Color`
// triple the pipelines substitute into pixels, the hex-string boundary where
// caller input gets validated, and the two shipped icon variants.
//
// Key architectural principles:
// 1.  **Validation at the Boundary**: `Color` channels are `u8`, so a
//     constructed `Color` is range-valid by type. The only place an invalid
//     color can enter the system is the hex-string parser, which is where
//     `InvalidColorValue` is raised.
// 2.  **Variants as Data**: The stealth and bold variants are plain constant
//     data, named after the output files the tool writes. The driver iterates
//     them; the pipelines never know they exist.

use crate::{RecolorError, RecolorResult};

/// An ordered (red, green, blue) triple of 8-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Parses a 6-hex-digit color string, with or without a leading `#`,
    /// as three 2-digit byte pairs in red, green, blue order.
    pub fn from_hex(hex: &str) -> RecolorResult<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(RecolorError::InvalidColorValue(hex.to_string()));
        }

        let channel = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16)
                .map_err(|_| RecolorError::InvalidColorValue(hex.to_string()))
        };

        Ok(Color {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }
}

/// A named pairing of background and foreground colors for one output icon.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Output file stem, e.g. `icon_stealth` becomes `icon_stealth.png`.
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
}

/// Dark background, clay robot.
pub const STEALTH: Variant = Variant {
    name: "icon_stealth",
    background: Color::new(0x15, 0x15, 0x17),
    foreground: Color::new(0xD6, 0x8F, 0x70),
};

/// Clay background, dark robot.
pub const BOLD: Variant = Variant {
    name: "icon_bold",
    background: Color::new(0xD6, 0x8F, 0x70),
    foreground: Color::new(0x15, 0x15, 0x17),
};

/// The variants the driver produces when no custom colors are given.
pub const DEFAULT_VARIANTS: [Variant; 2] = [STEALTH, BOLD];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecolorError;

    #[test]
    fn parses_hex_with_hash_prefix() {
        assert_eq!(
            Color::from_hex("#D68F70").expect("valid hex"),
            Color::new(0xD6, 0x8F, 0x70)
        );
    }

    #[test]
    fn parses_hex_without_prefix() {
        assert_eq!(
            Color::from_hex("151517").expect("valid hex"),
            Color::new(0x15, 0x15, 0x17)
        );
    }

    #[test]
    fn parses_lowercase_hex() {
        assert_eq!(
            Color::from_hex("#d68f70").expect("valid hex"),
            Color::new(0xD6, 0x8F, 0x70)
        );
    }

    #[test]
    fn rejects_non_hex_digits() {
        let err = Color::from_hex("#ZZZZZZ").unwrap_err();
        assert!(matches!(err, RecolorError::InvalidColorValue(_)));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            Color::from_hex("#15151").unwrap_err(),
            RecolorError::InvalidColorValue(_)
        ));
        assert!(matches!(
            Color::from_hex("#1515171").unwrap_err(),
            RecolorError::InvalidColorValue(_)
        ));
        assert!(matches!(
            Color::from_hex("").unwrap_err(),
            RecolorError::InvalidColorValue(_)
        ));
    }

    #[test]
    fn rejects_non_ascii_input() {
        assert!(matches!(
            Color::from_hex("#ÿÿÿ").unwrap_err(),
            RecolorError::InvalidColorValue(_)
        ));
    }

    #[test]
    fn shipped_variants_mirror_each_other() {
        assert_eq!(STEALTH.background, BOLD.foreground);
        assert_eq!(STEALTH.foreground, BOLD.background);
    }
}
