//! Hex color handling for terminal output.

use crate::core::constants::DEFAULT_SEGMENT_COLOR;
use console::Style;

/// Parse `#rrggbb` or `#rgb` into RGB components
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = digits
                .chars()
                .map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        _ => None,
    }
}

/// Nearest color in the 6x6x6 ANSI-256 cube.
///
/// Unparsable input maps to the default segment grey.
pub fn hex_to_ansi256(hex: &str) -> u8 {
    let (r, g, b) = parse_hex(hex)
        .or_else(|| parse_hex(DEFAULT_SEGMENT_COLOR))
        .unwrap_or((169, 170, 180));
    let level = |c: u8| ((c as f64 / 255.0) * 5.0).round() as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// `text` drawn in the given hex color
pub fn styled_swatch(text: &str, hex: &str) -> String {
    Style::new().color256(hex_to_ansi256(hex)).apply_to(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#A9AAB4"), Some((169, 170, 180)));
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("blue"), None);
    }

    #[test]
    fn test_parse_hex_rejects_multibyte_input() {
        // Six bytes but only four chars
        assert_eq!(parse_hex("#a€bb"), None);
        assert_eq!(parse_hex("€"), None);
        assert_eq!(hex_to_ansi256("#a€bb"), hex_to_ansi256(DEFAULT_SEGMENT_COLOR));
    }

    #[test]
    fn test_hex_to_ansi256() {
        assert_eq!(hex_to_ansi256("#000000"), 16);
        assert_eq!(hex_to_ansi256("#ffffff"), 231);
        assert_eq!(hex_to_ansi256("#ff0000"), 196);
        assert_eq!(hex_to_ansi256("nonsense"), hex_to_ansi256(DEFAULT_SEGMENT_COLOR));
    }
}
