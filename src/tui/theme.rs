use ratatui::style::Color;

use crate::model::bucket::Bucket;

/// Accent color for a quadrant's border and heading
pub fn bucket_color(bucket: Bucket) -> Color {
    match bucket {
        Bucket::UrgentImportant => Color::Red,
        Bucket::Important => Color::Green,
        Bucket::Urgent => Color::Yellow,
        Bucket::Low => Color::DarkGray,
    }
}

/// Parse a `#rrggbb` palette entry into an RGB color
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::label::PALETTE;

    #[test]
    fn every_palette_entry_parses() {
        for color in PALETTE {
            assert!(hex_color(color).is_some(), "unparsable swatch {color}");
        }
    }

    #[test]
    fn rejects_non_hex_input() {
        assert_eq!(hex_color("red"), None);
        assert_eq!(hex_color("#12345"), None);
        assert_eq!(hex_color("#gggggg"), None);
    }

    #[test]
    fn rejects_multibyte_input() {
        // Hand-edited label files can carry arbitrary strings; slicing must
        // not land inside a multibyte character.
        assert_eq!(hex_color("#aaa\u{e9}a"), None);
        assert_eq!(hex_color("#ééé"), None);
    }
}
