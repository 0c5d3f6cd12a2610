// Hex color strings exchanged with the color picker ("#rrggbb").

use crate::error::Error;
use image::Rgb;

/// Value the picker starts with.
pub const DEFAULT_PICKER_HEX: &str = "#0000FF";

/// Parse `#rrggbb` (or `rrggbb`) into an RGB triple.
/// Exactly six hex digits are required; anything else is rejected whole.
pub fn hex_to_rgb(value: &str) -> Result<Rgb<u8>, Error> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Decode(value.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::Decode(value.to_string()))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Lower-case `#rrggbb`.
pub fn rgb_to_hex(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Pack for minifb (0x00RRGGBB).
#[inline]
pub fn pack_rgb(color: Rgb<u8>) -> u32 {
    let [r, g, b] = color.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_picker_value_is_blue() {
        assert_eq!(hex_to_rgb(DEFAULT_PICKER_HEX).unwrap(), Rgb([0, 0, 255]));
    }

    #[test]
    fn decode_accepts_missing_hash_and_upper_case() {
        assert_eq!(hex_to_rgb("FF8000").unwrap(), Rgb([255, 128, 0]));
        assert_eq!(hex_to_rgb("#a0B1c2").unwrap(), Rgb([0xa0, 0xb1, 0xc2]));
    }

    #[test]
    fn decode_rejects_malformed_strings() {
        for bad in ["", "#", "#12345", "#1234567", "#12345g", "##123456", "#+12345", "#éé1234"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(Error::Decode(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn canonical_strings_survive_decode_then_encode() {
        for s in ["#000000", "#ffffff", "#0000ff", "#7f3a09", "#c0ffee"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(s).unwrap()), s);
        }
    }

    #[test]
    fn every_channel_value_round_trips() {
        for v in 0..=255u8 {
            let c = Rgb([v, 255 - v, v / 2]);
            assert_eq!(hex_to_rgb(&rgb_to_hex(c)).unwrap(), c);
        }
    }

    #[test]
    fn pack_matches_minifb_layout() {
        assert_eq!(pack_rgb(Rgb([0x12, 0x34, 0x56])), 0x0012_3456);
    }
}
