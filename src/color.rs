use crate::error::{IconError, IconResult};

/// Sentinel accepted wherever a color string is expected.
pub const TRANSPARENT: &str = "transparent";

/// Color with channels normalized to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

/// Convert a two-hex-digit channel string to a normalized intensity.
pub fn hex_channel(digits: &str) -> IconResult<f32> {
    let byte = u8::from_str_radix(digits, 16)
        .map_err(|_| IconError::validation(format!("invalid hex channel '{digits}'")))?;
    Ok(f32::from(byte) / 255.0)
}

/// Parse `"transparent"` (zero-alpha black) or a 6-hex-digit opaque color.
pub fn parse_color(spec: &str) -> IconResult<Rgba> {
    if spec == TRANSPARENT {
        return Ok(Rgba {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        });
    }
    if spec.len() != 6 || !spec.is_ascii() {
        return Err(IconError::validation(format!(
            "color must be 6 hex digits or '{TRANSPARENT}', got '{spec}'"
        )));
    }
    Ok(Rgba {
        r: hex_channel(&spec[0..2])?,
        g: hex_channel(&spec[2..4])?,
        b: hex_channel(&spec[4..6])?,
        a: 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_normalized() {
        assert_eq!(hex_channel("00").unwrap(), 0.0);
        assert_eq!(hex_channel("ff").unwrap(), 1.0);
        for digits in ["00", "11", "22", "33", "66", "99", "ff"] {
            let v = hex_channel(digits).unwrap();
            assert!((0.0..=1.0).contains(&v), "{digits} -> {v}");
        }
    }

    #[test]
    fn transparent_is_zero_alpha_black() {
        let c = parse_color(TRANSPARENT).unwrap();
        assert_eq!(c, Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 });
        assert_eq!(c.to_rgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn opaque_colors_round_trip_to_bytes() {
        assert_eq!(parse_color("000000").unwrap().to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(
            parse_color("ffffff").unwrap().to_rgba8(),
            [255, 255, 255, 255]
        );
        assert_eq!(
            parse_color("eeeeee").unwrap().to_rgba8(),
            [0xee, 0xee, 0xee, 255]
        );
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!(parse_color("fff").is_err());
        assert!(parse_color("gggggg").is_err());
        assert!(parse_color("").is_err());
        assert!(parse_color("ffffff ").is_err());
    }
}
