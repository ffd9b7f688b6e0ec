/// RGB triple with channels normalized to `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Parses a `#rrggbb` hex color into normalized channels (0–255 divided by
/// 255). Returns `None` for anything that is not exactly seven characters of
/// `#` plus six hex digits.
pub fn hex_rgb(color: &str) -> Option<Rgb> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(digits.get(range)?, 16).ok()
    };
    Some(Rgb::new(
        channel(0..2)? as f32 / 255.0,
        channel(2..4)? as f32 / 255.0,
        channel(4..6)? as f32 / 255.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn red() { assert_eq!(hex_rgb("#ff0000"), Some(Rgb::new(1.0, 0.0, 0.0))); }
    #[test] fn green() { assert_eq!(hex_rgb("#00ff00"), Some(Rgb::new(0.0, 1.0, 0.0))); }
    #[test] fn blue() { assert_eq!(hex_rgb("#0000ff"), Some(Rgb::new(0.0, 0.0, 1.0))); }

    #[test]
    fn mixed_channels_divide_by_255() {
        let c = hex_rgb("#336699").unwrap();
        assert!((c.r - 0x33 as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0x66 as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0x99 as f32 / 255.0).abs() < 1e-6);
    }

    #[test] fn missing_hash_is_rejected() { assert_eq!(hex_rgb("ff0000"), None); }
    #[test] fn short_string_is_rejected() { assert_eq!(hex_rgb("#fff"), None); }
    #[test] fn non_hex_digits_are_rejected() { assert_eq!(hex_rgb("#zzzzzz"), None); }
}
