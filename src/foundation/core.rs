use crate::foundation::error::{EmberError, EmberResult};

pub use kurbo::{Point, Vec2};

/// Packed tint of a fully white particle (`0xRRGGBB`).
pub const WHITE_TINT: u32 = 0xFF_FF_FF;

/// Straight RGB8 color triple.
///
/// Serializes as a `#rrggbb` hex string and deserializes from any form accepted by
/// [`Rgb8::from_hex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color.
    ///
    /// Accepts a leading `#`, `0x`/`0X`, or no prefix, followed by `rrggbb` or
    /// `aarrggbb`. The alpha byte of the 8-digit form is discarded.
    pub fn from_hex(s: &str) -> EmberResult<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EmberError::validation(format!(
                "invalid hex color \"{s}\": non-hex digit"
            )));
        }
        let rgb = match digits.len() {
            6 => digits,
            8 => &digits[2..],
            _ => {
                return Err(EmberError::validation(format!(
                    "invalid hex color \"{s}\": expected rrggbb or aarrggbb"
                )));
            }
        };

        let packed = u32::from_str_radix(rgb, 16)
            .map_err(|e| EmberError::validation(format!("invalid hex color \"{s}\": {e}")))?;
        Ok(Self::from_tint(packed))
    }

    /// Pack into a single `0xRRGGBB` tint integer.
    pub fn to_tint(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpack a `0xRRGGBB` tint integer. Bits above 24 are ignored.
    pub fn from_tint(tint: u32) -> Self {
        Self {
            r: ((tint >> 16) & 0xFF) as u8,
            g: ((tint >> 8) & 0xFF) as u8,
            b: (tint & 0xFF) as u8,
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a hex color string straight to a packed tint.
pub fn parse_tint(s: &str) -> EmberResult<u32> {
    Rgb8::from_hex(s).map(Rgb8::to_tint)
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
