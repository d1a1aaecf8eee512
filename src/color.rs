//! RGBA color used by the color picker editor.
//!
//! Colors travel through edits and serialized frames as CSS-style hex strings
//! (`#rgb`, `#rrggbb`, or `#rrggbbaa`) and are normalized to lowercase on
//! output.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 122, 255);
    pub const RED: Self = Self::rgb(255, 59, 48);
    pub const CLEAR: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?.as_bytes();
        if !hex.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        match *hex {
            [r, g, b] => Some(Self::rgb(nibble(r) * 17, nibble(g) * 17, nibble(b) * 17)),
            [r1, r0, g1, g0, b1, b0] => Some(Self::rgb(byte(r1, r0), byte(g1, g0), byte(b1, b0))),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Some(Self {
                r: byte(r1, r0),
                g: byte(g1, g0),
                b: byte(b1, b0),
                a: byte(a1, a0),
            }),
            _ => None,
        }
    }

    /// Lowercase hex form; alpha is only written when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Value of one hex digit. Callers check `is_ascii_hexdigit` first.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => (digit | 0x20).wrapping_sub(b'a' - 10),
    }
}

fn byte(high: u8, low: u8) -> u8 {
    (nibble(high) << 4) | nibble(low)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {raw}")))
    }
}
