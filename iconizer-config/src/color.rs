//! Tab color value and its text codec.
//!
//! Color text follows the host platform's conventions: hex forms put the
//! alpha channel first (`#AARRGGBB`, `#ARGB`) and names are matched without
//! regard to case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// An 8-bit RGBA color (unmultiplied alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TabColor {
    pub const WHITE: TabColor = TabColor::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: TabColor = TabColor::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: TabColor = TabColor::rgba(0xFF, 0xFF, 0xFF, 0x00);

    /// Opaque color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// `[r, g, b, a]`, the layout egui's color editors work with.
    #[inline]
    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_rgba_array(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Packed `0xAARRGGBB`, the layout GDI-style color dialogs work with.
    #[inline]
    pub fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::rgba(r, g, b, a)
    }
}

impl Default for TabColor {
    fn default() -> Self {
        TabColor::WHITE
    }
}

/// Decode color text.
///
/// Accepts `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` and the named colors in
/// [`NAMED_COLORS`]. Surrounding whitespace is ignored.
pub fn decode(text: &str) -> Result<TabColor, ColorParseError> {
    let trimmed = text.trim();
    let decoded = match trimmed.strip_prefix('#') {
        Some(hex) => decode_hex(hex),
        None => named_color(trimmed),
    };
    decoded.ok_or_else(|| ColorParseError::InvalidFormat(text.to_string()))
}

/// Canonical text form: `#RRGGBB` for opaque colors, `#AARRGGBB` otherwise.
pub fn encode(color: TabColor) -> String {
    if color.is_opaque() {
        format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            color.a, color.r, color.g, color.b
        )
    }
}

fn decode_hex(hex: &str) -> Option<TabColor> {
    // Also guarantees every index below falls on a char boundary.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(TabColor::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(TabColor::rgba(nibble(1)?, nibble(2)?, nibble(3)?, nibble(0)?)),
        6 => Some(TabColor::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(TabColor::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => None,
    }
}

/// Look up a color by name, ignoring ASCII case.
pub fn named_color(name: &str) -> Option<TabColor> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Color names accepted by [`decode`].
pub const NAMED_COLORS: &[(&str, TabColor)] = &[
    ("Transparent", TabColor::TRANSPARENT),
    ("Black", TabColor::rgb(0x00, 0x00, 0x00)),
    ("White", TabColor::rgb(0xFF, 0xFF, 0xFF)),
    ("Red", TabColor::rgb(0xFF, 0x00, 0x00)),
    ("Green", TabColor::rgb(0x00, 0x80, 0x00)),
    ("Lime", TabColor::rgb(0x00, 0xFF, 0x00)),
    ("Blue", TabColor::rgb(0x00, 0x00, 0xFF)),
    ("Yellow", TabColor::rgb(0xFF, 0xFF, 0x00)),
    ("Cyan", TabColor::rgb(0x00, 0xFF, 0xFF)),
    ("Aqua", TabColor::rgb(0x00, 0xFF, 0xFF)),
    ("Magenta", TabColor::rgb(0xFF, 0x00, 0xFF)),
    ("Fuchsia", TabColor::rgb(0xFF, 0x00, 0xFF)),
    ("Silver", TabColor::rgb(0xC0, 0xC0, 0xC0)),
    ("Gray", TabColor::rgb(0x80, 0x80, 0x80)),
    ("Grey", TabColor::rgb(0x80, 0x80, 0x80)),
    ("LightGray", TabColor::rgb(0xD3, 0xD3, 0xD3)),
    ("DarkGray", TabColor::rgb(0xA9, 0xA9, 0xA9)),
    ("DimGray", TabColor::rgb(0x69, 0x69, 0x69)),
    ("Maroon", TabColor::rgb(0x80, 0x00, 0x00)),
    ("DarkRed", TabColor::rgb(0x8B, 0x00, 0x00)),
    ("Crimson", TabColor::rgb(0xDC, 0x14, 0x3C)),
    ("Tomato", TabColor::rgb(0xFF, 0x63, 0x47)),
    ("Coral", TabColor::rgb(0xFF, 0x7F, 0x50)),
    ("Salmon", TabColor::rgb(0xFA, 0x80, 0x72)),
    ("Orange", TabColor::rgb(0xFF, 0xA5, 0x00)),
    ("DarkOrange", TabColor::rgb(0xFF, 0x8C, 0x00)),
    ("Gold", TabColor::rgb(0xFF, 0xD7, 0x00)),
    ("Khaki", TabColor::rgb(0xF0, 0xE6, 0x8C)),
    ("Olive", TabColor::rgb(0x80, 0x80, 0x00)),
    ("DarkGreen", TabColor::rgb(0x00, 0x64, 0x00)),
    ("Teal", TabColor::rgb(0x00, 0x80, 0x80)),
    ("Turquoise", TabColor::rgb(0x40, 0xE0, 0xD0)),
    ("SkyBlue", TabColor::rgb(0x87, 0xCE, 0xEB)),
    ("SteelBlue", TabColor::rgb(0x46, 0x82, 0xB4)),
    ("DodgerBlue", TabColor::rgb(0x1E, 0x90, 0xFF)),
    ("CornflowerBlue", TabColor::rgb(0x64, 0x95, 0xED)),
    ("Navy", TabColor::rgb(0x00, 0x00, 0x80)),
    ("DarkBlue", TabColor::rgb(0x00, 0x00, 0x8B)),
    ("Indigo", TabColor::rgb(0x4B, 0x00, 0x82)),
    ("Purple", TabColor::rgb(0x80, 0x00, 0x80)),
    ("Violet", TabColor::rgb(0xEE, 0x82, 0xEE)),
    ("Pink", TabColor::rgb(0xFF, 0xC0, 0xCB)),
    ("Brown", TabColor::rgb(0xA5, 0x2A, 0x2A)),
];

impl fmt::Display for TabColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(*self))
    }
}

impl FromStr for TabColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

// Colors are stored as their text form so config files stay readable.
impl Serialize for TabColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(*self))
    }
}

impl<'de> Deserialize<'de> for TabColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        decode(&text).map_err(serde::de::Error::custom)
    }
}
