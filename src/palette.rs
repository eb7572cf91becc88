//! The 16-color mIRC palette.
//!
//! Color codes in IRC text carry a palette *index*, not a color value.
//! This module maps indices 0–15 to packed 24-bit RGB values, and to the
//! channel-swapped form the rendering surface consumes (red and blue
//! exchanged, green untouched). Both tables are `const`, so the palette is
//! immutable and safe to read from any number of threads.

use crate::error::InvalidColorIndex;

/// Packed `0xRRGGBB` values for palette indices 0–15, in the conventional
/// mIRC order.
const PALETTE_RGB: [u32; 16] = [
    0xFFFFFF, // 0: white
    0x000000, // 1: black
    0x00007F, // 2: navy
    0x009300, // 3: green
    0xFF0000, // 4: red
    0x7F0000, // 5: maroon
    0x9C009C, // 6: purple
    0xFC7F00, // 7: orange
    0xFFFF00, // 8: yellow
    0x00FC00, // 9: lime
    0x009393, // 10: teal
    0x00FFFF, // 11: cyan
    0x0000FC, // 12: blue
    0xFF00FF, // 13: pink
    0x7F7F7F, // 14: dark gray
    0xD2D2D2, // 15: light gray
];

/// Swap the red and blue channels of a packed `0xRRGGBB` value.
const fn swap_channels(rgb: u32) -> u32 {
    let r = (rgb >> 16) & 0xFF;
    let g = (rgb >> 8) & 0xFF;
    let b = rgb & 0xFF;
    (b << 16) | (g << 8) | r
}

const fn build_resolved(rgb: [u32; 16]) -> [u32; 16] {
    let mut out = [0u32; 16];
    let mut i = 0;
    while i < 16 {
        out[i] = swap_channels(rgb[i]);
        i += 1;
    }
    out
}

/// The palette with channels pre-swapped for the rendering surface
/// (`0x00BBGGRR`), computed at compile time.
const PALETTE_RESOLVED: [u32; 16] = build_resolved(PALETTE_RGB);

/// One of the 16 base IRC colors.
///
/// The discriminant is the wire-format palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum IrcColor {
    /// Index 0.
    White = 0,
    /// Index 1.
    Black = 1,
    /// Index 2.
    Navy = 2,
    /// Index 3.
    Green = 3,
    /// Index 4.
    Red = 4,
    /// Index 5.
    Maroon = 5,
    /// Index 6.
    Purple = 6,
    /// Index 7.
    Orange = 7,
    /// Index 8.
    Yellow = 8,
    /// Index 9.
    Lime = 9,
    /// Index 10.
    Teal = 10,
    /// Index 11.
    Cyan = 11,
    /// Index 12.
    Blue = 12,
    /// Index 13.
    Pink = 13,
    /// Index 14.
    DarkGray = 14,
    /// Index 15.
    LightGray = 15,
}

impl IrcColor {
    /// Look up a color by exact palette index.
    ///
    /// Returns `None` for indices outside 0–15.
    pub fn from_index(index: u8) -> Option<IrcColor> {
        use IrcColor::*;
        Some(match index {
            0 => White,
            1 => Black,
            2 => Navy,
            3 => Green,
            4 => Red,
            5 => Maroon,
            6 => Purple,
            7 => Orange,
            8 => Yellow,
            9 => Lime,
            10 => Teal,
            11 => Cyan,
            12 => Blue,
            13 => Pink,
            14 => DarkGray,
            15 => LightGray,
            _ => return None,
        })
    }

    /// Look up a color by palette index, wrapping out-of-range indices.
    ///
    /// A color code can carry up to two digits, so indices 16–99 are
    /// reachable on the wire. Those are folded onto the base palette
    /// modulo 16, the way most clients treat the extended range, so a
    /// color code never fails because of its value.
    pub fn from_index_lossy(index: u8) -> IrcColor {
        // index % 16 is always in range
        Self::from_index(index % 16).unwrap_or(IrcColor::White)
    }

    /// The wire-format palette index of this color.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The color as packed `0xRRGGBB`.
    pub fn rgb(self) -> u32 {
        PALETTE_RGB[self as usize]
    }

    /// The color in the rendering surface's byte order (`0x00BBGGRR`):
    /// red and blue channels swapped, green untouched.
    pub fn resolved(self) -> u32 {
        PALETTE_RESOLVED[self as usize]
    }
}

impl TryFrom<u8> for IrcColor {
    type Error = InvalidColorIndex;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        IrcColor::from_index(index).ok_or(InvalidColorIndex(index))
    }
}
