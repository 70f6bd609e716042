//! Sphere color palette & cursor.
//! The palette is a fixed ordered list of sRGB hex values; the cursor walks it
//! one step per wall contact and wraps.

use bevy::prelude::*;

/// Reference palette (sRGB hex). Order matters; repeated entries are intentional.
pub const REFERENCE_COLORS: [u32; 28] = [
    0xff0000, 0xff3300, 0xff6600, 0xff9900, 0xffcc00, 0xffee00, 0x00ff00, //
    0x00ff33, 0x00ff66, 0x00ff99, 0x00ffcc, 0x00ffff, 0x00ccff, 0x0099ff, //
    0x0066ff, 0x0033ff, 0x0000ff, 0x000000, 0xcc00ff, 0x9900ff, 0x6600ff, //
    0x3300ff, 0x0000ff, 0xffff00, 0xffcc00, 0xff9900, 0xff6600, 0xff3300, //
];

/// Converts a packed `0xRRGGBB` value into a Bevy sRGB color.
#[inline]
pub fn color_from_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Non-empty, immutable color sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [u32],
}

impl Palette {
    pub const fn reference() -> Self {
        Self {
            colors: &REFERENCE_COLORS,
        }
    }

    /// Returns `None` for an empty slice.
    pub fn from_static(colors: &'static [u32]) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Hex color at `cursor`. Cursors are created against this palette's length
    /// so the index is always in range.
    #[inline]
    pub fn hex_at(&self, cursor: PaletteCursor) -> u32 {
        self.colors[cursor.index() % self.colors.len()]
    }

    pub fn cursor(&self) -> PaletteCursor {
        PaletteCursor::new(self.len())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::reference()
    }
}

/// Index into a palette of fixed length. Always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteCursor {
    index: usize,
    len: usize,
}

impl PaletteCursor {
    fn new(len: usize) -> Self {
        debug_assert!(len > 0, "palette cursor over empty palette");
        Self { index: 0, len }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Selects the next color, wrapping to 0 after the last entry.
    #[inline]
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static THREE: [u32; 3] = [0x111111, 0x222222, 0x333333];

    #[test]
    fn reference_palette_shape() {
        let p = Palette::reference();
        assert_eq!(p.len(), 28);
        assert_eq!(p.hex_at(p.cursor()), 0xff0000);
    }

    #[test]
    fn empty_slice_rejected() {
        assert!(Palette::from_static(&[]).is_none());
    }

    #[test]
    fn cursor_wraps_after_len_advances() {
        let p = Palette::from_static(&THREE).unwrap();
        let mut c = p.cursor();
        assert_eq!(c.advance(), 1);
        assert_eq!(c.advance(), 2);
        assert_eq!(c.advance(), 0);
        assert_eq!(p.hex_at(c), 0x111111);
    }

    #[test]
    fn reference_cursor_full_cycle() {
        let p = Palette::reference();
        let mut c = p.cursor();
        for i in 1..p.len() {
            assert_eq!(c.advance(), i);
        }
        assert_eq!(c.advance(), 0);
    }

    #[test]
    fn hex_conversion_channels() {
        let c = color_from_hex(0xff9900).to_srgba();
        assert!((c.red - 1.0).abs() < 1e-6);
        assert!((c.green - 0x99 as f32 / 255.0).abs() < 1e-6);
        assert!(c.blue.abs() < 1e-6);
    }
}
