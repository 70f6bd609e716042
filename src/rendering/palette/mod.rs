pub mod palette;

pub use palette::{color_from_hex, Palette, PaletteCursor, REFERENCE_COLORS};
