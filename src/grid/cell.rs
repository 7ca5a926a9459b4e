//! Cell: The atomic unit of the character grid.
//!
//! # Memory Layout
//!
//! The `Cell` struct is designed for cache efficiency:
//! - 12 bytes total, so a row of 80 cells spans 15 cache lines
//! - Characters are printable ASCII (32-127), stored as a single byte
//! - A zero byte marks an empty cell, which renders fully transparent
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Cell Layout (12 bytes)                              │
//! ├────────┬─────────┬───────────┬───────────┬───────────┤
//! │   ch   │  flags  │    fg     │    bg     │  padding  │
//! │   u8   │   u8    │  [u8; 4]  │  [u8; 4]  │  [u8; 2]  │
//! │ 1 byte │ 1 byte  │  4 bytes  │  4 bytes  │  2 bytes  │
//! └────────┴─────────┴───────────┴───────────┴───────────┘
//! ```

use bitflags::bitflags;

/// First character of the printable ASCII range (space).
pub const PRINTABLE_MIN: u8 = 32;
/// Last character of the printable ASCII range.
pub const PRINTABLE_MAX: u8 = 127;

/// Check whether a character falls in the printable range 32-127.
#[inline]
pub const fn is_printable(c: char) -> bool {
    (c as u32) >= PRINTABLE_MIN as u32 && (c as u32) <= PRINTABLE_MAX as u32
}

/// True-color RGBA representation.
///
/// Uses 4 bytes for 24-bit color plus an alpha channel. Alpha only matters
/// at the rendering boundary: an alpha of 0 paints nothing.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a new opaque RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with an explicit alpha channel.
    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Silver (192, 192, 192)
    pub const SILVER: Self = Self::new(192, 192, 192);
    /// Fully transparent (0, 0, 0, 0)
    pub const TRANSPARENT: Self = Self::with_alpha(0, 0, 0, 0);
    /// Default foreground (silver)
    pub const DEFAULT_FG: Self = Self::SILVER;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500). Alpha is opaque.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Channel-wise inversion (`255 - c`); alpha is preserved.
    #[inline]
    #[must_use]
    pub const fn invert(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }

    /// Saturating channel-wise brighten; alpha is preserved.
    #[inline]
    #[must_use]
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }

    /// Saturating channel-wise darken; alpha is preserved.
    #[inline]
    #[must_use]
    pub const fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<(u8, u8, u8)> for Rgba {
    /// A 3-tuple defaults the alpha channel to 255.
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::with_alpha(r, g, b, a)
    }
}

impl From<u32> for Rgba {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl TryFrom<&[u8]> for Rgba {
    type Error = crate::Error;

    /// Normalize a runtime channel sequence into a color.
    ///
    /// Accepts exactly 3 channels (alpha defaults to 255) or 4 channels;
    /// any other length is an [`crate::Error::InvalidColor`].
    fn try_from(channels: &[u8]) -> crate::Result<Self> {
        match *channels {
            [r, g, b] => Ok(Self::new(r, g, b)),
            [r, g, b, a] => Ok(Self::with_alpha(r, g, b, a)),
            _ => Err(crate::Error::InvalidColor(channels.len())),
        }
    }
}

bitflags! {
    /// Cell-level flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// Cell has been modified since the last render pass
        const DIRTY = 0b0000_0001;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single grid cell.
///
/// Each cell holds an optional printable character and a concrete pair of
/// colors. A cell with no character is "empty" and renders fully transparent;
/// its colors are still defined (the grid's defaults), so a later character
/// write never observes an unset color.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character byte (printable ASCII 32-127), or 0 for an empty cell.
    ch: u8,
    /// Cell flags (dirty tracking).
    flags: CellFlags,
    /// Foreground color.
    fg: Rgba,
    /// Background color.
    bg: Rgba,
    /// Padding to reach 12 bytes.
    _padding: [u8; 2],
}

// Compile-time assertion: Cell must stay at 12 bytes
const _: () = assert!(
    std::mem::size_of::<Cell>() == 12,
    "Cell must be exactly 12 bytes for cache efficiency"
);

impl Cell {
    /// Create an empty (transparent) cell with the given colors, marked dirty.
    #[inline]
    pub const fn blank(fg: Rgba, bg: Rgba) -> Self {
        Self {
            ch: 0,
            flags: CellFlags::DIRTY,
            fg,
            bg,
            _padding: [0, 0],
        }
    }

    /// Create a cell holding a printable character, marked dirty.
    ///
    /// Characters outside the printable range 32-127 are stored as `?`.
    #[inline]
    pub const fn new(c: char, fg: Rgba, bg: Rgba) -> Self {
        let byte = if is_printable(c) { c as u8 } else { b'?' };
        Self {
            ch: byte,
            flags: CellFlags::DIRTY,
            fg,
            bg,
            _padding: [0, 0],
        }
    }

    /// Get the character, or `None` for an empty cell.
    #[inline]
    pub const fn character(&self) -> Option<char> {
        if self.ch == 0 {
            None
        } else {
            Some(self.ch as char)
        }
    }

    /// Check whether the cell is empty (renders transparent).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ch == 0
    }

    /// Set the character. `None` clears the cell to empty; unprintable
    /// characters are substituted with `?`.
    #[inline]
    pub const fn set_character(&mut self, c: Option<char>) -> &mut Self {
        self.ch = match c {
            None => 0,
            Some(c) => {
                if is_printable(c) {
                    c as u8
                } else {
                    b'?'
                }
            }
        };
        self
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgba {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgba {
        self.bg
    }

    /// Set the foreground color.
    #[inline]
    pub const fn set_fg(&mut self, fg: Rgba) -> &mut Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn set_bg(&mut self, bg: Rgba) -> &mut Self {
        self.bg = bg;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgba) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgba) -> Self {
        self.bg = bg;
        self
    }

    /// Check the dirty flag.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.flags.contains(CellFlags::DIRTY)
    }

    /// Mark the cell as modified since the last render pass.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.insert(CellFlags::DIRTY);
    }

    /// Clear the dirty flag (called by the renderer after repainting).
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.flags.remove(CellFlags::DIRTY);
    }

    /// Get the flags.
    #[inline]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.character())
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
