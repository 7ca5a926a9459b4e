//! Grid: The authoritative per-cell state of the text surface.
//!
//! Cells are stored in a contiguous `Vec` in row-major order for cache
//! efficiency: `index = y * width + x`. The grid also owns the cursor, the
//! default color pair, and the tab/gap configuration fixed at construction.
//!
//! Out-of-bounds access never wraps: indexed reads return `None` and indexed
//! writes report `false`. The one place negative coordinates are meaningful
//! is the explicit cursor setters, where `-1` addresses the last column/row.

use super::cell::{Cell, Rgba};
use crate::error::{Error, Result};

/// A 2D grid of character cells.
///
/// Created with explicit dimensions and a default color pair; mutated by
/// every write/fill/copy/paste/resize call. There is no internal locking:
/// callers serialize mutation themselves.
#[derive(Clone)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    pub(crate) cells: Vec<Cell>,
    /// Grid width in columns.
    pub(crate) width: u16,
    /// Grid height in rows.
    pub(crate) height: u16,
    /// Cursor column, always `< width`.
    pub(crate) cursor_x: u16,
    /// Cursor row, always `< height`.
    pub(crate) cursor_y: u16,
    /// Default foreground, used when a write omits an explicit color.
    pub(crate) default_fg: Rgba,
    /// Default background.
    pub(crate) default_bg: Rgba,
    /// Tab stop interval, fixed at construction.
    pub(crate) tab_width: u16,
    /// Character substituted for empty cells on text read-back.
    pub(crate) gap_char: char,
    /// Set when the cursor has walked off the bottom edge; the grid scrolls
    /// when the next glyph lands, not when the cursor moves.
    pub(crate) scroll_pending: bool,
}

impl Grid {
    /// Default tab stop interval.
    pub const DEFAULT_TAB_WIDTH: u16 = 8;

    /// Create a new grid with every cell empty, using the given defaults.
    ///
    /// All cells start dirty so the first render pass paints the whole
    /// surface.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16, fg: Rgba, bg: Rgba) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        log::debug!("creating {width}x{height} grid ({size} cells)");
        Self {
            cells: vec![Cell::blank(fg, bg); size],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
            default_fg: fg,
            default_bg: bg,
            tab_width: Self::DEFAULT_TAB_WIDTH,
            gap_char: ' ',
            scroll_pending: false,
        }
    }

    /// Set the tab stop interval (builder, construction-time only).
    ///
    /// # Panics
    /// Panics if `tab_width` is 0.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u16) -> Self {
        assert!(tab_width > 0, "tab width must be non-zero");
        self.tab_width = tab_width;
        self
    }

    /// Set the gap character used for empty cells on read-back (builder).
    #[must_use]
    pub fn with_gap_char(mut self, gap_char: char) -> Self {
        self.gap_char = gap_char;
        self
    }

    /// Get the grid width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the grid height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the dimensions as a (width, height) pair.
    #[inline]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no cells (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the tab stop interval.
    #[inline]
    pub const fn tab_width(&self) -> u16 {
        self.tab_width
    }

    /// Get the gap character substituted for empty cells on read-back.
    #[inline]
    pub const fn gap_char(&self) -> char {
        self.gap_char
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a mutable reference to the underlying cell slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Convert a linear index to (x, y) coordinates.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Option<(u16, u16)> {
        if index < self.cells.len() {
            #[allow(clippy::cast_possible_truncation)]
            let x = (index % (self.width as usize)) as u16;
            #[allow(clippy::cast_possible_truncation)]
            let y = (index / (self.width as usize)) as u16;
            Some((x, y))
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a single character cell without touching the cursor.
    ///
    /// Omitted colors fall back to the grid defaults. The cell is marked
    /// dirty. Returns `false` if (x, y) is out of bounds.
    pub fn put_char(
        &mut self,
        ch: char,
        x: u16,
        y: u16,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) -> bool {
        let fg = fg.unwrap_or(self.default_fg);
        let bg = bg.unwrap_or(self.default_bg);
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = Cell::new(ch, fg, bg);
            true
        } else {
            false
        }
    }

    /// Read back the character at (x, y).
    ///
    /// Returns `None` for an empty cell or out-of-bounds coordinates.
    #[inline]
    pub fn get_char(&self, x: u16, y: u16) -> Option<char> {
        self.cell(x, y).and_then(Cell::character)
    }

    /// Get the default foreground color.
    #[inline]
    pub const fn default_fg(&self) -> Rgba {
        self.default_fg
    }

    /// Get the default background color.
    #[inline]
    pub const fn default_bg(&self) -> Rgba {
        self.default_bg
    }

    /// Set the default foreground color for subsequent writes.
    #[inline]
    pub fn set_default_fg(&mut self, fg: Rgba) {
        self.default_fg = fg;
    }

    /// Set the default background color for subsequent writes.
    #[inline]
    pub fn set_default_bg(&mut self, bg: Rgba) {
        self.default_bg = bg;
    }

    /// Get the cursor position.
    #[inline]
    pub const fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Get the cursor column.
    #[inline]
    pub const fn cursor_x(&self) -> u16 {
        self.cursor_x
    }

    /// Get the cursor row.
    #[inline]
    pub const fn cursor_y(&self) -> u16 {
        self.cursor_y
    }

    /// Set the cursor position.
    ///
    /// Negative indices count from the opposite edge (`-1` is the last
    /// column/row). Values outside `[-width, width) x [-height, height)`
    /// are rejected with [`Error::OutOfBoundsCursor`] and leave the cursor
    /// unchanged.
    pub fn set_cursor(&mut self, x: i32, y: i32) -> Result<()> {
        let cx = Self::resolve_cursor_coord(x, self.width);
        let cy = Self::resolve_cursor_coord(y, self.height);
        match (cx, cy) {
            (Some(cx), Some(cy)) => {
                self.cursor_x = cx;
                self.cursor_y = cy;
                self.scroll_pending = false;
                Ok(())
            }
            _ => Err(Error::OutOfBoundsCursor {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Set the cursor column, keeping the current row.
    pub fn set_cursor_x(&mut self, x: i32) -> Result<()> {
        let y = i32::from(self.cursor_y);
        self.set_cursor(x, y)
    }

    /// Set the cursor row, keeping the current column.
    pub fn set_cursor_y(&mut self, y: i32) -> Result<()> {
        let x = i32::from(self.cursor_x);
        self.set_cursor(x, y)
    }

    /// Resolve one signed cursor coordinate against an axis size.
    fn resolve_cursor_coord(v: i32, size: u16) -> Option<u16> {
        let size = i32::from(size);
        if v >= size || v < -size {
            return None;
        }
        let resolved = if v < 0 { size + v } else { v };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let resolved = resolved as u16;
        Some(resolved)
    }

    /// Mark every cell dirty, forcing a full repaint on the next update.
    pub fn mark_all_dirty(&mut self) {
        for cell in &mut self.cells {
            cell.mark_dirty();
        }
    }

    /// Count the cells currently marked dirty.
    pub fn dirty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_dirty()).count()
    }

    /// Scroll the grid contents up by one row.
    ///
    /// Row `y` takes row `y + 1`'s character and colors; the freed bottom row
    /// is blanked with the grid's *current* defaults, not the colors of
    /// whatever text triggered the scroll. Every cell is marked dirty: a full
    /// repaint is unavoidable after a scroll. O(width * height), paid only at
    /// line-overflow boundaries.
    pub fn scroll_up(&mut self) {
        let w = self.width as usize;
        self.cells.copy_within(w.., 0);
        let blank = Cell::blank(self.default_fg, self.default_bg);
        let last_row = self.cells.len() - w;
        self.cells[last_row..].fill(blank);
        self.mark_all_dirty();
        log::trace!("scrolled grid up one row");
    }

    /// Resize the grid, preserving overlapping content.
    ///
    /// Cells present in both the old and new bounds keep their character,
    /// colors, and dirty state. Cells that exist only in the new grid are
    /// initialized empty with the given colors (or the current defaults) and
    /// marked dirty, so a resize always ends in a full repaint of the new
    /// area. The cursor resets to (0, 0) unconditionally; callers reposition
    /// it afterwards.
    pub fn resize(
        &mut self,
        new_width: u16,
        new_height: u16,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        assert!(
            new_width > 0 && new_height > 0,
            "Grid dimensions must be non-zero"
        );
        log::debug!(
            "resizing grid {}x{} -> {new_width}x{new_height}",
            self.width,
            self.height
        );

        let fill_fg = fg.unwrap_or(self.default_fg);
        let fill_bg = bg.unwrap_or(self.default_bg);
        let new_size = (new_width as usize) * (new_height as usize);
        let mut new_cells = vec![Cell::blank(fill_fg, fill_bg); new_size];

        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;
        for y in 0..copy_height {
            let old_start = y * (self.width as usize);
            let new_start = y * (new_width as usize);
            new_cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.scroll_pending = false;
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Get a mutable iterator over rows.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
        self.cells.chunks_mut(self.width as usize)
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cursor", &self.cursor())
            .field("dirty", &self.dirty_count())
            .finish_non_exhaustive()
    }
}

/// Text dump of the grid: rows top to bottom, one line per row, empty cells
/// as the gap character. Color information is necessarily lost.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.character().unwrap_or(self.gap_char))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
