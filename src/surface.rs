//! Surface: the public facade tying grid, renderer, and backend together.
//!
//! A [`Surface`] owns a [`Grid`], a [`CellRenderer`], and the [`Backend`]
//! it draws through, and re-exposes the whole mutation API with one extra
//! behavior: when auto-update is enabled, every mutating call runs a render
//! update synchronously before returning. That is convenient for
//! turn-by-turn programs; anything performance-sensitive disables it and
//! calls [`Surface::update`] once per frame instead, since auto-update
//! re-scans for dirty cells on every single write.

use crate::grid::{Channels, Grid, Rgba};
use crate::layout::{PixelRect, RegionSpec};
use crate::render::{Backend, CellRenderer, WindowId, WindowMode};
use crate::Result;
use std::fmt;

/// Construction-time configuration for a [`Surface`].
///
/// No ambient globals: everything the surface needs is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Grid width in columns.
    pub width: u16,
    /// Grid height in rows.
    pub height: u16,
    /// Default foreground color.
    pub fg: Rgba,
    /// Default background color.
    pub bg: Rgba,
    /// Tab stop interval.
    pub tab_width: u16,
    /// Gap character substituted for empty cells on read-back.
    pub gap_char: char,
    /// Whether the surface owns a top-level window.
    pub window: WindowMode,
    /// Run a render update after every mutating call.
    pub auto_update: bool,
    /// Present the frame at the end of every update.
    pub auto_present: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            fg: Rgba::DEFAULT_FG,
            bg: Rgba::DEFAULT_BG,
            tab_width: Grid::DEFAULT_TAB_WIDTH,
            gap_char: ' ',
            window: WindowMode::Headless,
            auto_update: true,
            auto_present: true,
        }
    }
}

/// A character-grid display surface over a pixel backend.
pub struct Surface<B: Backend> {
    grid: Grid,
    renderer: CellRenderer,
    backend: B,
    auto_update: bool,
    auto_present: bool,
}

impl<B: Backend> Surface<B> {
    /// Create a surface from a backend and configuration.
    ///
    /// Measures the font, allocates the backing surface, and opens a window
    /// when configured to. Nothing is painted until the first update.
    pub fn new(mut backend: B, config: SurfaceConfig) -> Self {
        let grid = Grid::new(config.width, config.height, config.fg, config.bg)
            .with_tab_width(config.tab_width)
            .with_gap_char(config.gap_char);
        let renderer = CellRenderer::new(&mut backend, config.width, config.height, config.window);
        Self {
            grid,
            renderer,
            backend,
            auto_update: config.auto_update,
            auto_present: config.auto_present,
        }
    }

    /// Run a render update: repaint dirty cells, blit to the window if one
    /// is attached, present if auto-present is on. Returns the number of
    /// cells repainted.
    pub fn update(&mut self) -> usize {
        self.renderer
            .update(&mut self.grid, &mut self.backend, self.auto_present)
    }

    /// Run the implicit post-mutation update when auto-update is enabled.
    fn maybe_update(&mut self) {
        if self.auto_update {
            self.update();
        }
    }

    /// Get the underlying grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the underlying grid mutably.
    ///
    /// Direct grid mutation bypasses auto-update; call [`Surface::update`]
    /// afterwards (or rely on the next mutating surface call).
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Get the backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the backend mutably.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The attached window handle, if the surface owns one.
    pub const fn window(&self) -> Option<WindowId> {
        self.renderer.window()
    }

    /// Grid width in columns.
    pub const fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Grid height in rows.
    pub const fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Grid dimensions as (width, height).
    pub const fn size(&self) -> (u16, u16) {
        self.grid.size()
    }

    /// Pixel dimensions of one grid cell.
    pub const fn cell_size(&self) -> (u32, u32) {
        self.renderer.cell_size()
    }

    /// Total pixel width of the surface.
    pub const fn pixel_width(&self) -> u32 {
        self.grid.width() as u32 * self.renderer.cell_size().0
    }

    /// Total pixel height of the surface.
    pub const fn pixel_height(&self) -> u32 {
        self.grid.height() as u32 * self.renderer.cell_size().1
    }

    // --- Text writing -----------------------------------------------------

    /// Write text at the cursor with the default colors.
    pub fn write(&mut self, text: &str) {
        self.grid.write(text);
        self.maybe_update();
    }

    /// Write text at the cursor with optional color overrides.
    pub fn write_with(&mut self, text: &str, fg: Option<Rgba>, bg: Option<Rgba>) {
        self.grid.write_with(text, fg, bg);
        self.maybe_update();
    }

    /// Stringify a value, append a newline, and write it at the cursor.
    pub fn print(&mut self, value: impl fmt::Display) {
        self.grid.print(value);
        self.maybe_update();
    }

    /// Stringify several values joined by `sep`, append `end`, and write.
    pub fn print_all(
        &mut self,
        values: &[&dyn fmt::Display],
        sep: &str,
        end: &str,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) {
        self.grid.print_all(values, sep, end, fg, bg);
        self.maybe_update();
    }

    /// Write a single character cell without touching the cursor.
    ///
    /// Returns `false` if (x, y) is out of bounds.
    pub fn put_char(
        &mut self,
        ch: char,
        x: u16,
        y: u16,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) -> bool {
        let wrote = self.grid.put_char(ch, x, y, fg, bg);
        if wrote {
            self.maybe_update();
        }
        wrote
    }

    /// Write raw characters into a region without moving the cursor.
    pub fn put_chars(
        &mut self,
        text: &str,
        region: RegionSpec,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) -> Result<()> {
        self.grid.put_chars(text, region, fg, bg)?;
        self.maybe_update();
        Ok(())
    }

    /// Read back the character at (x, y).
    pub fn get_char(&self, x: u16, y: u16) -> Option<char> {
        self.grid.get_char(x, y)
    }

    /// Read back a region's text as one string per row.
    pub fn get_chars(&self, region: RegionSpec) -> Result<Vec<String>> {
        self.grid.get_chars(region)
    }

    /// The entire grid as a newline-joined string.
    pub fn read(&self) -> String {
        self.grid.read()
    }

    // --- Region operations ------------------------------------------------

    /// Set any of character/foreground/background over a region.
    pub fn fill(
        &mut self,
        ch: Option<char>,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
        region: RegionSpec,
    ) -> Result<()> {
        self.grid.fill(ch, fg, bg, region)?;
        self.maybe_update();
        Ok(())
    }

    /// Erase a region to transparent.
    pub fn erase(&mut self, region: RegionSpec) -> Result<()> {
        self.grid.erase(region)?;
        self.maybe_update();
        Ok(())
    }

    /// Erase `length` cells starting at the cursor.
    pub fn erase_from_cursor(&mut self, length: u32) {
        self.grid.erase_from_cursor(length);
        self.maybe_update();
    }

    /// Copy the selected channels of a region into a new, independent grid.
    pub fn copy(&self, channels: Channels, region: RegionSpec) -> Result<Option<Grid>> {
        self.grid.copy(channels, region)
    }

    /// Paste the selected channels of a source grid into a region.
    pub fn paste(&mut self, src: &Grid, channels: Channels, region: RegionSpec) -> Result<()> {
        self.grid.paste(src, channels, region)?;
        self.maybe_update();
        Ok(())
    }

    /// Swap foreground and background over a region.
    pub fn reverse_colors(&mut self, region: RegionSpec) -> Result<()> {
        self.grid.reverse_colors(region)?;
        self.maybe_update();
        Ok(())
    }

    /// Invert both colors over a region.
    pub fn invert_colors(&mut self, region: RegionSpec) -> Result<()> {
        self.grid.invert_colors(region)?;
        self.maybe_update();
        Ok(())
    }

    /// Invert the foreground over a region.
    pub fn invert_foreground(&mut self, region: RegionSpec) -> Result<()> {
        self.grid.invert_foreground(region)?;
        self.maybe_update();
        Ok(())
    }

    /// Invert the background over a region.
    pub fn invert_background(&mut self, region: RegionSpec) -> Result<()> {
        self.grid.invert_background(region)?;
        self.maybe_update();
        Ok(())
    }

    /// Brighten a region's colors (saturating).
    pub fn lighten(&mut self, amount: u8, region: RegionSpec) -> Result<()> {
        self.grid.lighten(amount, region)?;
        self.maybe_update();
        Ok(())
    }

    /// Darken a region's colors (saturating).
    pub fn darken(&mut self, amount: u8, region: RegionSpec) -> Result<()> {
        self.grid.darken(amount, region)?;
        self.maybe_update();
        Ok(())
    }

    /// Scroll the grid contents up by one row.
    pub fn scroll_up(&mut self) {
        self.grid.scroll_up();
        self.maybe_update();
    }

    // --- Cursor and colors ------------------------------------------------

    /// Get the cursor position.
    pub const fn cursor(&self) -> (u16, u16) {
        self.grid.cursor()
    }

    /// Set the cursor position (negative indices count from the far edge).
    pub fn set_cursor(&mut self, x: i32, y: i32) -> Result<()> {
        self.grid.set_cursor(x, y)
    }

    /// Set the cursor column.
    pub fn set_cursor_x(&mut self, x: i32) -> Result<()> {
        self.grid.set_cursor_x(x)
    }

    /// Set the cursor row.
    pub fn set_cursor_y(&mut self, y: i32) -> Result<()> {
        self.grid.set_cursor_y(y)
    }

    /// Get the default foreground color.
    pub const fn fg(&self) -> Rgba {
        self.grid.default_fg()
    }

    /// Get the default background color.
    pub const fn bg(&self) -> Rgba {
        self.grid.default_bg()
    }

    /// Set the default foreground color for subsequent writes.
    pub fn set_fg(&mut self, fg: Rgba) {
        self.grid.set_default_fg(fg);
    }

    /// Set the default background color for subsequent writes.
    pub fn set_bg(&mut self, bg: Rgba) {
        self.grid.set_default_bg(bg);
    }

    /// Check whether auto-update is enabled.
    pub const fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Enable or disable the implicit post-mutation update.
    pub fn set_auto_update(&mut self, auto_update: bool) {
        self.auto_update = auto_update;
    }

    /// Check whether auto-present is enabled.
    pub const fn auto_present(&self) -> bool {
        self.auto_present
    }

    /// Enable or disable presenting at the end of every update.
    pub fn set_auto_present(&mut self, auto_present: bool) {
        self.auto_present = auto_present;
    }

    // --- Geometry ---------------------------------------------------------

    /// Resize the grid, preserving overlapping content.
    ///
    /// The backing surface is reallocated (and the owned window resized),
    /// so the whole grid is marked for repaint. When the surface owns a
    /// window, an update runs immediately regardless of the auto-update
    /// flag; headless surfaces follow the flag as usual. The cursor resets
    /// to (0, 0).
    pub fn resize(&mut self, width: u16, height: u16, fg: Option<Rgba>, bg: Option<Rgba>) {
        if (width, height) == self.grid.size() {
            return;
        }
        log::debug!("resizing surface to {width}x{height} cells");
        self.grid.resize(width, height, fg, bg);
        self.renderer.resize(&mut self.backend, width, height);
        self.grid.mark_all_dirty();
        if self.renderer.window().is_some() {
            self.update();
        } else {
            self.maybe_update();
        }
    }

    /// The cell containing pixel (px, py), or `None` outside the surface.
    #[allow(clippy::cast_possible_truncation)]
    pub fn cell_at_pixel(&self, px: i32, py: i32) -> Option<(u16, u16)> {
        let (x, y) = self.renderer.cell_at_pixel(px, py)?;
        if x < u32::from(self.grid.width()) && y < u32::from(self.grid.height()) {
            Some((x as u16, y as u16))
        } else {
            None
        }
    }

    /// The pixel rectangle covering cell (x, y), or `None` out of bounds.
    pub fn pixel_rect_of_cell(&self, x: u16, y: u16) -> Option<PixelRect> {
        if x < self.grid.width() && y < self.grid.height() {
            Some(self.renderer.pixel_rect_of_cell(x, y))
        } else {
            None
        }
    }
}

impl<B: Backend> fmt::Debug for Surface<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("grid", &self.grid)
            .field("cell_size", &self.renderer.cell_size())
            .field("auto_update", &self.auto_update)
            .field("auto_present", &self.auto_present)
            .finish_non_exhaustive()
    }
}
