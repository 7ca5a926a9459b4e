//! Incremental renderer: repaint dirty cells only.
//!
//! The renderer owns the backing surface and the glyph cell metrics, and
//! walks the grid once per update. A cell untouched since the last update
//! performs zero rendering work; that skip is the system's core performance
//! property, and what makes per-frame updates affordable on large grids.

use super::backend::{Backend, SurfaceId, WindowId, WindowMode};
use crate::grid::{Cell, Grid, Rgba, PRINTABLE_MAX, PRINTABLE_MIN};
use crate::layout::PixelRect;

/// Renders a [`Grid`] into a backing pixel surface, dirty cells only.
///
/// Cell metrics are measured once at construction (the widest and tallest
/// glyph in the printable range set the cell size) and stay constant for
/// the renderer's lifetime.
#[derive(Debug)]
pub struct CellRenderer {
    /// Backing surface handle.
    surface: SurfaceId,
    /// Attached window, if the surface owns one.
    window: Option<WindowId>,
    /// Pixel width of one grid cell.
    cell_width: u32,
    /// Pixel height of one grid cell.
    cell_height: u32,
}

impl CellRenderer {
    /// Create a renderer for a grid of the given dimensions.
    ///
    /// Measures every glyph in the printable range to fix the cell metrics,
    /// allocates the backing surface, and opens a window when asked.
    pub fn new<B: Backend>(
        backend: &mut B,
        grid_width: u16,
        grid_height: u16,
        window: WindowMode,
    ) -> Self {
        let (cell_width, cell_height) = measure_cell(backend);
        let pixel_width = u32::from(grid_width) * cell_width;
        let pixel_height = u32::from(grid_height) * cell_height;
        let surface = backend.create_surface(pixel_width, pixel_height);
        let window = match window {
            WindowMode::Headless => None,
            WindowMode::Windowed { fullscreen } => {
                Some(backend.create_window(pixel_width, pixel_height, fullscreen))
            }
        };
        log::debug!(
            "cell renderer ready: {cell_width}x{cell_height} px cells, \
             {pixel_width}x{pixel_height} px surface"
        );
        Self {
            surface,
            window,
            cell_width,
            cell_height,
        }
    }

    /// The backing surface handle.
    #[inline]
    pub const fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The attached window handle, if any.
    #[inline]
    pub const fn window(&self) -> Option<WindowId> {
        self.window
    }

    /// Pixel dimensions of one grid cell.
    #[inline]
    pub const fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// The pixel rectangle covering cell (x, y).
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn pixel_rect_of_cell(&self, x: u16, y: u16) -> PixelRect {
        PixelRect::new(
            (x as u32 * self.cell_width) as i32,
            (y as u32 * self.cell_height) as i32,
            self.cell_width,
            self.cell_height,
        )
    }

    /// The cell containing pixel (px, py), ignoring grid bounds.
    ///
    /// Returns `None` for negative coordinates; the caller checks the grid's
    /// own bounds.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    pub const fn cell_at_pixel(&self, px: i32, py: i32) -> Option<(u32, u32)> {
        if px < 0 || py < 0 {
            return None;
        }
        Some((px as u32 / self.cell_width, py as u32 / self.cell_height))
    }

    /// Repaint every dirty cell, clear the dirty bits, and push the frame
    /// out: blit to the attached window (if any), then present when asked.
    ///
    /// Returns the number of cells repainted. Clean cells cost nothing.
    pub fn update<B: Backend>(&self, grid: &mut Grid, backend: &mut B, present: bool) -> usize {
        let width = grid.width() as usize;
        let mut repainted = 0;
        for idx in 0..grid.len() {
            let cell = grid.cells()[idx];
            if !cell.is_dirty() {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let (x, y) = ((idx % width) as u16, (idx / width) as u16);
            self.repaint_cell(backend, x, y, &cell);
            grid.cells_mut()[idx].clear_dirty();
            repainted += 1;
        }
        if let Some(window) = self.window {
            backend.blit_to_window(self.surface, window);
        }
        if present {
            backend.present();
        }
        if repainted > 0 {
            log::trace!("update repainted {repainted} cells");
        }
        repainted
    }

    /// Repaint one cell's pixel rectangle.
    ///
    /// Empty cells are erased to transparent instead of painted. Occupied
    /// cells get a background fill, then the glyph centered horizontally
    /// with its baseline on the cell's bottom edge.
    fn repaint_cell<B: Backend>(&self, backend: &mut B, x: u16, y: u16, cell: &Cell) {
        let rect = self.pixel_rect_of_cell(x, y);
        let Some(ch) = cell.character() else {
            backend.fill_rect(self.surface, rect, Rgba::TRANSPARENT);
            return;
        };
        backend.fill_rect(self.surface, rect, cell.bg());
        let glyph = backend.render_glyph(ch, cell.fg(), cell.bg());
        #[allow(clippy::cast_possible_wrap)]
        let dest = PixelRect::new(
            rect.x + ((self.cell_width - glyph.width()) / 2) as i32,
            rect.y + (self.cell_height - glyph.height()) as i32,
            glyph.width(),
            glyph.height(),
        );
        backend.blit(&glyph, self.surface, dest);
    }

    /// Resize the backing surface (and window) for new grid dimensions.
    ///
    /// Surface contents are not preserved; callers mark the grid fully
    /// dirty and run an update afterwards.
    pub fn resize<B: Backend>(&self, backend: &mut B, grid_width: u16, grid_height: u16) {
        let pixel_width = u32::from(grid_width) * self.cell_width;
        let pixel_height = u32::from(grid_height) * self.cell_height;
        backend.resize_surface(self.surface, pixel_width, pixel_height);
        if let Some(window) = self.window {
            backend.resize_window(window, pixel_width, pixel_height);
        }
    }
}

/// Fix the cell metrics: the maxima over every printable glyph.
fn measure_cell<B: Backend>(backend: &B) -> (u32, u32) {
    let mut cell_width = 1;
    let mut cell_height = 1;
    for byte in PRINTABLE_MIN..=PRINTABLE_MAX {
        let (w, h) = backend.measure_glyph(byte as char);
        cell_width = cell_width.max(w);
        cell_height = cell_height.max(h);
    }
    (cell_width, cell_height)
}
