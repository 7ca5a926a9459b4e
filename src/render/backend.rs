//! Backend: the pixel-surface capability consumed by the renderer.
//!
//! The grid engine never touches pixels directly. Everything below the cell
//! level (glyph measurement and rasterization, surface allocation, blitting,
//! window management, presentation) goes through this trait, with opaque
//! integer handles for surfaces and windows. The crate ships a headless
//! [`super::SoftwareBackend`] reference implementation; a GPU- or
//! SDL-style backend plugs in the same way.

use crate::grid::Rgba;
use crate::layout::PixelRect;

/// Opaque handle to an off-screen pixel surface.
pub type SurfaceId = u32;

/// Opaque handle to a display window.
pub type WindowId = u32;

/// Whether a surface owns a top-level display window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Render to the backing surface only.
    #[default]
    Headless,
    /// Own a window and blit the backing surface into it on update.
    Windowed {
        /// Request a fullscreen window.
        fullscreen: bool,
    },
}

/// An owned RGBA pixel buffer, used for rasterized glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single color.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get one pixel, or `None` out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
        } else {
            None
        }
    }

    /// Set one pixel; writes outside the buffer are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }

    /// The raw pixel slice, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Fill a rectangle, replacing pixels (no blending); clipped to the
    /// buffer.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let x0 = rect.x.max(0) as u32;
        let y0 = rect.y.max(0) as u32;
        #[allow(clippy::cast_sign_loss)]
        let x1 = ((rect.x + rect.width as i32).max(0) as u32).min(self.width);
        #[allow(clippy::cast_sign_loss)]
        let y1 = ((rect.y + rect.height as i32).max(0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
            }
        }
    }

    /// Copy another buffer onto this one at `dest`, replacing pixels;
    /// clipped to this buffer.
    pub fn blit(&mut self, src: &Self, dest: PixelRect) {
        for sy in 0..src.height.min(dest.height) {
            for sx in 0..src.width.min(dest.width) {
                let dx = dest.x + sx as i32;
                let dy = dest.y + sy as i32;
                if dx < 0 || dy < 0 {
                    continue;
                }
                #[allow(clippy::cast_sign_loss)]
                self.set_pixel(dx as u32, dy as u32, src.pixels[(sy as usize) * (src.width as usize) + (sx as usize)]);
            }
        }
    }
}

/// The rendering capability the grid engine is generic over.
///
/// All methods are synchronous; only [`Backend::present`] may block (on the
/// display's vsync semantics, which are the backend's business).
pub trait Backend {
    /// Measure one printable glyph's pixel dimensions.
    fn measure_glyph(&self, ch: char) -> (u32, u32);

    /// Rasterize one glyph in the given colors, sized to its own bounds.
    fn render_glyph(&mut self, ch: char, fg: Rgba, bg: Rgba) -> PixelBuffer;

    /// Allocate an off-screen surface.
    fn create_surface(&mut self, width: u32, height: u32) -> SurfaceId;

    /// Resize a surface. Previous contents are not preserved.
    fn resize_surface(&mut self, surface: SurfaceId, width: u32, height: u32);

    /// Fill a rectangle on a surface, *replacing* pixels; filling with
    /// [`Rgba::TRANSPARENT`] erases.
    fn fill_rect(&mut self, surface: SurfaceId, rect: PixelRect, color: Rgba);

    /// Blit a pixel buffer onto a surface at `dest`, clipped to the surface.
    fn blit(&mut self, src: &PixelBuffer, surface: SurfaceId, dest: PixelRect);

    /// Create a top-level window.
    fn create_window(&mut self, width: u32, height: u32, fullscreen: bool) -> WindowId;

    /// Resize a window to new pixel dimensions.
    fn resize_window(&mut self, window: WindowId, width: u32, height: u32);

    /// Blit a full surface into a window.
    fn blit_to_window(&mut self, surface: SurfaceId, window: WindowId);

    /// Flip/display the current frame. May block on vsync.
    fn present(&mut self);
}
