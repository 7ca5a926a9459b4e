//! Software backend: a headless reference implementation of [`Backend`].
//!
//! Surfaces and windows are plain in-memory framebuffers, and glyphs come
//! from synthetic metrics that approximate a proportional font: narrow
//! letters are narrower than wide ones, descenders hang lower than the
//! x-height. That is enough to exercise everything the renderer does
//! (centering, baseline alignment, background fills) without a font stack.
//!
//! Every draw call is also appended to an operation log, which the tests use
//! to check the renderer's core guarantee: clean cells cost zero work.

use super::backend::{Backend, PixelBuffer, SurfaceId, WindowId};
use crate::grid::{is_printable, Rgba};
use crate::layout::PixelRect;
use std::collections::HashMap;

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    /// A surface was allocated.
    CreateSurface {
        /// Handle of the new surface.
        surface: SurfaceId,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// A surface was resized.
    ResizeSurface {
        /// Handle of the surface.
        surface: SurfaceId,
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// A rectangle was filled.
    FillRect {
        /// Target surface.
        surface: SurfaceId,
        /// Filled rectangle.
        rect: PixelRect,
        /// Fill color.
        color: Rgba,
    },
    /// A glyph buffer was blitted onto a surface.
    Blit {
        /// Target surface.
        surface: SurfaceId,
        /// Destination rectangle.
        dest: PixelRect,
    },
    /// A window was created.
    CreateWindow {
        /// Handle of the new window.
        window: WindowId,
        /// Fullscreen flag passed by the caller.
        fullscreen: bool,
    },
    /// A window was resized.
    ResizeWindow {
        /// Handle of the window.
        window: WindowId,
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// A surface was blitted into a window.
    BlitToWindow {
        /// Source surface.
        surface: SurfaceId,
        /// Target window.
        window: WindowId,
    },
    /// The frame was presented.
    Present,
}

/// Headless [`Backend`] backed by in-memory framebuffers.
#[derive(Default)]
pub struct SoftwareBackend {
    surfaces: HashMap<SurfaceId, PixelBuffer>,
    windows: HashMap<WindowId, PixelBuffer>,
    next_surface: SurfaceId,
    next_window: WindowId,
    ops: Vec<DrawOp>,
}

impl SoftwareBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded operation log, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Clear the operation log (framebuffers are untouched).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Get a surface's framebuffer for inspection.
    pub fn surface(&self, surface: SurfaceId) -> Option<&PixelBuffer> {
        self.surfaces.get(&surface)
    }

    /// Get a window's framebuffer for inspection.
    pub fn window(&self, window: WindowId) -> Option<&PixelBuffer> {
        self.windows.get(&window)
    }

    /// Count recorded fill/blit operations (the per-cell paint work).
    pub fn paint_op_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. } | DrawOp::Blit { .. }))
            .count()
    }

    /// Synthetic advance width for a glyph.
    fn glyph_width(ch: char) -> u32 {
        match ch {
            'i' | 'I' | 'l' | 'j' | '!' | '|' | '.' | ',' | '\'' | ':' | ';' => 3,
            'w' | 'W' | 'm' | 'M' | '@' | '#' => 8,
            ' ' => 4,
            _ => 6,
        }
    }

    /// Synthetic height for a glyph: descenders reach below the x-height.
    fn glyph_height(ch: char) -> u32 {
        match ch {
            'g' | 'j' | 'p' | 'q' | 'y' | ',' | ';' => 12,
            'A'..='Z' | '0'..='9' => 11,
            _ => 10,
        }
    }
}

impl Backend for SoftwareBackend {
    fn measure_glyph(&self, ch: char) -> (u32, u32) {
        debug_assert!(is_printable(ch), "measure_glyph takes printable ASCII");
        (Self::glyph_width(ch), Self::glyph_height(ch))
    }

    fn render_glyph(&mut self, ch: char, fg: Rgba, bg: Rgba) -> PixelBuffer {
        let (w, h) = self.measure_glyph(ch);
        // A one-pixel background border around a solid foreground block;
        // crude, but centering and alignment are observable
        let mut buf = PixelBuffer::new(w, h, bg);
        buf.fill_rect(
            PixelRect::new(1, 1, w.saturating_sub(2), h.saturating_sub(2)),
            fg,
        );
        buf
    }

    fn create_surface(&mut self, width: u32, height: u32) -> SurfaceId {
        let id = self.next_surface;
        self.next_surface += 1;
        self.surfaces
            .insert(id, PixelBuffer::new(width, height, Rgba::TRANSPARENT));
        self.ops.push(DrawOp::CreateSurface {
            surface: id,
            width,
            height,
        });
        id
    }

    fn resize_surface(&mut self, surface: SurfaceId, width: u32, height: u32) {
        self.surfaces
            .insert(surface, PixelBuffer::new(width, height, Rgba::TRANSPARENT));
        self.ops.push(DrawOp::ResizeSurface {
            surface,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, surface: SurfaceId, rect: PixelRect, color: Rgba) {
        if let Some(buf) = self.surfaces.get_mut(&surface) {
            buf.fill_rect(rect, color);
        }
        self.ops.push(DrawOp::FillRect {
            surface,
            rect,
            color,
        });
    }

    fn blit(&mut self, src: &PixelBuffer, surface: SurfaceId, dest: PixelRect) {
        if let Some(buf) = self.surfaces.get_mut(&surface) {
            buf.blit(src, dest);
        }
        self.ops.push(DrawOp::Blit { surface, dest });
    }

    fn create_window(&mut self, width: u32, height: u32, fullscreen: bool) -> WindowId {
        let id = self.next_window;
        self.next_window += 1;
        self.windows
            .insert(id, PixelBuffer::new(width, height, Rgba::BLACK));
        self.ops.push(DrawOp::CreateWindow {
            window: id,
            fullscreen,
        });
        log::debug!("created {width}x{height} software window (fullscreen: {fullscreen})");
        id
    }

    fn resize_window(&mut self, window: WindowId, width: u32, height: u32) {
        self.windows
            .insert(window, PixelBuffer::new(width, height, Rgba::BLACK));
        self.ops.push(DrawOp::ResizeWindow {
            window,
            width,
            height,
        });
    }

    fn blit_to_window(&mut self, surface: SurfaceId, window: WindowId) {
        if let (Some(src), Some(dst)) = (self.surfaces.get(&surface), self.windows.get(&window)) {
            let mut copy = dst.clone();
            copy.blit(src, PixelRect::new(0, 0, src.width(), src.height()));
            self.windows.insert(window, copy);
        }
        self.ops.push(DrawOp::BlitToWindow { surface, window });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_are_proportional() {
        let backend = SoftwareBackend::new();
        let (iw, _) = backend.measure_glyph('i');
        let (ww, _) = backend.measure_glyph('W');
        assert!(iw < ww);
    }

    #[test]
    fn test_metrics_deterministic() {
        let backend = SoftwareBackend::new();
        assert_eq!(backend.measure_glyph('x'), backend.measure_glyph('x'));
    }

    #[test]
    fn test_render_glyph_dimensions_match_measure() {
        let mut backend = SoftwareBackend::new();
        let (w, h) = backend.measure_glyph('g');
        let glyph = backend.render_glyph('g', Rgba::WHITE, Rgba::BLACK);
        assert_eq!((glyph.width(), glyph.height()), (w, h));
        // Interior is foreground, border is background
        assert_eq!(glyph.pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(glyph.pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_surface_lifecycle_and_ops() {
        let mut backend = SoftwareBackend::new();
        let s = backend.create_surface(10, 10);
        backend.fill_rect(s, PixelRect::new(0, 0, 2, 2), Rgba::WHITE);
        assert_eq!(backend.surface(s).unwrap().pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(backend.paint_op_count(), 1);
        backend.clear_ops();
        assert_eq!(backend.paint_op_count(), 0);
    }

    #[test]
    fn test_window_blit() {
        let mut backend = SoftwareBackend::new();
        let s = backend.create_surface(4, 4);
        let w = backend.create_window(4, 4, false);
        backend.fill_rect(s, PixelRect::new(0, 0, 4, 4), Rgba::WHITE);
        backend.blit_to_window(s, w);
        assert_eq!(backend.window(w).unwrap().pixel(2, 2), Some(Rgba::WHITE));
    }
}
