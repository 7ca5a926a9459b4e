//! # Glyphgrid
//!
//! A curses-style character grid surface over a pixel renderer.
//!
//! Glyphgrid gives callers classic text-console semantics (cursor-addressed
//! writes, scrolling, per-cell color, region operations) while the renderer
//! draws proportionally-spaced glyphs into fixed-size cells on a pixel
//! surface.
//!
//! ## Core Concepts
//!
//! - **Cell grid**: a flat, cache-friendly array of 12-byte cells, each with
//!   an optional printable character, a concrete color pair, and a dirty bit
//! - **Incremental rendering**: an update repaints dirty cells only; a cell
//!   untouched since the last update costs zero rendering work
//! - **Region algebra**: fill, erase, copy/paste, and color transforms all
//!   resolve loose caller-supplied bounds and clip them to the grid
//! - **Backend boundary**: glyph rasterization, surfaces, windows, and
//!   presentation sit behind a trait; a headless software backend ships in
//!   the crate
//!
//! ## Example
//!
//! ```rust
//! use glyphgrid::{Surface, SurfaceConfig, SoftwareBackend};
//!
//! let mut surface = Surface::new(SoftwareBackend::new(), SurfaceConfig {
//!     width: 40,
//!     height: 10,
//!     ..SurfaceConfig::default()
//! });
//! surface.write("Hello\nWorld");
//! assert_eq!(surface.cursor(), (5, 1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod render;
pub mod surface;

// Re-exports for convenience
pub use error::{Error, Result};
pub use grid::{is_printable, Cell, CellFlags, Channels, Grid, Rgba};
pub use input::{decode_key_event, KeyCode, KeyModifiers};
pub use layout::{PixelRect, Rect, RegionSpec};
pub use render::{Backend, CellRenderer, PixelBuffer, SoftwareBackend, WindowMode};
pub use surface::{Surface, SurfaceConfig};
