//! Rendering: the backend capability boundary, a headless software
//! reference backend, and the dirty-cell incremental renderer.

mod backend;
mod renderer;
mod software;

pub use backend::{Backend, PixelBuffer, SurfaceId, WindowId, WindowMode};
pub use renderer::CellRenderer;
pub use software::{DrawOp, SoftwareBackend};
