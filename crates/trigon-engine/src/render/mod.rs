//! GPU rendering subsystem.
//!
//! The renderer issues GPU commands via wgpu and owns its own resources
//! (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in pixels with the origin at the viewport center, +Y up.
//! - The vertex shader converts to NDC using a viewport uniform.

mod color;
mod ctx;
mod triangle;

pub use color::Color;
pub use ctx::{RenderCtx, RenderTarget, Viewport};
pub use triangle::{TriangleRenderer, Vertex};
