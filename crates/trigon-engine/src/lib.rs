//! Trigon engine crate.
//!
//! Platform + GPU runtime pieces for the trigon demo: window/event loop,
//! wgpu device and surface management, keyboard input, frame timing, and
//! the triangle renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
