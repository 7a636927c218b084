//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! window runtime translates platform events into `InputEvent`s; the demo
//! only cares about keyboard state, so this module stays keyboard-shaped.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
