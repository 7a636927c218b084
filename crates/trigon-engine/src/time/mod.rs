//! Time subsystem.
//!
//! Frame timing utilities decoupled from the runtime:
//! - `FrameClock` produces one `FrameTime` snapshot per presented frame
//! - `FpsCounter` turns those snapshots into a once-per-interval
//!   frames-per-second measurement

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
