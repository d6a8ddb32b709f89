//! Platform abstraction layer
//!
//! Everything the game loop needs from the outside world:
//! - Time/ticks and frame pacing
//! - Input events (real or synthetic)

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::AutoPilot;
pub use input::{FrameInput, InputSource, ScriptedInput};
pub use time::{Clock, ManualClock, SystemClock};
