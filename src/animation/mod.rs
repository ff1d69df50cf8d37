pub mod lerp;
pub mod scheduler;
pub mod values;

pub use lerp::{Value, lerp};
pub use scheduler::{FrameClock, PlayState, Scheduler, Segment, SystemClock};
pub use values::Interpolatable;
