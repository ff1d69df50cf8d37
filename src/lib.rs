#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Flyover animation engine.
//!
//! A small state-interpolation and timing-loop subsystem for authoring camera
//! "flyover" animations over a 3D map. Given two captured [`Scene`] snapshots
//! it produces a continuous mapping from normalized time to an interpolated
//! scene state, drives that mapping with a frame-synchronized [`Scheduler`],
//! and can compile the whole thing into a standalone playback page with
//! [`compile_export`].
//!
//! The map-rendering layer is an external collaborator: it captures scenes,
//! applies interpolated values to the rendered map each frame, and is never
//! touched here.

pub mod animation;
pub mod errors;
pub mod export;
pub mod recorder;
pub mod scene;

pub use animation::lerp::{Value, lerp};
pub use animation::scheduler::{FrameClock, PlayState, Scheduler, Segment, SystemClock};
pub use animation::values::Interpolatable;
pub use errors::{FlyoverError, Result};
pub use export::{ExportParams, compile_export};
pub use recorder::RecordingSession;
pub use scene::{FlatScene, Rgba, Scene};
