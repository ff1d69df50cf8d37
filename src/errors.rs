//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! All public APIs that can fail return [`Result<T>`], an alias for
//! `std::result::Result<T, FlyoverError>`. The engine is a pure computation
//! library: nothing is caught or suppressed internally, every error surfaces
//! immediately to the caller.

use thiserror::Error;

/// The main error type for the flyover engine.
#[derive(Error, Debug)]
pub enum FlyoverError {
    // ========================================================================
    // Interpolation Errors
    // ========================================================================
    /// A scalar and a channel sequence were passed together to `lerp`.
    ///
    /// The two endpoints of an interpolation must share a shape; mixing is
    /// rejected rather than coerced.
    #[error("Cannot interpolate a scalar with a channel sequence")]
    ShapeMismatch,

    // ========================================================================
    // Scheduling Errors
    // ========================================================================
    /// A segment was constructed with a non-positive duration.
    #[error("Segment duration must be positive, got {0} ms")]
    InvalidDuration(f64),

    /// A scheduler was constructed with no segments to play.
    #[error("Animation requires at least one segment")]
    EmptySegments,

    // ========================================================================
    // Recording Errors
    // ========================================================================
    /// A chunk was pushed to a recording session that is not active.
    #[error("Recording session is not active")]
    RecordingStopped,

    // ========================================================================
    // Export Errors
    // ========================================================================
    /// The export template failed to render.
    #[error("Export template render failed: {0}")]
    TemplateRender(#[from] minijinja::Error),
}

/// Result type alias used across the engine.
pub type Result<T> = std::result::Result<T, FlyoverError>;
