use glam::{DVec2, DVec3, DVec4};

/// A value that supports linear interpolation between two endpoints.
pub trait Interpolatable: Copy + Clone + Sized {
    /// Returns `start * (1 - t) + end * t`.
    ///
    /// `t == 0` yields `start`, `t == 1` yields `end`; monotonic in `t` for
    /// ordered endpoints.
    fn interpolate_linear(start: Self, end: Self, t: f64) -> Self;
}

impl Interpolatable for f64 {
    fn interpolate_linear(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for DVec2 {
    fn interpolate_linear(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for DVec3 {
    fn interpolate_linear(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for DVec4 {
    fn interpolate_linear(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }
}
