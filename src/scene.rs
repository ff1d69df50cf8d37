//! Scene snapshots.
//!
//! A [`Scene`] is a full snapshot of camera position, look-at target and
//! lighting/atmosphere parameters at one instant, captured by the map layer.
//! Before animating, a scene is projected into a [`FlatScene`] in which every
//! color is expanded into a plain channel vector, so all fields interpolate
//! uniformly. Scenes are immutable once captured; interpolation never mutates
//! its inputs.

use glam::{DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::animation::values::Interpolatable;

/// An RGBA color with `r`/`g`/`b` in `[0, 255]` and `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Projects the color into a channel vector, fixed order red, green,
    /// blue, alpha.
    #[must_use]
    pub fn channels(&self) -> DVec4 {
        DVec4::new(self.r, self.g, self.b, self.a)
    }
}

/// A snapshot of all animatable state at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// World-space camera position in the projection unit cube. Components
    /// are typically in `[0, 1]` for the mapping system used, but the engine
    /// treats them as opaque reals.
    pub position: DVec3,
    /// Look-at point as longitude, latitude.
    pub target: DVec2,
    /// Elevation of the look-at point. Keeping this fixed per scene
    /// stabilizes the look-at computation independent of terrain queries,
    /// which would otherwise make the camera bob over peaks and troughs.
    pub target_elevation: f64,
    /// Vertical terrain scale factor, domain `[0, ~2]`.
    pub exaggeration: f64,
    /// Sun altitude in degrees, `[0, 90]`.
    pub sun_altitude: f64,
    /// Sun azimuth in degrees, `[0, 360)`.
    pub sun_azimuth: f64,
    pub sun_halo: Rgba,
    pub sun_atmosphere: Rgba,
}

impl Scene {
    /// Projects the scene into its flat, interpolatable form.
    ///
    /// Color fields become 4-channel vectors; everything else passes through
    /// unchanged.
    #[must_use]
    pub fn animation_values(&self) -> FlatScene {
        FlatScene {
            position: self.position,
            target: self.target,
            target_elevation: self.target_elevation,
            exaggeration: self.exaggeration,
            sun_altitude: self.sun_altitude,
            sun_azimuth: self.sun_azimuth,
            sun_halo: self.sun_halo.channels(),
            sun_atmosphere: self.sun_atmosphere.channels(),
        }
    }
}

impl From<&Scene> for FlatScene {
    fn from(scene: &Scene) -> Self {
        scene.animation_values()
    }
}

/// A [`Scene`] with colors expanded into channel vectors, the canonical shape
/// consumed by linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatScene {
    pub position: DVec3,
    pub target: DVec2,
    pub target_elevation: f64,
    pub exaggeration: f64,
    pub sun_altitude: f64,
    pub sun_azimuth: f64,
    /// Halo color as `[r, g, b, a]` channels.
    pub sun_halo: DVec4,
    /// Atmosphere color as `[r, g, b, a]` channels.
    pub sun_atmosphere: DVec4,
}

impl FlatScene {
    /// Field-by-field linear interpolation between two flat scenes with the
    /// same `t`.
    ///
    /// Colors are interpolated in raw RGBA channel space, not in a perceptual
    /// color space. Intermediate colors can look muddier than perceptually
    /// interpolated ones; this is an accepted simplification.
    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self {
            position: DVec3::interpolate_linear(start.position, end.position, t),
            target: DVec2::interpolate_linear(start.target, end.target, t),
            target_elevation: f64::interpolate_linear(
                start.target_elevation,
                end.target_elevation,
                t,
            ),
            exaggeration: f64::interpolate_linear(start.exaggeration, end.exaggeration, t),
            sun_altitude: f64::interpolate_linear(start.sun_altitude, end.sun_altitude, t),
            sun_azimuth: f64::interpolate_linear(start.sun_azimuth, end.sun_azimuth, t),
            sun_halo: DVec4::interpolate_linear(start.sun_halo, end.sun_halo, t),
            sun_atmosphere: DVec4::interpolate_linear(start.sun_atmosphere, end.sun_atmosphere, t),
        }
    }
}
