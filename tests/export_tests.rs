//! Export Compiler Tests
//!
//! Tests for:
//! - Deterministic output
//! - Embedded scene literals and duration scaling
//! - Embedded playback runtime

use glam::{DVec2, DVec3};

use flyover::export::{ExportParams, compile_export};
use flyover::scene::{Rgba, Scene};

fn sample_params() -> ExportParams {
    let start = Scene {
        position: DVec3::new(0.1, 0.2, 0.3),
        target: DVec2::new(-25.5, 37.25),
        target_elevation: 80.0,
        exaggeration: 1.5,
        sun_altitude: 45.0,
        sun_azimuth: 180.0,
        sun_halo: Rgba::new(255.0, 255.0, 255.0, 1.0),
        sun_atmosphere: Rgba::new(10.0, 20.0, 30.0, 0.5),
    };
    let mut end = start.clone();
    end.position = DVec3::new(0.4, 0.5, 0.6);
    end.sun_altitude = 10.0;

    ExportParams {
        access_token: "pk.test-token".to_string(),
        start: start.animation_values(),
        end: end.animation_values(),
        duration: 5.0,
    }
}

#[test]
fn export_is_deterministic() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = sample_params();
    let a = compile_export(&params).unwrap();
    let b = compile_export(&params).unwrap();
    assert_eq!(a, b, "Same inputs must produce byte-identical output");
}

#[test]
fn export_embeds_token_and_scenes() {
    let page = compile_export(&sample_params()).unwrap();

    assert!(page.contains("mapboxgl.accessToken = 'pk.test-token';"));
    assert!(page.contains("position: [0.1, 0.2, 0.3]"));
    assert!(page.contains("position: [0.4, 0.5, 0.6]"));
    assert!(page.contains("target: [-25.5, 37.25]"));
    assert!(page.contains("sunHalo: [255, 255, 255, 1]"));
    assert!(page.contains("sunAtmosphere: [10, 20, 30, 0.5]"));
    assert!(page.contains("sunAltitude: 45"));
    assert!(page.contains("sunAltitude: 10"));
}

#[test]
fn export_scales_duration_to_milliseconds() {
    let page = compile_export(&sample_params()).unwrap();
    assert!(page.contains("duration: 5000"));
}

#[test]
fn export_embeds_playback_runtime() {
    let page = compile_export(&sample_params()).unwrap();

    // The standalone page carries its own copies of the algorithms.
    assert!(page.contains("function lerp("));
    assert!(page.contains("function animate("));
    assert!(page.contains("requestAnimationFrame"));
}

#[test]
fn export_omits_target_elevation() {
    // The exported page relies on the map library's terrain queries instead
    // of a captured look-at elevation.
    let page = compile_export(&sample_params()).unwrap();
    assert!(!page.contains("targetElevation"));
}

#[test]
fn export_is_a_complete_html_document() {
    let page = compile_export(&sample_params()).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("</html>"));
}
