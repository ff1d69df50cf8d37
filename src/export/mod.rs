//! Export compilation.
//!
//! Compiles a two-scene flyover into a standalone playback page: a single
//! HTML document embedding the lerp/scheduler algorithm textually (a minified
//! script with the same formulas) plus the two literal scene values, so the
//! animation runs without this application.
//!
//! Pure string templating. Numeric fields are formatted, not validated;
//! malformed values propagate as malformed output text.

use std::sync::OnceLock;

use log::debug;
use minijinja::Environment;
use rust_embed::RustEmbed;
use serde::Serialize;

use crate::errors::Result;
use crate::scene::FlatScene;

const PLAYBACK_TEMPLATE: &str = "playback.html.jinja";

#[derive(RustEmbed)]
#[folder = "src/export/templates"]
struct TemplateAssets;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn get_env() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_loader(template_loader);
        env
    })
}

fn template_loader(name: &str) -> std::result::Result<Option<String>, minijinja::Error> {
    Ok(TemplateAssets::get(name)
        .and_then(|file| String::from_utf8(file.data.into_owned()).ok()))
}

/// Inputs for [`compile_export`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExportParams {
    /// Map provider access token embedded into the page.
    pub access_token: String,
    pub start: FlatScene,
    pub end: FlatScene,
    /// Animation length in seconds.
    pub duration: f64,
}

/// Scene literal pre-rendered into source fragments, so the template stays
/// plain interpolation and the output is byte-deterministic.
#[derive(Serialize)]
struct SceneFragments {
    position: String,
    target: String,
    exaggeration: String,
    sun_altitude: String,
    sun_azimuth: String,
    sun_halo: String,
    sun_atmosphere: String,
}

impl SceneFragments {
    fn new(scene: &FlatScene) -> Self {
        Self {
            position: join(scene.position.to_array()),
            target: join(scene.target.to_array()),
            exaggeration: fmt_number(scene.exaggeration),
            sun_altitude: fmt_number(scene.sun_altitude),
            sun_azimuth: fmt_number(scene.sun_azimuth),
            sun_halo: join(scene.sun_halo.to_array()),
            sun_atmosphere: join(scene.sun_atmosphere.to_array()),
        }
    }
}

#[derive(Serialize)]
struct ExportContext {
    token: String,
    start: SceneFragments,
    end: SceneFragments,
    duration_ms: String,
}

fn fmt_number(value: f64) -> String {
    format!("{value}")
}

fn join(values: impl IntoIterator<Item = f64>) -> String {
    values
        .into_iter()
        .map(fmt_number)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compiles a standalone playback page for the given flyover.
///
/// The look-at elevation is intentionally not embedded: the exported page
/// relies on the map library's own terrain queries.
///
/// Deterministic: equal inputs produce byte-identical output.
pub fn compile_export(params: &ExportParams) -> Result<String> {
    let ctx = ExportContext {
        token: params.access_token.clone(),
        start: SceneFragments::new(&params.start),
        end: SceneFragments::new(&params.end),
        duration_ms: fmt_number(params.duration * 1000.0),
    };

    let template = get_env().get_template(PLAYBACK_TEMPLATE)?;
    let page = template.render(&ctx)?;
    debug!("export: compiled playback page, {} bytes", page.len());
    Ok(page)
}
