//! Guess the Word visual effects layer.
//!
//! Decorative particles, interactive squares, floating shapes, a custom cursor
//! with trail, click ripples and explosions, scroll parallax and reveals, stat
//! counters, form feedback and the result-popup confetti. The page calls
//! `start_effects()` once the module is loaded; every container is optional and
//! missing ones simply switch their effect off.

use wasm_bindgen::prelude::*;

pub mod clicks;
pub mod config;
pub mod confetti;
pub mod controller;
pub mod counters;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod forms;
pub mod motion;
pub mod popup;
pub mod reveal;
pub mod spawn;
pub mod style;

pub use config::FxConfig;
pub use error::{FxError, FxResult};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Start every effect with the stock configuration.
#[wasm_bindgen]
pub fn start_effects() -> Result<(), JsValue> {
    start_when_ready(FxConfig::default())
}

/// Start with a JSON config object; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_effects_with_config(json: &str) -> Result<(), JsValue> {
    start_when_ready(FxConfig::from_json(json)?)
}

/// Smooth-scroll the element with `section_id` to the top of the viewport.
/// Unknown ids are ignored.
#[wasm_bindgen]
pub fn scroll_to_section(section_id: &str) -> Result<(), JsValue> {
    let doc = dom::document()?;
    if let Some(section) = doc.get_element_by_id(section_id) {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    Ok(())
}

/// Bind now if the DOM is parsed, otherwise on `DOMContentLoaded`.
fn start_when_ready(cfg: FxConfig) -> Result<(), JsValue> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        return Ok(controller::start(cfg)?);
    }
    gloo::events::EventListener::once(&doc, "DOMContentLoaded", move |_evt| {
        if let Err(err) = controller::start(cfg) {
            gloo::console::error!("fx: start failed", err.to_string());
        }
    })
    .forget();
    Ok(())
}
