//! Click feedback: ripples on anything clicked, explosions, tile flips and
//! button presses.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::{ACCENT_YELLOW, FxConfig};
use crate::dom;
use crate::error::FxResult;
use crate::motion::{self, Point, RippleGeometry};
use crate::style::{StylePatch, px};

pub fn ripple_patch(g: RippleGeometry) -> StylePatch {
    StylePatch::new()
        .set("position", "absolute")
        .set("border-radius", "50%")
        .set("background", "rgba(25, 229, 111, 0.6)")
        .set("transform", "scale(0)")
        .set("animation", "ripple 0.6s linear")
        .set("pointer-events", "none")
        .set("z-index", "1000")
        .set("width", px(g.size))
        .set("height", px(g.size))
        .set("left", px(g.left))
        .set("top", px(g.top))
}

pub fn explosion_patch(at: Point) -> StylePatch {
    StylePatch::new()
        .set("position", "fixed")
        .set("left", px(at.x))
        .set("top", px(at.y))
        .set("width", "0")
        .set("height", "0")
        .set("border-radius", "50%")
        .set("background", "radial-gradient(circle, #19e56f, #ffd84d, transparent)")
        .set("pointer-events", "none")
        .set("z-index", "10000")
        .set("animation", "explosion 0.6s ease-out forwards")
}

/// Append a ripple to `target`, centred on `click`, and drop it after `ms`.
pub fn ripple(target: &Element, click: Point, ms: u32) -> FxResult<HtmlElement> {
    let doc = dom::document()?;
    let geometry = motion::ripple_geometry(dom::rect_of(target), click);
    let el = dom::create_div(&doc, Some("ripple"))?;
    ripple_patch(geometry).apply(&el);
    if let Some(host) = target.dyn_ref::<HtmlElement>() {
        StylePatch::new()
            .set("position", "relative")
            .set("overflow", "hidden")
            .apply(host);
    }
    target.append_child(&el)?;
    dom::remove_after(Element::from(el.clone()), ms);
    Ok(el)
}

/// Fixed-position burst at `at`, removed after `ms`.
pub fn explosion(at: Point, ms: u32) -> FxResult<HtmlElement> {
    let doc = dom::document()?;
    let el = dom::create_div(&doc, None)?;
    explosion_patch(at).apply(&el);
    dom::body(&doc)?.append_child(&el)?;
    dom::remove_after(Element::from(el.clone()), ms);
    Ok(el)
}

pub fn on_document_click(evt: &MouseEvent, cfg: &FxConfig) {
    let Some(target) = dom::target_element(evt) else {
        return;
    };
    if let Err(err) = ripple(&target, dom::client_point(evt), cfg.ripple_ms) {
        gloo::console::warn!("fx: ripple failed", err.to_string());
    }
    let Some(html) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    if dom::matches(&target, ".letter-tile") {
        flip_tile(html, cfg);
    }
    if dom::matches(&target, ".btn") {
        press(html, cfg.button_press_ms);
    }
}

fn flip_tile(tile: &HtmlElement, cfg: &FxConfig) {
    let original_color = tile.style().get_property_value("color").unwrap_or_default();
    StylePatch::new()
        .set("animation", "none")
        .set("transform", "scale(1.2) rotateY(180deg)")
        .set("transition", "all 0.3s ease")
        .set("color", ACCENT_YELLOW)
        .apply(tile);
    dom::patch_after(
        tile.clone(),
        StylePatch::new().set("transform", "scale(1) rotateY(0deg)"),
        cfg.bounce_ms,
    );
    dom::patch_after(
        tile.clone(),
        StylePatch::new().set("color", original_color),
        cfg.color_revert_ms,
    );
}

/// Quick scale-down press, restored after `ms`.
pub fn press(el: &HtmlElement, ms: u32) {
    StylePatch::new().set("transform", "scale(0.95)").apply(el);
    dom::patch_after(el.clone(), StylePatch::new().set("transform", "scale(1)"), ms);
}
