use fastrand::Rng;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement};

use crate::config::FxConfig;
use crate::{confetti, dom};

pub const POPUP_ID: &str = "popupContainer";
pub const CLOSE_ID: &str = "popupCloseBtn";
pub const CONFETTI_ID: &str = "confettiCanvas";
const CELEBRATE_SELECTOR: &str = ".popup-card.win, .popup-card.success";

/// Wire the result popup: close button removes it; a win/success card gets confetti.
pub fn setup(doc: &Document, cfg: &FxConfig, rng: &mut Rng) {
    let Some(popup) = dom::by_id(doc, POPUP_ID) else {
        return;
    };
    if let Some(close) = dom::by_id(doc, CLOSE_ID) {
        let popup = popup.clone();
        EventListener::new(&close, "click", move |_evt: &Event| popup.remove()).forget();
    }
    if !matches!(popup.query_selector(CELEBRATE_SELECTOR), Ok(Some(_))) {
        return;
    }
    let Some(canvas) = doc
        .get_element_by_id(CONFETTI_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    if let Err(err) = confetti::launch(&canvas, cfg, rng) {
        gloo::console::warn!("fx: confetti skipped", err.to_string());
    }
}
