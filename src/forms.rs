//! Form and control feedback: input focus glow, submit busy state, chart
//! toggles and the game-start form post.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement};

use crate::config::FxConfig;
use crate::dom;
use crate::error::{FxError, FxResult};
use crate::style::StylePatch;

pub const START_GAME_ID: &str = "startGameBtn";
pub const PROCESSING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;
pub const STARTING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Starting..."#;
pub const START_FAILED_MSG: &str = "Failed to start new game. Please try again.";

// --- Busy controls -----------------------------------------------------------

/// A control whose label was swapped for a spinner and which is disabled until
/// `release` puts the original label back.
pub struct BusyControl {
    el: Element,
    original: String,
}

impl BusyControl {
    pub fn engage(el: Element, busy_label: &str) -> Self {
        let original = el.inner_html();
        el.set_inner_html(busy_label);
        el.set_attribute("disabled", "").ok();
        Self { el, original }
    }

    pub fn release(&self) {
        self.el.set_inner_html(&self.original);
        self.el.remove_attribute("disabled").ok();
    }
}

// --- Inputs ------------------------------------------------------------------

pub fn wrapper_focus(focused: bool) -> StylePatch {
    if focused {
        StylePatch::new()
            .set("transform", "scale(1.02)")
            .set("box-shadow", "0 0 20px rgba(25, 229, 111, 0.3)")
    } else {
        StylePatch::new()
            .set("transform", "scale(1)")
            .set("box-shadow", "none")
    }
}

pub fn bind_inputs(doc: &Document) {
    for input in dom::query_all(doc, "input") {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let target = input.clone();
            EventListener::new(&input, event, move |_evt: &Event| {
                if let Some(wrapper) = dom::closest_html(&target, ".input-wrapper") {
                    wrapper_focus(focused).apply(&wrapper);
                }
            })
            .forget();
        }
    }
}

// --- Forms -------------------------------------------------------------------

pub fn bind_forms(doc: &Document, cfg: &Rc<FxConfig>) {
    for form in dom::query_all(doc, "form") {
        let cfg = cfg.clone();
        let target = form.clone();
        EventListener::new(&form, "submit", move |_evt: &Event| {
            on_submit(&target, &cfg);
        })
        .forget();
    }
}

/// Press the submit button and hold it busy. The label comes back after a fixed
/// delay; nothing here observes the actual request.
pub fn on_submit(form: &Element, cfg: &FxConfig) {
    let Ok(Some(button)) = form.query_selector(r#"button[type="submit"]"#) else {
        return;
    };
    if let Some(html) = button.dyn_ref::<HtmlElement>() {
        StylePatch::new()
            .set("transform", "scale(0.95)")
            .set("opacity", "0.8")
            .apply(html);
        dom::patch_after(
            html.clone(),
            StylePatch::new().set("transform", "scale(1)").set("opacity", "1"),
            200,
        );
    }
    let busy = BusyControl::engage(button, PROCESSING_LABEL);
    gloo::timers::callback::Timeout::new(cfg.submit_restore_ms, move || busy.release()).forget();
}

// --- Chart buttons -----------------------------------------------------------

pub fn bind_chart_buttons(doc: &Document, cfg: &Rc<FxConfig>) {
    for btn in dom::query_all(doc, ".chart-btn") {
        let target = btn.clone();
        let dip_ms = cfg.chart_dip_ms;
        EventListener::new(&btn, "click", move |evt: &Event| {
            evt.prevent_default();
            activate_chart_button(&target);
            if let Some(card) = dom::closest_html(&target, ".chart-card") {
                StylePatch::new()
                    .set("transform", "scale(0.98)")
                    .set("opacity", "0.8")
                    .apply(&card);
                dom::patch_after(
                    card,
                    StylePatch::new().set("transform", "scale(1)").set("opacity", "1"),
                    dip_ms,
                );
            }
        })
        .forget();
    }
}

/// Make `btn` the only `active` chart button among its siblings.
pub fn activate_chart_button(btn: &Element) {
    if let Some(parent) = btn.parent_element() {
        if let Ok(siblings) = parent.query_selector_all(".chart-btn") {
            for i in 0..siblings.length() {
                if let Some(el) = siblings.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    el.class_list().remove_1("active").ok();
                }
            }
        }
    }
    btn.class_list().add_1("active").ok();
}

// --- Game start --------------------------------------------------------------

pub fn bind_start_game(doc: &Document, cfg: &Rc<FxConfig>) {
    let Some(btn) = dom::by_id(doc, START_GAME_ID) else {
        return;
    };
    let path = cfg.start_game_path.clone();
    let target = btn.clone();
    EventListener::new(&btn, "click", move |_evt: &Event| {
        start_game(Element::from(target.clone()), &path);
    })
    .forget();
}

/// Busy the control and post the start form; on failure alert and restore.
pub fn start_game(btn: Element, path: &str) {
    let busy = BusyControl::engage(btn, STARTING_LABEL);
    if let Err(err) = post_form(path) {
        gloo::console::error!("fx: error starting game", err.to_string());
        if let Ok(win) = dom::win() {
            win.alert_with_message(START_FAILED_MSG).ok();
        }
        busy.release();
    }
}

fn post_form(path: &str) -> FxResult<()> {
    let doc = dom::document()?;
    let form: HtmlFormElement = doc
        .create_element("form")?
        .dyn_into()
        .map_err(|_| FxError::WrongElement("HtmlFormElement"))?;
    form.set_method("POST");
    form.set_action(path);
    dom::body(&doc)?.append_child(&form)?;
    form.submit()?;
    Ok(())
}
