//! Thin DOM helpers shared by the effect modules.

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window, window};

use crate::error::{FxError, FxResult};
use crate::motion::{Point, Rect};
use crate::style::StylePatch;

pub fn win() -> FxResult<Window> {
    window().ok_or(FxError::NoWindow)
}

pub fn document() -> FxResult<Document> {
    win()?.document().ok_or(FxError::NoDocument)
}

/// Optional lookup: absent ids are not an error.
pub fn by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All matches for `selector`; an invalid selector yields nothing.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(doc, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn create_div(doc: &Document, class: Option<&str>) -> FxResult<HtmlElement> {
    let el: HtmlElement = doc
        .create_element("div")?
        .dyn_into()
        .map_err(|_| FxError::WrongElement("HtmlElement"))?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn body(doc: &Document) -> FxResult<HtmlElement> {
    doc.body().ok_or(FxError::MissingRoot("body"))
}

/// Detach `el` after `ms`. Safe if something else removed it first.
pub fn remove_after(el: Element, ms: u32) {
    Timeout::new(ms, move || el.remove()).forget();
}

/// Write `patch` onto `el` after `ms`.
pub fn patch_after(el: HtmlElement, patch: StylePatch, ms: u32) {
    Timeout::new(ms, move || patch.apply(&el)).forget();
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn client_point(evt: &web_sys::MouseEvent) -> Point {
    Point::new(evt.client_x() as f64, evt.client_y() as f64)
}

/// Event target as an element, when it is one.
pub fn target_element(evt: &web_sys::Event) -> Option<Element> {
    evt.target().and_then(|t| t.dyn_into::<Element>().ok())
}

pub fn matches(el: &Element, selector: &str) -> bool {
    el.matches(selector).unwrap_or(false)
}

pub fn closest_html(el: &Element, selector: &str) -> Option<HtmlElement> {
    el.closest(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}
