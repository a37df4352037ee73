//! Reveal-on-scroll: animated sections gain `visible` the first time they
//! intersect the viewport.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::{FxConfig, REVEAL_SELECTOR};
use crate::dom;
use crate::error::FxResult;

pub const VISIBLE_CLASS: &str = "visible";

/// Mark `el` visible. The observer stops watching it afterwards, so this runs at
/// most once per element and the marker is never taken away.
pub fn reveal(el: &Element, observer: &IntersectionObserver) {
    el.class_list().add_1(VISIBLE_CLASS).ok();
    observer.unobserve(el);
}

/// Observe every reveal candidate. Returns the number of elements watched.
pub fn observe(doc: &Document, cfg: &FxConfig) -> FxResult<usize> {
    let targets = dom::query_all(doc, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    reveal(&entry.target(), &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    options.set_root_margin(&cfg.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    Ok(targets.len())
}
