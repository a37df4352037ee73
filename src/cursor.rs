//! Custom cursor dot plus a lagging trail of smaller dots.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::config::{ACCENT_GREEN, CURSOR_HOT_SELECTOR, FxConfig};
use crate::dom;
use crate::error::FxResult;
use crate::motion::{self, Point};
use crate::style::{StylePatch, px};

const CURSOR_SIZE: f64 = 20.0;

fn cursor_glow(color: &str) -> String {
    format!("radial-gradient(circle, {color}, transparent)")
}

pub fn cursor_patch() -> StylePatch {
    StylePatch::new()
        .set("position", "fixed")
        .set("width", px(CURSOR_SIZE))
        .set("height", px(CURSOR_SIZE))
        .set("background", cursor_glow(ACCENT_GREEN))
        .set("border-radius", "50%")
        .set("pointer-events", "none")
        .set("z-index", "9999")
        .set("transition", "transform 0.1s ease")
        .set("opacity", "0.8")
}

/// Grown / yellow while over something clickable.
pub fn cursor_hot(hot: bool) -> StylePatch {
    if hot {
        StylePatch::new()
            .set("transform", "scale(1.5)")
            .set("background", cursor_glow(crate::config::ACCENT_YELLOW))
    } else {
        StylePatch::new()
            .set("transform", "scale(1)")
            .set("background", cursor_glow(ACCENT_GREEN))
    }
}

pub fn trail_dot_patch(index: usize, len: usize) -> StylePatch {
    StylePatch::new()
        .set("position", "fixed")
        .set("width", "4px")
        .set("height", "4px")
        .set("background", ACCENT_GREEN)
        .set("border-radius", "50%")
        .set("pointer-events", "none")
        .set("z-index", "9998")
        .set("opacity", motion::trail_opacity(index, len).to_string())
        .set("transition", "all 0.1s ease")
}

pub fn install(doc: &Document, cfg: &FxConfig) -> FxResult<()> {
    install_cursor(doc)?;
    install_trail(doc, cfg)?;
    Ok(())
}

fn install_cursor(doc: &Document) -> FxResult<()> {
    let cursor = dom::create_div(doc, Some("custom-cursor"))?;
    cursor_patch().apply(&cursor);
    dom::body(doc)?.append_child(&cursor)?;

    {
        let cursor = cursor.clone();
        EventListener::new(doc, "mousemove", move |evt: &Event| {
            if let Some(mouse) = evt.dyn_ref::<MouseEvent>() {
                let p = dom::client_point(mouse);
                StylePatch::new()
                    .set("left", px(p.x - CURSOR_SIZE / 2.0))
                    .set("top", px(p.y - CURSOR_SIZE / 2.0))
                    .apply(&cursor);
            }
        })
        .forget();
    }
    for (event, hot) in [("mouseover", true), ("mouseout", false)] {
        let cursor = cursor.clone();
        EventListener::new(doc, event, move |evt: &Event| {
            let over_hot = dom::target_element(evt)
                .map(|el| dom::matches(&el, CURSOR_HOT_SELECTOR))
                .unwrap_or(false);
            if over_hot {
                cursor_hot(hot).apply(&cursor);
            }
        })
        .forget();
    }
    Ok(())
}

fn install_trail(doc: &Document, cfg: &FxConfig) -> FxResult<()> {
    let len = cfg.trail_length;
    let body = dom::body(doc)?;
    let mut dots: Vec<HtmlElement> = Vec::with_capacity(len);
    for i in 0..len {
        let dot = dom::create_div(doc, Some("cursor-trail"))?;
        trail_dot_patch(i, len).apply(&dot);
        body.append_child(&dot)?;
        dots.push(dot);
    }
    let dots = Rc::new(dots);
    let last = Rc::new(Cell::new(Point::default()));
    let step_ms = cfg.trail_step_delay_ms;

    EventListener::new(doc, "mousemove", move |evt: &Event| {
        let Some(mouse) = evt.dyn_ref::<MouseEvent>() else {
            return;
        };
        let current = dom::client_point(mouse);
        for step in motion::trail_steps(last.get(), current, dots.len(), step_ms) {
            let dots = dots.clone();
            Timeout::new(step.delay_ms, move || {
                if let Some(dot) = dots.get(step.index) {
                    StylePatch::new()
                        .set("left", px(step.at.x))
                        .set("top", px(step.at.y))
                        .apply(dot);
                }
            })
            .forget();
        }
        last.set(current);
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_dots_fade_by_index() {
        assert_eq!(trail_dot_patch(0, 10).get("opacity"), Some("1"));
        assert_eq!(trail_dot_patch(5, 10).get("opacity"), Some("0.5"));
    }

    #[test]
    fn hot_cursor_turns_yellow() {
        assert!(cursor_hot(true).get("background").unwrap().contains("#ffd84d"));
        assert_eq!(cursor_hot(false).get("transform"), Some("scale(1)"));
    }
}
