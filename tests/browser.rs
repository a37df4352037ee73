// Headless-browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use fastrand::Rng;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use guess_word_fx::controller::{self, PARTICLES_ID, SHAPES_ID, SQUARES_ID};
use guess_word_fx::{FxConfig, counters, dom, forms, popup, reveal};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    dom::document().unwrap()
}

fn host(doc: &Document, id: &str) -> HtmlElement {
    let el = dom::create_div(doc, None).unwrap();
    el.set_id(id);
    dom::body(doc).unwrap().append_child(&el).unwrap();
    el
}

fn count(doc: &Document, selector: &str) -> u32 {
    doc.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn missing_containers_create_nothing() {
    let doc = doc();
    let cfg = Rc::new(FxConfig::default());
    let mut rng = Rng::with_seed(1);
    assert!(doc.get_element_by_id(PARTICLES_ID).is_none());
    let before = count(&doc, "div");
    assert_eq!(controller::populate_particles(&doc, &cfg, &mut rng), 0);
    assert!(controller::populate_squares(&doc, &cfg, &mut rng).is_empty());
    assert!(controller::populate_shapes(&doc, &cfg, &mut rng).is_empty());
    assert_eq!(count(&doc, "div"), before);
}

#[wasm_bindgen_test]
fn pools_fill_their_containers() {
    let doc = doc();
    let cfg = Rc::new(FxConfig::default());
    let mut rng = Rng::with_seed(2);
    let squares_host = host(&doc, SQUARES_ID);
    let shapes_host = host(&doc, SHAPES_ID);
    assert_eq!(controller::populate_squares(&doc, &cfg, &mut rng).len(), 15);
    assert_eq!(controller::populate_shapes(&doc, &cfg, &mut rng).len(), 8);
    assert_eq!(squares_host.child_element_count(), 15);
    assert_eq!(shapes_host.child_element_count(), 8);
    squares_host.remove();
    shapes_host.remove();
}

#[wasm_bindgen_test]
async fn removal_timer_detaches_element() {
    let doc = doc();
    let el = dom::create_div(&doc, Some("particle")).unwrap();
    dom::body(&doc).unwrap().append_child(&el).unwrap();
    dom::remove_after(el.clone().into(), 50);
    assert!(el.is_connected());
    TimeoutFuture::new(150).await;
    assert!(!el.is_connected());
}

#[wasm_bindgen_test]
async fn square_click_bounces_and_settles() {
    let doc = doc();
    let cfg = Rc::new(FxConfig::default());
    let mut rng = Rng::with_seed(3);
    let squares_host = host(&doc, "squareClickHost");
    let square = controller::spawn_square(&doc, &squares_host, &cfg, &mut rng).unwrap();
    square.click();
    assert_eq!(square.style().get_property_value("animation-name").unwrap(), "none");
    TimeoutFuture::new(cfg.bounce_ms + 100).await;
    assert_eq!(
        square.style().get_property_value("animation-name").unwrap(),
        "square-float"
    );
    squares_host.remove();
}

#[wasm_bindgen_test]
async fn counter_stops_exactly_on_target() {
    let doc = doc();
    let el = dom::create_div(&doc, Some("stat-number")).unwrap();
    el.set_attribute("data-target", "37").unwrap();
    dom::body(&doc).unwrap().append_child(&el).unwrap();
    let cfg = FxConfig {
        counter_duration_ms: 200,
        ..FxConfig::default()
    };
    assert!(counters::animate_counters(&doc, &cfg) >= 1);
    TimeoutFuture::new(600).await;
    assert_eq!(el.text_content().as_deref(), Some("37"));
    el.remove();
}

#[wasm_bindgen_test]
async fn reveal_marks_visible_once() {
    let doc = doc();
    let el = dom::create_div(&doc, Some("fade-in")).unwrap();
    el.style().set_property("height", "200px").unwrap();
    let body = dom::body(&doc).unwrap();
    body.insert_before(&el, body.first_child().as_ref()).unwrap();
    assert!(reveal::observe(&doc, &FxConfig::default()).unwrap() >= 1);
    TimeoutFuture::new(300).await;
    assert!(el.class_list().contains(reveal::VISIBLE_CLASS));
    // Still intersecting, but no longer observed: the class must stay gone.
    el.class_list().remove_1(reveal::VISIBLE_CLASS).unwrap();
    TimeoutFuture::new(300).await;
    assert!(!el.class_list().contains(reveal::VISIBLE_CLASS));
    el.remove();
}

#[wasm_bindgen_test]
async fn submit_holds_button_busy_then_restores() {
    let doc = doc();
    let form = doc.create_element("form").unwrap();
    form.set_inner_html(r#"<button type="submit">Go</button>"#);
    dom::body(&doc).unwrap().append_child(&form).unwrap();
    let button = form.query_selector("button").unwrap().unwrap();
    let cfg = FxConfig {
        submit_restore_ms: 50,
        ..FxConfig::default()
    };
    forms::on_submit(&form, &cfg);
    assert!(button.has_attribute("disabled"));
    assert_eq!(button.inner_html(), forms::PROCESSING_LABEL);
    TimeoutFuture::new(150).await;
    assert_eq!(button.inner_html(), "Go");
    assert!(!button.has_attribute("disabled"));
    form.remove();
}

#[wasm_bindgen_test]
fn chart_button_is_the_only_active_sibling() {
    let doc = doc();
    let group = host(&doc, "chartGroup");
    let buttons: Vec<HtmlElement> = (0..3)
        .map(|_| {
            let btn = dom::create_div(&doc, Some("chart-btn")).unwrap();
            group.append_child(&btn).unwrap();
            btn
        })
        .collect();
    buttons[0].class_list().add_1("active").unwrap();
    forms::activate_chart_button(&buttons[2]);
    assert_eq!(group.query_selector_all(".chart-btn.active").unwrap().length(), 1);
    assert!(buttons[2].class_list().contains("active"));
    assert!(!buttons[0].class_list().contains("active"));
    group.remove();
}

#[wasm_bindgen_test]
fn popup_close_button_removes_popup() {
    let doc = doc();
    let container = host(&doc, popup::POPUP_ID);
    let close = dom::create_div(&doc, None).unwrap();
    close.set_id(popup::CLOSE_ID);
    container.append_child(&close).unwrap();
    popup::setup(&doc, &FxConfig::default(), &mut Rng::with_seed(4));
    assert!(doc.get_element_by_id(popup::POPUP_ID).is_some());
    close.click();
    assert!(doc.get_element_by_id(popup::POPUP_ID).is_none());
}

#[wasm_bindgen_test]
fn scroll_moves_shapes_and_darkens_navbar() {
    let doc = doc();
    let shapes = dom::create_div(&doc, Some("floating-shapes")).unwrap();
    let navbar = dom::create_div(&doc, Some("navbar")).unwrap();
    let body = dom::body(&doc).unwrap();
    body.append_child(&shapes).unwrap();
    body.append_child(&navbar).unwrap();
    let cfg = FxConfig::default();

    controller::apply_scroll(&doc, &cfg, 0.0);
    assert_eq!(shapes.style().get_property_value("transform").unwrap(), "translateY(0px)");
    assert_eq!(
        navbar.style().get_property_value("background-color").unwrap(),
        "rgba(0, 0, 0, 0.8)"
    );

    // Past the fade distance the navbar stays fully opaque.
    controller::apply_scroll(&doc, &cfg, 400.0);
    assert_eq!(shapes.style().get_property_value("transform").unwrap(), "translateY(200px)");
    assert_eq!(
        navbar.style().get_property_value("background-color").unwrap(),
        "rgb(0, 0, 0)"
    );
    shapes.remove();
    navbar.remove();
}
