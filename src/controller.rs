//! Visual effects controller: owns the decorative pools, the page-level event
//! bindings and the animation-frame loop.
//!
//! State lives in a page-lifetime `thread_local!` cell. Nothing is ever torn
//! down; leaving the page discards it.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, window};

use crate::config::{FxConfig, PARALLAX_SELECTOR};
use crate::error::FxResult;
use crate::motion::{self, Point};
use crate::spawn::{self, ParticleSpec, ShapeSpec, SquareSpec};
use crate::{clicks, counters, cursor, dom, forms, popup, reveal};

pub const PARTICLES_ID: &str = "particles";
pub const SQUARES_ID: &str = "interactiveSquares";
pub const SHAPES_ID: &str = "floatingShapes";

/// Runtime controller state.
struct FxState {
    cfg: Rc<FxConfig>,
    rng: Rng,
    doc: Document,
    particle_host: Option<HtmlElement>,
    squares: Vec<HtmlElement>,
    shapes: Vec<HtmlElement>,
    pointer: Point,
}

thread_local! {
    static FX_STATE: RefCell<Option<FxState>> = const { RefCell::new(None) };
}

/// Seed from the browser crypto source; fall back to the clock.
pub fn seeded_rng() -> Rng {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => Rng::with_seed(u64::from_le_bytes(buf)),
        Err(err) => {
            gloo::console::warn!("fx: no crypto rng, seeding from clock", err.to_string());
            Rng::with_seed(js_sys::Date::now() as u64)
        }
    }
}

pub fn is_running() -> bool {
    FX_STATE.with(|cell| cell.borrow().is_some())
}

/// Bind every effect to the loaded document. A second call is a no-op.
pub fn start(cfg: FxConfig) -> FxResult<()> {
    if is_running() {
        return Ok(());
    }
    let doc = dom::document()?;
    let cfg = Rc::new(cfg);
    let mut rng = seeded_rng();

    if let Err(err) = inject_keyframes(&doc) {
        gloo::console::warn!("fx: keyframes not injected", err.to_string());
    }

    let particle_host = dom::by_id(&doc, PARTICLES_ID);
    let particles = populate_particles(&doc, &cfg, &mut rng);
    let squares = populate_squares(&doc, &cfg, &mut rng);
    let shapes = populate_shapes(&doc, &cfg, &mut rng);

    // Each feature is independent: one failing must not take the rest down.
    if let Err(err) = cursor::install(&doc, &cfg) {
        gloo::console::warn!("fx: cursor effects skipped", err.to_string());
    }
    if let Err(err) = bind_page_events(&doc, &cfg) {
        gloo::console::warn!("fx: page listeners skipped", err.to_string());
    }
    let revealed = match reveal::observe(&doc, &cfg) {
        Ok(n) => n,
        Err(err) => {
            gloo::console::warn!("fx: reveal observer skipped", err.to_string());
            0
        }
    };
    forms::bind_inputs(&doc);
    forms::bind_forms(&doc, &cfg);
    forms::bind_chart_buttons(&doc, &cfg);
    forms::bind_start_game(&doc, &cfg);
    let counting = counters::animate_counters(&doc, &cfg);
    popup::setup(&doc, &cfg, &mut rng);

    gloo::console::log!(
        "fx: started",
        format!(
            "particles={} squares={} shapes={} reveal={} counters={}",
            particles,
            squares.len(),
            shapes.len(),
            revealed,
            counting
        )
    );

    let state = FxState {
        cfg,
        rng,
        doc,
        particle_host,
        squares,
        shapes,
        pointer: Point::default(),
    };
    FX_STATE.with(|cell| cell.replace(Some(state)));
    start_frame_loop();
    Ok(())
}

const FX_KEYFRAMES: &str = r#"
@keyframes ripple { to { transform: scale(4); opacity: 0; } }
@keyframes explosion {
    0% { width: 0; height: 0; opacity: 1; }
    50% { width: 100px; height: 100px; opacity: 0.8; }
    100% { width: 200px; height: 200px; opacity: 0; }
}
.custom-cursor {
    position: fixed; width: 20px; height: 20px;
    background: radial-gradient(circle, #19e56f, transparent); border-radius: 50%;
    pointer-events: none; z-index: 9999; transition: transform 0.1s ease; opacity: 0.8;
}
.cursor-trail {
    position: fixed; width: 4px; height: 4px; background: #19e56f; border-radius: 50%;
    pointer-events: none; z-index: 9998; transition: all 0.1s ease;
}
.ripple {
    position: absolute; border-radius: 50%; background: rgba(25, 229, 111, 0.6);
    transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; z-index: 1000;
}
"#;

fn inject_keyframes(doc: &Document) -> FxResult<()> {
    let head = doc.head().ok_or(crate::error::FxError::MissingRoot("head"))?;
    let style = doc.create_element("style")?;
    style.set_text_content(Some(FX_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

// --- Particles ---------------------------------------------------------------

pub fn spawn_particle(doc: &Document, host: &HtmlElement, rng: &mut Rng) -> FxResult<HtmlElement> {
    let spec = ParticleSpec::random(rng);
    let el = dom::create_div(doc, Some("particle"))?;
    spec.patch().apply(&el);
    host.append_child(&el)?;
    dom::remove_after(Element::from(el.clone()), spec.lifetime_ms());
    Ok(el)
}

/// Initial particle burst. Returns how many were created (0 without a host).
pub fn populate_particles(doc: &Document, cfg: &FxConfig, rng: &mut Rng) -> usize {
    let Some(host) = dom::by_id(doc, PARTICLES_ID) else {
        return 0;
    };
    (0..cfg.initial_particles)
        .filter(|_| spawn_particle(doc, &host, rng).is_ok())
        .count()
}

// --- Interactive squares -----------------------------------------------------

pub fn spawn_square(
    doc: &Document,
    host: &HtmlElement,
    cfg: &Rc<FxConfig>,
    rng: &mut Rng,
) -> FxResult<HtmlElement> {
    let el = dom::create_div(doc, Some("interactive-square"))?;
    SquareSpec::random(rng).patch().apply(&el);

    {
        let square = el.clone();
        let cfg = cfg.clone();
        EventListener::new(&el, "click", move |evt: &Event| {
            evt.prevent_default();
            if let Some(mouse) = evt.dyn_ref::<MouseEvent>() {
                clicks::explosion(dom::client_point(mouse), cfg.explosion_ms).ok();
            }
            bounce_square(&square, &cfg);
        })
        .forget();
    }
    for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
        let square = el.clone();
        EventListener::new(&el, event, move |_evt: &Event| {
            spawn::square_hover(hovering).apply(&square);
        })
        .forget();
    }

    host.append_child(&el)?;
    Ok(el)
}

/// Bounce, flash green, then settle back into the idle float animation.
pub fn bounce_square(square: &HtmlElement, cfg: &FxConfig) {
    let original_bg = square.style().get_property_value("background").unwrap_or_default();
    spawn::square_bounce().apply(square);
    dom::patch_after(square.clone(), spawn::square_settle(), cfg.bounce_ms);
    dom::patch_after(
        square.clone(),
        crate::style::StylePatch::new().set("background", original_bg),
        cfg.color_revert_ms,
    );
}

pub fn populate_squares(doc: &Document, cfg: &Rc<FxConfig>, rng: &mut Rng) -> Vec<HtmlElement> {
    let Some(host) = dom::by_id(doc, SQUARES_ID) else {
        return Vec::new();
    };
    (0..cfg.initial_squares)
        .filter_map(|_| spawn_square(doc, &host, cfg, rng).ok())
        .collect()
}

// --- Floating shapes ---------------------------------------------------------

pub fn spawn_shape(doc: &Document, host: &HtmlElement, rng: &mut Rng) -> FxResult<HtmlElement> {
    let spec = ShapeSpec::random(rng);
    let el = dom::create_div(doc, Some("floating-shape"))?;
    spec.patch().apply(&el);
    if spec.has_face {
        add_face(doc, &el)?;
    }
    host.append_child(&el)?;
    Ok(el)
}

fn add_face(doc: &Document, shape: &HtmlElement) -> FxResult<()> {
    let eyes = dom::create_div(doc, None)?;
    spawn::face_part("top", 20.0).apply(&eyes);
    eyes.set_text_content(Some("\u{1F440}"));

    let smile = dom::create_div(doc, None)?;
    spawn::face_part("bottom", 16.0).apply(&smile);
    smile.set_text_content(Some("\u{1F60A}"));

    shape.append_child(&eyes)?;
    shape.append_child(&smile)?;

    let target = shape.clone();
    EventListener::new(shape, "mousemove", move |evt: &Event| {
        let Some(mouse) = evt.dyn_ref::<MouseEvent>() else {
            return;
        };
        let center = dom::rect_of(&target).center();
        eyes.style()
            .set_property("transform", &motion::eyes_transform(center, dom::client_point(mouse)))
            .ok();
    })
    .forget();
    Ok(())
}

pub fn populate_shapes(doc: &Document, cfg: &FxConfig, rng: &mut Rng) -> Vec<HtmlElement> {
    let Some(host) = dom::by_id(doc, SHAPES_ID) else {
        return Vec::new();
    };
    (0..cfg.initial_shapes)
        .filter_map(|_| spawn_shape(doc, &host, rng).ok())
        .collect()
}

// --- Page events -------------------------------------------------------------

fn bind_page_events(doc: &Document, cfg: &Rc<FxConfig>) -> FxResult<()> {
    let win = dom::win()?;

    EventListener::new(doc, "mousemove", |evt: &Event| {
        if let Some(mouse) = evt.dyn_ref::<MouseEvent>() {
            on_pointer_move(dom::client_point(mouse));
        }
    })
    .forget();

    EventListener::new(&win, "resize", |_evt: &Event| on_resize()).forget();
    EventListener::new(&win, "scroll", |_evt: &Event| on_scroll()).forget();

    let click_cfg = cfg.clone();
    EventListener::new(doc, "click", move |evt: &Event| {
        if let Some(mouse) = evt.dyn_ref::<MouseEvent>() {
            clicks::on_document_click(mouse, &click_cfg);
        }
    })
    .forget();
    Ok(())
}

fn on_pointer_move(pointer: Point) {
    FX_STATE.with(|cell| {
        if let Some(st) = cell.borrow_mut().as_mut() {
            st.pointer = pointer;
            for shape in &st.shapes {
                let center = dom::rect_of(shape).center();
                let transform = motion::proximity_transform(
                    center,
                    pointer,
                    st.cfg.proximity_radius_px,
                    st.cfg.proximity_max_scale,
                );
                shape.style().set_property("transform", &transform).ok();
            }
        }
    });
}

fn on_resize() {
    FX_STATE.with(|cell| {
        if let Some(st) = cell.borrow().as_ref() {
            for square in &st.squares {
                square.style().set_property("transition", "all 0.3s ease").ok();
            }
        }
    });
}

fn on_scroll() {
    let Some(win) = window() else { return };
    let scrolled = win.scroll_y().unwrap_or(0.0);
    FX_STATE.with(|cell| {
        if let Some(st) = cell.borrow().as_ref() {
            apply_scroll(&st.doc, &st.cfg, scrolled);
        }
    });
}

/// Parallax on the background layers and navbar fade for a given scroll offset.
pub fn apply_scroll(doc: &Document, cfg: &FxConfig, scroll_y: f64) {
    let parallax = motion::parallax_transform(scroll_y, cfg.parallax_factor);
    for el in dom::query_all_html(doc, PARALLAX_SELECTOR) {
        el.style().set_property("transform", &parallax).ok();
    }
    if let Ok(Some(nav)) = doc.query_selector(".navbar") {
        if let Ok(nav) = nav.dyn_into::<HtmlElement>() {
            let background = motion::navbar_background(scroll_y, cfg.navbar_fade_px);
            nav.style().set_property("background", &background).ok();
        }
    }
}

// --- Frame loop --------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        FX_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                fx_tick(state);
            }
        });
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn fx_tick(state: &mut FxState) {
    // Replenish particles
    if state.rng.f64() < state.cfg.particle_spawn_chance {
        if let Some(host) = &state.particle_host {
            spawn_particle(&state.doc, host, &mut state.rng).ok();
        }
    }
    // Idle jitter on squares
    for square in &state.squares {
        if state.rng.f64() < state.cfg.square_jitter_chance {
            spawn::square_jitter(&mut state.rng).apply(square);
        }
    }
}
