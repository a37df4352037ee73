//! Canvas confetti for the win popup. Runs for a fixed window, then the frame
//! loop is cancelled.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use fastrand::Rng;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::config::{FxConfig, PALETTE};
use crate::error::{FxError, FxResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'static str,
    pub speed: f64,
    pub angle: f64,
}

impl Piece {
    /// Starts somewhere above the top edge so pieces rain in staggered.
    pub fn random(rng: &mut Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: -10.0 - rng.f64() * height,
            size: 4.0 + rng.f64() * 4.0,
            color: PALETTE[rng.usize(..PALETTE.len())],
            speed: 2.0 + rng.f64() * 3.0,
            angle: rng.f64() * TAU,
        }
    }

    /// One frame of fall, sway and spin; wraps to the top once off the bottom.
    pub fn advance(&mut self, rng: &mut Rng, width: f64, height: f64) {
        self.y += self.speed;
        self.x += (self.y * 0.02).sin() * 0.6;
        self.angle += 0.02;
        if self.y > height + 20.0 {
            self.y = -10.0;
            self.x = rng.f64() * width;
        }
    }
}

pub fn scatter(rng: &mut Rng, count: usize, width: f64, height: f64) -> Vec<Piece> {
    (0..count).map(|_| Piece::random(rng, width, height)).collect()
}

struct Confetti {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    pieces: Vec<Piece>,
    rng: Rng,
}

impl Confetti {
    fn draw(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for p in &mut self.pieces {
            self.ctx.save();
            self.ctx.set_fill_style(&JsValue::from_str(p.color));
            self.ctx.translate(p.x, p.y).ok();
            self.ctx.rotate(p.angle).ok();
            self.ctx.fill_rect(-p.size / 2.0, -p.size / 2.0, p.size, p.size);
            self.ctx.restore();
            p.advance(&mut self.rng, self.width, self.height);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start confetti on `canvas`, sized to its layout box. Stops after
/// `cfg.confetti_ms`.
pub fn launch(canvas: &HtmlCanvasElement, cfg: &FxConfig, rng: &mut Rng) -> FxResult<()> {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(FxError::WrongElement("2d canvas"))?
        .dyn_into()
        .map_err(|_| FxError::WrongElement("CanvasRenderingContext2d"))?;

    let mut own_rng = Rng::with_seed(rng.u64(..));
    let pieces = scatter(&mut own_rng, cfg.confetti_pieces, width as f64, height as f64);
    let mut confetti = Confetti {
        ctx,
        width: width as f64,
        height: height as f64,
        pieces,
        rng: own_rng,
    };

    let stopped = Rc::new(Cell::new(false));
    let frame_id = Rc::new(Cell::new(0));

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let stopped = stopped.clone();
        let frame_id = frame_id.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if stopped.get() {
                return;
            }
            confetti.draw();
            if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    frame_id.set(id);
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        frame_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref())?);
    }

    Timeout::new(cfg.confetti_ms, move || {
        stopped.set(true);
        if let Some(w) = window() {
            w.cancel_animation_frame(frame_id.get()).ok();
        }
        // Break the self-reference so the loop closure can be freed.
        g.borrow_mut().take();
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_start_above_the_canvas() {
        let mut rng = Rng::with_seed(5);
        let pieces = scatter(&mut rng, 120, 300.0, 200.0);
        assert_eq!(pieces.len(), 120);
        for p in &pieces {
            assert!(p.y <= -10.0 && p.y > -210.0);
            assert!((0.0..300.0).contains(&p.x));
            assert!((4.0..8.0).contains(&p.size));
            assert!((2.0..5.0).contains(&p.speed));
        }
    }

    #[test]
    fn pieces_wrap_after_leaving_bottom() {
        let mut rng = Rng::with_seed(9);
        let mut p = Piece {
            x: 10.0,
            y: 219.0,
            size: 5.0,
            color: PALETTE[0],
            speed: 3.0,
            angle: 0.0,
        };
        p.advance(&mut rng, 300.0, 200.0);
        assert_eq!(p.y, -10.0);
        assert!((0.0..300.0).contains(&p.x));
        assert!((p.angle - 0.02).abs() < 1e-12);
    }

    #[test]
    fn pieces_fall_by_speed() {
        let mut rng = Rng::with_seed(9);
        let mut p = Piece {
            x: 10.0,
            y: 0.0,
            size: 5.0,
            color: PALETTE[1],
            speed: 4.0,
            angle: 1.0,
        };
        p.advance(&mut rng, 300.0, 200.0);
        assert_eq!(p.y, 4.0);
        assert!((p.x - (10.0 + (0.08f64).sin() * 0.6)).abs() < 1e-12);
    }
}
