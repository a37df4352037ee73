//! Randomized parameters for the decorative pools: particles, interactive squares
//! and floating shapes. Everything here is pure; the DOM side lives in `controller`.

use fastrand::Rng;

use crate::config::{ACCENT_GREEN, PALETTE};
use crate::style::{StylePatch, pct, px, secs};

fn pick_color(rng: &mut Rng) -> &'static str {
    PALETTE[rng.usize(..PALETTE.len())]
}

/// Uniform float in `[lo, lo + span)`.
fn uniform(rng: &mut Rng, lo: f64, span: f64) -> f64 {
    rng.f64() * span + lo
}

// --- Particles ---------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub size_px: f64,
    pub color: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            left_pct: uniform(rng, 0.0, 100.0),
            size_px: uniform(rng, 2.0, 4.0),
            color: pick_color(rng),
            duration_s: uniform(rng, 10.0, 10.0),
            delay_s: uniform(rng, 0.0, 5.0),
        }
    }

    /// Removal timer; matches the CSS animation duration.
    pub fn lifetime_ms(&self) -> u32 {
        (self.duration_s * 1000.0).round() as u32
    }

    pub fn patch(&self) -> StylePatch {
        StylePatch::new()
            .set("left", pct(self.left_pct))
            .set("top", "100vh")
            .set("width", px(self.size_px))
            .set("height", px(self.size_px))
            .set("background", self.color)
            .set("animation-duration", secs(self.duration_s))
            .set("animation-delay", secs(self.delay_s))
    }
}

// --- Interactive squares -----------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct SquareSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub rotation_deg: f64,
    pub delay_s: f64,
}

impl SquareSpec {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            left_pct: uniform(rng, 0.0, 100.0),
            top_pct: uniform(rng, 0.0, 100.0),
            size_px: uniform(rng, 10.0, 15.0),
            rotation_deg: uniform(rng, 0.0, 360.0),
            delay_s: uniform(rng, 0.0, 10.0),
        }
    }

    pub fn patch(&self) -> StylePatch {
        StylePatch::new()
            .set("left", pct(self.left_pct))
            .set("top", pct(self.top_pct))
            .set("width", px(self.size_px))
            .set("height", px(self.size_px))
            .set("transform", format!("rotate({}deg)", self.rotation_deg))
            .set("animation-delay", secs(self.delay_s))
    }
}

pub fn square_hover(hovering: bool) -> StylePatch {
    if hovering {
        StylePatch::new()
            .set("transform", "scale(1.2) rotate(45deg)")
            .set("box-shadow", "0 0 20px rgba(25, 229, 111, 0.8)")
    } else {
        StylePatch::new()
            .set("transform", "scale(1) rotate(0deg)")
            .set("box-shadow", "none")
    }
}

/// First half of the click bounce.
pub fn square_bounce() -> StylePatch {
    StylePatch::new()
        .set("animation", "none")
        .set("transform", "scale(1.5) rotate(180deg)")
        .set("transition", "all 0.3s ease")
        .set("background", ACCENT_GREEN)
}

/// Applied once the bounce has played: back to the idle float animation.
pub fn square_settle() -> StylePatch {
    StylePatch::new()
        .set("transform", "scale(1) rotate(0deg)")
        .set("animation", "square-float 10s infinite linear")
}

/// Random idle jitter applied from the frame loop.
pub fn square_jitter(rng: &mut Rng) -> StylePatch {
    let rot = uniform(rng, 0.0, 360.0);
    let scale = uniform(rng, 0.8, 0.4);
    StylePatch::new().set("transform", format!("rotate({rot}deg) scale({scale})"))
}

// --- Floating shapes ---------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub color: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
    pub has_face: bool,
}

impl ShapeSpec {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            kind: ShapeKind::ALL[rng.usize(..ShapeKind::ALL.len())],
            size_px: uniform(rng, 50.0, 100.0),
            left_pct: uniform(rng, 0.0, 100.0),
            top_pct: uniform(rng, 0.0, 100.0),
            color: pick_color(rng),
            duration_s: uniform(rng, 10.0, 20.0),
            delay_s: uniform(rng, 0.0, 10.0),
            has_face: rng.f64() > 0.5,
        }
    }

    pub fn patch(&self) -> StylePatch {
        let size = px(self.size_px);
        let base = StylePatch::new()
            .set("width", size.clone())
            .set("height", size)
            .set("left", pct(self.left_pct))
            .set("top", pct(self.top_pct));
        let shaped = match self.kind {
            ShapeKind::Circle => base
                .set("border-radius", "50%")
                .set("background", format!("radial-gradient(circle, {}, transparent)", self.color)),
            ShapeKind::Square => base
                .set("border-radius", "10px")
                .set("background", format!("linear-gradient(45deg, {}, transparent)", self.color)),
            ShapeKind::Triangle => {
                let half = px(self.size_px / 2.0);
                base.set("width", "0")
                    .set("height", "0")
                    .set("border-left", format!("{half} solid transparent"))
                    .set("border-right", format!("{half} solid transparent"))
                    .set("border-bottom", format!("{} solid {}", px(self.size_px), self.color))
                    .set("background", "none")
            }
        };
        shaped
            .set("animation", format!("float1 {}s infinite linear", self.duration_s))
            .set("animation-delay", secs(self.delay_s))
    }
}

/// Eye / smile overlay. `top` places the eyes, `bottom` the smile.
pub fn face_part(vertical: &'static str, font_px: f64) -> StylePatch {
    StylePatch::new()
        .set("position", "absolute")
        .set(vertical, "30%")
        .set("left", "50%")
        .set("transform", "translateX(-50%)")
        .set("font-size", px(font_px))
        .set("color", "#000")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_ranges_hold() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..500 {
            let p = ParticleSpec::random(&mut rng);
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((2.0..6.0).contains(&p.size_px));
            assert!((10.0..20.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
            assert!(PALETTE.contains(&p.color));
            let life = p.lifetime_ms();
            assert!((10_000..=20_000).contains(&life));
        }
    }

    #[test]
    fn particle_patch_starts_below_viewport() {
        let mut rng = Rng::with_seed(1);
        let patch = ParticleSpec::random(&mut rng).patch();
        assert_eq!(patch.get("top"), Some("100vh"));
        assert_eq!(patch.get("width"), patch.get("height"));
    }

    #[test]
    fn square_ranges_hold() {
        let mut rng = Rng::with_seed(11);
        for _ in 0..500 {
            let s = SquareSpec::random(&mut rng);
            assert!((10.0..25.0).contains(&s.size_px));
            assert!((0.0..360.0).contains(&s.rotation_deg));
            assert!((0.0..10.0).contains(&s.delay_s));
        }
    }

    #[test]
    fn bounce_then_settle_restores_float_animation() {
        let bounce = square_bounce();
        assert_eq!(bounce.get("animation"), Some("none"));
        assert_eq!(bounce.get("background"), Some(ACCENT_GREEN));
        let settle = square_settle();
        assert_eq!(settle.get("animation"), Some("square-float 10s infinite linear"));
        assert_eq!(settle.get("transform"), Some("scale(1) rotate(0deg)"));
    }

    #[test]
    fn hover_leave_clears_glow() {
        assert_eq!(square_hover(false).get("box-shadow"), Some("none"));
        assert!(square_hover(true).get("box-shadow").unwrap().contains("25, 229, 111"));
    }

    #[test]
    fn triangle_uses_borders() {
        let spec = ShapeSpec {
            kind: ShapeKind::Triangle,
            size_px: 80.0,
            left_pct: 10.0,
            top_pct: 20.0,
            color: "#ffffff",
            duration_s: 12.0,
            delay_s: 1.0,
            has_face: false,
        };
        let p = spec.patch();
        assert_eq!(p.get("width"), Some("0"));
        assert_eq!(p.get("border-left"), Some("40px solid transparent"));
        assert_eq!(p.get("border-bottom"), Some("80px solid #ffffff"));
        assert_eq!(p.get("background"), Some("none"));
        assert_eq!(p.get("animation"), Some("float1 12s infinite linear"));
    }

    #[test]
    fn shape_kinds_all_appear() {
        let mut rng = Rng::with_seed(3);
        let kinds: Vec<ShapeKind> = (0..200).map(|_| ShapeSpec::random(&mut rng).kind).collect();
        for k in ShapeKind::ALL {
            assert!(kinds.contains(&k), "{k:?} never generated");
        }
    }
}
