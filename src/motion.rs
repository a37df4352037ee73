//! Pointer / scroll driven geometry. Pure functions over plain numbers.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle (radians) of the vector from `self` toward `other`.
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Axis aligned box in client coordinates (mirror of a `DOMRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

// --- Floating shapes ---------------------------------------------------------

/// Transform for a floating shape given the pointer position. Inside `radius` the
/// shape turns toward the pointer and grows up to `1 + max_scale` as the pointer
/// approaches; outside it is neutral.
pub fn proximity_transform(
    shape_center: Point,
    pointer: Point,
    radius: f64,
    max_scale: f64,
) -> String {
    let distance = shape_center.distance(pointer);
    if distance < radius {
        let angle = shape_center.angle_to(pointer);
        let scale = 1.0 + (radius - distance) / radius * max_scale;
        format!("rotate({angle}rad) scale({scale})")
    } else {
        NEUTRAL_SHAPE_TRANSFORM.to_string()
    }
}

pub const NEUTRAL_SHAPE_TRANSFORM: &str = "rotate(0deg) scale(1)";

pub fn eyes_transform(shape_center: Point, pointer: Point) -> String {
    format!("translateX(-50%) rotate({}rad)", shape_center.angle_to(pointer))
}

// --- Cursor trail ------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailStep {
    pub index: usize,
    pub delay_ms: u32,
    pub at: Point,
}

/// Where each trail dot should land after a pointer move from `last` to
/// `current`, and how long it waits first. Dot `i` sits `i/len` of the way
/// along the segment and waits `i * step_ms`.
pub fn trail_steps(last: Point, current: Point, len: usize, step_ms: u32) -> Vec<TrailStep> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            TrailStep {
                index: i,
                delay_ms: step_ms.saturating_mul(i as u32),
                at: Point::new(
                    last.x + (current.x - last.x) * t,
                    last.y + (current.y - last.y) * t,
                ),
            }
        })
        .collect()
}

pub fn trail_opacity(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    1.0 - index as f64 / len as f64
}

// --- Scroll ------------------------------------------------------------------

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

/// Navbar fades from 0.8 to fully opaque black over the first `fade_px` of scroll.
pub fn navbar_background(scroll_y: f64, fade_px: f64) -> String {
    let progress = if fade_px > 0.0 {
        (scroll_y / fade_px).clamp(0.0, 1.0)
    } else {
        1.0
    };
    format!("rgba(0, 0, 0, {})", 0.8 + progress * 0.2)
}

// --- Click effects -----------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Ripple sized to the larger side of the clicked element, centred on the click.
pub fn ripple_geometry(target: Rect, click: Point) -> RippleGeometry {
    let size = target.width.max(target.height);
    RippleGeometry {
        size,
        left: click.x - target.left - size / 2.0,
        top: click.y - target.top - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_is_neutral_outside_radius() {
        let c = Point::new(0.0, 0.0);
        let edge = proximity_transform(c, Point::new(200.0, 0.0), 200.0, 0.2);
        assert_eq!(edge, NEUTRAL_SHAPE_TRANSFORM);
        let far = proximity_transform(c, Point::new(300.0, 400.0), 200.0, 0.2);
        assert_eq!(far, NEUTRAL_SHAPE_TRANSFORM);
    }

    #[test]
    fn proximity_scales_with_inverse_distance() {
        let c = Point::new(0.0, 0.0);
        let half = proximity_transform(c, Point::new(100.0, 0.0), 200.0, 0.2);
        assert_eq!(half, "rotate(0rad) scale(1.1)");
        let near = proximity_transform(c, Point::new(0.0, 0.0), 200.0, 0.2);
        assert!(near.ends_with("scale(1.2)"), "{near}");
    }

    #[test]
    fn trail_delays_are_monotonic() {
        let steps = trail_steps(Point::new(0.0, 0.0), Point::new(100.0, 50.0), 10, 10);
        assert_eq!(steps.len(), 10);
        for pair in steps.windows(2) {
            assert!(pair[1].delay_ms > pair[0].delay_ms);
        }
        assert_eq!(steps[0].at, Point::new(0.0, 0.0));
        assert_eq!(steps[5].at, Point::new(50.0, 25.0));
        assert_eq!(steps[9].delay_ms, 90);
    }

    #[test]
    fn trail_delay_saturates_on_huge_step() {
        let steps = trail_steps(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 3, u32::MAX);
        let delays: Vec<u32> = steps.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, u32::MAX, u32::MAX]);
    }

    #[test]
    fn trail_opacity_fades_out() {
        assert_eq!(trail_opacity(0, 10), 1.0);
        assert!((trail_opacity(9, 10) - 0.1).abs() < 1e-9);
        assert_eq!(trail_opacity(0, 0), 0.0);
    }

    #[test]
    fn navbar_caps_at_fade_distance() {
        assert_eq!(navbar_background(0.0, 100.0), "rgba(0, 0, 0, 0.8)");
        assert_eq!(navbar_background(100.0, 100.0), "rgba(0, 0, 0, 1)");
        assert_eq!(navbar_background(5000.0, 100.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn parallax_is_proportional() {
        assert_eq!(parallax_transform(300.0, 0.5), "translateY(150px)");
    }

    #[test]
    fn ripple_centres_on_click() {
        let rect = Rect { left: 10.0, top: 20.0, width: 100.0, height: 40.0 };
        let g = ripple_geometry(rect, Point::new(60.0, 40.0));
        assert_eq!(g.size, 100.0);
        assert_eq!(g.left, 0.0);
        assert_eq!(g.top, -30.0);
    }

    #[test]
    fn eyes_look_toward_pointer() {
        let t = eyes_transform(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert!(t.starts_with("translateX(-50%) rotate(1.57"), "{t}");
    }
}
