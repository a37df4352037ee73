//! Stat counters: `.stat-number[data-target]` counts up from 0 to its target.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::{Document, Element};

use crate::config::FxConfig;
use crate::dom;

pub const COUNTER_SELECTOR: &str = ".stat-number[data-target]";

/// Fixed-increment count-up. `step` never overshoots the target and the final
/// step lands on it exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
            done: false,
        }
    }

    /// Advance one tick and return the value to display.
    pub fn step(&mut self) -> i64 {
        if self.done {
            return self.target;
        }
        self.current += self.increment;
        // A non-positive target is reached on the first tick.
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.done = true;
            return self.target;
        }
        self.current.floor() as i64
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Leading integer of `raw`, read the way `parseInt` does: leading whitespace
/// and an optional sign, then digits up to the first non-digit.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Starts a count-up on every counter in the document. Returns how many started.
pub fn animate_counters(doc: &Document, cfg: &FxConfig) -> usize {
    let mut started = 0;
    for el in dom::query_all(doc, COUNTER_SELECTOR) {
        let Some(target) = el
            .get_attribute("data-target")
            .as_deref()
            .and_then(parse_target)
        else {
            continue;
        };
        let anim = CounterAnimation::new(target, cfg.counter_duration_ms, cfg.counter_tick_ms);
        start_counter(el, anim, cfg.counter_tick_ms);
        started += 1;
    }
    started
}

fn start_counter(el: Element, mut anim: CounterAnimation, tick_ms: u32) {
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_for_tick = handle.clone();
    let interval = Interval::new(tick_ms, move || {
        let shown = anim.step();
        el.set_text_content(Some(&shown.to_string()));
        if anim.is_done() {
            handle_for_tick.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(interval);
}
