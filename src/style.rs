//! Inline style patches. Effects compute a `StylePatch` (pure, testable) and the
//! DOM layer writes it onto an element in one go.

use web_sys::HtmlElement;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    props: Vec<(&'static str, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a CSS property.
    pub fn set(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.props.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            self.props.push((prop, value));
        }
        self
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Writes each property; a rejected property is skipped.
    pub fn apply(&self, el: &HtmlElement) {
        let style = el.style();
        for (p, v) in &self.props {
            style.set_property(p, v).ok();
        }
    }
}

pub fn px(v: f64) -> String {
    format!("{v}px")
}

pub fn pct(v: f64) -> String {
    format!("{v}%")
}

pub fn secs(v: f64) -> String {
    format!("{v}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let p = StylePatch::new()
            .set("width", "1px")
            .set("height", "2px")
            .set("width", "3px");
        assert_eq!(p.get("width"), Some("3px"));
        assert_eq!(p.get("height"), Some("2px"));
        assert_eq!(p, StylePatch::new().set("width", "3px").set("height", "2px"));
    }

    #[test]
    fn unit_helpers() {
        assert_eq!(px(4.5), "4.5px");
        assert_eq!(pct(50.0), "50%");
        assert_eq!(secs(12.0), "12s");
    }
}
