//! Tunables for every effect. `Default` reproduces the page's stock look; a JSON
//! object with any subset of these fields can override them at startup.

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Palette shared by particles, shapes and confetti.
pub const PALETTE: [&str; 3] = ["#19e56f", "#ffd84d", "#ffffff"];

pub const ACCENT_GREEN: &str = "#19e56f";
pub const ACCENT_YELLOW: &str = "#ffd84d";

/// Elements that get the reveal-on-scroll treatment.
pub const REVEAL_SELECTOR: &str =
    ".fade-in, .slide-in-left, .slide-in-right, .rule-card, .stat-card, .chart-card, .table-card";

/// Elements that make the custom cursor grow.
pub const CURSOR_HOT_SELECTOR: &str = "button, a, input, .interactive-square, .letter-tile";

pub const PARALLAX_SELECTOR: &str = ".floating-shapes, .particles";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FxConfig {
    // --- pools ---
    pub initial_particles: usize,
    pub initial_squares: usize,
    pub initial_shapes: usize,
    pub trail_length: usize,
    // --- per-frame randomness ---
    pub particle_spawn_chance: f64,
    pub square_jitter_chance: f64,
    // --- geometry ---
    pub proximity_radius_px: f64,
    pub proximity_max_scale: f64,
    pub parallax_factor: f64,
    pub navbar_fade_px: f64,
    // --- timing (ms) ---
    pub trail_step_delay_ms: u32,
    pub ripple_ms: u32,
    pub explosion_ms: u32,
    pub bounce_ms: u32,
    pub color_revert_ms: u32,
    pub button_press_ms: u32,
    pub chart_dip_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub submit_restore_ms: u32,
    pub confetti_ms: u32,
    pub confetti_pieces: usize,
    // --- reveal observer ---
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    // --- outbound ---
    pub start_game_path: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            initial_particles: 50,
            initial_squares: 15,
            initial_shapes: 8,
            trail_length: 10,
            particle_spawn_chance: 0.02,
            square_jitter_chance: 0.001,
            proximity_radius_px: 200.0,
            proximity_max_scale: 0.2,
            parallax_factor: 0.5,
            navbar_fade_px: 100.0,
            trail_step_delay_ms: 10,
            ripple_ms: 600,
            explosion_ms: 600,
            bounce_ms: 300,
            color_revert_ms: 1000,
            button_press_ms: 150,
            chart_dip_ms: 300,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            submit_restore_ms: 3000,
            confetti_ms: 6000,
            confetti_pieces: 120,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            start_game_path: "/start_game".to_string(),
        }
    }
}

#[cfg(feature = "serde_json")]
impl FxConfig {
    pub fn from_json(json: &str) -> Result<Self, crate::error::FxError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let cfg = FxConfig::default();
        assert_eq!(cfg.initial_particles, 50);
        assert_eq!(cfg.trail_length, 10);
        assert_eq!(cfg.proximity_radius_px, 200.0);
        assert_eq!(cfg.submit_restore_ms, 3000);
        assert_eq!(cfg.start_game_path, "/start_game");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = FxConfig::from_json(r#"{"initial_particles": 5, "ripple_ms": 900}"#).unwrap();
        assert_eq!(cfg.initial_particles, 5);
        assert_eq!(cfg.ripple_ms, 900);
        assert_eq!(cfg.initial_squares, 15);
        assert_eq!(cfg.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_an_error() {
        assert!(FxConfig::from_json("{not json").is_err());
    }
}
