//! UI timings.
//!
//! Defaults match what the server templates were tuned for. A page may override
//! any subset through a JSON island:
//!
//! ```html
//! <script type="application/json" id="ui-config">{"idle_delay_ms": 5000}</script>
//! ```

use crate::shared::page_data::read_json_island;
use serde::Deserialize;

pub const UI_CONFIG_ISLAND_ID: &str = "ui-config";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Inactivity before the carousel starts moving
    pub idle_delay_ms: f64,
    /// Carousel speed, pixels per frame tick
    pub scroll_px_per_frame: f64,
    /// Pause at the end of the carousel before snapping back
    pub end_pause_ms: f64,
    pub frame_interval_ms: u32,
    pub toast_fade_ms: u32,
    /// Delay before falling back to plain navigation on a failed favorite toggle
    pub favorite_fallback_ms: u32,
    /// Card fade-out on the favorites page
    pub card_removal_ms: u32,
    pub scroll_top_threshold_px: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            idle_delay_ms: 3000.0,
            scroll_px_per_frame: 1.0,
            end_pause_ms: 1500.0,
            frame_interval_ms: 16,
            toast_fade_ms: 400,
            favorite_fallback_ms: 1000,
            card_removal_ms: 300,
            scroll_top_threshold_px: 300,
        }
    }
}

impl UiConfig {
    /// Reads the page override, falling back to defaults
    pub fn load() -> Self {
        read_json_island::<UiConfig>(UI_CONFIG_ISLAND_ID)
            .map(UiConfig::sanitized)
            .unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<UiConfig>(json).map(UiConfig::sanitized)
    }

    fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            scroll_px_per_frame: if self.scroll_px_per_frame >= 1.0 {
                self.scroll_px_per_frame
            } else {
                defaults.scroll_px_per_frame
            },
            frame_interval_ms: self.frame_interval_ms.max(1),
            idle_delay_ms: self.idle_delay_ms.max(0.0),
            end_pause_ms: self.end_pause_ms.max(0.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = UiConfig::from_json(r#"{"idle_delay_ms": 5000}"#).unwrap();
        assert_eq!(config.idle_delay_ms, 5000.0);
        assert_eq!(config.toast_fade_ms, 400);
        assert_eq!(config.scroll_px_per_frame, 1.0);
    }

    #[test]
    fn test_sub_pixel_speed_is_rejected() {
        let config =
            UiConfig::from_json(r#"{"scroll_px_per_frame": 0.2, "frame_interval_ms": 0}"#).unwrap();
        assert_eq!(config.scroll_px_per_frame, 1.0);
        assert_eq!(config.frame_interval_ms, 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(UiConfig::from_json("{not json").is_err());
    }
}
