//! Domain vocabulary used throughout the dashboard.
//!
//! This module defines:
//!
//! - the input document model (`HorizonsDoc` and its sections)
//! - the UI selection state (`Selection`)
//! - the fixed domain catalog (labels + colors) and model display names
//! - shared constants (forecast targets, caps, debounce interval)

use std::time::Duration;

pub mod types;

pub use types::*;

/// Reference duration for the "success at one hour" readout.
pub const ONE_HOUR_MINUTES: f64 = 60.0;

/// Forecast targets: (minutes, short label).
pub const FORECAST_TARGETS: [(f64, &str); 3] = [(60.0, "1h"), (480.0, "8h"), (1440.0, "1d")];

/// Series colors for the forecast targets, index-aligned with
/// [`FORECAST_TARGETS`].
pub const FORECAST_COLORS: [&str; 3] = ["#4f77b4", "#3f9e8b", "#c85663"];

/// Average month length used when projecting forecast months onto dates.
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Assumed horizon doubling time (months) before the user adjusts it.
pub const DEFAULT_DOUBLING_MONTHS: f64 = 6.0;
pub const DOUBLING_MONTHS_MIN: f64 = 1.0;
pub const DOUBLING_MONTHS_MAX: f64 = 24.0;
pub const DOUBLING_MONTHS_STEP: f64 = 0.5;

/// Default model cap for the heatmap and the economics top lists.
pub const TOP_MODELS: usize = 12;

/// The records table only ever shows the leading slice of the document.
pub const TABLE_ROW_LIMIT: usize = 150;

/// Quiescence window for coalescing terminal resize events before the
/// derived views are recomputed.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(220);

/// Cost split preset preferred on startup when the document provides it.
pub const DEFAULT_SPLIT_PRESET: &str = "input_70_output_30";

/// Display-only suffix stripped from model names.
pub const INSPECT_SUFFIX: &str = " (Inspect)";

/// Color used for domain keys missing from the catalog.
pub const FALLBACK_COLOR: &str = "#61758a";

/// Known domain keys with their display labels and chart colors.
///
/// Unrecognized keys are not an error: they fall back to the raw key as the
/// label and to `FALLBACK_COLOR`.
pub const DOMAIN_CATALOG: [(&str, &str, &str); 6] = [
    ("cybersecurity", "Cybersecurity", "#c85663"),
    ("ml_research", "ML / AI Research", "#4f77b4"),
    ("software_engineering", "Software Engineering", "#3f9e8b"),
    ("data_analysis", "Data & Research", "#d4955e"),
    ("reasoning", "Reasoning", "#9a7fb8"),
    ("unknown", "General / Other", "#7a7f87"),
];

/// Display label for a domain key.
pub fn domain_label(key: &str) -> &str {
    DOMAIN_CATALOG
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, _)| *label)
        .unwrap_or(key)
}

/// Chart color (hex) for a domain key.
pub fn domain_color(key: &str) -> &'static str {
    DOMAIN_CATALOG
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, _, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Model name as shown to the user (join keys keep the raw name).
pub fn display_model(name: &str) -> &str {
    name.strip_suffix(INSPECT_SUFFIX).unwrap_or(name)
}

/// True for the human reference series. Exact name match only, so a model
/// that merely mentions the word keeps its rows.
pub fn is_human_baseline(name: &str) -> bool {
    matches!(name.to_lowercase().as_str(), "human" | "human baseline")
}

/// Parse a `#rrggbb` color into RGB components.
///
/// Malformed input maps to a neutral gray rather than an error since colors
/// are cosmetic.
pub fn parse_hex_color(hex: &str) -> (u8, u8, u8) {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 {
        return (0x99, 0x99, 0x99);
    }
    let channel = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).unwrap_or(0x99);
    (channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_label_known_and_fallback() {
        assert_eq!(domain_label("ml_research"), "ML / AI Research");
        assert_eq!(domain_label("software_engineering"), "Software Engineering");
        // Unrecognized keys display as-is.
        assert_eq!(domain_label("robotics"), "robotics");
    }

    #[test]
    fn domain_color_known_and_fallback() {
        assert_eq!(domain_color("cybersecurity"), "#c85663");
        assert_eq!(domain_color("robotics"), FALLBACK_COLOR);
    }

    #[test]
    fn display_model_strips_suffix_only() {
        assert_eq!(display_model("gpt-x (Inspect)"), "gpt-x");
        assert_eq!(display_model("gpt-x"), "gpt-x");
        // Only a trailing marker is display noise; anything else is part of
        // the name.
        assert_eq!(display_model("weird (Inspect) name"), "weird (Inspect) name");
    }

    #[test]
    fn human_baseline_matches_exact_names_only() {
        assert!(is_human_baseline("human"));
        assert!(is_human_baseline("Human baseline"));
        assert!(!is_human_baseline("superhuman-v1"));
        assert!(!is_human_baseline("humanities-tutor"));
    }

    #[test]
    fn parse_hex_color_roundtrip() {
        assert_eq!(parse_hex_color("#4f77b4"), (0x4f, 0x77, 0xb4));
        assert_eq!(parse_hex_color("3f9e8b"), (0x3f, 0x9e, 0x8b));
        assert_eq!(parse_hex_color("nonsense"), (0x99, 0x99, 0x99));
    }
}
