//! Text glyphs standing in for an icon font.

use aqua_core::models::MetricIcon;
use dioxus::prelude::*;

pub const DROPLETS: &str = "💧";
pub const TRENDING_UP: &str = "📈";
pub const ALERT: &str = "⚠";
pub const CHECK: &str = "✓";
pub const ACTIVITY: &str = "●";

pub fn metric_glyph(icon: MetricIcon) -> &'static str {
    match icon {
        MetricIcon::CheckCircle => "✔",
        MetricIcon::Beaker => "⚗",
        MetricIcon::Thermometer => "🌡",
        MetricIcon::Bolt => "⚡",
    }
}

#[component]
pub fn Icon(glyph: &'static str, #[props(default = "inherit".to_string())] color: String) -> Element {
    rsx! {
        span {
            style: "display: inline-block; line-height: 1; color: {color};",
            "{glyph}"
        }
    }
}
