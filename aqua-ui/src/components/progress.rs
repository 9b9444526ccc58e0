//! Horizontal progress bar.

use dioxus::prelude::*;

/// Fill is `value` percent, clamped to 0-100.
#[component]
pub fn ProgressBar(value: f64, #[props(default = "#059669".to_string())] color: String) -> Element {
    let width = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    rsx! {
        div {
            style: "margin-top: 8px; height: 8px; width: 100%; background: #E5E7EB; border-radius: 9999px; overflow: hidden;",
            div {
                style: "height: 100%; width: {width}%; background: {color}; transition: width 0.3s;",
            }
        }
    }
}
