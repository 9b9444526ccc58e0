//! Contaminant readings drawn as fractions of their safe limits.

use super::progress::ProgressBar;
use aqua_core::models::Contaminant;
use dioxus::prelude::*;

/// One row per contaminant: "<value> / <safe> <unit>" and a bar filled to
/// `value / safe_limit`, clamped at 100%. Rows over the limit turn red.
#[component]
pub fn ContaminantList(contaminants: Vec<Contaminant>) -> Element {
    let rows: Vec<(Contaminant, f64, &'static str)> = contaminants
        .iter()
        .map(|c| {
            let color = if c.exceeds_limit() { "#DC2626" } else { c.display_color };
            (*c, c.fill_fraction() * 100.0, color)
        })
        .collect();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            for (c, percent, color) in rows.into_iter() {
                div {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; font-size: 14px;",
                        span { style: "font-weight: 600;", "{c.name}" }
                        span {
                            style: "color: #6B7280;",
                            "{c.value} / {c.safe_limit} {c.unit}"
                        }
                    }
                    ProgressBar { value: percent, color: color.to_string() }
                }
            }
        }
    }
}
