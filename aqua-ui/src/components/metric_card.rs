//! Key-metric card: headline value, caption and progress bar.

use super::icon::{metric_glyph, Icon};
use super::progress::ProgressBar;
use aqua_core::models::MetricCard;
use dioxus::prelude::*;

#[component]
pub fn MetricCardView(card: MetricCard) -> Element {
    let glyph = metric_glyph(card.icon);
    let value_color = card.value_color.unwrap_or("#111827");
    rsx! {
        div {
            style: "background: #FFFFFF; border: 1px solid #E5E7EB; border-radius: 8px; padding: 16px 20px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding-bottom: 8px;",
                span { style: "font-size: 14px; font-weight: 500;", "{card.title}" }
                Icon { glyph, color: card.accent_color.to_string() }
            }
            div {
                style: "font-size: 24px; font-weight: 700; color: {value_color};",
                "{card.value}"
            }
            p { style: "margin: 2px 0 0 0; font-size: 12px; color: #6B7280;", "{card.caption}" }
            ProgressBar { value: card.progress }
        }
    }
}
