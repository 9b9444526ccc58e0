//! Pie chart of the quality-rating distribution.

use aqua_core::chart::{pie_slices, svg_title};
use aqua_core::models::QualityBucket;
use dioxus::prelude::*;

const SIZE: f64 = 300.0;
const RADIUS: f64 = 80.0;

#[component]
pub fn PieChart(buckets: Vec<QualityBucket>) -> Element {
    let center = SIZE / 2.0;
    let slices: Vec<_> = pie_slices(&buckets, center, center, RADIUS)
        .into_iter()
        .map(|slice| {
            let anchor = if slice.label_at.x >= center { "start" } else { "end" };
            let caption = slice.caption();
            let tooltip = svg_title(&caption);
            (slice, caption, tooltip, anchor)
        })
        .collect();
    rsx! {
        svg {
            view_box: "0 0 {SIZE} {SIZE}",
            width: "100%",
            height: "300",
            for (slice, caption, tooltip, anchor) in slices.into_iter() {
                g {
                    path {
                        d: "{slice.path}",
                        fill: "{slice.color}",
                        stroke: "#FFFFFF",
                        stroke_width: "1",
                        dangerous_inner_html: "{tooltip}",
                    }
                    text {
                        x: "{slice.label_at.x:.2}",
                        y: "{slice.label_at.y:.2}",
                        text_anchor: "{anchor}",
                        font_size: "12",
                        fill: "{slice.color}",
                        "{caption}"
                    }
                }
            }
        }
    }
}
