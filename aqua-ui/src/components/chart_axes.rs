//! Grid, axes and legend shared by the cartesian charts.

use aqua_core::chart::{CartesianChart, Series};
use dioxus::prelude::*;

/// Dashed horizontal grid with y tick labels and month labels along x.
///
/// Must be rendered inside an `svg` element.
#[component]
pub fn ChartAxes(chart: CartesianChart) -> Element {
    let left = chart.frame.plot_left();
    let right = chart.frame.plot_right();
    let bottom = chart.baseline();
    let label_y = bottom + 18.0;
    let tick_x = left - 6.0;
    let ticks: Vec<(f64, f64, String)> = chart
        .y_ticks
        .iter()
        .map(|t| (t.y, t.y + 4.0, t.label.clone()))
        .collect();
    rsx! {
        g {
            for (tick_y, text_y, label) in ticks.into_iter() {
                line {
                    x1: "{left}",
                    x2: "{right}",
                    y1: "{tick_y:.2}",
                    y2: "{tick_y:.2}",
                    stroke: "#E5E7EB",
                    stroke_dasharray: "3 3",
                }
                text {
                    x: "{tick_x}",
                    y: "{text_y:.2}",
                    text_anchor: "end",
                    font_size: "11",
                    fill: "#6B7280",
                    "{label}"
                }
            }
            line {
                x1: "{left}",
                x2: "{right}",
                y1: "{bottom}",
                y2: "{bottom}",
                stroke: "#9CA3AF",
            }
            for label in chart.x_labels.iter() {
                text {
                    x: "{label.x:.2}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "11",
                    fill: "#6B7280",
                    "{label.text}"
                }
            }
        }
    }
}

/// Colour swatches naming each series, rendered below the chart.
#[component]
pub fn ChartLegend(series: Vec<Series>) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; gap: 16px; flex-wrap: wrap; font-size: 12px; color: #374151; margin-top: 4px;",
            for s in series.iter() {
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background: {s.color};",
                    }
                    "{s.label}"
                }
            }
        }
    }
}
